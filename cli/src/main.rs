mod commands;
mod inventory;
mod terminal;

use commands::{CommandLine, Commands};
use netinv_core::Node;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    match commands.command {
        Commands::Info => {
            print::header("local machine inventory");
            inventory::local().print_network();
        }
        Commands::Sample => {
            print::header("sample inventory");
            inventory::sample().print_network();
        }
        Commands::Find { name } => {
            let network = inventory::local();
            match network.find_host(&name) {
                Some(host) => {
                    let mut out = String::new();
                    host.render(&mut out, "", true)?;
                    print!("{out}");
                }
                None => print::status(&format!("no host named '{name}'")),
            }
        }
    }

    Ok(())
}
