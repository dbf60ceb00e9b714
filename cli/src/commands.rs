use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "netinv")]
#[command(about = "A host inventory tree viewer.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the inventory of this machine
    #[command(alias = "i")]
    Info,
    /// Print a canned sample inventory
    #[command(alias = "s")]
    Sample,
    /// Look up a host in the local inventory by name
    #[command(alias = "f")]
    Find { name: String },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
