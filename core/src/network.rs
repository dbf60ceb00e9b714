//! # Network Container
//!
//! The root of the inventory tree. A network owns its hosts exclusively and
//! renders the whole tree through its `Display` impl, so `to_string()` gives
//! the exact printed text and [`Network::print_network`] writes it to stdout.

use std::fmt;

use tracing::trace;

use crate::host::Host;
use crate::render::Node;

/// Top-level container of [`Host`]s, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    name: String,
    hosts: Vec<Host>,
}

impl Network {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hosts: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a host to the network.
    pub fn add_host(&mut self, host: Host) {
        self.hosts.push(host);
    }

    pub fn hosts(&self) -> &[Host] {
        &self.hosts
    }

    pub fn hosts_mut(&mut self) -> &mut [Host] {
        &mut self.hosts
    }

    /// Linear scan for the first host with the given name.
    ///
    /// Host names are not required to be unique; duplicates after the first
    /// match are never returned. A miss is a normal empty result.
    pub fn find_host(&self, name: &str) -> Option<&Host> {
        let found: Option<&Host> = self.hosts.iter().find(|host| host.name() == name);
        if found.is_none() {
            trace!(host = name, "lookup missed");
        }
        found
    }

    /// Prints the rendered tree to stdout.
    pub fn print_network(&self) {
        print!("{self}");
    }
}

impl fmt::Display for Network {
    /// Header line `Network: <name>`, then every host rendered at the empty
    /// prefix with last-sibling detection over the host list.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Network: {}", self.name)?;
        let count: usize = self.hosts.len();
        for (i, host) in self.hosts.iter().enumerate() {
            host.render(f, "", i + 1 == count)?;
        }
        Ok(())
    }
}
