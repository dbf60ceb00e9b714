//! # Host Model
//!
//! A host is a named machine carrying its addresses and hardware. It owns
//! both lists exclusively; cloning a host clones everything below it.

use std::fmt::{self, Write};

use crate::hardware::Component;
use crate::render::{self, Node};

/// A network address attached to a host.
///
/// The address is an uninterpreted string. Nothing in the tree parses or
/// validates it, so whatever the caller stores is what gets rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpAddress {
    pub address: String,
}

impl IpAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

impl Node for IpAddress {
    fn render(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        writeln!(out, "{prefix}{}{}", render::branch(is_last), self.address)
    }
}

/// A machine in the inventory: a name, its addresses, and its hardware.
///
/// Addresses and components render in insertion order. Host names act as
/// lookup keys in [`Network::find_host`](crate::Network::find_host) but are
/// not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    name: String,
    ips: Vec<IpAddress>,
    components: Vec<Component>,
}

impl Host {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ips: Vec::new(),
            components: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends an address to the host.
    pub fn add_ip(&mut self, address: impl Into<String>) {
        self.ips.push(IpAddress::new(address));
    }

    /// Appends a hardware component to the host.
    pub fn add_component(&mut self, component: impl Into<Component>) {
        self.components.push(component.into());
    }

    pub fn ips(&self) -> &[IpAddress] {
        &self.ips
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn components_mut(&mut self) -> &mut [Component] {
        &mut self.components
    }
}

impl Node for Host {
    fn render(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        writeln!(out, "{prefix}{}Host: {}", render::branch(is_last), self.name)?;

        let child: String = render::child_prefix(prefix, is_last);

        // Address rows always use the continuing branch, even when an
        // address is the host's final child. Only hardware components close
        // the host subtree.
        for ip in &self.ips {
            ip.render(out, &child, false)?;
        }

        let count: usize = self.components.len();
        for (i, component) in self.components.iter().enumerate() {
            component.render(out, &child, i + 1 == count)?;
        }
        Ok(())
    }
}
