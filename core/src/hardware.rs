//! # Hardware Component Models
//!
//! The pieces of hardware a [`Host`](crate::Host) can carry:
//! * [`Cpu`] — core count and clock speed.
//! * [`Memory`] — total size in MiB.
//! * [`Hdd`] — a disk with an append-only list of [`Partition`]s.
//!
//! [`Component`] is the tagged union a host stores them as.

use std::fmt::{self, Write};
use std::str::FromStr;

use thiserror::Error;

use crate::render::{self, Node};

/// A processor. Speed is the clock in MHz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cpu {
    pub cores: u32,
    pub speed_mhz: u32,
}

impl Cpu {
    pub fn new(cores: u32, speed_mhz: u32) -> Self {
        Self { cores, speed_mhz }
    }
}

impl Node for Cpu {
    fn render(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        writeln!(
            out,
            "{prefix}{}CPU, {} cores @ {}MHz",
            render::branch(is_last),
            self.cores,
            self.speed_mhz
        )
    }
}

/// A memory bank. Size is the total capacity in MiB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Memory {
    pub size_mib: u64,
}

impl Memory {
    pub fn new(size_mib: u64) -> Self {
        Self { size_mib }
    }
}

impl Node for Memory {
    fn render(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        writeln!(
            out,
            "{prefix}{}Memory, {} MiB",
            render::branch(is_last),
            self.size_mib
        )
    }
}

/// The physical technology of a disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKind {
    Ssd,
    Magnetic,
}

/// Raised when a storage-kind code is neither `ssd` nor `magnetic`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown storage kind: '{0}'")]
pub struct ParseStorageKindError(String);

impl FromStr for StorageKind {
    type Err = ParseStorageKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ssd" => Ok(StorageKind::Ssd),
            "magnetic" | "hdd" => Ok(StorageKind::Magnetic),
            _ => Err(ParseStorageKindError(s.to_string())),
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageKind::Ssd => write!(f, "SSD"),
            StorageKind::Magnetic => write!(f, "magnetic"),
        }
    }
}

/// One slice of a disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub number: u32,
    pub size_gib: u64,
    pub designation: String,
}

/// A disk drive with an ordered, append-only partition table.
///
/// The storage kind is carried for callers to inspect but does not appear
/// in the rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hdd {
    pub kind: StorageKind,
    pub size_gib: u64,
    partitions: Vec<Partition>,
}

impl Hdd {
    pub fn new(kind: StorageKind, size_gib: u64) -> Self {
        Self {
            kind,
            size_gib,
            partitions: Vec::new(),
        }
    }

    /// Appends a partition. Insertion order is the render order.
    pub fn add_partition(&mut self, number: u32, size_gib: u64, designation: impl Into<String>) {
        self.partitions.push(Partition {
            number,
            size_gib,
            designation: designation.into(),
        });
    }

    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }
}

impl Node for Hdd {
    fn render(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        writeln!(
            out,
            "{prefix}{}HDD, {} GiB",
            render::branch(is_last),
            self.size_gib
        )?;

        // Partitions are the only children an HDD has, so last-sibling
        // detection runs over the partition list alone.
        let child: String = render::child_prefix(prefix, is_last);
        let count: usize = self.partitions.len();
        for (i, part) in self.partitions.iter().enumerate() {
            writeln!(
                out,
                "{child}{}[{}]: {} GiB, {}",
                render::branch(i + 1 == count),
                part.number,
                part.size_gib,
                part.designation
            )?;
        }
        Ok(())
    }
}

/// Tagged union over everything that can sit in a host's component list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component {
    Cpu(Cpu),
    Memory(Memory),
    Hdd(Hdd),
}

impl Node for Component {
    fn render(&self, out: &mut dyn fmt::Write, prefix: &str, is_last: bool) -> fmt::Result {
        match self {
            Component::Cpu(cpu) => cpu.render(out, prefix, is_last),
            Component::Memory(memory) => memory.render(out, prefix, is_last),
            Component::Hdd(hdd) => hdd.render(out, prefix, is_last),
        }
    }
}

impl From<Cpu> for Component {
    fn from(cpu: Cpu) -> Self {
        Component::Cpu(cpu)
    }
}

impl From<Memory> for Component {
    fn from(memory: Memory) -> Self {
        Component::Memory(memory)
    }
}

impl From<Hdd> for Component {
    fn from(hdd: Hdd) -> Self {
        Component::Hdd(hdd)
    }
}
