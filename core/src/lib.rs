//! # netinv-core
//!
//! In-memory inventory tree for network hosts and their hardware.
//!
//! The model is a fixed three-level hierarchy:
//! * [`Network`] owns an ordered list of [`Host`]s.
//! * A [`Host`] owns its [`IpAddress`]es and hardware [`Component`]s.
//! * An [`Hdd`] owns its [`Partition`]s.
//!
//! Every element implements [`Node`], which covers the two things the tree
//! can do: render itself as indented text and deep-copy itself via `Clone`.

pub mod hardware;
pub mod host;
pub mod network;
pub mod render;

pub use hardware::{Component, Cpu, Hdd, Memory, Partition, StorageKind};
pub use host::{Host, IpAddress};
pub use network::Network;
pub use render::Node;
