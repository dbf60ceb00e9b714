//! # Inventory Builders
//!
//! Assembles [`Network`] trees for the CLI: one from a snapshot of the
//! machine the tool runs on, one canned sample for demonstrating the format.

use netinv_core::{Cpu, Hdd, Host, Memory, Network, StorageKind};
use pnet::datalink;
use sysinfo::{CpuExt, DiskExt, DiskKind, System, SystemExt};
use tracing::debug;

const BYTES_PER_MIB: u64 = 1024 * 1024;
const BYTES_PER_GIB: u64 = 1024 * 1024 * 1024;

/// Snapshots the local machine into a one-host network.
///
/// Addresses come from the non-loopback interfaces that are up; CPU, memory
/// and disks come from `sysinfo`. Each mounted disk becomes an HDD with a
/// single partition designated by its mount point.
pub fn local() -> Network {
    let mut sys: System = System::new_all();
    sys.refresh_all();

    let hostname: String = sys.host_name().unwrap_or_else(|| String::from("localhost"));
    let mut host = Host::new(&hostname);

    for iface in datalink::interfaces() {
        if iface.is_loopback() || !iface.is_up() {
            continue;
        }
        for ip in &iface.ips {
            host.add_ip(ip.ip().to_string());
        }
    }

    let speed_mhz: u32 = sys.cpus().first().map(|cpu| cpu.frequency()).unwrap_or(0) as u32;
    host.add_component(Cpu::new(sys.cpus().len() as u32, speed_mhz));
    host.add_component(Memory::new(sys.total_memory() / BYTES_PER_MIB));

    for (i, disk) in sys.disks().iter().enumerate() {
        let kind: StorageKind = match disk.kind() {
            DiskKind::SSD => StorageKind::Ssd,
            _ => StorageKind::Magnetic,
        };
        let size_gib: u64 = disk.total_space() / BYTES_PER_GIB;

        let mut hdd = Hdd::new(kind, size_gib);
        hdd.add_partition(i as u32 + 1, size_gib, disk.mount_point().to_string_lossy());
        debug!(kind = %kind, size_gib, "collected disk");
        host.add_component(hdd);
    }

    debug!(host = %hostname, "local snapshot complete");

    let mut network = Network::new("local");
    network.add_host(host);
    network
}

/// A fixed two-host inventory exercising every node variant.
pub fn sample() -> Network {
    let mut web = Host::new("web-01");
    web.add_ip("10.0.0.10");
    web.add_ip("fe80::1");
    web.add_component(Cpu::new(8, 3200));
    web.add_component(Memory::new(32768));
    let mut web_disk = Hdd::new(StorageKind::Ssd, 500);
    web_disk.add_partition(1, 100, "root");
    web_disk.add_partition(2, 400, "data");
    web.add_component(web_disk);

    let mut backup = Host::new("backup-01");
    backup.add_ip("10.0.0.20");
    backup.add_component(Cpu::new(4, 2400));
    backup.add_component(Memory::new(8192));
    let mut backup_disk = Hdd::new(StorageKind::Magnetic, 4000);
    backup_disk.add_partition(1, 4000, "archive");
    backup.add_component(backup_disk);

    let mut network = Network::new("lab");
    network.add_host(web);
    network.add_host(backup);
    network
}
