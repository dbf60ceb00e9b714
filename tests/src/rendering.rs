#![cfg(test)]
use netinv_core::{Cpu, Hdd, Host, Memory, Network, Node, StorageKind};

/*************************************************************
                  Whole-tree rendering
**************************************************************/

#[test]
fn full_tree_renders_with_continuation_rails() {
    let network = lab_network();

    let expected = "\
Network: lab
+-Host: web-01
| +-10.0.0.10
| +-fe80::1
| +-CPU, 8 cores @ 3200MHz
| +-Memory, 32768 MiB
| \\-HDD, 500 GiB
|   +-[1]: 100 GiB, root
|   \\-[2]: 400 GiB, data
\\-Host: backup-01
  +-10.0.0.20
  +-CPU, 4 cores @ 2400MHz
  \\-Memory, 8192 MiB
";
    assert_eq!(network.to_string(), expected);
}

#[test]
fn one_host_network_matches_reference_output() {
    let mut host = Host::new("h1");
    host.add_ip("10.0.0.1");
    host.add_component(Cpu::new(4, 2400));

    let mut network = Network::new("N");
    network.add_host(host);

    let expected = "\
Network: N
\\-Host: h1
  +-10.0.0.1
  \\-CPU, 4 cores @ 2400MHz
";
    assert_eq!(network.to_string(), expected);
}

#[test]
fn host_whose_last_child_is_an_ip_never_closes_it() {
    let mut host = Host::new("addr-only");
    host.add_ip("192.168.1.1");

    let mut network = Network::new("N");
    network.add_host(host);

    let expected = "\
Network: N
\\-Host: addr-only
  +-192.168.1.1
";
    assert_eq!(network.to_string(), expected);
}

#[test]
fn empty_host_renders_one_line() {
    let mut out = String::new();
    Host::new("bare").render(&mut out, "", true).unwrap();
    assert_eq!(out, "\\-Host: bare\n");
}

#[test]
fn hdd_partitions_under_a_non_last_disk_keep_the_rail() {
    let mut host = Host::new("h1");
    let mut disk = Hdd::new(StorageKind::Magnetic, 1000);
    disk.add_partition(1, 500, "a");
    disk.add_partition(2, 500, "b");
    host.add_component(disk);
    host.add_component(Memory::new(2048));

    let mut out = String::new();
    host.render(&mut out, "", true).unwrap();

    let expected = "\
\\-Host: h1
  +-HDD, 1000 GiB
  | +-[1]: 500 GiB, a
  | \\-[2]: 500 GiB, b
  \\-Memory, 2048 MiB
";
    assert_eq!(out, expected);
}

/*************************************************************
                  Shared fixtures
**************************************************************/

pub fn lab_network() -> Network {
    let mut web = Host::new("web-01");
    web.add_ip("10.0.0.10");
    web.add_ip("fe80::1");
    web.add_component(Cpu::new(8, 3200));
    web.add_component(Memory::new(32768));
    let mut disk = Hdd::new(StorageKind::Ssd, 500);
    disk.add_partition(1, 100, "root");
    disk.add_partition(2, 400, "data");
    web.add_component(disk);

    let mut backup = Host::new("backup-01");
    backup.add_ip("10.0.0.20");
    backup.add_component(Cpu::new(4, 2400));
    backup.add_component(Memory::new(8192));

    let mut network = Network::new("lab");
    network.add_host(web);
    network.add_host(backup);
    network
}
