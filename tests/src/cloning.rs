#![cfg(test)]
use netinv_core::{Component, Hdd, Host, Network, StorageKind};

use crate::rendering::lab_network;

/*************************************************************
            Clone fidelity and ownership independence
**************************************************************/

#[test]
fn clone_renders_identically() {
    let original = lab_network();
    let copy = original.clone();
    assert_eq!(original.to_string(), copy.to_string());
}

#[test]
fn mutating_a_cloned_partition_table_leaves_the_original_alone() {
    let original = lab_network();
    let before = original.to_string();

    let mut copy = original.clone();
    let web = copy.hosts_mut().first_mut().expect("fixture has hosts");
    let disk = web
        .components_mut()
        .iter_mut()
        .find_map(|component| match component {
            Component::Hdd(disk) => Some(disk),
            _ => None,
        })
        .expect("fixture host has a disk");
    disk.add_partition(3, 1, "scratch");

    assert_eq!(original.to_string(), before);
    assert_ne!(copy.to_string(), before);
}

#[test]
fn clone_preserves_host_order() {
    let original = lab_network();
    let copy = original.clone();

    let names: Vec<&str> = copy.hosts().iter().map(|h| h.name()).collect();
    assert_eq!(names, vec!["web-01", "backup-01"]);
}

#[test]
fn cloned_host_grows_independently() {
    let mut host = Host::new("h1");
    host.add_ip("10.0.0.1");
    let mut disk = Hdd::new(StorageKind::Ssd, 100);
    disk.add_partition(1, 100, "root");
    host.add_component(disk);

    let mut copy = host.clone();
    copy.add_ip("10.0.0.2");

    assert_eq!(host.ips().len(), 1);
    assert_eq!(copy.ips().len(), 2);
}

#[test]
fn cloned_empty_network_keeps_name_and_stays_empty() {
    let original = Network::new("N");
    let copy = original.clone();

    assert_eq!(copy.name(), "N");
    assert!(copy.hosts().is_empty());

    // Separate instance: growing the copy does not grow the original.
    let mut copy = copy;
    copy.add_host(Host::new("h1"));
    assert!(original.hosts().is_empty());
}
