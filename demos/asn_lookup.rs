//! Map IP addresses to their origin AS number.
//!
//! Loads a routing table in the `prefix<TAB>asn` text format used by
//! IP-to-ASN databases, then resolves a few addresses by longest-prefix
//! match.

use core::net::Ipv4Addr;

use prefix_radix::{Error, Prefix, RadixTree};

const TABLE: &str = "\
; prefix\torigin
0.0.0.0/0\t0
8.8.4.0/24\t15169
8.8.8.0/24\t15169
193.0.0.0/21\t3333
193.0.14.0/23\t25152
193.0.14.0/24\t25152
203.0.113.0/24\t64500
203.0.113.128/25\t64501
";

fn load(text: &str) -> Result<RadixTree<u32, u32>, Error> {
    let mut table = RadixTree::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }
        let (prefix, asn) = line.split_once('\t').ok_or(Error::InvalidPrefix)?;
        let prefix: Prefix<u32> = prefix.parse()?;
        let asn: u32 = asn.trim().parse().map_err(|_| Error::InvalidPrefix)?;
        table.insert_prefix(prefix, asn)?;
    }
    Ok(table)
}

fn main() -> Result<(), Error> {
    let mut table = load(TABLE)?;
    println!(
        "Loaded {} prefixes ({} nodes, {} valued)",
        table.len(),
        table.num_nodes(false),
        table.num_nodes(true)
    );

    let hosts = [
        Ipv4Addr::new(8, 8, 8, 8),
        Ipv4Addr::new(193, 0, 14, 129),
        Ipv4Addr::new(193, 0, 3, 1),
        Ipv4Addr::new(203, 0, 113, 7),
        Ipv4Addr::new(203, 0, 113, 200),
        Ipv4Addr::new(1, 1, 1, 1),
    ];

    println!("\nLookups:");
    for host in hosts {
        match table.lookup_addr(host) {
            Some(&0) | None => println!("  {:<16} unrouted", host),
            Some(asn) => println!("  {:<16} AS{}", host, asn),
        }
    }

    // Withdraw the more specific route
    let withdrawn: Prefix<u32> = "203.0.113.128/25".parse()?;
    table.remove_prefix(&withdrawn)?;
    println!("\nAfter withdrawing {}:", withdrawn);
    if let Some(asn) = table.lookup_addr(Ipv4Addr::new(203, 0, 113, 200)) {
        println!("  {:<16} AS{}", "203.0.113.200", asn);
    }

    println!("\nTable dump:");
    table.for_each(|key, len, asn| {
        let prefix = Prefix::new(key, len)?;
        println!("  {:<18} AS{}", prefix.to_string(), asn);
        Ok::<(), Error>(())
    })?;

    Ok(())
}
