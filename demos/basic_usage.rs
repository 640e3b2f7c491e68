//! Basic usage example for prefix-radix.
//!
//! Walks through the prefix tree and the sorted array.

use prefix_radix::{Array, ArrayOptions, Enumerator, Error, RadixTree};

fn main() -> Result<(), Error> {
    println!("=== prefix-radix - Basic Usage Example ===\n");

    // 8-bit keys keep the bit patterns readable
    let mut tree = RadixTree::<u8, &str>::new();
    println!("Created empty tree ({} bit keys)", tree.max_key_bits());

    println!("\nStoring prefixes:");
    tree.add(0b0000_0000, 0, "default")?;
    tree.add(0b1000_0000, 1, "1/1")?;
    tree.add(0b1010_0000, 3, "101/3")?;
    tree.add(0b0110_0000, 4, "0110/4")?;
    println!("  {} prefixes in {} nodes", tree.len(), tree.num_nodes(false));

    println!("\nExact lookups:");
    println!("  get_exact(101/3): {:?}", tree.get_exact(0b1010_0000, 3));
    println!("  get_exact(10/2):  {:?}", tree.get_exact(0b1000_0000, 2));

    println!("\nLongest-prefix matches:");
    for key in [0b1011_0110u8, 0b1001_0000, 0b0110_1111, 0b0001_0000] {
        println!("  get_best({:08b}): {:?}", key, tree.get_best(key, 8));
    }

    println!("\nPre-order traversal:");
    tree.for_each(|key, key_len, value| {
        println!("  {:08b}/{} -> {}", key, key_len, value);
        Ok::<(), Error>(())
    })?;

    println!("\nRemoving 101/3:");
    tree.remove(0b1010_0000, 3, true)?;
    println!("  get_best(10110110): {:?}", tree.get_best(0b1011_0110, 8));
    println!("  {} prefixes in {} nodes", tree.len(), tree.num_nodes(false));

    match tree.remove(0b1010_0000, 3, true) {
        Err(e) => println!("  removing again: {}", e),
        Ok(()) => unreachable!(),
    }

    println!("\nSorted unique array:");
    let mut ports = Array::<u16>::sorted(ArrayOptions::SORTED | ArrayOptions::UNIQUE);
    for port in [443, 22, 8080, 80, 22] {
        match ports.add(port) {
            Ok(index) => println!("  add({}) -> index {}", port, index),
            Err(e) => println!("  add({}) rejected: {}", port, e),
        }
    }
    println!("  contents: {:?}", ports);
    println!("  sorted_find_index(443): {:?}", ports.sorted_find_index(&443));
    println!("  sorted_find_index(100): {:?}", ports.sorted_find_index(&100));

    let mut values = ports.get_enum();
    print!("  enumerated:");
    while values.has_next() {
        if let Some(port) = values.get_next() {
            print!(" {}", port);
        }
    }
    println!();

    println!("\n=== Example completed successfully ===");
    Ok(())
}
