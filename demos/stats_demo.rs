use std::collections::hash_map::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

use chain_hash::HashTable;
use chain_hash::hash_table::Entry;
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'c', long = "target_capacity", default_value_t = 1000)]
    target_capacity: usize,

    /// Remove every n-th value after filling, then refill through the free list.
    #[arg(short = 'r', long = "remove_every", default_value_t = 3)]
    remove_every: u64,

    #[arg(short = 'l', long = "load_factor", default_value_t = 1.0)]
    load_factor: f64,
}

fn hash_u64(value: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn insert(table: &mut HashTable<u64>, value: u64) {
    match table.entry(hash_u64(value), |&v| v == value) {
        Entry::Vacant(entry) => {
            entry.insert(value);
        }
        Entry::Occupied(_) => {
            panic!("Value already exists in table: {}", value);
        }
    }
}

fn main() {
    let args = Args::parse();

    println!(
        "Creating HashTable with target capacity {} and load factor {}",
        args.target_capacity, args.load_factor
    );

    let mut table: HashTable<u64> =
        HashTable::with_capacity_and_load_factor(args.target_capacity, args.load_factor);

    println!("Actual capacity: {}", table.capacity());
    println!("Bucket count: {}", table.bucket_count());
    println!("Filling table with u64 values...");

    let num_values = table.capacity() as u64;
    for value in 0..num_values {
        insert(&mut table, value);
    }

    println!("Inserted {} values into table", table.len());
    table.print_chain_histogram();
    table.debug_stats().print();

    let mut removed = 0;
    if args.remove_every > 0 {
        for value in (0..num_values).step_by(args.remove_every as usize) {
            if table.remove(hash_u64(value), |&v| v == value).is_some() {
                removed += 1;
            }
        }
    }

    println!("Removed {} values", removed);
    table.debug_stats().print();

    for value in num_values..num_values + removed {
        insert(&mut table, value);
    }

    println!(
        "Refilled {} values; capacity is still {}",
        removed,
        table.capacity()
    );
    table.print_chain_histogram();
    table.debug_stats().print();
}
