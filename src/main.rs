extern crate argparse;
extern crate itertools;
extern crate rayon;

mod apriori;
mod command_line_args;
mod frequent_itemsets;
mod item_tree;
mod itemset;
mod tid_set;
mod transaction_reader;

use apriori::Apriori;
use command_line_args::parse_args_or_exit;
use command_line_args::Arguments;
use transaction_reader::TransactionReader;

use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::process;
use std::time::Instant;

fn mine_apriori(args: &Arguments) -> Result<(), Box<Error>> {
    println!("Mining data set: {}", args.input_file_path);

    // Single pass over the dataset: each item label is deduplicated
    // into the registry along with the ids of the baskets it occurs in.
    let start = Instant::now();
    let timer = Instant::now();
    let mut apriori = Apriori::new();
    let mut basket_count = 0;
    for (basket_id, basket) in TransactionReader::new(&args.input_file_path)?.enumerate() {
        apriori.ingest(basket_id, &basket);
        basket_count += 1;
    }
    println!(
        "Scanned {} baskets holding {} distinct items in {} seconds.",
        basket_count,
        apriori.item_count(),
        timer.elapsed().as_secs()
    );

    let mut output = File::create(&args.output_itemsets_path)?;
    writeln!(output, "Itemset,Support")?;

    let timer = Instant::now();
    let mut level = apriori.finalize_level1(args.min_support);
    println!(
        "Found {} frequent items in {} seconds.",
        level.len(),
        timer.elapsed().as_secs()
    );

    // Grow the itemsets level by level until a level comes up empty.
    // Each level generates the next, so it is written out first.
    let mut size = 1;
    while !level.is_empty() {
        for itemset in level.iter() {
            writeln!(output, "{},{}", itemset, itemset.support_count())?;
        }

        let timer = Instant::now();
        let next = level.generate_next_level(args.min_support);
        size += 1;
        println!(
            "Generated {} frequent itemsets of size {} in {} seconds.",
            next.len(),
            size,
            timer.elapsed().as_secs()
        );
        level = next;
    }

    println!("Total runtime: {} seconds", start.elapsed().as_secs());

    Ok(())
}

fn main() {
    let arguments = parse_args_or_exit();

    if let Err(err) = mine_apriori(&arguments) {
        println!("Error: {}", err);
        process::exit(1);
    }
}
