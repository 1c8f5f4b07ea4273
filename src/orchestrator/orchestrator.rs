use std::collections::BTreeMap;
use std::error::Error;

use log::info;

use crate::analyzer::PercentileAnalyzer;
use crate::loader::Loader;

/// Records are split into spend buckets at this whole-unit amount.
pub const AMOUNT_THRESHOLD: i64 = 100;

pub fn run(directory: &str) -> Result<(), Box<dyn Error>> {
    let loader = Loader::new(directory, AMOUNT_THRESHOLD);
    let partitions = loader.load()?;
    info!(
        "loaded {} transactions ({} at or below {}, {} above)",
        partitions.total(),
        partitions.below.len(),
        AMOUNT_THRESHOLD,
        partitions.above.len()
    );

    let above = PercentileAnalyzer::from_records(&partitions.above);
    let below = PercentileAnalyzer::from_records(&partitions.below);
    info!(
        "{} unique users above the threshold, {} at or below",
        above.user_count(),
        below.user_count()
    );

    print_table(
        &format!("card-present percentiles, amounts above {}", AMOUNT_THRESHOLD),
        &above.percentile_table(),
    );
    println!();
    print_table(
        &format!(
            "card-present percentiles, amounts at or below {}",
            AMOUNT_THRESHOLD
        ),
        &below.percentile_table(),
    );

    Ok(())
}

fn print_table(title: &str, table: &BTreeMap<u8, u8>) {
    println!("{}", title);
    for (percentile, percentage) in table {
        println!("{} : {}%", percentile, percentage);
    }
}
