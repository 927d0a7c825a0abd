// bin/commands/stats.rs

use clap::Args;
use regioncompare::error::RegionError;
use regioncompare::ChromoRegionSet;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Args)]
pub struct StatsArgs {
    /// Input BED file to summarize.
    #[arg(value_name = "regions.bed")]
    pub input: PathBuf,

    /// Merge regions before summarizing, so covered length counts each base
    /// once.
    #[arg(long)]
    pub merged: bool,

    /// Print a per-chromosome breakdown.
    #[arg(long)]
    pub per_chromo: bool,
}

pub fn run(args: StatsArgs) -> Result<(), RegionError> {
    let start = Instant::now();

    let mut regions = ChromoRegionSet::from_bed(&args.input)?;
    if args.merged {
        regions.merge_regions();
    }

    println!("file\t{}", args.input.display());
    println!("regions\t{}", regions.len());
    println!("covered_bases\t{}", regions.cumulative_size());
    println!("chromosomes\t{}", regions.chromos().join(","));

    if args.per_chromo {
        let chromos: Vec<String> = regions.chromos().to_vec();
        for chromo in chromos {
            let mut count = 0usize;
            let mut covered = 0u64;
            for region in regions.iter().filter(|r| r.chromo() == chromo) {
                count += 1;
                covered += u64::from(region.width());
            }
            println!("{}\t{}\t{}", chromo, count, covered);
        }
    }

    eprintln!("Summary completed in {:?}", start.elapsed());
    Ok(())
}
