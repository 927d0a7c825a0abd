// bin/commands/random_bed.rs

use clap::Args;
use rand::{seq::SliceRandom, Rng, SeedableRng};
use regioncompare::error::RegionError;
use regioncompare::io::OutputStream;
use regioncompare::{ChromoRegion, ChromoRegionSet};
use std::path::PathBuf;

const CHROMOS: &[&str] = &["chr1", "chr2", "chr3", "chr4", "chr5", "chr10", "chrX", "chrY"];

#[derive(Args)]
pub struct RandomBedArgs {
    /// Output file path (.bed or .bed.gz). Writes to stdout if not given.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of regions to generate.
    #[arg(short = 'n', long, default_value = "1000000")]
    pub num_regions: usize,

    /// Optional seed for reproducible output.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

pub fn run(args: RandomBedArgs) -> Result<(), RegionError> {
    eprintln!(
        "Generating {} random regions to {}",
        args.num_regions,
        args.output
            .as_ref()
            .map_or("<stdout>".to_string(), |v| v.to_string_lossy().to_string())
    );

    let mut set = generate_random_regions(args.num_regions, args.seed)?;
    set.sort_regions();

    let output = OutputStream::new(args.output);
    let mut writer = output.writer()?;
    set.write_bed(&mut writer)?;

    eprintln!("Done!");
    Ok(())
}

fn generate_random_regions(
    num_regions: usize,
    seed: Option<u64>,
) -> Result<ChromoRegionSet, RegionError> {
    let mut rng = match seed {
        Some(s) => rand::rngs::StdRng::seed_from_u64(s),
        None => rand::rngs::StdRng::from_entropy(),
    };

    let mut set = ChromoRegionSet::new();
    for _ in 0..num_regions {
        let chromo = *CHROMOS.choose(&mut rng).unwrap_or(&"chr1");
        let start = rng.gen_range(0..10_000_000);
        let width = rng.gen_range(100..10_000);
        set.add_region(ChromoRegion::new(chromo, start, start + width)?);
    }
    Ok(set)
}
