// bin/commands/merge.rs

use clap::Args;
use regioncompare::error::RegionError;
use regioncompare::io::OutputStream;
use regioncompare::ChromoRegionSet;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Args)]
pub struct MergeArgs {
    /// Input BED file (plain or gzip).
    #[arg(value_name = "regions.bed")]
    pub input: PathBuf,

    /// BED file of regions to exclude from the merged result, e.g. a
    /// blacklist. It is merged before subtraction.
    #[arg(short, long, value_name = "blacklist.bed")]
    pub exclude: Option<PathBuf>,

    /// Output file (.bed or .bed.gz). Writes to stdout if not given.
    #[arg(short, long, value_name = "merged.bed")]
    pub output: Option<PathBuf>,
}

pub fn run(args: MergeArgs) -> Result<(), RegionError> {
    let duration_start = Instant::now();

    let mut regions = ChromoRegionSet::from_bed(&args.input)?;
    eprintln!(
        "Loaded {} regions from {}",
        regions.len(),
        args.input.display()
    );
    regions.merge_regions();

    if let Some(exclude_path) = &args.exclude {
        let mut exclude = ChromoRegionSet::from_bed(exclude_path)?;
        eprintln!(
            "Excluding {} regions from {}",
            exclude.len(),
            exclude_path.display()
        );
        // Both operands must be merged for sound set-difference semantics.
        exclude.merge_regions();
        regions = &regions - &exclude;
        regions.sort_regions();
    }

    let output = OutputStream::new(args.output);
    let mut writer = output.writer()?;
    regions.write_bed(&mut writer)?;

    eprintln!(
        "{} merged regions covering {} bases, completed in {:?}",
        regions.len(),
        regions.cumulative_size(),
        duration_start.elapsed()
    );
    Ok(())
}
