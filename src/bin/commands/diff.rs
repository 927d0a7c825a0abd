// bin/commands/diff.rs

use clap::Args;
use regioncompare::error::RegionError;
use regioncompare::io::OutputStream;
use regioncompare::ChromoRegionSet;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Args)]
pub struct DiffArgs {
    /// BED file to subtract from.
    #[arg(value_name = "a.bed")]
    pub minuend: PathBuf,

    /// BED file whose regions are removed from the first file.
    #[arg(value_name = "b.bed")]
    pub subtrahend: PathBuf,

    /// Output file (.bed or .bed.gz). Writes to stdout if not given.
    #[arg(short, long, value_name = "diff.bed")]
    pub output: Option<PathBuf>,
}

/// Write the regions of A not covered by B. Both sides are merged first so
/// the subtraction has true set-difference semantics.
pub fn run(args: DiffArgs) -> Result<(), RegionError> {
    let duration_start = Instant::now();

    let mut a = ChromoRegionSet::from_bed(&args.minuend)?;
    let mut b = ChromoRegionSet::from_bed(&args.subtrahend)?;
    eprintln!(
        "Loaded {} regions from {}, {} regions from {}",
        a.len(),
        args.minuend.display(),
        b.len(),
        args.subtrahend.display()
    );

    a.merge_regions();
    b.merge_regions();
    let mut result = &a - &b;
    result.sort_regions();

    let output = OutputStream::new(args.output);
    let mut writer = output.writer()?;
    result.write_bed(&mut writer)?;

    eprintln!(
        "{} regions covering {} bases remain, completed in {:?}",
        result.len(),
        result.cumulative_size(),
        duration_start.elapsed()
    );
    Ok(())
}
