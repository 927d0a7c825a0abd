#[cfg(feature = "cli")]
mod commands;

#[cfg(feature = "cli")]
mod cli {
    #[cfg(feature = "dev")]
    use crate::commands::random_bed;
    use crate::commands::{diff, merge, stats};
    use clap::Parser;
    use regioncompare::error::RegionError;

    #[derive(Parser)]
    #[command(author, version, about, long_about = None)]
    pub struct Cli {
        #[command(subcommand)]
        command: Commands,
    }

    #[derive(clap::Subcommand)]
    enum Commands {
        /// Merge a BED file into disjoint regions, optionally subtracting an
        /// exclusion list.
        Merge(merge::MergeArgs),
        /// Set-difference of two BED files (both are merged first).
        Diff(diff::DiffArgs),
        /// Summarize a BED file: region count, chromosomes, covered length.
        Stats(stats::StatsArgs),
        #[cfg(feature = "dev")]
        /// Generate a random BED file for benchmarking (only with dev feature)
        RandomBed(random_bed::RandomBedArgs),
    }

    pub fn run() -> Result<(), RegionError> {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .init();

        let cli = Cli::parse();
        match cli.command {
            Commands::Merge(args) => merge::run(args),
            Commands::Diff(args) => diff::run(args),
            Commands::Stats(args) => stats::run(args),
            #[cfg(feature = "dev")]
            Commands::RandomBed(args) => random_bed::run(args),
        }
    }
}

fn main() {
    #[cfg(feature = "cli")]
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("CLI feature not enabled. Please rebuild with --features cli");
        std::process::exit(1);
    }
}
