// bin/commands/mod.rs

#[cfg(feature = "cli")]
pub mod diff;
#[cfg(feature = "cli")]
pub mod merge;
#[cfg(all(feature = "cli", feature = "dev"))]
pub mod random_bed;
#[cfg(feature = "cli")]
pub mod stats;
