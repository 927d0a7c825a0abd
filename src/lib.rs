pub mod error;
pub mod io;
pub mod region;
pub mod region_set;

pub use error::RegionError;
pub use region::{compare_chroms, ChromoRegion};
pub use region_set::ChromoRegionSet;
