// region_set.rs

use std::io::BufRead;
use std::ops::{Add, Sub};
use std::path::Path;

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::error::RegionError;
use crate::io::InputStream;
use crate::region::ChromoRegion;

/// An ordered collection of [`ChromoRegion`]s. Not a set in the mathematical
/// sense: duplicates and unmerged overlaps are permitted until
/// [`ChromoRegionSet::merge_regions`] canonicalizes the members.
///
/// Two pieces of derived state are kept alongside the members: the total
/// covered width (`cumulative_size`, updated incrementally on append and
/// recomputed after bulk replacement) and the distinct chromosome names in
/// first-seen order (rebuilt lazily after any mutation that can change
/// membership or order).
#[derive(Debug, Clone, Default)]
pub struct ChromoRegionSet {
    regions: Vec<ChromoRegion>,
    chromos: Vec<String>,
    cumulative_size: u64,
    chromo_order_dirty: bool,
}

impl ChromoRegionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from an existing list of regions. The aggregate and the
    /// chromosome listing are computed once, up front.
    pub fn from_regions(regions: Vec<ChromoRegion>) -> Self {
        let cumulative_size = regions.iter().map(|r| u64::from(r.width())).sum();
        let mut set = Self {
            regions,
            chromos: Vec::new(),
            cumulative_size,
            chromo_order_dirty: false,
        };
        set.rebuild_chromos();
        set
    }

    /// Append a region, growing the covered-width aggregate and marking the
    /// chromosome listing stale.
    pub fn add_region(&mut self, region: ChromoRegion) {
        self.cumulative_size += u64::from(region.width());
        self.regions.push(region);
        self.chromo_order_dirty = true;
    }

    /// Distinct chromosome names among the current members, in first-seen
    /// order. Rebuilt here when a prior mutation marked the cache stale.
    pub fn chromos(&mut self) -> &[String] {
        if self.chromo_order_dirty {
            self.rebuild_chromos();
        }
        &self.chromos
    }

    fn rebuild_chromos(&mut self) {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut chromos = Vec::new();
        for region in &self.regions {
            if seen.insert(region.chromo()) {
                chromos.push(region.chromo().to_string());
            }
        }
        self.chromos = chromos;
        self.chromo_order_dirty = false;
    }

    /// Sort members by chromosome (numeric-aware) and start coordinate.
    /// First-seen chromosome order may change, so the listing goes stale.
    pub fn sort_regions(&mut self) {
        self.regions.sort_unstable();
        self.chromo_order_dirty = true;
    }

    /// Canonicalize into maximal disjoint contiguous runs: sort, then fold
    /// each member into a running accumulator while it stays contiguous.
    /// The covered-width aggregate is recomputed from the merged result.
    pub fn merge_regions(&mut self) {
        if self.regions.len() <= 1 {
            return;
        }
        self.sort_regions();

        let before = self.regions.len();
        let regions = std::mem::take(&mut self.regions);
        let mut merged: Vec<ChromoRegion> = Vec::with_capacity(regions.len());
        for region in regions {
            match merged.last_mut() {
                // Sorted input, so a union failure means the run ended.
                Some(current) => match current.union(&region) {
                    Ok(widened) => *current = widened,
                    Err(_) => merged.push(region),
                },
                None => merged.push(region),
            }
        }

        self.cumulative_size = merged.iter().map(|r| u64::from(r.width())).sum();
        self.regions = merged;
        debug!(before, after = self.regions.len(), "merged regions");
    }

    /// Concatenate two sets into a new, sorted set. Deliberately performs no
    /// merging: duplicates and overlaps persist until the caller runs
    /// [`ChromoRegionSet::merge_regions`].
    pub fn concat(&self, other: &ChromoRegionSet) -> ChromoRegionSet {
        let mut set = ChromoRegionSet::from_regions(
            self.regions
                .iter()
                .chain(&other.regions)
                .cloned()
                .collect(),
        );
        set.sort_regions();
        set
    }

    /// Remove every region of `other` from this set, returning the result as
    /// a new set.
    ///
    /// Each subtrahend is applied in sequence against the current working
    /// list, never against a re-merged view. When either operand holds
    /// overlapping, unmerged regions the result can double-count; callers
    /// wanting true set-difference semantics must call
    /// [`ChromoRegionSet::merge_regions`] on both operands first.
    pub fn subtract(&self, other: &ChromoRegionSet) -> ChromoRegionSet {
        let mut working = self.regions.clone();
        for subtrahend in other {
            working = working
                .iter()
                .flat_map(|region| region.subtract(subtrahend))
                .collect();
        }
        ChromoRegionSet::from_regions(working)
    }

    /// Number of member regions (not bases).
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Total covered width: the sum of all member widths, overlaps counted
    /// as many times as they appear.
    pub fn cumulative_size(&self) -> u64 {
        self.cumulative_size
    }

    /// Iterate members in their current stored order.
    pub fn iter(&self) -> std::slice::Iter<'_, ChromoRegion> {
        self.regions.iter()
    }

    /// Load a set from a BED-style flat file: one region per non-empty line,
    /// whitespace-separated `chromo start end` with any extra fields
    /// ignored. Gzip input is detected transparently. No merging and no
    /// validation beyond each region's own `start <= end` invariant; the
    /// first malformed line aborts the load.
    pub fn from_bed(path: &Path) -> Result<Self, RegionError> {
        let reader = InputStream::new(path).reader()?;
        let mut set = ChromoRegionSet::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = idx + 1;
            if line.trim().is_empty() {
                continue;
            }

            let mut fields = line.split_whitespace();
            let (Some(chromo), Some(start), Some(end)) =
                (fields.next(), fields.next(), fields.next())
            else {
                return Err(RegionError::MalformedIntervalLine {
                    line_number,
                    reason: "expected at least 3 fields (chromo start end)".to_string(),
                    line: line.clone(),
                });
            };

            let start: u32 = start.parse().map_err(|_| RegionError::MalformedIntervalLine {
                line_number,
                reason: format!("invalid start coordinate {start:?}"),
                line: line.clone(),
            })?;
            let end: u32 = end.parse().map_err(|_| RegionError::MalformedIntervalLine {
                line_number,
                reason: format!("invalid end coordinate {end:?}"),
                line: line.clone(),
            })?;

            set.add_region(ChromoRegion::new(chromo, start, end)?);
        }

        debug!(path = %path.display(), regions = set.len(), "loaded BED file");
        Ok(set)
    }

    /// Write members in stored order as 3-column BED.
    pub fn write_bed<W: std::io::Write>(&self, writer: &mut W) -> Result<(), RegionError> {
        for region in &self.regions {
            writeln!(
                writer,
                "{}\t{}\t{}",
                region.chromo(),
                region.start(),
                region.end()
            )?;
        }
        Ok(())
    }
}

/// Multiset equality: same member count, same covered width, and the same
/// regions once both sides are viewed in sorted order. Insertion order does
/// not matter.
impl PartialEq for ChromoRegionSet {
    fn eq(&self, other: &Self) -> bool {
        if self.regions.len() != other.regions.len() {
            return false;
        }
        if self.cumulative_size != other.cumulative_size {
            return false;
        }
        let mut ours = self.regions.clone();
        let mut theirs = other.regions.clone();
        ours.sort_unstable();
        theirs.sort_unstable();
        ours == theirs
    }
}

impl Eq for ChromoRegionSet {}

impl Add for &ChromoRegionSet {
    type Output = ChromoRegionSet;

    fn add(self, other: &ChromoRegionSet) -> ChromoRegionSet {
        self.concat(other)
    }
}

impl Sub for &ChromoRegionSet {
    type Output = ChromoRegionSet;

    fn sub(self, other: &ChromoRegionSet) -> ChromoRegionSet {
        self.subtract(other)
    }
}

impl<'a> IntoIterator for &'a ChromoRegionSet {
    type Item = &'a ChromoRegion;
    type IntoIter = std::slice::Iter<'a, ChromoRegion>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}

impl IntoIterator for ChromoRegionSet {
    type Item = ChromoRegion;
    type IntoIter = std::vec::IntoIter<ChromoRegion>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.into_iter()
    }
}
