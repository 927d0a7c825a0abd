// region.rs

use std::cmp::Ordering;
use std::fmt;
use std::ops::Sub;

use serde::{Deserialize, Serialize};

use crate::error::RegionError;

/// Parse a chromosome name (after prefix stripping) as a number. Only plain
/// decimal digits count; "X", "MT" or "" are not numeric.
fn numeric_name(name: &str) -> Option<u64> {
    if !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) {
        name.parse().ok()
    } else {
        None
    }
}

/// Compare two chromosome names for sorting.
///
/// An optional leading "chr" prefix is stripped from each name first. If both
/// stripped names are decimal they compare numerically (so "chr2" < "chr10");
/// a numeric name sorts below a letter name (so "chr22" < "chrX"); two
/// letter names compare lexicographically.
pub fn compare_chroms(a: &str, b: &str) -> Ordering {
    let a = a.strip_prefix("chr").unwrap_or(a);
    let b = b.strip_prefix("chr").unwrap_or(b);
    match (numeric_name(a), numeric_name(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// One contiguous half-open span [start, end) on a named chromosome.
/// Coordinates are 0-based; `end` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChromoRegion {
    chromo: String,
    start: u32,
    end: u32,
}

impl ChromoRegion {
    /// Create a new region. Fails with [`RegionError::InvalidRegion`] when
    /// `start > end`; zero-width regions are allowed.
    pub fn new(chromo: impl Into<String>, start: u32, end: u32) -> Result<Self, RegionError> {
        if start > end {
            return Err(RegionError::InvalidRegion { start, end });
        }
        Ok(Self {
            chromo: chromo.into(),
            start,
            end,
        })
    }

    pub fn chromo(&self) -> &str {
        &self.chromo
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of bases covered, `end - start`.
    pub fn width(&self) -> u32 {
        self.end - self.start
    }

    /// Move the end coordinate. The width changes with it; the new end must
    /// still be at least `start`.
    pub fn set_end(&mut self, end: u32) -> Result<(), RegionError> {
        if end < self.start {
            return Err(RegionError::InvalidRegion {
                start: self.start,
                end,
            });
        }
        self.end = end;
        Ok(())
    }

    /// True when the two regions overlap or touch end-to-start on the same
    /// chromosome. Touching endpoints count: [0, 10) and [10, 20) are
    /// contiguous under the half-open convention.
    pub fn contiguous_with(&self, other: &ChromoRegion) -> bool {
        if self.chromo != other.chromo {
            return false;
        }
        if self.start < other.start {
            self.end >= other.start
        } else {
            other.end >= self.start
        }
    }

    /// The single region covering both operands. Fails with
    /// [`RegionError::NonContiguousRegions`] when they do not overlap or
    /// touch; check [`ChromoRegion::contiguous_with`] first if union is
    /// conditional.
    pub fn union(&self, other: &ChromoRegion) -> Result<ChromoRegion, RegionError> {
        if !self.contiguous_with(other) {
            return Err(RegionError::NonContiguousRegions(
                self.to_string(),
                other.to_string(),
            ));
        }
        Ok(ChromoRegion {
            chromo: self.chromo.clone(),
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        })
    }

    /// Remove `other`'s span from this region, returning the 0, 1, or 2
    /// pieces left over.
    ///
    /// A disjoint subtrahend leaves the region unchanged; a covering one
    /// leaves nothing; a strictly interior one splits the region in two;
    /// otherwise one flank survives. These cases are exhaustive over
    /// contiguous pairs.
    pub fn subtract(&self, other: &ChromoRegion) -> Vec<ChromoRegion> {
        if !self.contiguous_with(other) {
            return vec![self.clone()];
        }

        let piece = |start: u32, end: u32| ChromoRegion {
            chromo: self.chromo.clone(),
            start,
            end,
        };

        if other.start <= self.start && other.end >= self.end {
            vec![]
        } else if other.start > self.start && other.end < self.end {
            vec![piece(self.start, other.start), piece(other.end, self.end)]
        } else if other.start <= self.start {
            vec![piece(other.end, self.end)]
        } else {
            vec![piece(self.start, other.start)]
        }
    }
}

impl fmt::Display for ChromoRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.chromo, self.start, self.end)
    }
}

impl Sub for &ChromoRegion {
    type Output = Vec<ChromoRegion>;

    fn sub(self, other: &ChromoRegion) -> Vec<ChromoRegion> {
        self.subtract(other)
    }
}

// The sort order for regions: chromosome (numeric-aware), then start. The
// remaining comparisons are tie-breakers that keep Ord consistent with Eq
// ("chr1" and "1" strip to the same key but are distinct regions).
impl Ord for ChromoRegion {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_chroms(&self.chromo, &other.chromo)
            .then_with(|| self.start.cmp(&other.start))
            .then_with(|| self.end.cmp(&other.end))
            .then_with(|| self.chromo.cmp(&other.chromo))
    }
}

impl PartialOrd for ChromoRegion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn region(chromo: &str, start: u32, end: u32) -> ChromoRegion {
        ChromoRegion::new(chromo, start, end).unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_coordinates() {
        let err = ChromoRegion::new("chr1", 100, 50).unwrap_err();
        assert!(matches!(
            err,
            RegionError::InvalidRegion { start: 100, end: 50 }
        ));
        // Zero-width is fine.
        assert_eq!(region("chr1", 100, 100).width(), 0);
    }

    #[test]
    fn test_set_end_updates_width() {
        let mut r = region("chr1", 100, 200);
        assert_eq!(r.width(), 100);
        r.set_end(150).unwrap();
        assert_eq!(r.end(), 150);
        assert_eq!(r.width(), 50);
        assert!(r.set_end(99).is_err());
        // A failed update leaves the region untouched.
        assert_eq!(r.end(), 150);
    }

    #[test]
    fn test_contiguous_with() {
        let a = region("chr1", 0, 10);
        assert!(a.contiguous_with(&region("chr1", 5, 20)));
        // Touching endpoints count as contiguous.
        assert!(a.contiguous_with(&region("chr1", 10, 20)));
        assert!(!a.contiguous_with(&region("chr1", 11, 20)));
        // Never contiguous across chromosomes, even with identical coords.
        assert!(!a.contiguous_with(&region("chr2", 0, 10)));
    }

    #[test]
    fn test_union() {
        let a = region("chr1", 100, 200);
        let b = region("chr1", 150, 250);
        assert_eq!(a.union(&b).unwrap(), region("chr1", 100, 250));
        // Symmetric.
        assert_eq!(b.union(&a).unwrap(), region("chr1", 100, 250));

        let gap = region("chr1", 300, 400);
        assert!(matches!(
            a.union(&gap),
            Err(RegionError::NonContiguousRegions(_, _))
        ));
    }

    #[test]
    fn test_subtract_disjoint() {
        let a = region("chr1", 0, 100);
        assert_eq!(a.subtract(&region("chr1", 200, 300)), vec![a.clone()]);
        assert_eq!(a.subtract(&region("chr2", 0, 100)), vec![a.clone()]);
    }

    #[test]
    fn test_subtract_full_cover() {
        let a = region("chr1", 50, 100);
        assert!(a.subtract(&region("chr1", 50, 100)).is_empty());
        assert!(a.subtract(&region("chr1", 0, 200)).is_empty());
    }

    #[test]
    fn test_subtract_interior_splits() {
        let a = region("chr1", 0, 100);
        let pieces = a.subtract(&region("chr1", 40, 60));
        assert_eq!(pieces, vec![region("chr1", 0, 40), region("chr1", 60, 100)]);
        // The operator form is the same subtraction.
        assert_eq!(&a - &region("chr1", 40, 60), pieces);
    }

    #[test]
    fn test_subtract_left_and_right_flanks() {
        let a = region("chr1", 50, 150);
        // Covers the left side only.
        assert_eq!(
            a.subtract(&region("chr1", 0, 100)),
            vec![region("chr1", 100, 150)]
        );
        // Covers the right side only.
        assert_eq!(
            a.subtract(&region("chr1", 100, 200)),
            vec![region("chr1", 50, 100)]
        );
    }

    #[test]
    fn test_subtract_touching_is_noop_with_zero_width_piece() {
        // [0,10) minus [10,20): contiguous by the touching rule, but the
        // subtrahend covers the right side only, leaving all of [0,10).
        let a = region("chr1", 0, 10);
        assert_eq!(a.subtract(&region("chr1", 10, 20)), vec![region("chr1", 0, 10)]);
    }

    #[test]
    fn test_chromosome_ordering() {
        assert!(compare_chroms("chr1", "chr2").is_lt());
        assert!(compare_chroms("chr2", "chr10").is_lt());
        assert!(compare_chroms("chr10", "chr2").is_gt());
        assert!(compare_chroms("chrX", "chrY").is_lt());
        // Letters sort after digits.
        assert!(compare_chroms("chr2", "chrX").is_lt());
        assert!(compare_chroms("chrX", "chr2").is_gt());
        // The prefix is optional on either side.
        assert!(compare_chroms("2", "chr10").is_lt());
        assert!(compare_chroms("chr3", "22").is_lt());
    }

    #[test]
    fn test_region_ordering() {
        let mut regions = vec![
            region("chrX", 0, 10),
            region("chr10", 0, 10),
            region("chr2", 50, 60),
            region("chr2", 0, 10),
        ];
        regions.sort();
        assert_eq!(
            regions,
            vec![
                region("chr2", 0, 10),
                region("chr2", 50, 60),
                region("chr10", 0, 10),
                region("chrX", 0, 10),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(region("chr1", 100, 200).to_string(), "chr1:100-200");
    }

    prop_compose! {
        fn arb_region()(
            chromo in prop::sample::select(vec!["chr1", "chr2", "chrX"]),
            start in 0u32..1000,
            width in 0u32..500,
        ) -> ChromoRegion {
            ChromoRegion::new(chromo, start, start + width).unwrap()
        }
    }

    proptest! {
        #[test]
        fn prop_contiguity_is_symmetric(a in arb_region(), b in arb_region()) {
            prop_assert_eq!(a.contiguous_with(&b), b.contiguous_with(&a));
        }

        #[test]
        fn prop_union_dominates_operands(a in arb_region(), b in arb_region()) {
            if a.contiguous_with(&b) {
                let u = a.union(&b).unwrap();
                prop_assert!(u.width() >= a.width().max(b.width()));
                prop_assert!(u.contiguous_with(&a));
                prop_assert!(u.contiguous_with(&b));
            }
        }

        #[test]
        fn prop_self_subtraction_is_empty(a in arb_region()) {
            prop_assert!(a.subtract(&a).is_empty());
        }

        #[test]
        fn prop_subtraction_pieces_tile(a in arb_region(), b in arb_region()) {
            // The surviving pieces plus the overlap with the subtrahend
            // always account for every base of `a`.
            let overlap = if a.chromo() == b.chromo() {
                let lo = a.start().max(b.start());
                let hi = a.end().min(b.end());
                hi.saturating_sub(lo)
            } else {
                0
            };
            let pieces: u32 = a.subtract(&b).iter().map(|p| p.width()).sum();
            prop_assert_eq!(pieces + overlap, a.width());
        }
    }
}
