//! Cut locations in the two coordinate systems used for restriction enzymes.
//!
//! Enzyme notation counts bases from the start of the recognition pattern
//! with 1 as the first base, and counts backwards into the sequence before
//! the pattern with -1, -2, ... There is no 0. A location names the base
//! after which the cut falls.
//!
//! Array indices are zero-based offsets into the pattern once it has been
//! padded on the left with one wildcard per base that lies before the
//! pattern. The padding is as long as the magnitude of the lowest negative
//! location, which is kept as the `shift` so that both views stay
//! convertible into each other.

use crate::error::ValidationError;
use serde::Serialize;

/// Left padding needed for a set of enzyme-notation locations whose lowest
/// value is `min`.
pub fn shift_for_minimum(min: Option<isize>) -> usize {
    match min {
        Some(min) if min < 0 => min.unsigned_abs(),
        _ => 0,
    }
}

/// Converts one enzyme-notation location into an array index. `shift` must
/// come from [`shift_for_minimum`] over a set that holds `location`.
pub(crate) fn enzyme_to_array_index(location: isize, shift: usize) -> usize {
    debug_assert!(location != 0);
    if location > 0 {
        location.unsigned_abs() - 1 + shift
    } else {
        debug_assert!(
            location.unsigned_abs() <= shift,
            "{location} lies before the padding of {shift}"
        );
        shift - location.unsigned_abs()
    }
}

/// Inverse of [`enzyme_to_array_index`] for the same `shift`.
pub(crate) fn array_index_to_enzyme(index: usize, shift: usize) -> isize {
    if index < shift {
        -1 - (shift - index - 1) as isize
    } else {
        (index - shift) as isize + 1
    }
}

/// One cut, as seen on the primary and on the complementary strand, in
/// enzyme notation. A missing side means only one strand is cut there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CutLocationPairInEnzymeNotation {
    primary: Option<isize>,
    complement: Option<isize>,
}

impl CutLocationPairInEnzymeNotation {
    pub fn new(primary: Option<isize>, complement: Option<isize>) -> Result<Self, ValidationError> {
        if primary == Some(0) || complement == Some(0) {
            return Err(ValidationError::ZeroCutLocation);
        }
        if primary.is_none() && complement.is_none() {
            return Err(ValidationError::EmptyCutPair);
        }
        Ok(Self {
            primary,
            complement,
        })
    }

    pub fn primary(&self) -> Option<isize> {
        self.primary
    }

    pub fn complement(&self) -> Option<isize> {
        self.complement
    }
}

/// One cut pair as array indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CutLocationPair {
    pub primary: Option<usize>,
    pub complement: Option<usize>,
}

/// All cuts of a double-stranded pattern in enzyme notation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CutLocationsInEnzymeNotation {
    pairs: Vec<CutLocationPairInEnzymeNotation>,
}

impl CutLocationsInEnzymeNotation {
    pub fn new(pairs: Vec<CutLocationPairInEnzymeNotation>) -> Self {
        Self { pairs }
    }

    /// Pairs the per-strand cut lists of an enzyme database entry, which
    /// records "no cut" as 0.
    ///
    /// Zeros are dropped, then the remaining entries are paired by position.
    /// Lists that end up with different sizes are refused: there is no way to
    /// tell which cuts belong together.
    pub fn from_raw_cut_locations(
        primary: &[isize],
        complement: &[isize],
    ) -> Result<Self, ValidationError> {
        let primary: Vec<isize> = primary.iter().copied().filter(|&n| n != 0).collect();
        let complement: Vec<isize> = complement.iter().copied().filter(|&n| n != 0).collect();
        if primary.len() != complement.len() {
            return Err(ValidationError::CutCountMismatch {
                primary,
                complement,
            });
        }
        let pairs = primary
            .into_iter()
            .zip(complement)
            .map(|(p, c)| CutLocationPairInEnzymeNotation::new(Some(p), Some(c)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { pairs })
    }

    pub fn pairs(&self) -> &[CutLocationPairInEnzymeNotation] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Present primary-strand cuts, in pair order.
    pub fn primary(&self) -> Vec<isize> {
        self.pairs.iter().filter_map(|pair| pair.primary).collect()
    }

    /// Present complementary-strand cuts, in pair order.
    pub fn complement(&self) -> Vec<isize> {
        self.pairs.iter().filter_map(|pair| pair.complement).collect()
    }

    fn all(&self) -> impl Iterator<Item = isize> + '_ {
        self.pairs
            .iter()
            .flat_map(|pair| [pair.primary, pair.complement])
            .flatten()
    }

    pub fn min(&self) -> Option<isize> {
        self.all().min()
    }

    pub fn max(&self) -> Option<isize> {
        self.all().max()
    }

    /// Both strands share one shift, taken from the lowest location on
    /// either strand.
    pub fn to_array_index(&self) -> CutLocations {
        let shift = shift_for_minimum(self.min());
        let pairs = self
            .pairs
            .iter()
            .map(|pair| CutLocationPair {
                primary: pair.primary.map(|n| enzyme_to_array_index(n, shift)),
                complement: pair.complement.map(|n| enzyme_to_array_index(n, shift)),
            })
            .collect();
        CutLocations { pairs, shift }
    }
}

/// All cuts of a double-stranded pattern as array indices, together with the
/// left padding they were computed against.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CutLocations {
    pairs: Vec<CutLocationPair>,
    shift: usize,
}

impl CutLocations {
    pub fn pairs(&self) -> &[CutLocationPair] {
        &self.pairs
    }

    pub fn shift(&self) -> usize {
        self.shift
    }

    pub fn primary(&self) -> Vec<usize> {
        self.pairs.iter().filter_map(|pair| pair.primary).collect()
    }

    pub fn complement(&self) -> Vec<usize> {
        self.pairs.iter().filter_map(|pair| pair.complement).collect()
    }

    pub fn to_enzyme_notation(&self) -> CutLocationsInEnzymeNotation {
        let pairs = self
            .pairs
            .iter()
            .map(|pair| CutLocationPairInEnzymeNotation {
                primary: pair.primary.map(|i| array_index_to_enzyme(i, self.shift)),
                complement: pair.complement.map(|i| array_index_to_enzyme(i, self.shift)),
            })
            .collect();
        CutLocationsInEnzymeNotation { pairs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(p: Option<isize>, c: Option<isize>) -> CutLocationPairInEnzymeNotation {
        CutLocationPairInEnzymeNotation::new(p, c).unwrap()
    }

    #[test]
    fn test_pair_rejects_zero_and_empty() {
        assert_eq!(
            CutLocationPairInEnzymeNotation::new(Some(0), Some(5)),
            Err(ValidationError::ZeroCutLocation)
        );
        assert_eq!(
            CutLocationPairInEnzymeNotation::new(Some(1), Some(0)),
            Err(ValidationError::ZeroCutLocation)
        );
        assert_eq!(
            CutLocationPairInEnzymeNotation::new(None, None),
            Err(ValidationError::EmptyCutPair)
        );
        assert!(CutLocationPairInEnzymeNotation::new(Some(3), None).is_ok());
    }

    #[test]
    fn test_positive_locations() {
        // EcoRI, G^AATTC
        let cl = CutLocationsInEnzymeNotation::new(vec![pair(Some(1), Some(5))]);
        let ai = cl.to_array_index();
        assert_eq!(ai.shift(), 0);
        assert_eq!(ai.primary(), vec![0]);
        assert_eq!(ai.complement(), vec![4]);
    }

    #[test]
    fn test_negative_locations() {
        let cl = CutLocationsInEnzymeNotation::new(vec![
            pair(Some(-2), Some(-5)),
            pair(Some(9), Some(-3)),
            pair(Some(11), Some(8)),
        ]);
        assert_eq!(cl.min(), Some(-5));
        assert_eq!(cl.max(), Some(11));
        let ai = cl.to_array_index();
        assert_eq!(ai.shift(), 5);
        assert_eq!(ai.primary(), vec![3, 13, 15]);
        assert_eq!(ai.complement(), vec![0, 2, 12]);
    }

    #[test]
    fn test_single_base_before_pattern() {
        let cl = CutLocationsInEnzymeNotation::new(vec![pair(Some(-1), Some(1))]);
        let ai = cl.to_array_index();
        assert_eq!(ai.shift(), 1);
        assert_eq!(ai.primary(), vec![0]);
        assert_eq!(ai.complement(), vec![1]);
    }

    #[test]
    fn test_round_trip() {
        let cl = CutLocationsInEnzymeNotation::new(vec![
            pair(Some(-7), None),
            pair(Some(-1), Some(1)),
            pair(None, Some(12)),
            pair(Some(25), Some(20)),
        ]);
        assert_eq!(cl.to_array_index().to_enzyme_notation(), cl);

        let cl = CutLocationsInEnzymeNotation::new(vec![pair(Some(3), Some(3))]);
        assert_eq!(cl.to_array_index().to_enzyme_notation(), cl);
    }

    #[test]
    fn test_index_conversion_skips_zero() {
        for shift in 0..4 {
            for index in 0..12 {
                let location = array_index_to_enzyme(index, shift);
                assert_ne!(location, 0);
                assert_eq!(enzyme_to_array_index(location, shift), index);
            }
        }
    }

    #[test]
    fn test_extreme_locations() {
        let cl = CutLocationsInEnzymeNotation::new(vec![
            pair(Some(isize::MIN), Some(isize::MAX)),
            pair(Some(-1), Some(1)),
        ]);
        let ai = cl.to_array_index();
        assert_eq!(ai.shift(), isize::MIN.unsigned_abs());
        assert_eq!(ai.primary(), vec![0, isize::MIN.unsigned_abs() - 1]);
        assert_eq!(ai.complement(), vec![usize::MAX - 1, isize::MIN.unsigned_abs()]);
        assert_eq!(ai.to_enzyme_notation(), cl);
    }

    #[test]
    fn test_negative_only_locations() {
        let cl = CutLocationsInEnzymeNotation::new(vec![pair(Some(-3), None), pair(None, Some(-1))]);
        let ai = cl.to_array_index();
        assert_eq!(ai.shift(), 3);
        assert_eq!(ai.primary(), vec![0]);
        assert_eq!(ai.complement(), vec![2]);
        assert_eq!(ai.to_enzyme_notation(), cl);
    }

    #[test]
    fn test_absent_side_is_skipped() {
        let cl = CutLocationsInEnzymeNotation::new(vec![pair(Some(2), None), pair(Some(4), Some(6))]);
        assert_eq!(cl.primary(), vec![2, 4]);
        assert_eq!(cl.complement(), vec![6]);
        let ai = cl.to_array_index();
        assert_eq!(ai.pairs()[0].complement, None);
        assert_eq!(ai.complement(), vec![5]);
    }

    #[test]
    fn test_from_raw_cut_locations() {
        let cl = CutLocationsInEnzymeNotation::from_raw_cut_locations(&[1, 0], &[5, 0]).unwrap();
        assert_eq!(cl.pairs(), &[pair(Some(1), Some(5))]);

        let cl = CutLocationsInEnzymeNotation::from_raw_cut_locations(&[-8, 25], &[-13, 20]).unwrap();
        assert_eq!(cl.primary(), vec![-8, 25]);
        assert_eq!(cl.complement(), vec![-13, 20]);

        let cl = CutLocationsInEnzymeNotation::from_raw_cut_locations(&[], &[]).unwrap();
        assert!(cl.is_empty());
        assert!(cl.to_array_index().pairs().is_empty());
    }

    #[test]
    fn test_from_raw_cut_locations_mismatch() {
        let err = CutLocationsInEnzymeNotation::from_raw_cut_locations(&[1, 7], &[5, 0]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::CutCountMismatch {
                primary: vec![1, 7],
                complement: vec![5],
            }
        );
    }
}
