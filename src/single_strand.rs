use crate::{
    cut_locations::{enzyme_to_array_index, shift_for_minimum},
    error::ValidationError,
    iupac_code::IupacCode,
    string_formatting::{
        CUT_SYMBOL, PADDING, add_spacing, insert_cut_symbols, is_padding, strip_cuts_and_padding,
    },
};
use serde::Serialize;

/// Reading direction of a strand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Orientation {
    FivePrimeToThreePrime,
    ThreePrimeToFivePrime,
}

impl Orientation {
    /// The (left, right) end labels, eg (5, 3) for a primary strand.
    pub fn ends(&self) -> (u8, u8) {
        match self {
            Orientation::FivePrimeToThreePrime => (5, 3),
            Orientation::ThreePrimeToFivePrime => (3, 5),
        }
    }
}

/// Sorted cut locations of one strand, in enzyme notation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SingleStrandCutLocations {
    locations: Vec<isize>,
}

impl SingleStrandCutLocations {
    pub fn new(mut locations: Vec<isize>) -> Result<Self, ValidationError> {
        if locations.contains(&0) {
            return Err(ValidationError::ZeroCutLocation);
        }
        locations.sort_unstable();
        Ok(Self { locations })
    }

    /// Reads cut locations from a pattern such as `n^ng^aattc`. The first
    /// base that is not padding is location 1; padding in front of it counts
    /// backwards from -1.
    pub fn from_cut_symbols(pattern: &str) -> Result<Self, ValidationError> {
        let first_base = pattern
            .chars()
            .filter(|&c| c != CUT_SYMBOL)
            .position(|c| !is_padding(c))
            .ok_or_else(|| ValidationError::EmptyPattern(pattern.to_string()))?;

        // `position` is the enzyme-notation location of the last base seen,
        // except that it passes through 0, which the notation skips.
        let mut position = -(first_base as isize);
        let mut locations = vec![];
        for c in pattern.chars() {
            if c == CUT_SYMBOL {
                locations.push(if position <= 0 { position - 1 } else { position });
            } else {
                position += 1;
            }
        }
        Self::new(locations)
    }

    pub fn locations(&self) -> &[isize] {
        &self.locations
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn min(&self) -> Option<isize> {
        self.locations.first().copied()
    }

    pub fn max(&self) -> Option<isize> {
        self.locations.last().copied()
    }

    /// Left padding the strand's pattern receives to hold cuts before it.
    pub fn shift(&self) -> usize {
        shift_for_minimum(self.min())
    }

    pub fn to_array_index(&self) -> Vec<usize> {
        let shift = self.shift();
        self.locations
            .iter()
            .map(|&n| enzyme_to_array_index(n, shift))
            .collect()
    }
}

/// One strand of a recognition pattern with its cuts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SingleStrand {
    stripped: String,
    cut_locations_in_enzyme_notation: SingleStrandCutLocations,
    orientation: Orientation,
}

impl SingleStrand {
    /// Builds a strand from `sequence`, which either carries its cuts inline
    /// as cut symbols or takes them from `cuts` in enzyme notation, not both.
    pub fn new(
        sequence: &str,
        cuts: &[isize],
        orientation: Orientation,
    ) -> Result<Self, ValidationError> {
        let sequence = sequence.trim().to_ascii_lowercase();
        let cut_locations_in_enzyme_notation = if sequence.contains(CUT_SYMBOL) {
            if !cuts.is_empty() {
                return Err(ValidationError::RedundantCutLocations(sequence));
            }
            SingleStrandCutLocations::from_cut_symbols(&sequence)?
        } else {
            SingleStrandCutLocations::new(cuts.to_vec())?
        };

        validate_bases(&sequence)?;
        let stripped = strip_cuts_and_padding(&sequence);
        if stripped.is_empty() {
            return Err(ValidationError::EmptyPattern(sequence));
        }

        Ok(Self {
            stripped,
            cut_locations_in_enzyme_notation,
            orientation,
        })
    }

    pub fn primary(sequence: &str, cuts: &[isize]) -> Result<Self, ValidationError> {
        Self::new(sequence, cuts, Orientation::FivePrimeToThreePrime)
    }

    pub fn complement(sequence: &str, cuts: &[isize]) -> Result<Self, ValidationError> {
        Self::new(sequence, cuts, Orientation::ThreePrimeToFivePrime)
    }

    /// The recognition sequence without padding or cut symbols.
    pub fn stripped(&self) -> &str {
        &self.stripped
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn cut_locations_in_enzyme_notation(&self) -> &SingleStrandCutLocations {
        &self.cut_locations_in_enzyme_notation
    }

    /// Cut locations as zero-based indices into [`SingleStrand::pattern`].
    pub fn cut_locations(&self) -> Vec<usize> {
        self.cut_locations_in_enzyme_notation.to_array_index()
    }

    /// The stripped sequence, padded far enough on either side to hold every
    /// cut. A cut after the last base gets one extra base of padding so that
    /// the cut still lies between two characters.
    pub fn pattern(&self) -> String {
        let cl = &self.cut_locations_in_enzyme_notation;
        let len = self.stripped.chars().count() as isize;
        let left = cl.shift();
        let right = match cl.max() {
            Some(max) if max >= len => (max - len + 1) as usize,
            _ => 0,
        };
        let mut ret = String::with_capacity(left + self.stripped.len() + right);
        ret.extend(std::iter::repeat_n(PADDING, left));
        ret.push_str(&self.stripped);
        ret.extend(std::iter::repeat_n(PADDING, right));
        ret
    }

    pub fn with_cut_symbols(&self) -> String {
        let positions: Vec<usize> = self.cut_locations().iter().map(|i| i + 1).collect();
        insert_cut_symbols(&self.pattern(), &positions)
    }

    pub fn with_spaces(&self) -> String {
        add_spacing(&self.with_cut_symbols())
    }
}

fn validate_bases(sequence: &str) -> Result<(), ValidationError> {
    match sequence
        .chars()
        .filter(|&c| c != CUT_SYMBOL)
        .find(|&c| !c.is_ascii() || !IupacCode::is_valid_letter(c as u8))
    {
        Some(base) => Err(ValidationError::InvalidBase {
            pattern: sequence.to_string(),
            base,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_symbols() {
        let cl = SingleStrandCutLocations::from_cut_symbols("g^aattc").unwrap();
        assert_eq!(cl.locations(), &[1]);

        let cl = SingleStrandCutLocations::from_cut_symbols("n^ng^aattc^").unwrap();
        assert_eq!(cl.locations(), &[-2, 1, 6]);

        let cl = SingleStrandCutLocations::from_cut_symbols("^gaattc").unwrap();
        assert_eq!(cl.locations(), &[-1]);

        assert_eq!(
            SingleStrandCutLocations::from_cut_symbols("n^n"),
            Err(ValidationError::EmptyPattern("n^n".to_string()))
        );
    }

    #[test]
    fn test_cut_locations_sorted_and_nonzero() {
        let cl = SingleStrandCutLocations::new(vec![11, -2, 9]).unwrap();
        assert_eq!(cl.locations(), &[-2, 9, 11]);
        assert_eq!(cl.min(), Some(-2));
        assert_eq!(cl.max(), Some(11));
        assert_eq!(cl.to_array_index(), vec![0, 10, 12]);
        assert_eq!(
            SingleStrandCutLocations::new(vec![1, 0]),
            Err(ValidationError::ZeroCutLocation)
        );
    }

    #[test]
    fn test_pattern_padding() {
        let s = SingleStrand::primary("gattaca", &[-2, 9, 11]).unwrap();
        assert_eq!(s.pattern(), "nngattacannnnn");
        assert_eq!(s.cut_locations(), vec![0, 10, 12]);
        assert_eq!(s.with_cut_symbols(), "n^ngattacann^nn^n");
        assert_eq!(s.with_spaces(), "n^n g a t t a c a n n^n n^n");

        let s = SingleStrand::complement("ctaatgt", &[-5, -3, 8]).unwrap();
        assert_eq!(s.pattern(), "nnnnnctaatgtnn");
        assert_eq!(s.cut_locations(), vec![0, 2, 12]);
        assert_eq!(s.orientation().ends(), (3, 5));
    }

    #[test]
    fn test_cut_after_last_base() {
        let s = SingleStrand::primary("gaattc^", &[]).unwrap();
        assert_eq!(s.pattern(), "gaattcn");
        assert_eq!(s.with_cut_symbols(), "gaattc^n");
    }

    #[test]
    fn test_inline_cuts() {
        let s = SingleStrand::primary("G^AATTC", &[]).unwrap();
        assert_eq!(s.stripped(), "gaattc");
        assert_eq!(s.pattern(), "gaattc");
        assert_eq!(s.with_cut_symbols(), "g^aattc");
        assert_eq!(s.orientation().ends(), (5, 3));
    }

    #[test]
    fn test_no_cuts() {
        let s = SingleStrand::primary("gaattc", &[]).unwrap();
        assert!(s.cut_locations().is_empty());
        assert_eq!(s.with_spaces(), "g a a t t c");
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            SingleStrand::primary("g^aattc", &[1]),
            Err(ValidationError::RedundantCutLocations("g^aattc".to_string()))
        );
        assert_eq!(
            SingleStrand::primary("gaxttc", &[1]),
            Err(ValidationError::InvalidBase {
                pattern: "gaxttc".to_string(),
                base: 'x'
            })
        );
        assert!(matches!(
            SingleStrand::primary("nnn", &[]),
            Err(ValidationError::EmptyPattern(_))
        ));
    }
}
