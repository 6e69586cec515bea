use serde::{Deserialize, Serialize};

use crate::{
    cut_locations::CutLocationsInEnzymeNotation,
    error::ValidationError,
    iupac_code::{IupacCode, IupacComplement, StrandComplement},
    string_formatting::CUT_SYMBOL,
};

/// A restriction enzyme as recorded in an enzyme database.
///
/// Cut positions are in enzyme notation, two per strand; 0 means the enzyme
/// has no such cut.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictionEnzyme {
    pub name: String,
    pub pattern: String,
    pub note: Option<String>,
    #[serde(default)]
    pub primary_strand_cut1: isize,
    #[serde(default)]
    pub primary_strand_cut2: isize,
    #[serde(default)]
    pub complementary_strand_cut1: isize,
    #[serde(default)]
    pub complementary_strand_cut2: isize,
    #[serde(skip_serializing, default)]
    is_palindromic: bool,
}

impl RestrictionEnzyme {
    pub fn new(
        name: &str,
        pattern: &str,
        primary_strand_cuts: [isize; 2],
        complementary_strand_cuts: [isize; 2],
    ) -> Self {
        let mut ret = Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            note: None,
            primary_strand_cut1: primary_strand_cuts[0],
            primary_strand_cut2: primary_strand_cuts[1],
            complementary_strand_cut1: complementary_strand_cuts[0],
            complementary_strand_cut2: complementary_strand_cuts[1],
            is_palindromic: false,
        };
        ret.check_palindromic();
        ret
    }

    pub fn check_palindromic(&mut self) {
        self.is_palindromic = self.pattern.eq_ignore_ascii_case(&self.get_pattern_rc());
    }

    pub fn is_palindromic(&self) -> bool {
        self.is_palindromic
    }

    fn get_pattern_rc(&self) -> String {
        IupacComplement.reverse_complement(&self.pattern)
    }

    /// The cut pairs of this entry, with the database's 0 placeholders removed.
    pub fn cut_locations(&self) -> Result<CutLocationsInEnzymeNotation, ValidationError> {
        CutLocationsInEnzymeNotation::from_raw_cut_locations(
            &[self.primary_strand_cut1, self.primary_strand_cut2],
            &[self.complementary_strand_cut1, self.complementary_strand_cut2],
        )
    }
}

/// Resolves enzyme names, eg against a copy of REBASE.
pub trait EnzymeLookup {
    fn lookup(&self, name: &str) -> Option<&RestrictionEnzyme>;
}

/// Exact name first, then ignoring case.
impl EnzymeLookup for [RestrictionEnzyme] {
    fn lookup(&self, name: &str) -> Option<&RestrictionEnzyme> {
        self.iter()
            .find(|re| re.name == name)
            .or_else(|| self.iter().find(|re| re.name.eq_ignore_ascii_case(name)))
    }
}

impl EnzymeLookup for Vec<RestrictionEnzyme> {
    fn lookup(&self, name: &str) -> Option<&RestrictionEnzyme> {
        self.as_slice().lookup(name)
    }
}

/// Whether `s` reads as an enzyme name rather than a recognition pattern.
///
/// A pattern only holds nucleotide letters and cut symbols, so anything else
/// (lowercase 'o', 'I' for roman numerals, digits) marks a name.
pub fn is_enzyme_name(s: &str) -> bool {
    let s = s.trim();
    !s.is_empty()
        && s
            .bytes()
            .any(|b| b != CUT_SYMBOL as u8 && !IupacCode::is_valid_letter(b))
}
