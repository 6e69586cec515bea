use thiserror::Error;

/// Every way a strand pair or a cut-location set can be rejected.
///
/// Inputs are deterministic, so none of these are worth retrying.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(
        "strands do not describe comparable regions: '{primary}' has a core of {primary_len}, \
         '{complement}' has a core of {complement_len}"
    )]
    UnequalCores {
        primary: String,
        primary_len: usize,
        complement: String,
        complement_len: usize,
    },

    #[error(
        "cannot pair cut locations: primary strand has {primary:?}, complementary strand has {complement:?}"
    )]
    CutCountMismatch {
        primary: Vec<isize>,
        complement: Vec<isize>,
    },

    #[error("0 is not a valid cut location in enzyme notation")]
    ZeroCutLocation,

    #[error("a cut location pair needs at least one strand")]
    EmptyCutPair,

    #[error("cut at position {position} lies beyond strand '{strand}' of length {length}")]
    CutOutOfRange {
        strand: String,
        position: usize,
        length: usize,
    },

    #[error("'{pattern}' contains '{base}', which is not a nucleotide letter")]
    InvalidBase { pattern: String, base: char },

    #[error("'{0}' contains no bases besides padding")]
    EmptyPattern(String),

    #[error("unknown restriction enzyme '{0}'")]
    UnknownEnzyme(String),

    #[error("cut locations for '{0}' are given twice, once inline and once separately")]
    RedundantCutLocations(String),
}
