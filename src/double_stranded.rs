//! A recognition pattern on both strands, with its cuts in both coordinate
//! systems and both strands aligned for display.

use crate::{
    aligned_strands::AlignedStrands,
    cut_locations::{CutLocationPairInEnzymeNotation, CutLocations, CutLocationsInEnzymeNotation},
    error::ValidationError,
    iupac_code::{IupacComplement, StrandComplement},
    restriction_enzyme::{EnzymeLookup, RestrictionEnzyme, is_enzyme_name},
    single_strand::{SingleStrand, SingleStrandCutLocations},
    string_formatting::{CUT_SYMBOL, strip_cuts_and_padding},
};
use serde::Serialize;

/// What a [`DoubleStranded`] is built from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnzymeSource {
    /// A database entry, carrying its own cuts.
    Entry(RestrictionEnzyme),
    /// An enzyme name, resolved through an [`EnzymeLookup`].
    Name(String),
    /// A recognition pattern, eg `g^aattc` with inline cuts or `gaattc` with
    /// separately supplied cut pairs.
    Pattern(String),
}

impl EnzymeSource {
    pub fn classify(input: &str) -> Self {
        if is_enzyme_name(input) {
            EnzymeSource::Name(input.trim().to_string())
        } else {
            EnzymeSource::Pattern(input.trim().to_string())
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DoubleStranded {
    name: Option<String>,
    primary: SingleStrand,
    complement: SingleStrand,
    cut_locations_in_enzyme_notation: CutLocationsInEnzymeNotation,
    cut_locations: CutLocations,
    aligned_strands: AlignedStrands,
    aligned_strands_with_cuts: AlignedStrands,
}

impl DoubleStranded {
    pub fn new(
        source: EnzymeSource,
        cut_pairs: Vec<CutLocationPairInEnzymeNotation>,
        lookup: &dyn EnzymeLookup,
    ) -> Result<Self, ValidationError> {
        Self::with_complement(source, cut_pairs, lookup, &IupacComplement)
    }

    /// Classifies `input` as a name or a pattern, then builds from it.
    pub fn parse(
        input: &str,
        cut_pairs: Vec<CutLocationPairInEnzymeNotation>,
        lookup: &dyn EnzymeLookup,
    ) -> Result<Self, ValidationError> {
        Self::new(EnzymeSource::classify(input), cut_pairs, lookup)
    }

    pub fn from_entry(entry: &RestrictionEnzyme) -> Result<Self, ValidationError> {
        Self::from_entry_with_complement(entry, vec![], &IupacComplement)
    }

    pub fn from_pattern(
        pattern: &str,
        cut_pairs: Vec<CutLocationPairInEnzymeNotation>,
    ) -> Result<Self, ValidationError> {
        Self::from_pattern_with_complement(pattern, cut_pairs, &IupacComplement)
    }

    pub fn with_complement(
        source: EnzymeSource,
        cut_pairs: Vec<CutLocationPairInEnzymeNotation>,
        lookup: &dyn EnzymeLookup,
        complementer: &dyn StrandComplement,
    ) -> Result<Self, ValidationError> {
        log::debug!("Building double strand from {source:?}");
        match source {
            EnzymeSource::Entry(entry) => {
                Self::from_entry_with_complement(&entry, cut_pairs, complementer)
            }
            EnzymeSource::Name(name) => {
                let entry = lookup
                    .lookup(&name)
                    .ok_or(ValidationError::UnknownEnzyme(name))?;
                Self::from_entry_with_complement(entry, cut_pairs, complementer)
            }
            EnzymeSource::Pattern(pattern) => {
                Self::from_pattern_with_complement(&pattern, cut_pairs, complementer)
            }
        }
    }

    fn from_entry_with_complement(
        entry: &RestrictionEnzyme,
        cut_pairs: Vec<CutLocationPairInEnzymeNotation>,
        complementer: &dyn StrandComplement,
    ) -> Result<Self, ValidationError> {
        if !cut_pairs.is_empty() {
            return Err(ValidationError::RedundantCutLocations(entry.name.clone()));
        }
        Self::build(
            Some(entry.name.clone()),
            &entry.pattern,
            entry.cut_locations()?,
            complementer,
        )
    }

    fn from_pattern_with_complement(
        pattern: &str,
        cut_pairs: Vec<CutLocationPairInEnzymeNotation>,
        complementer: &dyn StrandComplement,
    ) -> Result<Self, ValidationError> {
        if !pattern.contains(CUT_SYMBOL) {
            let cl = CutLocationsInEnzymeNotation::new(cut_pairs);
            return Self::build(None, pattern, cl, complementer);
        }
        if !cut_pairs.is_empty() {
            return Err(ValidationError::RedundantCutLocations(pattern.to_string()));
        }

        // Inline cuts only mark the primary strand; the complementary cut of
        // each is its mirror image across the pattern, skipping 0.
        let primary_cuts = SingleStrandCutLocations::from_cut_symbols(pattern)?;
        let stripped = strip_cuts_and_padding(pattern);
        let len = stripped.chars().count() as isize;
        let pairs = primary_cuts
            .locations()
            .iter()
            .map(|&p| {
                let c = if p >= len || p < 1 { len - p - 1 } else { len - p };
                CutLocationPairInEnzymeNotation::new(Some(p), Some(c))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::build(
            None,
            &stripped,
            CutLocationsInEnzymeNotation::new(pairs),
            complementer,
        )
    }

    fn build(
        name: Option<String>,
        pattern: &str,
        cut_locations_in_enzyme_notation: CutLocationsInEnzymeNotation,
        complementer: &dyn StrandComplement,
    ) -> Result<Self, ValidationError> {
        let primary = SingleStrand::primary(pattern, &cut_locations_in_enzyme_notation.primary())?;
        let complement = SingleStrand::complement(
            &complementer.complement(primary.stripped()),
            &cut_locations_in_enzyme_notation.complement(),
        )?;
        let cut_locations = cut_locations_in_enzyme_notation.to_array_index();

        let aligned_strands = AlignedStrands::align(&primary.pattern(), &complement.pattern())?;
        let aligned_strands_with_cuts = AlignedStrands::align_with_cuts(
            &primary.pattern(),
            &complement.pattern(),
            &primary.cut_locations(),
            &complement.cut_locations(),
        )?;
        log::trace!(
            "{}: {} / {}",
            name.as_deref().unwrap_or(pattern),
            aligned_strands_with_cuts.primary(),
            aligned_strands_with_cuts.complement()
        );

        Ok(Self {
            name,
            primary,
            complement,
            cut_locations_in_enzyme_notation,
            cut_locations,
            aligned_strands,
            aligned_strands_with_cuts,
        })
    }

    /// The enzyme name, if built from a database entry.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn primary(&self) -> &SingleStrand {
        &self.primary
    }

    pub fn complement(&self) -> &SingleStrand {
        &self.complement
    }

    pub fn cut_locations_in_enzyme_notation(&self) -> &CutLocationsInEnzymeNotation {
        &self.cut_locations_in_enzyme_notation
    }

    pub fn cut_locations(&self) -> &CutLocations {
        &self.cut_locations
    }

    pub fn aligned_strands(&self) -> &AlignedStrands {
        &self.aligned_strands
    }

    pub fn aligned_strands_with_cuts(&self) -> &AlignedStrands {
        &self.aligned_strands_with_cuts
    }

    pub fn is_blunt(&self) -> bool {
        self.aligned_strands_with_cuts.is_blunt()
    }

    pub fn is_sticky(&self) -> bool {
        self.aligned_strands_with_cuts.is_sticky()
    }
}
