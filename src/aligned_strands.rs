//! Lines up a primary strand and its complement in one frame, optionally
//! marking where each strand is cut.

use crate::{
    error::ValidationError,
    string_formatting::{
        CUT_SYMBOL, PADDING, add_spacing, insert_cut_symbols, left_padding, right_padding,
        strip_padding,
    },
};
use itertools::Itertools;
use serde::Serialize;

/// Two strands of equal length whose characters correspond column by column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AlignedStrands {
    primary: String,
    complement: String,
}

/// A strand split into its padding runs and its core.
#[derive(Debug)]
struct PaddedStrand<'a> {
    left: String,
    core: &'a str,
    right: String,
}

impl<'a> PaddedStrand<'a> {
    fn new(s: &'a str) -> Self {
        Self {
            left: left_padding(s).to_string(),
            core: strip_padding(s),
            right: right_padding(s).to_string(),
        }
    }

    fn extend_left(&mut self, by: usize) {
        self.left.extend(std::iter::repeat_n(PADDING, by));
    }

    fn extend_right(&mut self, by: usize) {
        self.right.extend(std::iter::repeat_n(PADDING, by));
    }

    fn left_len(&self) -> usize {
        self.left.chars().count()
    }

    fn right_len(&self) -> usize {
        self.right.chars().count()
    }

    fn assemble(&self) -> String {
        format!("{}{}{}", self.left, self.core, self.right)
    }
}

impl AlignedStrands {
    /// Pads both strands with the union of their padding so that they end up
    /// the same length. The cores of `a` and `b` are left untouched.
    pub fn align(a: &str, b: &str) -> Result<Self, ValidationError> {
        let (a, b) = (PaddedStrand::new(a), PaddedStrand::new(b));
        validate_cores(&a, &b)?;

        let left = [&a.left, &b.left]
            .into_iter()
            .max_by_key(|pad| pad.chars().count())
            .map(String::as_str)
            .unwrap_or_default();
        let right = [&a.right, &b.right]
            .into_iter()
            .max_by_key(|pad| pad.chars().count())
            .map(String::as_str)
            .unwrap_or_default();

        Ok(Self {
            primary: format!("{left}{}{right}", a.core),
            complement: format!("{left}{}{right}", b.core),
        })
    }

    /// Aligns `a` and `b` like [`AlignedStrands::align`], then marks every cut
    /// and spaces out both strands so that the columns stay aligned.
    ///
    /// Cut offsets are zero-based positions in the strings as given; a cut
    /// at offset `i` falls after character `i`. When a strand's left padding
    /// has to grow to match the other strand, its offsets shift by the same
    /// amount. The order of offsets within a list does not matter.
    pub fn align_with_cuts(
        a: &str,
        b: &str,
        a_cuts: &[usize],
        b_cuts: &[usize],
    ) -> Result<Self, ValidationError> {
        let (mut a, mut b) = (PaddedStrand::new(a), PaddedStrand::new(b));
        validate_cores(&a, &b)?;

        let (a_right, b_right) = (a.right_len(), b.right_len());
        if a_right > b_right {
            b.extend_right(a_right - b_right);
        } else {
            a.extend_right(b_right - a_right);
        }

        let (a_left, b_left) = (a.left_len(), b.left_len());
        let (a_adjust, b_adjust) = if a_left > b_left {
            b.extend_left(a_left - b_left);
            (0, a_left - b_left)
        } else {
            a.extend_left(b_left - a_left);
            (b_left - a_left, 0)
        };

        let primary = mark_cuts(&a.assemble(), a_cuts, a_adjust)?;
        let complement = mark_cuts(&b.assemble(), b_cuts, b_adjust)?;
        log::trace!("aligned with cuts: {primary} / {complement}");

        Ok(Self {
            primary: add_spacing(&primary),
            complement: add_spacing(&complement),
        })
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn complement(&self) -> &str {
        &self.complement
    }

    /// True when every cut falls into the same column on both strands, so
    /// that cutting leaves no single-stranded overhang.
    pub fn is_blunt(&self) -> bool {
        fragment_lengths(&self.primary).eq(fragment_lengths(&self.complement))
    }

    pub fn is_sticky(&self) -> bool {
        !self.is_blunt()
    }
}

fn validate_cores(a: &PaddedStrand, b: &PaddedStrand) -> Result<(), ValidationError> {
    let primary_len = a.core.chars().count();
    let complement_len = b.core.chars().count();
    if primary_len != complement_len {
        return Err(ValidationError::UnequalCores {
            primary: a.assemble(),
            primary_len,
            complement: b.assemble(),
            complement_len,
        });
    }
    Ok(())
}

/// Inserts a cut symbol after each `cut + adjust`, highest position first.
fn mark_cuts(strand: &str, cuts: &[usize], adjust: usize) -> Result<String, ValidationError> {
    let length = strand.chars().count();
    let positions = cuts
        .iter()
        .map(|&cut| match cut.checked_add(adjust + 1) {
            Some(position) if position <= length => Ok(position),
            position => Err(ValidationError::CutOutOfRange {
                strand: strand.to_string(),
                position: position.unwrap_or(cut),
                length,
            }),
        })
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .sorted_unstable_by(|x, y| y.cmp(x))
        .collect_vec();
    Ok(insert_cut_symbols(strand, &positions))
}

fn fragment_lengths(strand: &str) -> impl Iterator<Item = usize> + '_ {
    strand.split(CUT_SYMBOL).map(|fragment| fragment.chars().count())
}
