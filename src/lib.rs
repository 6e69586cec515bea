use enzymes::Enzymes;
use lazy_static::lazy_static;

pub mod aligned_strands;
pub mod cut_locations;
pub mod double_stranded;
pub mod enzymes;
pub mod error;
pub mod iupac_code;
pub mod restriction_enzyme;
pub mod single_strand;
pub mod string_formatting;

lazy_static! {
    // Restriction enzymes
    pub static ref ENZYMES: Enzymes = Enzymes::builtin_with_runtime_override();
}
