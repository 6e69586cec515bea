use strand_cuts::{
    ENZYMES,
    aligned_strands::AlignedStrands,
    cut_locations::CutLocationPairInEnzymeNotation,
    double_stranded::{DoubleStranded, EnzymeSource},
    error::ValidationError,
    string_formatting::{CUT_SYMBOL, SPACER},
};

fn builtin(name: &str) -> DoubleStranded {
    DoubleStranded::parse(name, vec![], &*ENZYMES).unwrap()
}

#[test]
fn test_builtin_sticky_and_blunt() {
    for name in ["EcoRI", "BamHI", "HindIII", "PstI", "NotI", "BsaI"] {
        assert!(builtin(name).is_sticky(), "{name} should leave an overhang");
    }
    for name in ["SmaI", "EcoRV"] {
        assert!(builtin(name).is_blunt(), "{name} should cut blunt");
    }
}

#[test]
fn test_bsai_cuts_outside_its_site() {
    let ds = builtin("BsaI");
    assert_eq!(ds.primary().pattern(), "ggtctcnn");
    assert_eq!(ds.complement().pattern(), "ccagagnnnnnn");
    assert_eq!(
        ds.aligned_strands_with_cuts().primary(),
        "g g t c t c n^n n n n n"
    );
    assert_eq!(
        ds.aligned_strands_with_cuts().complement(),
        "c c a g a g n n n n n^n"
    );
}

#[test]
fn test_cuts_on_both_sides_of_the_site() {
    let ds = builtin("AloI");
    let aligned = ds.aligned_strands_with_cuts();
    assert_eq!(aligned.primary().len(), aligned.complement().len());
    assert_eq!(aligned.primary().matches(CUT_SYMBOL).count(), 2);
    assert_eq!(aligned.complement().matches(CUT_SYMBOL).count(), 2);
    assert!(ds.is_sticky());

    assert_eq!(ds.cut_locations().shift(), 13);
    assert_eq!(ds.cut_locations().primary(), vec![5, 37]);
    assert_eq!(ds.cut_locations().complement(), vec![0, 32]);
    assert_eq!(
        ds.cut_locations().to_enzyme_notation(),
        *ds.cut_locations_in_enzyme_notation()
    );
}

#[test]
fn test_aligned_columns_hold_complementary_bases() {
    let ds = builtin("NotI");
    let aligned = ds.aligned_strands();
    assert_eq!(aligned.primary(), "gcggccgc");
    assert_eq!(aligned.complement(), "cgccggcg");
    let spaced = ds.aligned_strands_with_cuts();
    let strip = |s: &str| s.replace([CUT_SYMBOL, SPACER], "");
    assert_eq!(strip(spaced.primary()), aligned.primary());
    assert_eq!(strip(spaced.complement()), aligned.complement());
}

#[test]
fn test_same_cut_from_every_source() {
    let by_name = builtin("EcoRI");
    let by_symbol = DoubleStranded::parse("g^aattc", vec![], &*ENZYMES).unwrap();
    let by_pairs = DoubleStranded::new(
        EnzymeSource::Pattern("gaattc".to_string()),
        vec![CutLocationPairInEnzymeNotation::new(Some(1), Some(5)).unwrap()],
        &*ENZYMES,
    )
    .unwrap();
    assert_eq!(by_name.aligned_strands_with_cuts(), by_symbol.aligned_strands_with_cuts());
    assert_eq!(by_name.aligned_strands_with_cuts(), by_pairs.aligned_strands_with_cuts());
}

#[test]
fn test_unknown_name() {
    assert_eq!(
        DoubleStranded::parse("NoSuchI", vec![], &*ENZYMES),
        Err(ValidationError::UnknownEnzyme("NoSuchI".to_string()))
    );
}

#[test]
fn test_align_scenarios() {
    let aligned = AlignedStrands::align("nngattacannnnn", "nnnnnctaatgtnn").unwrap();
    assert_eq!(aligned.primary(), "nnnnngattacannnnn");
    assert_eq!(aligned.complement(), "nnnnnctaatgtnnnnn");

    let aligned = AlignedStrands::align_with_cuts(
        "nngattacannnnn",
        "nnnnnctaatgtnn",
        &[0, 10, 12],
        &[0, 2, 12],
    )
    .unwrap();
    assert_eq!(aligned.primary(), "n n n n^n g a t t a c a n n^n n^n");
    assert_eq!(aligned.complement(), "n^n n^n n c t a a t g t n^n n n n");

    assert!(AlignedStrands::align("acgt", "acg").is_err());
}
