use serde::Serialize;
use std::env;
use strand_cuts::{
    ENZYMES,
    aligned_strands::AlignedStrands,
    cut_locations::{CutLocationPairInEnzymeNotation, CutLocations, CutLocationsInEnzymeNotation},
    double_stranded::DoubleStranded,
    enzymes::Enzymes,
};

#[derive(Serialize)]
struct EnzymeSummary<'a> {
    name: Option<&'a str>,
    primary: &'a str,
    complement: &'a str,
    cut_locations_in_enzyme_notation: &'a CutLocationsInEnzymeNotation,
    cut_locations: &'a CutLocations,
    aligned_strands: &'a AlignedStrands,
    aligned_strands_with_cuts: &'a AlignedStrands,
    primary_ends: (u8, u8),
    complement_ends: (u8, u8),
    blunt: bool,
}

impl<'a> EnzymeSummary<'a> {
    fn new(ds: &'a DoubleStranded, primary: &'a str, complement: &'a str) -> Self {
        Self {
            name: ds.name(),
            primary,
            complement,
            cut_locations_in_enzyme_notation: ds.cut_locations_in_enzyme_notation(),
            cut_locations: ds.cut_locations(),
            aligned_strands: ds.aligned_strands(),
            aligned_strands_with_cuts: ds.aligned_strands_with_cuts(),
            primary_ends: ds.primary().orientation().ends(),
            complement_ends: ds.complement().orientation().ends(),
            blunt: ds.is_blunt(),
        }
    }
}

#[derive(Serialize)]
struct EnzymeListing<'a> {
    name: &'a str,
    pattern: &'a str,
    palindromic: bool,
}

fn usage() {
    eprintln!(
        "Usage:\n  \
  strand_cuts --version\n  \
  strand_cuts [--enzymes PATH] align PRIMARY COMPLEMENT\n  \
  strand_cuts [--enzymes PATH] align-cuts PRIMARY COMPLEMENT CUTS CUTS\n  \
  strand_cuts [--enzymes PATH] enzyme NAME|PATTERN [PRIMARY,COMPLEMENT ...]\n  \
  strand_cuts [--enzymes PATH] list-enzymes\n\n  \
  CUTS are comma-separated zero-based offsets, '-' for none.\n  \
  Cut pairs are in enzyme notation, '_' for a strand without a cut.\n  \
  Set RUST_LOG=debug for diagnostics."
    );
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Could not serialize JSON output: {e}"))?;
    println!("{text}");
    Ok(())
}

fn parse_global_enzymes_arg(args: &[String]) -> (Option<String>, usize) {
    if args.len() >= 3 && args[1] == "--enzymes" {
        return (Some(args[2].clone()), 3);
    }
    (None, 1)
}

fn parse_offsets(value: &str) -> Result<Vec<usize>, String> {
    if value == "-" {
        return Ok(vec![]);
    }
    value
        .split(',')
        .map(|n| {
            n.trim()
                .parse::<usize>()
                .map_err(|_| format!("Invalid cut offset '{n}' in '{value}'"))
        })
        .collect()
}

fn parse_cut_location(value: &str) -> Result<Option<isize>, String> {
    match value.trim() {
        "_" => Ok(None),
        n => n
            .parse::<isize>()
            .map(Some)
            .map_err(|_| format!("Invalid cut location '{n}'")),
    }
}

fn parse_cut_pair(value: &str) -> Result<CutLocationPairInEnzymeNotation, String> {
    let (primary, complement) = value
        .split_once(',')
        .ok_or_else(|| format!("Cut pair '{value}' must be PRIMARY,COMPLEMENT"))?;
    CutLocationPairInEnzymeNotation::new(
        parse_cut_location(primary)?,
        parse_cut_location(complement)?,
    )
    .map_err(|e| e.to_string())
}

/// The database given with `--enzymes`, or the built-in one. The built-in
/// database is only loaded when no file was given.
fn select_enzymes(custom: Option<&Enzymes>) -> &Enzymes {
    custom.unwrap_or_else(|| &*ENZYMES)
}

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        usage();
        return Err("Missing command".to_string());
    }
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("strand_cuts {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let (enzymes_path, cmd_idx) = parse_global_enzymes_arg(&args);
    if args.len() <= cmd_idx {
        usage();
        return Err("Missing command".to_string());
    }
    let custom_enzymes = match &enzymes_path {
        Some(path) => Some(Enzymes::from_path(path).map_err(|e| e.to_string())?),
        None => None,
    };
    let enzymes = select_enzymes(custom_enzymes.as_ref());

    let command = &args[cmd_idx];
    let operands = &args[cmd_idx + 1..];

    match command.as_str() {
        "align" => {
            let [primary, complement] = operands else {
                usage();
                return Err("align requires: PRIMARY COMPLEMENT".to_string());
            };
            let aligned = AlignedStrands::align(primary, complement).map_err(|e| e.to_string())?;
            print_json(&aligned)
        }
        "align-cuts" => {
            let [primary, complement, primary_cuts, complement_cuts] = operands else {
                usage();
                return Err("align-cuts requires: PRIMARY COMPLEMENT CUTS CUTS".to_string());
            };
            let aligned = AlignedStrands::align_with_cuts(
                primary,
                complement,
                &parse_offsets(primary_cuts)?,
                &parse_offsets(complement_cuts)?,
            )
            .map_err(|e| e.to_string())?;
            print_json(&aligned)
        }
        "enzyme" => {
            let Some((input, pairs)) = operands.split_first() else {
                usage();
                return Err("Missing enzyme name or pattern".to_string());
            };
            let cut_pairs = pairs
                .iter()
                .map(|p| parse_cut_pair(p))
                .collect::<Result<Vec<_>, _>>()?;
            let ds = DoubleStranded::parse(input, cut_pairs, enzymes).map_err(|e| e.to_string())?;
            let primary = ds.primary().pattern();
            let complement = ds.complement().pattern();
            print_json(&EnzymeSummary::new(&ds, &primary, &complement))
        }
        "list-enzymes" => {
            let listing: Vec<EnzymeListing> = enzymes
                .restriction_enzymes()
                .iter()
                .map(|re| EnzymeListing {
                    name: &re.name,
                    pattern: &re.pattern,
                    palindromic: re.is_palindromic(),
                })
                .collect();
            print_json(&listing)
        }
        _ => {
            usage();
            Err(format!("Unknown command '{command}'"))
        }
    }
}
