//! Character-level helpers shared by single strands and aligned strand pairs.

/// Marks the place between two bases where a strand is cut.
pub const CUT_SYMBOL: char = '^';

/// Placed between adjacent bases so that two rendered strands line up in columns.
pub const SPACER: char = ' ';

/// Wildcard base used to pad a strand into a common frame.
pub const PADDING: char = 'n';

#[inline(always)]
pub fn is_padding(c: char) -> bool {
    c.eq_ignore_ascii_case(&PADDING)
}

/// The strand with all leading and trailing padding removed.
pub fn strip_padding(s: &str) -> &str {
    s.trim_matches(is_padding)
}

/// The leading run of padding.
pub fn left_padding(s: &str) -> &str {
    let rest = s.trim_start_matches(is_padding);
    &s[..s.len() - rest.len()]
}

/// The trailing run of padding, not counting anything already taken by
/// [`left_padding`]. A strand made of padding only has no right padding, so
/// `left_padding(s) + strip_padding(s) + right_padding(s) == s` always holds.
pub fn right_padding(s: &str) -> &str {
    let rest = s.trim_start_matches(is_padding);
    &rest[rest.trim_end_matches(is_padding).len()..]
}

pub fn strip_cuts_and_padding(s: &str) -> String {
    let without_cuts: String = s.chars().filter(|&c| c != CUT_SYMBOL).collect();
    strip_padding(&without_cuts).to_string()
}

/// Inserts one [`CUT_SYMBOL`] at each of `positions`, where a position is a
/// character index into the unmodified `seq`.
///
/// Positions are applied highest first, so an insertion never moves a
/// position that has yet to be applied. Every position must be `<= seq`'s
/// length in characters.
pub fn insert_cut_symbols(seq: &str, positions: &[usize]) -> String {
    let mut chars: Vec<char> = seq.chars().collect();
    let mut positions = positions.to_vec();
    positions.sort_unstable_by(|a, b| b.cmp(a));
    for position in positions {
        debug_assert!(position <= chars.len());
        chars.insert(position, CUT_SYMBOL);
    }
    chars.into_iter().collect()
}

/// Puts a [`SPACER`] between adjacent bases. Cut symbols take the place of a
/// spacer, so every base keeps its column whether or not a cut is next to it.
pub fn add_spacing(seq: &str) -> String {
    let mut ret = String::with_capacity(seq.len() * 2);
    let mut after_base = false;
    for c in seq.chars() {
        if c == CUT_SYMBOL {
            ret.push(c);
            after_base = false;
        } else {
            if after_base {
                ret.push(SPACER);
            }
            ret.push(c);
            after_base = true;
        }
    }
    ret
}
