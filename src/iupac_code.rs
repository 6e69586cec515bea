const DNA_BITMASK_A: u8 = 1;
const DNA_BITMASK_C: u8 = 2;
const DNA_BITMASK_G: u8 = 4;
const DNA_BITMASK_T: u8 = 8;
const DNA_BITMASK_N: u8 = DNA_BITMASK_A | DNA_BITMASK_C | DNA_BITMASK_G | DNA_BITMASK_T;

/// A bitmasked IUPAC code for DNA bases, eg DNA_BITMASK_A|DNA_BITMASK_C
#[derive(Debug, Copy, Clone, PartialEq, Hash)]
pub struct IupacCode(u8);

impl IupacCode {
    pub fn new(bitmask: u8) -> Self {
        Self(bitmask & DNA_BITMASK_N)
    }

    #[inline(always)]
    pub fn from_letter(letter: u8) -> Self {
        match letter.to_ascii_uppercase() {
            b'A' => Self(DNA_BITMASK_A),
            b'C' => Self(DNA_BITMASK_C),
            b'G' => Self(DNA_BITMASK_G),
            b'T' => Self(DNA_BITMASK_T),
            b'U' => Self(DNA_BITMASK_T),
            b'W' => Self(DNA_BITMASK_A | DNA_BITMASK_T),
            b'S' => Self(DNA_BITMASK_C | DNA_BITMASK_G),
            b'M' => Self(DNA_BITMASK_A | DNA_BITMASK_C),
            b'K' => Self(DNA_BITMASK_G | DNA_BITMASK_T),
            b'R' => Self(DNA_BITMASK_A | DNA_BITMASK_G),
            b'Y' => Self(DNA_BITMASK_C | DNA_BITMASK_T),
            b'B' => Self(DNA_BITMASK_C | DNA_BITMASK_G | DNA_BITMASK_T),
            b'D' => Self(DNA_BITMASK_A | DNA_BITMASK_G | DNA_BITMASK_T),
            b'H' => Self(DNA_BITMASK_A | DNA_BITMASK_C | DNA_BITMASK_T),
            b'V' => Self(DNA_BITMASK_A | DNA_BITMASK_C | DNA_BITMASK_G),
            b'N' => Self(DNA_BITMASK_N),
            _ => Self(0),
        }
    }

    /// Lowercase IUPAC letter for this code, `None` for the empty code.
    #[inline(always)]
    pub fn to_letter(self) -> Option<u8> {
        let letter = match self.0 {
            DNA_BITMASK_A => b'a',
            DNA_BITMASK_C => b'c',
            DNA_BITMASK_G => b'g',
            DNA_BITMASK_T => b't',
            0b1001 => b'w',
            0b0110 => b's',
            0b0011 => b'm',
            0b1100 => b'k',
            0b0101 => b'r',
            0b1010 => b'y',
            0b1110 => b'b',
            0b1101 => b'd',
            0b1011 => b'h',
            0b0111 => b'v',
            DNA_BITMASK_N => b'n',
            _ => return None,
        };
        Some(letter)
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Swaps A with T and C with G in every base the code stands for.
    #[inline(always)]
    pub fn complement(self) -> Self {
        let b = self.0;
        Self::new(
            ((b & DNA_BITMASK_A) << 3)
                | ((b & DNA_BITMASK_T) >> 3)
                | ((b & DNA_BITMASK_C) << 1)
                | ((b & DNA_BITMASK_G) >> 1),
        )
    }

    #[inline(always)]
    pub fn is_valid_letter(letter: u8) -> bool {
        matches!(
            letter,
            b'A' | b'C'
                | b'G'
                | b'T'
                | b'U'
                | b'W'
                | b'S'
                | b'M'
                | b'K'
                | b'R'
                | b'Y'
                | b'B'
                | b'D'
                | b'H'
                | b'V'
                | b'N'
                | b'a'
                | b'c'
                | b'g'
                | b't'
                | b'u'
                | b'w'
                | b's'
                | b'm'
                | b'k'
                | b'r'
                | b'y'
                | b'b'
                | b'd'
                | b'h'
                | b'v'
                | b'n'
        )
    }

    /// Complementary letter in the same case as `letter`, or `b' '` if
    /// `letter` is not a nucleotide.
    #[inline(always)]
    pub fn letter_complement(letter: u8) -> u8 {
        match IupacCode::from_letter(letter).complement().to_letter() {
            Some(c) if letter.is_ascii_uppercase() => c.to_ascii_uppercase(),
            Some(c) => c,
            None => b' ',
        }
    }
}

/// Base-for-base complement of a strand, read in the same direction as the
/// input. The result always has the same length as the input.
pub trait StrandComplement {
    fn complement(&self, strand: &str) -> String;

    fn reverse_complement(&self, strand: &str) -> String {
        self.complement(strand).chars().rev().collect()
    }
}

/// Complements every IUPAC letter, ambiguity codes included.
#[derive(Clone, Copy, Debug, Default)]
pub struct IupacComplement;

impl StrandComplement for IupacComplement {
    fn complement(&self, strand: &str) -> String {
        strand
            .chars()
            .map(|c| {
                if c.is_ascii() {
                    IupacCode::letter_complement(c as u8) as char
                } else {
                    ' '
                }
            })
            .collect()
    }
}
