use crate::unicode::{is_valid_codepoint, UNICODE_MAX};
use crate::vle::VariableLengthEncoding;

const TAG_BIT: u8 = 0b1000_0000;
const PAYLOAD_MASK: u8 = 0b0111_1111;
// any accumulator above this would pass UNICODE_MAX after one more fold
const FOLD_LIMIT: u32 = UNICODE_MAX >> 7;

#[inline]
pub const fn is_lead_byte(byte: u8) -> bool {
    byte & TAG_BIT == 0
}

#[inline]
pub const fn is_continuation_byte(byte: u8) -> bool {
    byte & TAG_BIT != 0
}

/// Run width the encoder picks for a code point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Width {
    One,
    Two,
    Three,
}

impl Width {
    #[inline]
    pub const fn of(codepoint: u32) -> Self {
        match codepoint {
            ..=0x7F => Width::One,
            0x80..=0x3FFF => Width::Two,
            _ => Width::Three,
        }
    }

    #[inline]
    pub const fn byte_len(self) -> usize {
        match self {
            Width::One => 1,
            Width::Two => 2,
            Width::Three => 3,
        }
    }

    /// Appends the run for `codepoint` to `output`.
    #[inline]
    pub(crate) fn write(self, codepoint: u32, output: &mut Vec<u8>) {
        match self {
            Width::One => output.push(codepoint as u8),
            Width::Two => {
                output.push((codepoint >> 7) as u8);
                output.push(TAG_BIT | (codepoint as u8 & PAYLOAD_MASK));
            }
            Width::Three => {
                output.push((codepoint >> 14) as u8);
                output.push(TAG_BIT | ((codepoint >> 7) as u8 & PAYLOAD_MASK));
                output.push(TAG_BIT | (codepoint as u8 & PAYLOAD_MASK));
            }
        }
    }
}

/// One LZY run being reassembled: a lead byte plus whatever continuation
/// bytes have been folded into it so far.
pub(crate) struct LzySequence {
    codepoint: u32,
}

impl VariableLengthEncoding for LzySequence {
    type Point = u8;
    type Codepoint = u32;

    #[inline]
    fn build(byte: Self::Point) -> Option<Self> {
        if !is_lead_byte(byte) {
            return None;
        }
        Some(Self {
            codepoint: byte as u32,
        })
    }

    #[inline]
    fn add_point(&mut self, point: Self::Point) -> bool {
        if is_lead_byte(point) || self.codepoint > FOLD_LIMIT {
            return false;
        }
        self.codepoint = (self.codepoint << 7) | (point & PAYLOAD_MASK) as u32;
        true
    }

    #[inline]
    fn get_codepoint(&self) -> Self::Codepoint {
        self.codepoint
    }

    #[inline]
    fn is_valid(&self) -> bool {
        is_valid_codepoint(self.codepoint)
    }
}

impl LzySequence {
    #[inline]
    pub fn to_char(&self) -> Option<char> {
        char::from_u32(self.codepoint)
    }
}
