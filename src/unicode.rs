pub const SURROGATE_MIN: u32 = 0xD800;
pub const SURROGATE_MAX: u32 = 0xDFFF;
pub const UNICODE_MAX: u32 = 0x10FFFF;

/// True for every Unicode scalar value: `0..0xD800` and `0xE000..=0x10FFFF`.
#[inline]
pub const fn is_valid_codepoint(codepoint: u32) -> bool {
    codepoint < SURROGATE_MIN || (SURROGATE_MAX < codepoint && codepoint <= UNICODE_MAX)
}
