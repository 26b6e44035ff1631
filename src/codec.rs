use itertools::Itertools;
use tracing::{trace, warn};

use crate::config::{CodecConfig, OrphanPrefix};
use crate::error::{EncodingFault, LzyError};
use crate::unicode::is_valid_codepoint;
use crate::vle::lzy_sequence::{LzySequence, Width};
use crate::vle::VariableLengthEncoding;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    pub code_points: Vec<u32>,
    pub discarded: usize,
}

pub fn encoded_len(input: &[u32]) -> usize {
    input.iter().map(|&codepoint| Width::of(codepoint).byte_len()).sum()
}

/// No validity check; see `encode_strict`.
pub fn encode(input: &[u32]) -> Vec<u8> {
    let mut output = Vec::with_capacity(encoded_len(input));
    write_runs(input.iter().copied(), &mut output);
    trace!(code_points = input.len(), bytes = output.len(), "lzy encode");
    output
}

pub fn encode_strict(input: &[u32]) -> Result<Vec<u8>, LzyError> {
    encode_with(input, &CodecConfig::default().with_validate_input(true))
}

pub fn encode_with(input: &[u32], config: &CodecConfig) -> Result<Vec<u8>, LzyError> {
    if config.validate_input {
        if let Some((offset, &code_point)) = input
            .iter()
            .find_position(|&&codepoint| !is_valid_codepoint(codepoint))
        {
            return Err(LzyError::InvalidCodePoint { code_point, offset });
        }
    }
    Ok(encode(input))
}

pub fn encode_from_text(text: &str) -> Vec<u8> {
    let mut output = Vec::with_capacity(text.len());
    write_runs(text.chars().map(u32::from), &mut output);
    trace!(utf8_bytes = text.len(), bytes = output.len(), "lzy encode text");
    output
}

pub fn encode_from_utf8_bytes(input: &[u8]) -> Result<Vec<u8>, LzyError> {
    Ok(encode_from_text(std::str::from_utf8(input)?))
}

pub fn decode(input: &[u8]) -> Result<Vec<u32>, LzyError> {
    decode_with(input, &CodecConfig::default()).map(|decoded| decoded.code_points)
}

pub fn decode_with(input: &[u8], config: &CodecConfig) -> Result<Decoded, LzyError> {
    let mut code_points = Vec::with_capacity(input.len());
    let discarded = decode_runs(input, config, |sequence| {
        code_points.push(sequence.get_codepoint())
    })?;
    Ok(Decoded {
        code_points,
        discarded,
    })
}

pub fn decode_to_text(input: &[u8]) -> Result<String, LzyError> {
    decode_to_text_with(input, &CodecConfig::default())
}

pub fn decode_to_text_with(input: &[u8], config: &CodecConfig) -> Result<String, LzyError> {
    let mut text = String::with_capacity(input.len());
    decode_runs(input, config, |sequence| text.extend(sequence.to_char()))?;
    Ok(text)
}

pub fn decode_to_utf8_bytes(input: &[u8]) -> Result<Vec<u8>, LzyError> {
    decode_to_text(input).map(String::into_bytes)
}

#[inline]
fn write_runs(code_points: impl Iterator<Item = u32>, output: &mut Vec<u8>) {
    for codepoint in code_points {
        Width::of(codepoint).write(codepoint, output);
    }
}

// returns the number of orphaned prefix bytes skipped
fn decode_runs<F>(input: &[u8], config: &CodecConfig, mut sink: F) -> Result<usize, LzyError>
where
    F: FnMut(&LzySequence),
{
    if input.is_empty() {
        return Err(EncodingFault::Empty.into());
    }
    let (start, mut sequence) = input
        .iter()
        .enumerate()
        .find_map(|(index, &byte)| LzySequence::build(byte).map(|sequence| (index, sequence)))
        .ok_or(EncodingFault::NoLeadByte)?;
    if start > 0 {
        match config.orphan_prefix {
            OrphanPrefix::Discard => {
                warn!(discarded = start, "dropping orphaned LZY continuation bytes")
            }
            OrphanPrefix::Reject => {
                return Err(EncodingFault::OrphanPrefix { len: start }.into());
            }
        }
    }

    let mut lead = start;
    for (offset, &byte) in input.iter().enumerate().skip(start + 1) {
        match LzySequence::build(byte) {
            Some(next) => {
                emit(&sequence, lead, &mut sink)?;
                sequence = next;
                lead = offset;
            }
            None => {
                if !sequence.add_point(byte) {
                    return Err(EncodingFault::Overflow { offset }.into());
                }
            }
        }
    }
    emit(&sequence, lead, &mut sink)?;
    trace!(bytes = input.len(), discarded = start, "lzy decode");
    Ok(start)
}

#[inline]
fn emit<F>(sequence: &LzySequence, lead: usize, sink: &mut F) -> Result<(), LzyError>
where
    F: FnMut(&LzySequence),
{
    if !sequence.is_valid() {
        return Err(LzyError::InvalidCodePoint {
            code_point: sequence.get_codepoint(),
            offset: lead,
        });
    }
    sink(sequence);
    Ok(())
}
