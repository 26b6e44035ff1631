mod codec;
mod config;
mod error;
mod unicode;
mod vle;

use std::ffi::OsString;
use std::path::Path;

use itertools::Itertools;

pub use codec::{
    decode, decode_to_text, decode_to_text_with, decode_to_utf8_bytes, decode_with, encode,
    encode_from_text, encode_from_utf8_bytes, encode_strict, encode_with, encoded_len, Decoded,
};
pub use config::{CodecConfig, OrphanPrefix};
pub use error::{EncodingFault, LzyError};
pub use unicode::{is_valid_codepoint, SURROGATE_MAX, SURROGATE_MIN, UNICODE_MAX};
pub use vle::lzy_sequence::{is_continuation_byte, is_lead_byte, Width};

const DEMO_TEXT: &str = "Hello 世界！LZY编码测试 ✍️";
const USAGE: &str = "Usage: lzy [--strict] <encode INPUT OUTPUT | decode INPUT OUTPUT | check [files] | demo>";

pub fn lzy(argv: Vec<OsString>) -> Result<(), Box<dyn std::error::Error>> {
    let (flags, argv): (Vec<OsString>, Vec<OsString>) =
        argv.into_iter().partition(|argument| argument == "--strict");
    let config = if flags.is_empty() {
        CodecConfig::default()
    } else {
        CodecConfig::strict()
    };
    let Some((command, arguments)) = argv.split_first() else {
        eprintln!("Not enough arguments. {USAGE}");
        return Err(std::io::Error::from(std::io::ErrorKind::InvalidInput).into());
    };
    match (&*command.to_string_lossy(), arguments) {
        ("encode", [input, output]) => encode_file(input, output, &config),
        ("decode", [input, output]) => decode_file(input, output, &config),
        ("check", files) if !files.is_empty() => {
            for file in files {
                println!("{}: {}", file.to_string_lossy(), check_file(file, &config));
            }
            Ok(())
        }
        ("demo", []) => demo(),
        _ => {
            eprintln!("{USAGE}");
            Err(std::io::Error::from(std::io::ErrorKind::InvalidInput).into())
        }
    }
}

fn encode_file(
    input: &OsString,
    output: &OsString,
    config: &CodecConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read(Path::new(input))?;
    let code_points: Vec<u32> = std::str::from_utf8(&text)?.chars().map(u32::from).collect();
    let encoded = encode_with(&code_points, config)?;
    std::fs::write(Path::new(output), &encoded)?;
    println!(
        "{}: {} bytes UTF-8 -> {} bytes LZY",
        input.to_string_lossy(),
        text.len(),
        encoded.len()
    );
    Ok(())
}

fn decode_file(
    input: &OsString,
    output: &OsString,
    config: &CodecConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let encoded = std::fs::read(Path::new(input))?;
    let text = decode_to_text_with(&encoded, config)?;
    std::fs::write(Path::new(output), text.as_bytes())?;
    println!(
        "{}: {} bytes LZY -> {} bytes UTF-8",
        input.to_string_lossy(),
        encoded.len(),
        text.len()
    );
    Ok(())
}

fn check_file(path: &OsString, config: &CodecConfig) -> String {
    match std::fs::read(Path::new(path)) {
        Ok(file) if file.is_empty() => String::from("empty"),
        Ok(file) => match decode_with(&file, config) {
            Ok(Decoded {
                code_points,
                discarded: 0,
            }) => format!("LZY text, {} code points", code_points.len()),
            Ok(Decoded {
                code_points,
                discarded,
            }) => format!(
                "LZY text, {} code points ({discarded} orphaned bytes skipped)",
                code_points.len()
            ),
            Err(error) => error.to_string(),
        },
        Err(error) => error.to_string(),
    }
}

fn demo() -> Result<(), Box<dyn std::error::Error>> {
    println!("text: {DEMO_TEXT}");
    let encoded = encode_from_text(DEMO_TEXT);
    println!("lzy:  {}", hex(&encoded));
    let decoded = decode_to_text(&encoded)?;
    println!("back: {decoded}");
    if decoded != DEMO_TEXT {
        return Err("text round trip mismatch".into());
    }

    let encoded = encode_from_utf8_bytes(DEMO_TEXT.as_bytes())?;
    if decode_to_utf8_bytes(&encoded)? != DEMO_TEXT.as_bytes() {
        return Err("UTF-8 round trip mismatch".into());
    }
    println!(
        "{} bytes UTF-8, {} bytes LZY",
        DEMO_TEXT.len(),
        encoded.len()
    );
    Ok(())
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02X}")).join(" ")
}
