//! codec-inspect - Byte buffer inspection tool
//!
//! Decodes typed values out of hex input, encodes values back to hex and
//! renders buffers in the supported text forms. Word order and encodings come
//! from a config file, `CODEC_*` environment variables or flags.

mod config;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use byte_codec::bytes::{pack_bools, to_bool_array};
use byte_codec::text::{
    from_hex_string, to_ascii_string, to_base64_string, to_bin_string, to_hex_string,
    xor_checksum,
};
use byte_codec::{decode_value, decode_values, CodecOptions, DataType, Endianness, TextEncoding};
use clap::{Parser, Subcommand};
use colored::*;
use tracing::debug;

use crate::config::{load_options, Overrides};

#[derive(Parser)]
#[command(name = "codec-inspect")]
#[command(about = "Decode, encode and render byte buffers")]
#[command(long_about = "Decode, encode and render byte buffers

Examples:
  codec-inspect decode 12345678 --type int32 --endian CDAB
  codec-inspect decode 0001000200030004 --type uint16 --count 4 --reverse16
  codec-inspect encode -273.15 --type double --endian DCBA
  codec-inspect bits aa --length 8
  codec-inspect render 48656c6c6f")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Config file (YAML, TOML or JSON)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Word order for 32/64-bit values: ABCD, BADC, CDAB, DCBA
    #[arg(short = 'e', long = "endian", global = true)]
    endian: Option<Endianness>,

    /// Swap the raw bytes of 16-bit values
    #[arg(long = "reverse16", global = true)]
    reverse16: bool,

    /// Text encoding for string values: utf-8, ascii, latin1, utf-16le, utf-16be
    #[arg(long, global = true)]
    encoding: Option<TextEncoding>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode values from hex input
    Decode {
        /// Input bytes as hex (whitespace ignored)
        hex: String,

        /// Value type: bool, byte, int16, uint16, int32, uint32, int64, uint64, float, double, string
        #[arg(short = 't', long = "type")]
        data_type: DataType,

        /// Byte offset of the first value
        #[arg(short, long, default_value_t = 0)]
        index: usize,

        /// Number of consecutive values (must be 1 for strings)
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Print values as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Encode a value and print it as hex
    Encode {
        /// Value text, parsed according to --type
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Value type
        #[arg(short = 't', long = "type")]
        data_type: DataType,
    },

    /// Extract bits MSB-first and print them as 0/1
    Bits {
        /// Input bytes as hex
        hex: String,

        /// Byte offset of the first bit
        #[arg(short, long, default_value_t = 0)]
        index: usize,

        /// Number of bits
        #[arg(short, long)]
        length: usize,

        /// Reverse the byte run before unpacking
        #[arg(short, long)]
        reverse: bool,
    },

    /// Pack a 0/1 string MSB-first into bytes
    Pack {
        /// Bits as '0'/'1' characters (whitespace ignored)
        bits: String,

        /// Reverse the packed byte run
        #[arg(short, long)]
        reverse: bool,
    },

    /// Print hex, base64, binary and ASCII renderings plus the XOR checksum
    Render {
        /// Input bytes as hex
        hex: String,
    },
}

fn parse_hex_input(input: &str) -> Result<Vec<u8>> {
    let compact: String = input.split_whitespace().collect();
    let digits = compact
        .strip_prefix("0x")
        .or_else(|| compact.strip_prefix("0X"))
        .unwrap_or(&compact);
    from_hex_string(digits).with_context(|| format!("Invalid hex input '{}'", input))
}

fn parse_bit_input(input: &str) -> Result<Vec<bool>> {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => bail!("Invalid bit character '{}'", other),
        })
        .collect()
}

fn decode_output(
    buffer: &[u8],
    data_type: DataType,
    index: usize,
    count: usize,
    json: bool,
    options: &CodecOptions,
) -> Result<String> {
    let values = if data_type == DataType::String {
        if count != 1 {
            bail!("--count must be 1 for string values, got {}", count);
        }
        vec![decode_value(buffer, index, data_type, options)?]
    } else {
        decode_values(buffer, index, data_type, count, options)?
    };
    debug!(count = values.len(), %data_type, "decoded values");

    if json {
        return Ok(serde_json::to_string(&values)?);
    }
    let lines: Vec<String> = values.iter().map(ToString::to_string).collect();
    Ok(lines.join("\n"))
}

fn encode_output(value: &str, data_type: DataType, options: &CodecOptions) -> Result<String> {
    let bytes = data_type.parse_value(value)?.to_bytes(options)?;
    Ok(to_hex_string(&bytes))
}

fn bits_output(buffer: &[u8], index: usize, length: usize, reverse: bool) -> Result<String> {
    Ok(to_bool_array(buffer, index, length, reverse)?
        .into_iter()
        .map(|bit| if bit { '1' } else { '0' })
        .collect())
}

fn pack_output(bits: &str, reverse: bool) -> Result<String> {
    let bits = parse_bit_input(bits)?;
    Ok(to_hex_string(&pack_bools(&bits, reverse)))
}

fn render_output(buffer: &[u8]) -> String {
    [
        format!("{} {}", "hex:   ".bright_cyan(), to_hex_string(buffer)),
        format!("{} {}", "base64:".bright_cyan(), to_base64_string(buffer)),
        format!("{} {}", "binary:".bright_cyan(), to_bin_string(buffer)),
        format!("{} {}", "ascii: ".bright_cyan(), to_ascii_string(buffer)),
        format!("{} 0x{:02x}", "xor:   ".bright_cyan(), xor_checksum(buffer)),
    ]
    .join("\n")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure colored output
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let overrides = Overrides {
        endianness: cli.endian,
        reverse_16: cli.reverse16.then_some(true),
        encoding: cli.encoding,
    };
    let options = load_options(cli.config.as_deref(), &overrides)?;

    let output = match cli.command {
        Commands::Decode {
            hex,
            data_type,
            index,
            count,
            json,
        } => {
            let buffer = parse_hex_input(&hex)?;
            decode_output(&buffer, data_type, index, count, json, &options)?
        },
        Commands::Encode { value, data_type } => encode_output(&value, data_type, &options)?,
        Commands::Bits {
            hex,
            index,
            length,
            reverse,
        } => {
            let buffer = parse_hex_input(&hex)?;
            bits_output(&buffer, index, length, reverse)?
        },
        Commands::Pack { bits, reverse } => pack_output(&bits, reverse)?,
        Commands::Render { hex } => render_output(&parse_hex_input(&hex)?),
    };
    println!("{}", output);

    Ok(())
}
