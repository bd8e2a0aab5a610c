use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use encoding_rs::Encoding;
use log::{debug, info, warn};
use serde::Serialize;

use crctab::catalog::{self, PRESETS};
use crctab::{AnyParamSet, CrcConfig, Variant};

#[derive(Parser)]
#[command(name = "crctab")]
#[command(about = "Compute table-driven CRC checksums of files, text or stdin")]
struct Cli {
    /// Named CRC standard (see --list)
    #[arg(short = 'p', long, value_name = "NAME", conflicts_with_all = ["config", "width"])]
    preset: Option<String>,

    /// TOML file with width, polynomial, initial, variant and xor_out
    #[arg(short = 'c', long, value_name = "FILE", conflicts_with = "width")]
    config: Option<PathBuf>,

    /// Register width in bits: 8, 16 or 32
    #[arg(short = 'w', long, requires = "poly")]
    width: Option<u32>,

    /// Generator polynomial in normal notation, decimal or 0x-prefixed hex
    #[arg(long, value_name = "POLY", value_parser = parse_number, requires = "width")]
    poly: Option<u64>,

    /// Initial register value
    #[arg(long, value_name = "INIT", value_parser = parse_number, requires = "width")]
    init: Option<u64>,

    /// Bit order: forward or reflected
    #[arg(long, requires = "width")]
    variant: Option<Variant>,

    /// Value XORed into the final register
    #[arg(long, value_name = "XOR", value_parser = parse_number, requires = "width")]
    xor_out: Option<u64>,

    /// Checksum this string instead of files
    #[arg(short = 't', long, conflicts_with = "files")]
    text: Option<String>,

    /// Encoding label used for --text
    #[arg(short = 'e', long, default_value = "utf-8")]
    encoding: String,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// List known presets and exit
    #[arg(long)]
    list: bool,

    /// Dump the lookup table and exit
    #[arg(long)]
    table: bool,

    /// Files to checksum; reads stdin when none are given
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

#[derive(Serialize)]
struct Record {
    name: String,
    crc: String,
    value: u32,
    bytes: u64,
}

fn setup_logger() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", concat!(env!("CARGO_PKG_NAME"), "=warn"));
    }
    pretty_env_logger::init();
}

fn main() -> Result<()> {
    setup_logger();
    let cli = Cli::parse();

    if cli.list {
        return list_presets(cli.json);
    }

    let (label, config) = resolve_config(&cli)?;
    let set = config.build().context("Invalid CRC parameters")?;
    info!(
        "using {label}: width {}, polynomial {:#x}, initial {:#x}, {}, xor_out {:#x}",
        config.width, config.polynomial, config.initial, config.variant, config.xor_out
    );

    if cli.table {
        print_table(&set);
        return Ok(());
    }

    let records = if let Some(text) = &cli.text {
        vec![checksum_text(&set, text, &cli.encoding)?]
    } else if cli.files.is_empty() {
        let (value, bytes) = set
            .compute_reader(io::stdin().lock())
            .context("Failed to read stdin")?;
        vec![record(&set, "-".to_string(), value, bytes)]
    } else {
        cli.files
            .iter()
            .map(|path| checksum_file(&set, path))
            .collect::<Result<Vec<_>>>()?
    };

    if cli.json {
        let json = serde_json::to_string_pretty(&records).context("Failed to serialize to JSON")?;
        println!("{json}");
    } else {
        for r in &records {
            println!("{}  {}", r.crc, r.name);
        }
    }
    Ok(())
}

fn parse_number(s: &str) -> Result<u64> {
    let s = s.trim().replace('_', "");
    let value = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse(),
    };
    value.with_context(|| format!("Invalid number {s:?}"))
}

fn resolve_config(cli: &Cli) -> Result<(String, CrcConfig)> {
    if let Some(name) = &cli.preset {
        let preset = catalog::find(name)
            .with_context(|| format!("Unknown preset {name:?}, see --list"))?;
        Ok((preset.name.to_string(), CrcConfig::from(preset)))
    } else if let Some(path) = &cli.config {
        let config = CrcConfig::load(path)?;
        Ok((path.display().to_string(), config))
    } else if let Some(width) = cli.width {
        let polynomial = cli.poly.context("--poly is required with --width")?;
        let config = CrcConfig {
            width,
            polynomial,
            initial: cli.init.unwrap_or(0),
            variant: cli.variant.unwrap_or_default(),
            xor_out: cli.xor_out.unwrap_or(0),
        };
        Ok(("custom".to_string(), config))
    } else {
        bail!("No CRC parameters given, use --preset, --config or --width/--poly");
    }
}

fn checksum_text(set: &AnyParamSet, text: &str, label: &str) -> Result<Record> {
    let encoding = Encoding::for_label(label.as_bytes())
        .with_context(|| format!("Unknown encoding {label:?}"))?;
    let (bytes, used, had_errors) = encoding.encode(text);
    if used != encoding {
        warn!("{} cannot be used for output, encoded as {}", encoding.name(), used.name());
    }
    if had_errors {
        warn!("Some characters are not representable in {}", used.name());
    }
    debug!("encoded text as {} bytes of {}", bytes.len(), used.name());
    let value = set.compute(&bytes);
    Ok(record(set, format!("{text:?}"), value, bytes.len() as u64))
}

fn checksum_file(set: &AnyParamSet, path: &PathBuf) -> Result<Record> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let (value, bytes) = set
        .compute_reader(BufReader::new(file))
        .with_context(|| format!("Failed to read {}", path.display()))?;
    debug!("{}: {bytes} bytes", path.display());
    Ok(record(set, path.display().to_string(), value, bytes))
}

fn record(set: &AnyParamSet, name: String, value: u32, bytes: u64) -> Record {
    Record {
        name,
        crc: format!("{:0width$x}", value, width = set.hex_digits()),
        value,
        bytes,
    }
}

fn print_table(set: &AnyParamSet) {
    let digits = set.hex_digits();
    for row in set.table_entries().chunks(8) {
        let line: Vec<String> = row.iter().map(|e| format!("0x{:0digits$X}", e)).collect();
        println!("{}", line.join(", "));
    }
}

fn list_presets(json: bool) -> Result<()> {
    if json {
        let json = serde_json::to_string_pretty(PRESETS).context("Failed to serialize to JSON")?;
        println!("{json}");
        return Ok(());
    }
    for p in PRESETS {
        let digits = p.width as usize / 4;
        println!(
            "{:<18} width={:<2} poly=0x{:0d$X} init=0x{:0d$X} {:<9} xorout=0x{:0d$X} check=0x{:0d$X}",
            p.name,
            p.width,
            p.polynomial,
            p.initial,
            p.variant.as_str(),
            p.xor_out,
            p.check,
            d = digits
        );
    }
    Ok(())
}
