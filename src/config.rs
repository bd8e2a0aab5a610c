use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::catalog::Preset;
use crate::params::ParamSet;
use crate::table::Variant;
use crate::width::Width;

/// CRC parameters chosen at runtime, e.g. from a TOML file:
///
/// ```toml
/// width = 32
/// polynomial = 0x04C11DB7
/// initial = 0xFFFFFFFF
/// variant = "reflected"
/// xor_out = 0xFFFFFFFF
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrcConfig {
    pub width: u32,
    pub polynomial: u64,
    #[serde(default)]
    pub initial: u64,
    #[serde(default)]
    pub variant: Variant,
    #[serde(default)]
    pub xor_out: u64,
}

impl CrcConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))
    }

    /// Builds the parameter set for the configured width.
    pub fn build(&self) -> Result<AnyParamSet> {
        Ok(match self.width {
            8 => AnyParamSet::W8(self.build_width()),
            16 => AnyParamSet::W16(self.build_width()),
            32 => AnyParamSet::W32(self.build_width()),
            w => bail!("Unsupported CRC width {w}, expected 8, 16 or 32"),
        })
    }

    fn build_width<W: Width>(&self) -> ParamSet<W> {
        let polynomial = truncated::<W>("polynomial", self.polynomial);
        let initial = truncated::<W>("initial", self.initial);
        let xor_out = truncated::<W>("xor_out", self.xor_out);
        ParamSet::new(polynomial, initial, self.variant).with_xor_out(xor_out)
    }
}

impl From<&Preset> for CrcConfig {
    fn from(preset: &Preset) -> Self {
        Self {
            width: preset.width,
            polynomial: preset.polynomial.into(),
            initial: preset.initial.into(),
            variant: preset.variant,
            xor_out: preset.xor_out.into(),
        }
    }
}

fn truncated<W: Width>(field: &str, value: u64) -> W {
    if !W::fits(value) {
        warn!(
            "{field} {value:#x} does not fit in {} bits, truncating to {:#x}",
            W::BITS,
            W::truncate(value)
        );
    }
    W::truncate(value)
}

/// A parameter set whose width is only known at runtime. Register values are
/// widened to `u32`.
#[derive(Clone, Debug)]
pub enum AnyParamSet {
    W8(ParamSet<u8>),
    W16(ParamSet<u16>),
    W32(ParamSet<u32>),
}

macro_rules! dispatch {
    ($self:expr, $set:ident => $body:expr) => {
        match $self {
            AnyParamSet::W8($set) => $body,
            AnyParamSet::W16($set) => $body,
            AnyParamSet::W32($set) => $body,
        }
    };
}

impl AnyParamSet {
    pub fn width(&self) -> u32 {
        dispatch!(self, set => set.width())
    }

    pub fn variant(&self) -> Variant {
        dispatch!(self, set => set.variant())
    }

    pub fn initial(&self) -> u32 {
        dispatch!(self, set => set.initial().to_u64() as u32)
    }

    pub fn update_buffer(&self, crc: u32, data: &[u8]) -> u32 {
        dispatch!(self, set => set.update_buffer(Width::truncate(crc.into()), data).to_u64() as u32)
    }

    /// Streams `reader` from a fresh register and returns the finalized
    /// checksum along with the byte count.
    pub fn compute_reader<R: Read>(&self, reader: R) -> io::Result<(u32, u64)> {
        dispatch!(self, set => {
            let (crc, len) = set.update_reader(set.initial(), reader)?;
            Ok((set.finalize(crc).to_u64() as u32, len))
        })
    }

    pub fn finalize(&self, crc: u32) -> u32 {
        dispatch!(self, set => set.finalize(Width::truncate(crc.into())).to_u64() as u32)
    }

    pub fn compute(&self, data: &[u8]) -> u32 {
        dispatch!(self, set => set.compute(data).to_u64() as u32)
    }

    pub fn table_entries(&self) -> Vec<u32> {
        dispatch!(self, set => set.table().iter().map(|e| e.to_u64() as u32).collect())
    }

    /// Number of hex digits needed to print a register.
    pub fn hex_digits(&self) -> usize {
        self.width() as usize / 4
    }
}
