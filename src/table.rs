//! Lookup table generation.
//!
//! A table holds, for every possible input byte, the remainder of dividing
//! that byte (aligned to the register) by the generator polynomial over
//! GF(2). Forward and reflected tables are built by two separate loops and
//! are not interchangeable: a table must be consumed by the update function
//! of the variant it was built for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::width::Width;

/// A 256-entry lookup table, indexed by input byte.
pub type Table<W> = [W; 256];

/// Bit ordering convention of a CRC standard.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// MSB-first, polynomial used as given.
    #[default]
    Forward,
    /// LSB-first, operating on the bit-reversed polynomial.
    Reflected,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Forward => "forward",
            Variant::Reflected => "reflected",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "forward" | "normal" | "msb" => Ok(Variant::Forward),
            "reflected" | "reflect" | "lsb" => Ok(Variant::Reflected),
            _ => anyhow::bail!("unknown variant {s:?}, expected \"forward\" or \"reflected\""),
        }
    }
}

/// Builds an MSB-first table for `polynomial`.
pub fn build_forward<W: Width>(polynomial: W) -> Table<W> {
    let mut table = [W::ZERO; 256];
    for (byte, entry) in table.iter_mut().enumerate() {
        let mut remainder = W::from_byte(byte as u8).shl(W::BITS - 8);
        for _ in 0..8 {
            if remainder.top_bit() {
                remainder = remainder.shl(1) ^ polynomial;
            } else {
                remainder = remainder.shl(1);
            }
        }
        *entry = remainder;
    }
    table
}

/// Builds an LSB-first table. `polynomial` is given in normal notation and
/// is bit-reversed before use.
pub fn build_reflected<W: Width>(polynomial: W) -> Table<W> {
    let polynomial = polynomial.reflect();
    let mut table = [W::ZERO; 256];
    for (byte, entry) in table.iter_mut().enumerate() {
        let mut remainder = W::from_byte(byte as u8);
        for _ in 0..8 {
            if remainder.low_bit() {
                remainder = remainder.shr(1) ^ polynomial;
            } else {
                remainder = remainder.shr(1);
            }
        }
        *entry = remainder;
    }
    table
}

pub fn build<W: Width>(polynomial: W, variant: Variant) -> Table<W> {
    match variant {
        Variant::Forward => build_forward(polynomial),
        Variant::Reflected => build_reflected(polynomial),
    }
}
