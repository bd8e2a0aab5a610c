//! Table-driven CRC computation for 8, 16 and 32 bit registers.
//!
//! A [`ParamSet`] bundles a 256-entry lookup table with the initial register
//! value and the bit ordering ([`Variant`]) the table was built for. Once
//! built it is immutable and can be shared freely between threads.
//!
//! ```
//! use crctab::{ParamSet, Variant};
//!
//! let crc32 = ParamSet::new(0x04C1_1DB7u32, 0xFFFF_FFFF, Variant::Reflected).with_xor_out(0xFFFF_FFFF);
//! assert_eq!(crc32.compute(b"123456789"), 0xCBF4_3926);
//!
//! let ccitt = ParamSet::new(0x1021u16, 0xFFFF, Variant::Forward);
//! let crc = ccitt.update_buffer(ccitt.initial(), b"1234");
//! let crc = ccitt.update_buffer(crc, b"56789");
//! assert_eq!(crc, 0x29B1);
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod params;
pub mod table;
pub mod width;

pub use catalog::Preset;
pub use config::{AnyParamSet, CrcConfig};
pub use engine::{update, update_buffer};
pub use params::{Digest, ParamSet};
pub use table::{build, Table, Variant};
pub use width::Width;

/// Checksums `data` from `set.initial()`, applying the set's final XOR.
pub fn compute<W: Width>(set: &ParamSet<W>, data: &[u8]) -> W {
    set.compute(data)
}
