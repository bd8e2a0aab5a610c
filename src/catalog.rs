//! Parameters of commonly used CRC standards.
//!
//! Polynomials are written in normal (MSB-first) notation for both variants.
//! `check` is the checksum of the ASCII string `"123456789"`.

use serde::Serialize;

use crate::table::Variant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub width: u32,
    pub polynomial: u32,
    pub initial: u32,
    pub variant: Variant,
    pub xor_out: u32,
    pub check: u32,
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "CRC-8/SMBUS",
        aliases: &["CRC-8"],
        width: 8,
        polynomial: 0x07,
        initial: 0x00,
        variant: Variant::Forward,
        xor_out: 0x00,
        check: 0xF4,
    },
    Preset {
        name: "CRC-8/MAXIM-DOW",
        aliases: &["CRC-8/MAXIM", "DOW-CRC"],
        width: 8,
        polynomial: 0x31,
        initial: 0x00,
        variant: Variant::Reflected,
        xor_out: 0x00,
        check: 0xA1,
    },
    Preset {
        name: "CRC-16/IBM-3740",
        aliases: &["CRC-16/CCITT-FALSE", "CRC-16/AUTOSAR"],
        width: 16,
        polynomial: 0x1021,
        initial: 0xFFFF,
        variant: Variant::Forward,
        xor_out: 0x0000,
        check: 0x29B1,
    },
    Preset {
        name: "CRC-16/XMODEM",
        aliases: &["CRC-16/ACORN", "CRC-16/LTE"],
        width: 16,
        polynomial: 0x1021,
        initial: 0x0000,
        variant: Variant::Forward,
        xor_out: 0x0000,
        check: 0x31C3,
    },
    Preset {
        name: "CRC-16/KERMIT",
        aliases: &["CRC-16/CCITT", "CRC-16/CCITT-TRUE"],
        width: 16,
        polynomial: 0x1021,
        initial: 0x0000,
        variant: Variant::Reflected,
        xor_out: 0x0000,
        check: 0x2189,
    },
    Preset {
        name: "CRC-16/ARC",
        aliases: &["CRC-16", "CRC-16/LHA"],
        width: 16,
        polynomial: 0x8005,
        initial: 0x0000,
        variant: Variant::Reflected,
        xor_out: 0x0000,
        check: 0xBB3D,
    },
    Preset {
        name: "CRC-16/MODBUS",
        aliases: &[],
        width: 16,
        polynomial: 0x8005,
        initial: 0xFFFF,
        variant: Variant::Reflected,
        xor_out: 0x0000,
        check: 0x4B37,
    },
    Preset {
        name: "CRC-32/ISO-HDLC",
        aliases: &["CRC-32", "CRC-32/ADCCP", "PKZIP"],
        width: 32,
        polynomial: 0x04C1_1DB7,
        initial: 0xFFFF_FFFF,
        variant: Variant::Reflected,
        xor_out: 0xFFFF_FFFF,
        check: 0xCBF4_3926,
    },
    Preset {
        name: "CRC-32/ISCSI",
        aliases: &["CRC-32C", "CRC-32/CASTAGNOLI"],
        width: 32,
        polynomial: 0x1EDC_6F41,
        initial: 0xFFFF_FFFF,
        variant: Variant::Reflected,
        xor_out: 0xFFFF_FFFF,
        check: 0xE306_9283,
    },
    Preset {
        name: "CRC-32/BZIP2",
        aliases: &["CRC-32/AAL5"],
        width: 32,
        polynomial: 0x04C1_1DB7,
        initial: 0xFFFF_FFFF,
        variant: Variant::Forward,
        xor_out: 0xFFFF_FFFF,
        check: 0xFC89_1918,
    },
    Preset {
        name: "CRC-32/MPEG-2",
        aliases: &[],
        width: 32,
        polynomial: 0x04C1_1DB7,
        initial: 0xFFFF_FFFF,
        variant: Variant::Forward,
        xor_out: 0x0000_0000,
        check: 0x0376_E6E7,
    },
];

/// Looks up a preset by name or alias, ignoring ASCII case.
pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| {
        p.name.eq_ignore_ascii_case(name) || p.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    })
}
