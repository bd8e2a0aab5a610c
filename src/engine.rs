//! Folding bytes into a running CRC register.
//!
//! None of these functions validate the table against the variant; passing a
//! table built for the other variant yields a well-defined but wrong result.

use std::io::{self, ErrorKind, Read};

use crate::table::{Table, Variant};
use crate::width::Width;

/// Read size used by [`update_reader`].
pub const CHUNK_LEN: usize = 64 * 1024;

#[inline]
pub fn update_forward<W: Width>(table: &Table<W>, byte: u8, crc: W) -> W {
    let index = byte ^ crc.shr(W::BITS - 8).low_byte();
    table[index as usize] ^ crc.shl(8)
}

#[inline]
pub fn update_reflected<W: Width>(table: &Table<W>, byte: u8, crc: W) -> W {
    let index = byte ^ crc.low_byte();
    table[index as usize] ^ crc.shr(8)
}

/// Folds a single byte into `crc`.
#[inline]
pub fn update<W: Width>(table: &Table<W>, variant: Variant, byte: u8, crc: W) -> W {
    match variant {
        Variant::Forward => update_forward(table, byte, crc),
        Variant::Reflected => update_reflected(table, byte, crc),
    }
}

/// Folds `data` into `crc`, left to right. The result can be passed back in
/// as `crc` to continue over the next chunk of a stream.
pub fn update_buffer<W: Width>(table: &Table<W>, variant: Variant, crc: W, data: &[u8]) -> W {
    // Dispatch once per buffer instead of once per byte.
    match variant {
        Variant::Forward => data.iter().fold(crc, |crc, &b| update_forward(table, b, crc)),
        Variant::Reflected => data.iter().fold(crc, |crc, &b| update_reflected(table, b, crc)),
    }
}

/// Reads `reader` to the end in [`CHUNK_LEN`] pieces, folding every chunk
/// into `crc`. Returns the final register and the number of bytes read.
pub fn update_reader<W: Width, R: Read>(
    table: &Table<W>,
    variant: Variant,
    mut crc: W,
    mut reader: R,
) -> io::Result<(W, u64)> {
    let mut buffer = vec![0u8; CHUNK_LEN];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        crc = update_buffer(table, variant, crc, &buffer[..n]);
        total += n as u64;
    }
    Ok((crc, total))
}
