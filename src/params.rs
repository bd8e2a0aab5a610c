use std::io::{self, Read, Write};

use log::debug;

use crate::engine;
use crate::table::{self, Table, Variant};
use crate::width::Width;

/// One concrete CRC standard: a lookup table bound to the variant it was
/// built for, the register seed and the value XORed into the final result.
///
/// The table is never mutated after construction, so a single set can be
/// shared by reference across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamSet<W: Width> {
    table: Table<W>,
    initial: W,
    xor_out: W,
    variant: Variant,
}

impl<W: Width> ParamSet<W> {
    /// Builds the table for `polynomial` (normal notation) under `variant`.
    pub fn new(polynomial: W, initial: W, variant: Variant) -> Self {
        debug!(
            "building {}-bit {variant} table for polynomial {polynomial:#x}, initial {initial:#x}",
            W::BITS
        );
        Self {
            table: table::build(polynomial, variant),
            initial,
            xor_out: W::ZERO,
            variant,
        }
    }

    pub fn with_xor_out(mut self, xor_out: W) -> Self {
        self.xor_out = xor_out;
        self
    }

    pub fn width(&self) -> u32 {
        W::BITS
    }

    pub fn table(&self) -> &Table<W> {
        &self.table
    }

    pub fn initial(&self) -> W {
        self.initial
    }

    pub fn xor_out(&self) -> W {
        self.xor_out
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[inline]
    pub fn update(&self, byte: u8, crc: W) -> W {
        engine::update(&self.table, self.variant, byte, crc)
    }

    pub fn update_buffer(&self, crc: W, data: &[u8]) -> W {
        engine::update_buffer(&self.table, self.variant, crc, data)
    }

    pub fn update_reader<R: Read>(&self, crc: W, reader: R) -> io::Result<(W, u64)> {
        engine::update_reader(&self.table, self.variant, crc, reader)
    }

    /// Applies the final XOR to a running register.
    pub fn finalize(&self, crc: W) -> W {
        crc ^ self.xor_out
    }

    /// Checksums `data` from a fresh register.
    pub fn compute(&self, data: &[u8]) -> W {
        self.finalize(self.update_buffer(self.initial, data))
    }

    pub fn digest(&self) -> Digest<'_, W> {
        Digest {
            params: self,
            crc: self.initial,
        }
    }
}

/// A running checksum borrowing its parameter set.
#[derive(Clone, Debug)]
pub struct Digest<'a, W: Width> {
    params: &'a ParamSet<W>,
    crc: W,
}

impl<W: Width> Digest<'_, W> {
    pub fn update(&mut self, data: &[u8]) {
        self.crc = self.params.update_buffer(self.crc, data);
    }

    /// The raw register, suitable for resuming with [`ParamSet::update_buffer`].
    pub fn value(&self) -> W {
        self.crc
    }

    pub fn finalize(&self) -> W {
        self.params.finalize(self.crc)
    }

    pub fn reset(&mut self) {
        self.crc = self.params.initial;
    }
}

impl<W: Width> Write for Digest<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crc32_check_value() {
        let crc32 = ParamSet::new(0x04C1_1DB7u32, 0xFFFF_FFFF, Variant::Reflected)
            .with_xor_out(0xFFFF_FFFF);
        assert_eq!(crc32.compute(b"123456789"), 0xCBF4_3926);
        assert_eq!(crc32.width(), 32);
    }

    #[test]
    fn compute_without_xor_out_is_update_buffer() {
        let set = ParamSet::new(0x1021u16, 0xFFFF, Variant::Forward);
        assert_eq!(set.compute(b"123456789"), 0x29B1);
        assert_eq!(
            set.compute(b"123456789"),
            engine::update_buffer(set.table(), set.variant(), set.initial(), b"123456789")
        );
    }

    #[test]
    fn digest_streams_and_resets() {
        let set = ParamSet::new(0x04C1_1DB7u32, 0xFFFF_FFFF, Variant::Reflected)
            .with_xor_out(0xFFFF_FFFF);
        let mut digest = set.digest();
        digest.update(b"1234");
        digest.update(b"");
        digest.update(b"56789");
        assert_eq!(digest.finalize(), 0xCBF4_3926);
        assert_eq!(digest.value(), 0x340B_C6D9);

        digest.reset();
        assert_eq!(digest.value(), set.initial());
    }

    #[test]
    fn digest_as_writer() {
        let set = ParamSet::new(0x1021u16, 0xFFFF, Variant::Forward);
        let mut digest = set.digest();
        io::copy(&mut &b"123456789"[..], &mut digest).unwrap();
        assert_eq!(digest.finalize(), 0x29B1);
    }
}
