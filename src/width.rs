use std::fmt::{Debug, LowerHex, UpperHex};
use std::ops::BitXor;

mod sealed {
    pub trait Sealed {}
}

/// An unsigned integer usable as a CRC register.
///
/// Only `u8`, `u16` and `u32` implement this, so any other register width
/// is rejected at compile time. All shifts truncate to the register width,
/// including shifts by the full width (which yield zero instead of
/// overflowing).
pub trait Width:
    sealed::Sealed
    + Copy
    + Eq
    + Default
    + Debug
    + LowerHex
    + UpperHex
    + Send
    + Sync
    + BitXor<Output = Self>
    + 'static
{
    /// Register width in bits.
    const BITS: u32;
    const ZERO: Self;

    fn from_byte(value: u8) -> Self;

    /// Truncates a wide value to the register width.
    fn truncate(value: u64) -> Self;

    fn to_u64(self) -> u64;

    /// The least significant byte of the register.
    fn low_byte(self) -> u8;

    fn top_bit(self) -> bool;

    fn low_bit(self) -> bool;

    fn shl(self, bits: u32) -> Self;

    fn shr(self, bits: u32) -> Self;

    /// Reverses the bit order of the whole register.
    fn reflect(self) -> Self;

    /// Whether `value` fits the register without truncation.
    fn fits(value: u64) -> bool {
        Self::BITS >= 64 || value >> Self::BITS == 0
    }
}

macro_rules! impl_width {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Width for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ZERO: Self = 0;

                #[inline]
                fn from_byte(value: u8) -> Self {
                    value as $ty
                }

                #[inline]
                fn truncate(value: u64) -> Self {
                    value as $ty
                }

                #[inline]
                fn to_u64(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn low_byte(self) -> u8 {
                    self as u8
                }

                #[inline]
                fn top_bit(self) -> bool {
                    self >> (<$ty>::BITS - 1) != 0
                }

                #[inline]
                fn low_bit(self) -> bool {
                    self & 1 != 0
                }

                #[inline]
                fn shl(self, bits: u32) -> Self {
                    self.checked_shl(bits).unwrap_or(0)
                }

                #[inline]
                fn shr(self, bits: u32) -> Self {
                    self.checked_shr(bits).unwrap_or(0)
                }

                #[inline]
                fn reflect(self) -> Self {
                    self.reverse_bits()
                }
            }
        )+
    };
}

impl_width!(u8, u16, u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_width_shifts_clear_the_register() {
        assert_eq!(Width::shl(0xFFu8, 8), 0);
        assert_eq!(Width::shr(0xFFu8, 8), 0);
        assert_eq!(Width::shl(0xFFFFu16, 8), 0xFF00);
        assert_eq!(Width::shr(0xABCD_1234u32, 8), 0x00AB_CD12);
        assert_eq!(Width::shl(0x12u8, 0), 0x12);
    }

    #[test]
    fn reflect_reverses_bits() {
        assert_eq!(0x04C1_1DB7u32.reflect(), 0xEDB8_8320);
        assert_eq!(0x1021u16.reflect(), 0x8408);
        assert_eq!(0x31u8.reflect(), 0x8C);
        assert_eq!(0x01u8.reflect().reflect(), 0x01);
    }

    #[test]
    fn bit_tests() {
        assert!(0x80u8.top_bit());
        assert!(!0x7Fu8.top_bit());
        assert!(0x8000_0000u32.top_bit());
        assert!(0x0001u16.low_bit());
        assert!(!0x0002u16.low_bit());
        assert_eq!(0xABCDu16.low_byte(), 0xCD);
    }

    #[test]
    fn truncation_and_fit() {
        assert_eq!(<u8 as Width>::truncate(0x1_07), 0x07);
        assert_eq!(<u16 as Width>::truncate(0x1_1021), 0x1021);
        assert!(<u16 as Width>::fits(0xFFFF));
        assert!(!<u16 as Width>::fits(0x1_0000));
        assert!(<u32 as Width>::fits(0xFFFF_FFFF));
        assert!(!<u32 as Width>::fits(0x1_0000_0000));
    }
}
