//! Property tests against a bit-at-a-time reference.

use proptest::prelude::*;

use crctab::catalog::PRESETS;
use crctab::{build, CrcConfig, ParamSet, Variant};

/// Shift-register CRC over `data`, one bit per step. Works on any width up
/// to 32 bits, for both bit orders.
fn bitwise(width: u32, polynomial: u32, initial: u32, variant: Variant, data: &[u8]) -> u32 {
    let mask = if width == 32 { u32::MAX } else { (1u32 << width) - 1 };
    let mut crc = initial & mask;
    match variant {
        Variant::Forward => {
            let top = 1u32 << (width - 1);
            for &b in data {
                crc ^= u32::from(b) << (width - 8);
                for _ in 0..8 {
                    crc = (if crc & top != 0 { (crc << 1) ^ polynomial } else { crc << 1 }) & mask;
                }
            }
        }
        Variant::Reflected => {
            let poly = polynomial.reverse_bits() >> (32 - width);
            for &b in data {
                crc ^= u32::from(b);
                for _ in 0..8 {
                    crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
                }
            }
        }
    }
    crc
}

fn variant() -> impl Strategy<Value = Variant> {
    prop_oneof![Just(Variant::Forward), Just(Variant::Reflected)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn crc8_matches_bitwise(
        poly in any::<u8>(),
        init in any::<u8>(),
        variant in variant(),
        data in proptest::collection::vec(any::<u8>(), 0..=512),
    ) {
        let set = ParamSet::new(poly, init, variant);
        let expected = bitwise(8, poly.into(), init.into(), variant, &data);
        prop_assert_eq!(u32::from(set.compute(&data)), expected);
    }

    #[test]
    fn crc16_matches_bitwise(
        poly in any::<u16>(),
        init in any::<u16>(),
        variant in variant(),
        data in proptest::collection::vec(any::<u8>(), 0..=512),
    ) {
        let set = ParamSet::new(poly, init, variant);
        let expected = bitwise(16, poly.into(), init.into(), variant, &data);
        prop_assert_eq!(u32::from(set.compute(&data)), expected);
    }

    #[test]
    fn crc32_matches_bitwise(
        poly in any::<u32>(),
        init in any::<u32>(),
        variant in variant(),
        data in proptest::collection::vec(any::<u8>(), 0..=512),
    ) {
        let set = ParamSet::new(poly, init, variant);
        prop_assert_eq!(set.compute(&data), bitwise(32, poly, init, variant, &data));
    }

    #[test]
    fn chunking_equivalence(
        preset in 0..PRESETS.len(),
        data in proptest::collection::vec(any::<u8>(), 0..=2048),
        split in any::<usize>(),
    ) {
        let set = CrcConfig::from(&PRESETS[preset]).build().unwrap();
        let split = split % (data.len() + 1);
        let (a, b) = data.split_at(split);
        let crc = set.update_buffer(set.update_buffer(set.initial(), a), b);
        prop_assert_eq!(set.finalize(crc), set.compute(&data));
    }

    #[test]
    fn arbitrary_chunk_sizes(
        data in proptest::collection::vec(any::<u8>(), 0..=2048),
        chunk in 1usize..=257,
    ) {
        let set = ParamSet::new(0x1021u16, 0xFFFF, Variant::Forward);
        let mut digest = set.digest();
        for part in data.chunks(chunk) {
            digest.update(part);
        }
        prop_assert_eq!(digest.finalize(), set.compute(&data));
    }

    #[test]
    fn zero_length_identity(init in any::<u32>(), poly in any::<u32>(), variant in variant()) {
        let set = ParamSet::new(poly, init, variant);
        prop_assert_eq!(set.update_buffer(init, &[]), init);
    }

    #[test]
    fn tables_are_deterministic(poly in any::<u16>(), variant in variant()) {
        prop_assert_eq!(build(poly, variant), build(poly, variant));
    }
}
