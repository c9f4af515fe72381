//! Reinterpreting the 128-bit payload between vector kinds.

use softsimd::{bitcast, F32x4, F64x2, I16x8, I32x4, I8x16};

#[test]
fn test_float_to_int_exposes_ieee_layout() {
    let ones = F32x4::splat(1.0);
    let bits = I32x4::from_f32x4_bits(&ones);
    assert_eq!(bits.to_array(), [0x3f80_0000; 4]);

    let neg = F32x4::splat(-2.0);
    assert_eq!(I32x4::from_f32x4_bits(&neg).to_array(), [0xc000_0000u32 as i32; 4]);
}

#[test]
fn test_int_to_float_and_back_is_lossless() {
    let source = I32x4::new([i32::MIN, -1, 0, i32::MAX]);
    let f = F32x4::from_i32x4_bits(&source);
    assert_eq!(I32x4::from_f32x4_bits(&f).to_array(), source.to_array());
}

#[test]
fn test_nan_payloads_survive_reinterpretation() {
    // A quiet NaN with a distinctive payload; a value-level conversion
    // would canonicalize it, a bit copy must not.
    let payload = 0x7fc0_1234i32;
    let v = I32x4::splat(payload);
    let f = F32x4::from_i32x4_bits(&v);
    assert!(f.extract_lane(0).unwrap().is_nan());
    assert_eq!(I32x4::from_f32x4_bits(&f).to_array(), [payload; 4]);
}

#[test]
fn test_lane_width_regrouping() {
    let halves = I16x8::new([1, 0, 2, 0, 3, 0, 4, 0]);
    let words = I32x4::from_i16x8_bits(&halves);
    assert_eq!(words.to_array(), [1, 2, 3, 4]);

    let bytes = I8x16::new([-1, 0, 0, 0, -1, 0, 0, 0, -1, 0, 0, 0, -1, 0, 0, 0]);
    assert_eq!(I32x4::from_i8x16_bits(&bytes).to_array(), [0xff; 4]);
}

#[test]
fn test_double_lanes_split_into_words() {
    let d = F64x2::splat(1.0);
    let words = I32x4::from_f64x2_bits(&d);
    assert_eq!(words.to_array(), [0, 0x3ff0_0000, 0, 0x3ff0_0000]);
    let back = F64x2::from_i32x4_bits(&words);
    assert_eq!(back.to_array(), [1.0, 1.0]);
}

#[test]
fn test_generic_bitcast_agrees_with_named_wrappers() {
    let v = I16x8::new([100, -200, 300, -400, 500, -600, 700, -800]);
    let via_wrapper = I8x16::from_i16x8_bits(&v);
    let via_generic: I8x16 = bitcast(&v);
    assert_eq!(via_wrapper, via_generic);
    let round: I16x8 = bitcast(&via_generic);
    assert_eq!(round, v);
}

#[test]
fn test_value_conversion_differs_from_bit_copy() {
    let v = I32x4::new([1, 2, 3, 4]);
    let converted = F32x4::from_i32x4(&v);
    let reinterpreted = F32x4::from_i32x4_bits(&v);
    assert_eq!(converted.to_array(), [1.0, 2.0, 3.0, 4.0]);
    assert_ne!(converted.to_array(), reinterpreted.to_array());
}
