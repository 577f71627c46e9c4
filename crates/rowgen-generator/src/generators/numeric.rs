//! Numeric value generators.
//!
//! Integers are sampled uniformly over their full domain. Floats are sampled
//! from random bit patterns, rejecting NaN and infinities, with an occasional
//! boundary value mixed in.

use rand::Rng;
use rowgen_core::Value;

const F32_SPECIALS: [f32; 6] = [
    0.0,
    -0.0,
    f32::MIN,
    f32::MAX,
    f32::MIN_POSITIVE,
    f32::EPSILON,
];

const F64_SPECIALS: [f64; 6] = [
    0.0,
    -0.0,
    f64::MIN,
    f64::MAX,
    f64::MIN_POSITIVE,
    f64::EPSILON,
];

/// One in this many floats is drawn from the boundary values.
const SPECIAL_ONE_IN: u32 = 16;

/// Generate a random 8-bit integer.
pub fn generate_int8<R: Rng>(rng: &mut R) -> Value {
    Value::Int8(rng.gen())
}

/// Generate a random 16-bit integer.
pub fn generate_int16<R: Rng>(rng: &mut R) -> Value {
    Value::Int16(rng.gen())
}

/// Generate a random 32-bit integer.
pub fn generate_int32<R: Rng>(rng: &mut R) -> Value {
    Value::Int32(rng.gen())
}

/// Generate a random 64-bit integer.
pub fn generate_int64<R: Rng>(rng: &mut R) -> Value {
    Value::Int64(rng.gen())
}

/// Generate a random finite 32-bit float.
pub fn generate_float32<R: Rng>(rng: &mut R) -> Value {
    if rng.gen_ratio(1, SPECIAL_ONE_IN) {
        return Value::Float32(F32_SPECIALS[rng.gen_range(0..F32_SPECIALS.len())]);
    }
    loop {
        let value = f32::from_bits(rng.gen());
        if value.is_finite() {
            return Value::Float32(value);
        }
    }
}

/// Generate a random finite 64-bit float.
pub fn generate_float64<R: Rng>(rng: &mut R) -> Value {
    if rng.gen_ratio(1, SPECIAL_ONE_IN) {
        return Value::Float64(F64_SPECIALS[rng.gen_range(0..F64_SPECIALS.len())]);
    }
    loop {
        let value = f64::from_bits(rng.gen());
        if value.is_finite() {
            return Value::Float64(value);
        }
    }
}

/// Generate a random decimal that fits `precision` digits.
///
/// The unscaled value is uniform over `[-(10^precision - 1), 10^precision - 1]`.
/// Callers guarantee `1 <= precision <= 38`.
pub fn generate_decimal<R: Rng>(rng: &mut R, precision: u8, scale: u8) -> Value {
    let limit = 10i128.pow(u32::from(precision)) - 1;
    Value::decimal(rng.gen_range(-limit..=limit), precision, scale)
}
