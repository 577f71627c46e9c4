//! String and binary generators.

use rand::Rng;
use rowgen_core::Value;

/// Generate a string of 0..=`max_len` random Unicode scalar values.
pub fn generate_string<R: Rng>(rng: &mut R, max_len: usize) -> Value {
    let len = rng.gen_range(0..=max_len);
    let s: String = (0..len).map(|_| rng.gen::<char>()).collect();
    Value::String(s)
}

/// Generate 0..=`max_len` random bytes.
pub fn generate_binary<R: Rng>(rng: &mut R, max_len: usize) -> Value {
    let len = rng.gen_range(0..=max_len);
    let mut bytes = vec![0u8; len];
    rng.fill(bytes.as_mut_slice());
    Value::Binary(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_string_length_bound() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let value = generate_string(&mut rng, 5);
            assert!(value.as_str().unwrap().chars().count() <= 5);
        }
    }

    #[test]
    fn test_zero_length_bound() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(generate_string(&mut rng, 0), Value::String(String::new()));
        assert_eq!(generate_binary(&mut rng, 0), Value::Binary(Vec::new()));
    }

    #[test]
    fn test_binary_length_bound() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut lengths = Vec::new();
        for _ in 0..200 {
            match generate_binary(&mut rng, 4) {
                Value::Binary(bytes) => lengths.push(bytes.len()),
                other => panic!("Expected Binary, got {other:?}"),
            }
        }
        assert!(lengths.iter().all(|l| *l <= 4));
        assert!(lengths.contains(&0));
        assert!(lengths.contains(&4));
    }
}
