//! Timestamp and date generators.
//!
//! Both sample an epoch-millisecond instant uniformly over the bounded
//! temporal domain. Dates keep only the UTC calendar day of that instant.

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use rowgen_core::temporal::{min_instant, MAX_INSTANT_MILLIS, MIN_INSTANT_MILLIS};
use rowgen_core::Value;

fn random_instant<R: Rng>(rng: &mut R) -> DateTime<Utc> {
    let millis = rng.gen_range(MIN_INSTANT_MILLIS..=MAX_INSTANT_MILLIS);
    DateTime::from_timestamp_millis(millis).unwrap_or_else(min_instant)
}

/// Generate a random timestamp within the supported domain.
pub fn generate_timestamp<R: Rng>(rng: &mut R) -> Value {
    Value::Timestamp(random_instant(rng))
}

/// Generate a random date within the supported domain.
pub fn generate_date<R: Rng>(rng: &mut R) -> Value {
    let date: NaiveDate = random_instant(rng).date_naive();
    Value::Date(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rowgen_core::temporal::{contains_date, contains_instant};

    #[test]
    fn test_timestamps_within_domain() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            match generate_timestamp(&mut rng) {
                Value::Timestamp(ts) => {
                    assert!(contains_instant(&ts), "{ts} out of range");
                    assert_eq!(ts.timestamp_subsec_micros() % 1000, 0);
                }
                other => panic!("Expected Timestamp, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_dates_within_domain() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            match generate_date(&mut rng) {
                Value::Date(date) => assert!(contains_date(&date), "{date} out of range"),
                other => panic!("Expected Date, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_timestamps_span_eras() {
        let mut rng = StdRng::seed_from_u64(3);
        let years: Vec<i32> = (0..200)
            .filter_map(|_| match generate_timestamp(&mut rng) {
                Value::Timestamp(ts) => Some(chrono::Datelike::year(&ts)),
                _ => None,
            })
            .collect();
        assert!(years.iter().any(|y| *y < 1970));
        assert!(years.iter().any(|y| *y > 1970));
    }
}
