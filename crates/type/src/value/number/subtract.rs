// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::SafeSub;
use crate::{
	error::{Result, TypeError},
	fragment::Fragment,
	value::r#type::GetType,
};

fn checked_subtract<T>(l: T, r: T, fragment: &Fragment) -> Result<T>
where
	T: SafeSub + GetType,
{
	l.checked_sub(r).ok_or_else(|| {
		TypeError::NumberOutOfRange {
			target: T::get_type(),
			fragment: fragment.clone(),
		}
		.into()
	})
}

pub fn sub_int4(l: i32, r: i32, fragment: &Fragment) -> Result<i32> {
	checked_subtract(l, r, fragment)
}

pub fn sub_int8(l: i64, r: i64, fragment: &Fragment) -> Result<i64> {
	checked_subtract(l, r, fragment)
}

/// Plain IEEE-754 subtraction, infinities and NaN propagate.
pub fn sub_float8(l: f64, r: f64) -> f64 {
	l - r
}

#[cfg(test)]
mod tests {
	use rand::{Rng, SeedableRng, rngs::StdRng};

	use super::*;

	mod int4 {
		use super::*;

		#[test]
		fn test_within_range() {
			assert_eq!(sub_int4(10, 3, &Fragment::None), Ok(7));
			assert_eq!(sub_int4(i32::MIN, -1, &Fragment::None), Ok(i32::MIN + 1));
			assert_eq!(sub_int4(-1, i32::MAX, &Fragment::None), Ok(i32::MIN));
		}

		#[test]
		fn test_min_minus_positive_overflows() {
			let err = sub_int4(i32::MIN, 1, &Fragment::None).unwrap_err();
			assert_eq!(err.code(), "NUMBER_002");
			let err = sub_int4(i32::MIN, i32::MAX, &Fragment::None).unwrap_err();
			assert_eq!(err.code(), "NUMBER_002");
		}

		#[test]
		fn test_negative_minus_max_overflows() {
			assert!(sub_int4(-2, i32::MAX, &Fragment::None).is_err());
		}

		#[test]
		fn test_matches_exact_difference() {
			let mut rng = StdRng::seed_from_u64(0x5eed);
			for _ in 0..10_000 {
				let l: i32 = rng.random();
				let r: i32 = rng.random();
				let exact = l as i64 - r as i64;
				match sub_int4(l, r, &Fragment::None) {
					Ok(v) => assert_eq!(v as i64, exact),
					Err(_) => assert!(exact < i32::MIN as i64 || exact > i32::MAX as i64),
				}
			}
		}
	}

	mod int8 {
		use super::*;

		#[test]
		fn test_within_range() {
			assert_eq!(sub_int8(10, 3, &Fragment::None), Ok(7));
			assert_eq!(sub_int8(-1, i64::MAX, &Fragment::None), Ok(i64::MIN));
		}

		#[test]
		fn test_overflow() {
			assert!(sub_int8(i64::MIN, 1, &Fragment::None).is_err());
			assert!(sub_int8(-2, i64::MAX, &Fragment::None).is_err());
			assert!(sub_int8(i64::MAX, -1, &Fragment::None).is_err());
		}

		#[test]
		fn test_matches_exact_difference() {
			let mut rng = StdRng::seed_from_u64(0x1ee7);
			for _ in 0..10_000 {
				let l: i64 = rng.random();
				let r: i64 = rng.random();
				let exact = l as i128 - r as i128;
				match sub_int8(l, r, &Fragment::None) {
					Ok(v) => assert_eq!(v as i128, exact),
					Err(_) => assert!(exact < i64::MIN as i128 || exact > i64::MAX as i128),
				}
			}
		}
	}

	mod float8 {
		use super::*;

		#[test]
		fn test_ieee_semantics() {
			assert_eq!(sub_float8(0.3, 0.1).to_bits(), (0.3f64 - 0.1f64).to_bits());
			assert_eq!(sub_float8(f64::MAX, -f64::MAX), f64::INFINITY);
			assert!(sub_float8(f64::INFINITY, f64::INFINITY).is_nan());
		}

		#[test]
		fn test_bit_identical() {
			let mut rng = StdRng::seed_from_u64(42);
			for _ in 0..1_000 {
				let l: f64 = rng.random();
				let r: f64 = rng.random();
				assert_eq!(sub_float8(l, r).to_bits(), (l - r).to_bits());
			}
		}
	}
}
