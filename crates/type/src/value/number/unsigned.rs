// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::{
	error::{Result, TypeError},
	fragment::Fragment,
	value::r#type::Type,
};

/// Narrows an exact, arbitrary precision result onto the unsigned 64-bit
/// domain. `None` for negative values and values above `u64::MAX`.
pub fn narrow_uint8(value: &BigInt) -> Option<u64> {
	value.to_u64()
}

/// Subtraction over unsigned magnitudes. The difference is computed in the
/// signed arbitrary precision domain so an underflow is seen as a negative
/// number instead of a wrapped bit pattern.
pub fn sub_uint8(l: u64, r: u64, fragment: &Fragment) -> Result<u64> {
	let exact = BigInt::from(l) - BigInt::from(r);
	narrow_uint8(&exact).ok_or_else(|| {
		TypeError::NumberOutOfRange {
			target: Type::Uint8,
			fragment: fragment.clone(),
		}
		.into()
	})
}

#[cfg(test)]
mod tests {
	use rand::{Rng, SeedableRng, rngs::StdRng};

	use super::*;

	mod narrow {
		use super::*;

		#[test]
		fn test_in_range() {
			assert_eq!(narrow_uint8(&BigInt::from(0)), Some(0));
			assert_eq!(narrow_uint8(&BigInt::from(u64::MAX)), Some(u64::MAX));
		}

		#[test]
		fn test_negative() {
			assert_eq!(narrow_uint8(&BigInt::from(-1)), None);
			assert_eq!(narrow_uint8(&BigInt::from(i64::MIN)), None);
		}

		#[test]
		fn test_above_max() {
			assert_eq!(narrow_uint8(&(BigInt::from(u64::MAX) + 1)), None);
		}
	}

	#[test]
	fn test_sub_above_signed_range() {
		let l = u64::MAX;
		let r = 1u64 << 63;
		assert_eq!(sub_uint8(l, r, &Fragment::None), Ok(i64::MAX as u64));
	}

	#[test]
	fn test_zero_minus_positive_overflows() {
		for r in [1u64, 42, i64::MAX as u64, u64::MAX] {
			let err = sub_uint8(0, r, &Fragment::None).unwrap_err();
			assert_eq!(err.code(), "NUMBER_002");
		}
	}

	#[test]
	fn test_zero_minus_zero() {
		assert_eq!(sub_uint8(0, 0, &Fragment::None), Ok(0));
	}

	#[test]
	fn test_matches_exact_difference() {
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..10_000 {
			let l: u64 = rng.random();
			let r: u64 = rng.random();
			match sub_uint8(l, r, &Fragment::None) {
				Ok(v) => assert_eq!(v, l - r),
				Err(_) => assert!(r > l),
			}
		}
	}
}
