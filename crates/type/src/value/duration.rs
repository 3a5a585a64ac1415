// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter, Write};

use serde::{Deserialize, Serialize};

const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// An exact amount of elapsed time: whole seconds plus a nanosecond
/// adjustment in `0..1_000_000_000`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Duration {
	seconds: i64,
	nanos: u32,
}

impl Duration {
	/// Returns `None` when the normalised seconds do not fit an `i64`.
	pub fn new(seconds: i64, nanos: i64) -> Option<Self> {
		Self::from_total_nanos(seconds as i128 * NANOS_PER_SECOND + nanos as i128)
	}

	pub const fn zero() -> Self {
		Self {
			seconds: 0,
			nanos: 0,
		}
	}

	pub const fn from_seconds(seconds: i64) -> Self {
		Self {
			seconds,
			nanos: 0,
		}
	}

	pub fn from_millis(millis: i64) -> Self {
		Self {
			seconds: millis.div_euclid(1_000),
			nanos: (millis.rem_euclid(1_000) * 1_000_000) as u32,
		}
	}

	pub fn from_nanos(nanos: i64) -> Self {
		Self {
			seconds: nanos.div_euclid(1_000_000_000),
			nanos: nanos.rem_euclid(1_000_000_000) as u32,
		}
	}

	pub fn from_minutes(minutes: i64) -> Option<Self> {
		minutes.checked_mul(60).map(Self::from_seconds)
	}

	pub fn from_hours(hours: i64) -> Option<Self> {
		hours.checked_mul(3_600).map(Self::from_seconds)
	}

	pub fn from_days(days: i64) -> Option<Self> {
		days.checked_mul(86_400).map(Self::from_seconds)
	}

	pub fn seconds(&self) -> i64 {
		self.seconds
	}

	pub fn nanos(&self) -> u32 {
		self.nanos
	}

	pub fn is_zero(&self) -> bool {
		self.seconds == 0 && self.nanos == 0
	}

	pub fn to_total_nanos(&self) -> i128 {
		self.seconds as i128 * NANOS_PER_SECOND + self.nanos as i128
	}

	pub fn from_total_nanos(total: i128) -> Option<Self> {
		let seconds = i64::try_from(total.div_euclid(NANOS_PER_SECOND)).ok()?;
		Some(Self {
			seconds,
			nanos: total.rem_euclid(NANOS_PER_SECOND) as u32,
		})
	}
}

// ISO 8601 in hours, minutes and seconds, e.g. PT8H6M12.345S
impl Display for Duration {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if self.is_zero() {
			return f.write_str("PT0S");
		}

		let negative_fraction = self.seconds < 0 && self.nanos > 0;
		let effective = if negative_fraction {
			self.seconds + 1
		} else {
			self.seconds
		};
		let hours = effective / 3_600;
		let minutes = (effective % 3_600) / 60;
		let seconds = effective % 60;

		let mut out = String::from("PT");
		if hours != 0 {
			write!(out, "{}H", hours)?;
		}
		if minutes != 0 {
			write!(out, "{}M", minutes)?;
		}
		if seconds == 0 && self.nanos == 0 && out.len() > 2 {
			return f.write_str(&out);
		}

		if negative_fraction && seconds == 0 {
			out.push_str("-0");
		} else {
			write!(out, "{}", seconds)?;
		}

		if self.nanos > 0 {
			let fraction = if self.seconds < 0 {
				2 * NANOS_PER_SECOND - self.nanos as i128
			} else {
				self.nanos as i128 + NANOS_PER_SECOND
			};
			let digits = fraction.to_string();
			out.push('.');
			out.push_str(digits[1..].trim_end_matches('0'));
		}
		out.push('S');
		f.write_str(&out)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_normalises_negative_nanos() {
		let d = Duration::new(0, -1).unwrap();
		assert_eq!(d.seconds(), -1);
		assert_eq!(d.nanos(), 999_999_999);
		assert_eq!(d.to_total_nanos(), -1);
	}

	#[test]
	fn test_from_millis() {
		assert_eq!(Duration::from_millis(1_500), Duration::new(1, 500_000_000).unwrap());
		assert_eq!(Duration::from_millis(-1), Duration::new(-1, 999_000_000).unwrap());
	}

	#[test]
	fn test_seconds_overflow() {
		assert_eq!(Duration::new(i64::MAX, NANOS_PER_SECOND as i64), None);
		assert_eq!(Duration::from_days(i64::MAX), None);
	}

	#[test]
	fn test_display() {
		assert_eq!(Duration::zero().to_string(), "PT0S");
		assert_eq!(Duration::from_seconds(20).to_string(), "PT20S");
		assert_eq!(Duration::from_hours(8).unwrap().to_string(), "PT8H");
		assert_eq!(Duration::new(29_172, 345_000_000).unwrap().to_string(), "PT8H6M12.345S");
		assert_eq!(Duration::from_seconds(-90).to_string(), "PT-1M-30S");
		assert_eq!(Duration::from_millis(-500).to_string(), "PT-0.5S");
	}
}
