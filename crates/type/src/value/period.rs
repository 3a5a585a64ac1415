// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A calendar based amount of time in years, months and days.
///
/// The components are kept apart and never normalised: a month is not a
/// fixed number of days, so `P1M` and `P30D` are different periods.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
	years: i32,
	months: i32,
	days: i32,
}

impl Period {
	pub const fn new(years: i32, months: i32, days: i32) -> Self {
		Self {
			years,
			months,
			days,
		}
	}

	pub const fn zero() -> Self {
		Self::new(0, 0, 0)
	}

	pub const fn from_years(years: i32) -> Self {
		Self::new(years, 0, 0)
	}

	pub const fn from_months(months: i32) -> Self {
		Self::new(0, months, 0)
	}

	pub fn from_weeks(weeks: i32) -> Option<Self> {
		weeks.checked_mul(7).map(Self::from_days)
	}

	pub const fn from_days(days: i32) -> Self {
		Self::new(0, 0, days)
	}

	pub fn years(&self) -> i32 {
		self.years
	}

	pub fn months(&self) -> i32 {
		self.months
	}

	pub fn days(&self) -> i32 {
		self.days
	}

	pub fn is_zero(&self) -> bool {
		self.years == 0 && self.months == 0 && self.days == 0
	}

	pub fn total_months(&self) -> i64 {
		self.years as i64 * 12 + self.months as i64
	}
}

// ISO 8601, e.g. P1Y2M3D
impl Display for Period {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		if self.is_zero() {
			return f.write_str("P0D");
		}
		f.write_str("P")?;
		if self.years != 0 {
			write!(f, "{}Y", self.years)?;
		}
		if self.months != 0 {
			write!(f, "{}M", self.months)?;
		}
		if self.days != 0 {
			write!(f, "{}D", self.days)?;
		}
		Ok(())
	}
}
