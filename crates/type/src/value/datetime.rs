// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// An instant in time, stored as milliseconds since the Unix epoch
/// (1970-01-01T00:00:00Z). Always interpreted in UTC.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateTime {
	millis: i64,
}

impl DateTime {
	pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32, millis: u32) -> Option<Self> {
		let datetime = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_milli_opt(hour, minute, second, millis)?;
		Some(Self::from_chrono(datetime.and_utc()))
	}

	pub fn from_timestamp_millis(millis: i64) -> Self {
		Self {
			millis,
		}
	}

	pub fn timestamp_millis(&self) -> i64 {
		self.millis
	}

	/// Calendar form of the instant, `None` when it lies outside the
	/// range chrono can represent.
	pub fn to_chrono(&self) -> Option<chrono::DateTime<Utc>> {
		chrono::DateTime::<Utc>::from_timestamp_millis(self.millis)
	}

	/// Truncates towards negative infinity to whole milliseconds.
	pub fn from_chrono(datetime: chrono::DateTime<Utc>) -> Self {
		Self {
			millis: datetime.timestamp_millis(),
		}
	}
}

impl Display for DateTime {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.to_chrono() {
			Some(datetime) => write!(f, "{}", datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
			None => write!(f, "{}ms", self.millis),
		}
	}
}
