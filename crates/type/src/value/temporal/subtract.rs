// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use chrono::{Days, Months, TimeDelta};

use crate::{
	error::{Error, Result, TemporalKind, TypeError},
	fragment::Fragment,
	value::{datetime::DateTime, duration::Duration, period::Period, r#type::Type},
};

fn out_of_range(kind: TemporalKind, fragment: &Fragment) -> Error {
	TypeError::TemporalOutOfRange {
		kind,
		fragment: fragment.clone(),
	}
	.into()
}

/// Moves the instant back by a calendar period. Whole months go first and
/// clamp to the last valid day of the target month (2024-03-31 - P1M is
/// 2024-02-29), days are applied afterwards.
pub fn sub_datetime_period(lhs: DateTime, rhs: &Period, fragment: &Fragment) -> Result<DateTime> {
	let err = || out_of_range(TemporalKind::DateTime, fragment);

	let mut datetime = lhs.to_chrono().ok_or_else(err)?;

	let months = rhs.total_months();
	if months != 0 {
		let magnitude = Months::new(u32::try_from(months.unsigned_abs()).map_err(|_| err())?);
		datetime = if months > 0 {
			datetime.checked_sub_months(magnitude)
		} else {
			datetime.checked_add_months(magnitude)
		}
		.ok_or_else(err)?;
	}

	let days = rhs.days();
	if days != 0 {
		let magnitude = Days::new(days.unsigned_abs() as u64);
		datetime = if days > 0 {
			datetime.checked_sub_days(magnitude)
		} else {
			datetime.checked_add_days(magnitude)
		}
		.ok_or_else(err)?;
	}

	Ok(DateTime::from_chrono(datetime))
}

/// Moves the instant back by an exact amount of time. Sub-millisecond
/// remainders round towards negative infinity.
pub fn sub_datetime_duration(lhs: DateTime, rhs: &Duration, fragment: &Fragment) -> Result<DateTime> {
	let err = || out_of_range(TemporalKind::DateTime, fragment);

	let datetime = lhs.to_chrono().ok_or_else(err)?;
	let delta = TimeDelta::new(rhs.seconds(), rhs.nanos()).ok_or_else(err)?;
	let result = datetime.checked_sub_signed(delta).ok_or_else(err)?;
	Ok(DateTime::from_chrono(result))
}

/// Component-wise, without folding months into years or days into months.
pub fn sub_period(lhs: &Period, rhs: &Period, fragment: &Fragment) -> Result<Period> {
	let component = |l: i32, r: i32| {
		l.checked_sub(r).ok_or_else(|| {
			Error::from(TypeError::NumberOutOfRange {
				target: Type::Period,
				fragment: fragment.clone(),
			})
		})
	};
	Ok(Period::new(
		component(lhs.years(), rhs.years())?,
		component(lhs.months(), rhs.months())?,
		component(lhs.days(), rhs.days())?,
	))
}

pub fn sub_duration(lhs: &Duration, rhs: &Duration, fragment: &Fragment) -> Result<Duration> {
	Duration::from_total_nanos(lhs.to_total_nanos() - rhs.to_total_nanos())
		.ok_or_else(|| out_of_range(TemporalKind::Duration, fragment))
}
