// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod datetime;
pub mod duration;
pub mod number;
pub mod period;
pub mod temporal;
pub mod r#type;

use datetime::DateTime;
use duration::Duration;
use period::Period;
use r#type::Type;

/// A single typed value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// An 8-byte unsigned integer
	Uint8(u64),
	/// An 8-byte floating point
	Float8(f64),
	/// An instant with millisecond precision in UTC
	DateTime(DateTime),
	/// A calendar period
	Period(Period),
	/// An exact duration
	Duration(Duration),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Uint8(_) => Type::Uint8,
			Value::Float8(_) => Type::Float8,
			Value::DateTime(_) => Type::DateTime,
			Value::Period(_) => Type::Period,
			Value::Duration(_) => Type::Duration,
		}
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Int4(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int8(v)
	}
}

impl From<u64> for Value {
	fn from(v: u64) -> Self {
		Value::Uint8(v)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Float8(v)
	}
}

impl From<DateTime> for Value {
	fn from(v: DateTime) -> Self {
		Value::DateTime(v)
	}
}

impl From<Period> for Value {
	fn from(v: Period) -> Self {
		Value::Period(v)
	}
}

impl From<Duration> for Value {
	fn from(v: Duration) -> Self {
		Value::Duration(v)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(v: Option<T>) -> Self {
		v.map(Into::into).unwrap_or(Value::Undefined)
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Int4(v) => Display::fmt(v, f),
			Value::Int8(v) => Display::fmt(v, f),
			Value::Uint8(v) => Display::fmt(v, f),
			Value::Float8(v) => Display::fmt(v, f),
			Value::DateTime(v) => Display::fmt(v, f),
			Value::Period(v) => Display::fmt(v, f),
			Value::Duration(v) => Display::fmt(v, f),
		}
	}
}
