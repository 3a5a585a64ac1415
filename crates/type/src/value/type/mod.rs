// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

mod get;

pub use get::GetType;

/// The statically resolved kind of an operand or column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	/// The null type, every value of it is undefined
	Undefined,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// An 8-byte unsigned integer
	Uint8,
	/// An 8-byte floating point
	Float8,
	/// An instant in milliseconds since the Unix epoch, UTC
	DateTime,
	/// A calendar amount of years, months and days
	Period,
	/// An exact amount of elapsed time
	Duration,
}

impl Type {
	pub fn is_undefined(&self) -> bool {
		matches!(self, Type::Undefined)
	}

	pub fn is_number(&self) -> bool {
		matches!(self, Type::Int4 | Type::Int8 | Type::Uint8 | Type::Float8)
	}

	pub fn is_signed_integer(&self) -> bool {
		matches!(self, Type::Int4 | Type::Int8)
	}

	pub fn is_temporal_amount(&self) -> bool {
		matches!(self, Type::Period | Type::Duration)
	}

	pub fn is_temporal(&self) -> bool {
		matches!(self, Type::DateTime | Type::Period | Type::Duration)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Type::Undefined => f.write_str("undefined"),
			Type::Int4 => f.write_str("int4"),
			Type::Int8 => f.write_str("int8"),
			Type::Uint8 => f.write_str("uint8"),
			Type::Float8 => f.write_str("float8"),
			Type::DateTime => f.write_str("datetime"),
			Type::Period => f.write_str("period"),
			Type::Duration => f.write_str("duration"),
		}
	}
}
