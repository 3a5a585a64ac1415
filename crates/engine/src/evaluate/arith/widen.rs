// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tessera_type::{Type, Value};

use crate::columnar::ColumnData;

/// Lossless casts applied to the narrower operand of a mixed numeric
/// subtraction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Widen {
	IntToLong,
	IntToDouble,
	LongToDouble,
}

impl Widen {
	/// The cast that brings `from` to `to`, if one is needed and exists.
	pub(crate) fn between(from: Type, to: Type) -> Option<Widen> {
		match (from, to) {
			(Type::Int4, Type::Int8) => Some(Widen::IntToLong),
			(Type::Int4, Type::Float8) => Some(Widen::IntToDouble),
			(Type::Int8, Type::Float8) => Some(Widen::LongToDouble),
			_ => None,
		}
	}

	pub(crate) fn source(&self) -> Type {
		match self {
			Widen::IntToLong | Widen::IntToDouble => Type::Int4,
			Widen::LongToDouble => Type::Int8,
		}
	}

	pub(crate) fn name(&self) -> &'static str {
		match self {
			Widen::IntToLong => "CastIntToLongEvaluator",
			Widen::IntToDouble => "CastIntToDoubleEvaluator",
			Widen::LongToDouble => "CastLongToDoubleEvaluator",
		}
	}

	pub(crate) fn value(&self, value: Value) -> Value {
		match (self, value) {
			(Widen::IntToLong, Value::Int4(v)) => Value::Int8(i64::from(v)),
			(Widen::IntToDouble, Value::Int4(v)) => Value::Float8(f64::from(v)),
			(Widen::LongToDouble, Value::Int8(v)) => Value::Float8(v as f64),
			(_, value) => value,
		}
	}

	/// Widens a whole column, `None` when it does not hold the source type.
	pub(crate) fn column(&self, data: &ColumnData) -> Option<ColumnData> {
		match (self, data) {
			(Widen::IntToLong, ColumnData::Int4(c)) => Some(ColumnData::Int8(c.map(|v| i64::from(*v)))),
			(Widen::IntToDouble, ColumnData::Int4(c)) => Some(ColumnData::Float8(c.map(|v| f64::from(*v)))),
			(Widen::LongToDouble, ColumnData::Int8(c)) => Some(ColumnData::Float8(c.map(|v| *v as f64))),
			_ => None,
		}
	}
}
