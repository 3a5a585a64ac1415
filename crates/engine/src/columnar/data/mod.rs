// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use tessera_type::{DateTime, Duration, Period, Type, Value};

mod container;

pub use container::{Cell, CellContainer};

/// Typed values of one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
	/// A column of the null type, only the row count is kept
	Undefined(usize),
	Int4(CellContainer<i32>),
	Int8(CellContainer<i64>),
	Uint8(CellContainer<u64>),
	Float8(CellContainer<f64>),
	DateTime(CellContainer<DateTime>),
	Period(CellContainer<Period>),
	Duration(CellContainer<Duration>),
}

macro_rules! impl_from_container {
	($($t:ty => $variant:ident),* $(,)?) => {
		$(
			impl From<CellContainer<$t>> for ColumnData {
				fn from(container: CellContainer<$t>) -> Self {
					ColumnData::$variant(container)
				}
			}
		)*
	};
}

impl_from_container!(
	i32 => Int4,
	i64 => Int8,
	u64 => Uint8,
	f64 => Float8,
	DateTime => DateTime,
	Period => Period,
	Duration => Duration,
);

impl ColumnData {
	pub fn undefined(rows: usize) -> Self {
		ColumnData::Undefined(rows)
	}

	pub fn int4(values: impl IntoIterator<Item = i32>) -> Self {
		ColumnData::Int4(values.into_iter().collect())
	}

	pub fn int8(values: impl IntoIterator<Item = i64>) -> Self {
		ColumnData::Int8(values.into_iter().collect())
	}

	pub fn uint8(values: impl IntoIterator<Item = u64>) -> Self {
		ColumnData::Uint8(values.into_iter().collect())
	}

	pub fn float8(values: impl IntoIterator<Item = f64>) -> Self {
		ColumnData::Float8(values.into_iter().collect())
	}

	pub fn datetime(values: impl IntoIterator<Item = DateTime>) -> Self {
		ColumnData::DateTime(values.into_iter().collect())
	}

	pub fn period(values: impl IntoIterator<Item = Period>) -> Self {
		ColumnData::Period(values.into_iter().collect())
	}

	pub fn duration(values: impl IntoIterator<Item = Duration>) -> Self {
		ColumnData::Duration(values.into_iter().collect())
	}

	/// A column of type `ty` where every one of `rows` rows is undefined.
	pub fn typed_undefined(ty: Type, rows: usize) -> Self {
		fn nulls<T>(rows: usize) -> CellContainer<T> {
			CellContainer::from_options((0..rows).map(|_| None))
		}

		match ty {
			Type::Undefined => ColumnData::Undefined(rows),
			Type::Int4 => ColumnData::Int4(nulls(rows)),
			Type::Int8 => ColumnData::Int8(nulls(rows)),
			Type::Uint8 => ColumnData::Uint8(nulls(rows)),
			Type::Float8 => ColumnData::Float8(nulls(rows)),
			Type::DateTime => ColumnData::DateTime(nulls(rows)),
			Type::Period => ColumnData::Period(nulls(rows)),
			Type::Duration => ColumnData::Duration(nulls(rows)),
		}
	}

	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Undefined(_) => Type::Undefined,
			ColumnData::Int4(_) => Type::Int4,
			ColumnData::Int8(_) => Type::Int8,
			ColumnData::Uint8(_) => Type::Uint8,
			ColumnData::Float8(_) => Type::Float8,
			ColumnData::DateTime(_) => Type::DateTime,
			ColumnData::Period(_) => Type::Period,
			ColumnData::Duration(_) => Type::Duration,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			ColumnData::Undefined(rows) => *rows,
			ColumnData::Int4(c) => c.len(),
			ColumnData::Int8(c) => c.len(),
			ColumnData::Uint8(c) => c.len(),
			ColumnData::Float8(c) => c.len(),
			ColumnData::DateTime(c) => c.len(),
			ColumnData::Period(c) => c.len(),
			ColumnData::Duration(c) => c.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Every value of `row`, empty for an undefined row.
	pub fn values(&self, row: usize) -> Vec<Value> {
		fn collect<T: Clone + Into<Value>>(c: &CellContainer<T>, row: usize) -> Vec<Value> {
			c.values(row).iter().cloned().map(Into::into).collect()
		}

		match self {
			ColumnData::Undefined(_) => vec![],
			ColumnData::Int4(c) => collect(c, row),
			ColumnData::Int8(c) => collect(c, row),
			ColumnData::Uint8(c) => collect(c, row),
			ColumnData::Float8(c) => collect(c, row),
			ColumnData::DateTime(c) => collect(c, row),
			ColumnData::Period(c) => collect(c, row),
			ColumnData::Duration(c) => collect(c, row),
		}
	}

	/// The value of `row`, undefined unless the row holds exactly one value.
	pub fn get_value(&self, row: usize) -> Value {
		let mut values = self.values(row);
		match values.len() {
			1 => values.remove(0),
			_ => Value::Undefined,
		}
	}
}
