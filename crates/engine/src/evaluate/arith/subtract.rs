// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	borrow::Cow,
	fmt::{self, Display, Formatter},
};

use serde::{Deserialize, Serialize};
use tessera_type::{
	Fragment, Result, Type, Value,
	error::{BinaryOp, TypeError},
	value::{
		number::{sub_float8, sub_int4, sub_int8, sub_uint8},
		temporal::{sub_datetime_duration, sub_datetime_period, sub_duration, sub_period},
	},
};
use tracing::instrument;

use crate::{
	columnar::{Column, ColumnData},
	evaluate::{
		EvalContext,
		arith::{binary::binary, widen::Widen},
		warnings::{Warning, Warnings},
	},
};

/// An operand of a subtraction: the channel it is read from and its
/// statically resolved type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operand {
	pub channel: usize,
	pub ty: Type,
}

impl Operand {
	pub fn new(channel: usize, ty: Type) -> Self {
		Self {
			channel,
			ty,
		}
	}
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Kernel {
	Ints,
	Longs,
	UnsignedLongs,
	Doubles,
	DatetimePeriod,
	DatetimeDuration,
	/// One operand is statically null
	Null,
}

impl Kernel {
	fn name(&self) -> &'static str {
		match self {
			Kernel::Ints => "SubIntsEvaluator",
			Kernel::Longs => "SubLongsEvaluator",
			Kernel::UnsignedLongs => "SubUnsignedLongsEvaluator",
			Kernel::Doubles => "SubDoublesEvaluator",
			Kernel::DatetimePeriod | Kernel::DatetimeDuration => "SubDatetimesEvaluator",
			Kernel::Null => "LiteralsEvaluator",
		}
	}
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Binding {
	Runtime {
		kernel: Kernel,
		output: Type,
		widen_left: Option<Widen>,
		widen_right: Option<Widen>,
	},
	FoldOnly {
		output: Type,
	},
}

impl Binding {
	fn runtime(kernel: Kernel, output: Type) -> Self {
		Binding::Runtime {
			kernel,
			output,
			widen_left: None,
			widen_right: None,
		}
	}

	fn widened(kernel: Kernel, left: Type, right: Type, output: Type) -> Self {
		Binding::Runtime {
			kernel,
			output,
			widen_left: Widen::between(left, output),
			widen_right: Widen::between(right, output),
		}
	}
}

fn bind(left: Type, right: Type, fragment: &Fragment) -> Result<Binding> {
	use Type::*;

	let binding = match (left, right) {
		(Undefined, other) | (other, Undefined) => Binding::runtime(Kernel::Null, other),

		(Int4, Int4) => Binding::runtime(Kernel::Ints, Int4),
		(Int8, Int8) => Binding::runtime(Kernel::Longs, Int8),
		(Int4, Int8) | (Int8, Int4) => Binding::widened(Kernel::Longs, left, right, Int8),
		(Float8, Float8) => Binding::runtime(Kernel::Doubles, Float8),
		(Int4 | Int8, Float8) | (Float8, Int4 | Int8) => Binding::widened(Kernel::Doubles, left, right, Float8),
		(Uint8, Uint8) => Binding::runtime(Kernel::UnsignedLongs, Uint8),

		(DateTime, Period) => Binding::runtime(Kernel::DatetimePeriod, DateTime),
		(DateTime, Duration) => Binding::runtime(Kernel::DatetimeDuration, DateTime),
		(Period, Period) => Binding::FoldOnly {
			output: Period,
		},
		(Duration, Duration) => Binding::FoldOnly {
			output: Duration,
		},

		(Uint8, Int4 | Int8 | Float8)
		| (Int4 | Int8 | Float8, Uint8)
		| (Int4 | Int8 | Uint8 | Float8, DateTime | Period | Duration)
		| (DateTime | Period | Duration, Int4 | Int8 | Uint8 | Float8)
		| (DateTime, DateTime)
		| (Period | Duration, DateTime)
		| (Period, Duration)
		| (Duration, Period) => {
			return Err(TypeError::BinaryOperatorNotApplicable {
				operator: BinaryOp::Sub,
				left,
				right,
				fragment: fragment.clone(),
			}
			.into());
		}
	};

	Ok(binding)
}

/// How a subtraction is computed once its operand types are known.
#[derive(Debug, Clone, PartialEq)]
pub enum SubtractPlan {
	/// Only literal operands can be subtracted, through [`fold_subtract`]
	FoldOnly {
		output: Type,
	},
	Runtime(SubtractEvaluator),
}

impl SubtractPlan {
	pub fn output_type(&self) -> Type {
		match self {
			SubtractPlan::FoldOnly {
				output,
			} => *output,
			SubtractPlan::Runtime(evaluator) => evaluator.output_type(),
		}
	}

	pub fn evaluator(&self) -> Option<&SubtractEvaluator> {
		match self {
			SubtractPlan::FoldOnly {
				..
			} => None,
			SubtractPlan::Runtime(evaluator) => Some(evaluator),
		}
	}

	pub fn is_fold_only(&self) -> bool {
		matches!(self, SubtractPlan::FoldOnly { .. })
	}
}

impl Display for SubtractPlan {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			SubtractPlan::FoldOnly {
				..
			} => f.write_str("Only folding possible, so there's no evaluator"),
			SubtractPlan::Runtime(evaluator) => Display::fmt(evaluator, f),
		}
	}
}

/// Resolves the subtraction of `rhs` from `lhs`, rejecting illegal type
/// pairs.
#[instrument(name = "engine::plan::subtract", level = "debug", skip_all, fields(lhs = %lhs.ty, rhs = %rhs.ty))]
pub fn plan_subtract(lhs: Operand, rhs: Operand, fragment: Fragment) -> Result<SubtractPlan> {
	let plan = match bind(lhs.ty, rhs.ty, &fragment)? {
		Binding::FoldOnly {
			output,
		} => SubtractPlan::FoldOnly {
			output,
		},
		Binding::Runtime {
			kernel,
			output,
			widen_left,
			widen_right,
		} => SubtractPlan::Runtime(SubtractEvaluator {
			kernel,
			output,
			lhs: Input {
				operand: lhs,
				widen: widen_left,
			},
			rhs: Input {
				operand: rhs,
				widen: widen_right,
			},
			fragment,
		}),
	};

	Ok(plan)
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct Input {
	operand: Operand,
	widen: Option<Widen>,
}

impl Input {
	/// Reads the column of this input, widened to the type the kernel
	/// expects.
	fn read<'a>(&self, ctx: &EvalContext<'a>, rows: usize) -> Result<Cow<'a, ColumnData>> {
		let Operand {
			channel,
			ty,
		} = self.operand;
		let data = &ctx.column(channel)?.data;

		if data.get_type() != ty {
			return Err(TypeError::ColumnTypeMismatch {
				channel,
				expected: ty,
				actual: data.get_type(),
			}
			.into());
		}
		if data.len() != rows {
			return Err(TypeError::RowCountMismatch {
				channel,
				expected: rows,
				actual: data.len(),
			}
			.into());
		}

		match self.widen {
			None => Ok(Cow::Borrowed(data)),
			Some(widen) => widen.column(data).map(Cow::Owned).ok_or_else(|| {
				TypeError::ColumnTypeMismatch {
					channel,
					expected: widen.source(),
					actual: data.get_type(),
				}
				.into()
			}),
		}
	}
}

impl Display for Input {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self.widen {
			None => write!(f, "Attribute[channel={}]", self.operand.channel),
			Some(widen) => write!(f, "{}[v=Attribute[channel={}]]", widen.name(), self.operand.channel),
		}
	}
}

/// Evaluates a subtraction row by row over a block of columns.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtractEvaluator {
	kernel: Kernel,
	output: Type,
	lhs: Input,
	rhs: Input,
	fragment: Fragment,
}

/// The output column of one evaluation and the warnings raised for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluated {
	pub column: Column,
	pub warnings: Vec<Warning>,
}

impl SubtractEvaluator {
	pub fn output_type(&self) -> Type {
		self.output
	}

	pub fn fragment(&self) -> &Fragment {
		&self.fragment
	}

	/// Subtracts the right from the left column for every row of the block.
	///
	/// A row with an undefined operand is undefined. A row with a multi
	/// valued operand is undefined and registers a warning. An arithmetic
	/// failure on any row fails the whole evaluation.
	#[instrument(name = "engine::evaluate::subtract", level = "trace", skip_all, fields(evaluator = %self, rows = ctx.row_count()))]
	pub fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Evaluated> {
		let rows = ctx.row_count();
		let left = self.lhs.read(ctx, rows)?;
		let right = self.rhs.read(ctx, rows)?;
		let fragment = &self.fragment;

		let (data, warnings) = match (self.kernel, &*left, &*right) {
			(Kernel::Null, _, _) => {
				(ColumnData::typed_undefined(self.output, rows), Warnings::new(fragment, ctx.config.warning_limit))
			}
			(Kernel::Ints, ColumnData::Int4(l), ColumnData::Int4(r)) => {
				let (values, warnings) = binary(ctx, fragment, l, r, |l, r| sub_int4(*l, *r, fragment))?;
				(ColumnData::Int4(values), warnings)
			}
			(Kernel::Longs, ColumnData::Int8(l), ColumnData::Int8(r)) => {
				let (values, warnings) = binary(ctx, fragment, l, r, |l, r| sub_int8(*l, *r, fragment))?;
				(ColumnData::Int8(values), warnings)
			}
			(Kernel::UnsignedLongs, ColumnData::Uint8(l), ColumnData::Uint8(r)) => {
				let (values, warnings) = binary(ctx, fragment, l, r, |l, r| sub_uint8(*l, *r, fragment))?;
				(ColumnData::Uint8(values), warnings)
			}
			(Kernel::Doubles, ColumnData::Float8(l), ColumnData::Float8(r)) => {
				let (values, warnings) = binary(ctx, fragment, l, r, |l, r| Ok(sub_float8(*l, *r)))?;
				(ColumnData::Float8(values), warnings)
			}
			(Kernel::DatetimePeriod, ColumnData::DateTime(l), ColumnData::Period(r)) => {
				let (values, warnings) =
					binary(ctx, fragment, l, r, |l, r| sub_datetime_period(*l, r, fragment))?;
				(ColumnData::DateTime(values), warnings)
			}
			(Kernel::DatetimeDuration, ColumnData::DateTime(l), ColumnData::Duration(r)) => {
				let (values, warnings) =
					binary(ctx, fragment, l, r, |l, r| sub_datetime_duration(*l, r, fragment))?;
				(ColumnData::DateTime(values), warnings)
			}
			(_, l, _) => {
				return Err(TypeError::ColumnTypeMismatch {
					channel: self.lhs.operand.channel,
					expected: self.output,
					actual: l.get_type(),
				}
				.into());
			}
		};

		Ok(Evaluated {
			column: Column {
				name: fragment.clone(),
				data,
			},
			warnings: warnings.into_records(),
		})
	}
}

impl Display for SubtractEvaluator {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self.kernel {
			Kernel::Null => write!(f, "{}[lit=null]", self.kernel.name()),
			kernel => write!(f, "{}[lhs={}, rhs={}]", kernel.name(), self.lhs, self.rhs),
		}
	}
}

/// Subtracts two literals. Legal for every pair [`plan_subtract`] accepts,
/// including the fold only ones.
#[instrument(name = "engine::fold::subtract", level = "trace", skip(fragment))]
pub fn fold_subtract(lhs: &Value, rhs: &Value, fragment: &Fragment) -> Result<Value> {
	let (lhs, rhs) = match bind(lhs.get_type(), rhs.get_type(), fragment)? {
		Binding::Runtime {
			widen_left,
			widen_right,
			..
		} => (widen_value(widen_left, lhs), widen_value(widen_right, rhs)),
		Binding::FoldOnly {
			..
		} => (lhs.clone(), rhs.clone()),
	};

	let result = match (lhs, rhs) {
		(Value::Undefined, _) | (_, Value::Undefined) => Value::Undefined,
		(Value::Int4(l), Value::Int4(r)) => Value::Int4(sub_int4(l, r, fragment)?),
		(Value::Int8(l), Value::Int8(r)) => Value::Int8(sub_int8(l, r, fragment)?),
		(Value::Uint8(l), Value::Uint8(r)) => Value::Uint8(sub_uint8(l, r, fragment)?),
		(Value::Float8(l), Value::Float8(r)) => Value::Float8(sub_float8(l, r)),
		(Value::DateTime(l), Value::Period(r)) => Value::DateTime(sub_datetime_period(l, &r, fragment)?),
		(Value::DateTime(l), Value::Duration(r)) => Value::DateTime(sub_datetime_duration(l, &r, fragment)?),
		(Value::Period(l), Value::Period(r)) => Value::Period(sub_period(&l, &r, fragment)?),
		(Value::Duration(l), Value::Duration(r)) => Value::Duration(sub_duration(&l, &r, fragment)?),
		(l, r) => {
			return Err(TypeError::BinaryOperatorNotApplicable {
				operator: BinaryOp::Sub,
				left: l.get_type(),
				right: r.get_type(),
				fragment: fragment.clone(),
			}
			.into());
		}
	};

	Ok(result)
}

fn widen_value(widen: Option<Widen>, value: &Value) -> Value {
	match widen {
		Some(widen) => widen.value(value.clone()),
		None => value.clone(),
	}
}

#[cfg(test)]
mod tests {
	use tessera_type::{DateTime, Duration, Period};

	use super::*;
	use crate::columnar::{CellContainer, Columns};

	fn plan(lhs: Type, rhs: Type) -> Result<SubtractPlan> {
		plan_subtract(Operand::new(0, lhs), Operand::new(1, rhs), Fragment::testing_empty())
	}

	fn block(left: ColumnData, right: ColumnData) -> Columns {
		Columns::new(vec![Column::new("lhs", left), Column::new("rhs", right)])
	}

	mod plan {
		use super::*;

		#[test]
		fn test_descriptions() {
			assert_eq!(
				plan(Type::Int4, Type::Int4).unwrap().to_string(),
				"SubIntsEvaluator[lhs=Attribute[channel=0], rhs=Attribute[channel=1]]"
			);
			assert_eq!(
				plan(Type::Int8, Type::Int8).unwrap().to_string(),
				"SubLongsEvaluator[lhs=Attribute[channel=0], rhs=Attribute[channel=1]]"
			);
			assert_eq!(
				plan(Type::Uint8, Type::Uint8).unwrap().to_string(),
				"SubUnsignedLongsEvaluator[lhs=Attribute[channel=0], rhs=Attribute[channel=1]]"
			);
			assert_eq!(
				plan(Type::Float8, Type::Float8).unwrap().to_string(),
				"SubDoublesEvaluator[lhs=Attribute[channel=0], rhs=Attribute[channel=1]]"
			);
			assert_eq!(
				plan(Type::DateTime, Type::Period).unwrap().to_string(),
				"SubDatetimesEvaluator[lhs=Attribute[channel=0], rhs=Attribute[channel=1]]"
			);
			assert_eq!(
				plan(Type::DateTime, Type::Duration).unwrap().to_string(),
				"SubDatetimesEvaluator[lhs=Attribute[channel=0], rhs=Attribute[channel=1]]"
			);
		}

		#[test]
		fn test_promotion() {
			let result = plan(Type::Int4, Type::Int8).unwrap();
			assert_eq!(result.output_type(), Type::Int8);
			assert_eq!(
				result.to_string(),
				"SubLongsEvaluator[lhs=CastIntToLongEvaluator[v=Attribute[channel=0]], rhs=Attribute[channel=1]]"
			);

			let result = plan(Type::Float8, Type::Int8).unwrap();
			assert_eq!(result.output_type(), Type::Float8);
			assert_eq!(
				result.to_string(),
				"SubDoublesEvaluator[lhs=Attribute[channel=0], rhs=CastLongToDoubleEvaluator[v=Attribute[channel=1]]]"
			);
		}

		#[test]
		fn test_fold_only() {
			for ty in [Type::Period, Type::Duration] {
				let result = plan(ty, ty).unwrap();
				assert!(result.is_fold_only());
				assert!(result.evaluator().is_none());
				assert_eq!(result.output_type(), ty);
				assert_eq!(result.to_string(), "Only folding possible, so there's no evaluator");
			}
		}

		#[test]
		fn test_null_operand() {
			let result = plan(Type::Undefined, Type::DateTime).unwrap();
			assert_eq!(result.output_type(), Type::DateTime);
			assert_eq!(result.to_string(), "LiteralsEvaluator[lit=null]");

			let result = plan(Type::Period, Type::Undefined).unwrap();
			assert!(!result.is_fold_only());
			assert_eq!(result.output_type(), Type::Period);

			assert_eq!(plan(Type::Undefined, Type::Undefined).unwrap().output_type(), Type::Undefined);
		}

		#[test]
		fn test_rejected_pairs() {
			let rejected = [
				(Type::Uint8, Type::Int4),
				(Type::Float8, Type::Uint8),
				(Type::DateTime, Type::DateTime),
				(Type::Period, Type::Duration),
				(Type::Duration, Type::Period),
				(Type::Period, Type::DateTime),
				(Type::Int4, Type::Period),
				(Type::DateTime, Type::Int8),
			];
			for (lhs, rhs) in rejected {
				let err = plan(lhs, rhs).unwrap_err();
				assert_eq!(err.code(), "OPERATOR_020", "{lhs} - {rhs}");
			}
		}
	}

	mod evaluate {
		use super::*;

		fn run(lhs: ColumnData, rhs: ColumnData) -> Result<Evaluated> {
			let columns = block(lhs.clone(), rhs.clone());
			let ctx = EvalContext::testing(&columns);
			let plan = plan(lhs.get_type(), rhs.get_type())?;
			plan.evaluator().unwrap().evaluate(&ctx)
		}

		#[test]
		fn test_ints() {
			let result = run(ColumnData::int4([10, -5]), ColumnData::int4([3, 7])).unwrap();
			assert_eq!(result.column.data, ColumnData::int4([7, -12]));
			assert!(result.warnings.is_empty());
		}

		#[test]
		fn test_ints_overflow() {
			let err = run(ColumnData::int4([i32::MIN]), ColumnData::int4([1])).unwrap_err();
			assert_eq!(err.code(), "NUMBER_002");
		}

		#[test]
		fn test_widened_longs() {
			let result = run(ColumnData::int4([5]), ColumnData::int8([i64::MAX])).unwrap();
			assert_eq!(result.column.data, ColumnData::int8([5 - i64::MAX]));
		}

		#[test]
		fn test_unsigned_underflow() {
			let err = run(ColumnData::uint8([0]), ColumnData::uint8([1])).unwrap_err();
			assert_eq!(err.code(), "NUMBER_002");
		}

		#[test]
		fn test_doubles() {
			let result = run(ColumnData::float8([1.5]), ColumnData::int4([2])).unwrap();
			assert_eq!(result.column.data, ColumnData::float8([-0.5]));
		}

		#[test]
		fn test_datetime_minus_period() {
			let lhs = DateTime::new(2024, 3, 31, 12, 0, 0, 0).unwrap();
			let result =
				run(ColumnData::datetime([lhs]), ColumnData::period([Period::from_months(1)])).unwrap();
			let expected = DateTime::new(2024, 2, 29, 12, 0, 0, 0).unwrap();
			assert_eq!(result.column.data, ColumnData::datetime([expected]));
		}

		#[test]
		fn test_datetime_minus_duration() {
			let lhs = DateTime::from_timestamp_millis(10_000);
			let result =
				run(ColumnData::datetime([lhs]), ColumnData::duration([Duration::from_millis(1_500)])).unwrap();
			assert_eq!(result.column.data, ColumnData::datetime([DateTime::from_timestamp_millis(8_500)]));
		}

		#[test]
		fn test_null_operand() {
			let result = run(ColumnData::undefined(2), ColumnData::int8([1, 2])).unwrap();
			assert_eq!(result.column.data, ColumnData::typed_undefined(Type::Int8, 2));
			assert!(result.warnings.is_empty());
		}

		#[test]
		fn test_multi_value() {
			let lhs = ColumnData::Int4(CellContainer::from_cells(vec![vec![10, 20]]));
			let result = run(lhs, ColumnData::int4([3])).unwrap();
			assert_eq!(result.column.data, ColumnData::typed_undefined(Type::Int4, 1));
			assert_eq!(result.warnings.len(), 2);
		}

		#[test]
		fn test_column_type_mismatch() {
			let columns = block(ColumnData::int8([1]), ColumnData::int4([1]));
			let ctx = EvalContext::testing(&columns);
			let plan = plan(Type::Int4, Type::Int4).unwrap();
			let err = plan.evaluator().unwrap().evaluate(&ctx).unwrap_err();
			assert_eq!(err.code(), "INTERNAL_001");
		}

		#[test]
		fn test_row_count_mismatch() {
			let columns = block(ColumnData::int4([1, 2]), ColumnData::int4([1]));
			let ctx = EvalContext::testing(&columns);
			let plan = plan(Type::Int4, Type::Int4).unwrap();
			let err = plan.evaluator().unwrap().evaluate(&ctx).unwrap_err();
			assert_eq!(err.code(), "INTERNAL_003");
		}
	}

	mod fold {
		use super::*;

		fn fold(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Result<Value> {
			fold_subtract(&lhs.into(), &rhs.into(), &Fragment::testing_empty())
		}

		#[test]
		fn test_numbers() {
			assert_eq!(fold(10i32, 3i32).unwrap(), Value::Int4(7));
			assert_eq!(fold(10i32, 3i64).unwrap(), Value::Int8(7));
			assert_eq!(fold(10u64, 3u64).unwrap(), Value::Uint8(7));
			assert_eq!(fold(1i64, 0.5f64).unwrap(), Value::Float8(0.5));
			assert_eq!(fold(i64::MIN, 1i64).unwrap_err().code(), "NUMBER_002");
		}

		#[test]
		fn test_periods() {
			let result = fold(Period::new(1, 2, 3), Period::new(0, 5, 1)).unwrap();
			assert_eq!(result, Value::Period(Period::new(1, -3, 2)));
			assert_eq!(fold(Period::from_years(i32::MIN), Period::from_years(1)).unwrap_err().code(), "NUMBER_002");
		}

		#[test]
		fn test_durations() {
			let result = fold(Duration::from_seconds(10), Duration::from_millis(500)).unwrap();
			assert_eq!(result, Value::Duration(Duration::from_millis(9_500)));
		}

		#[test]
		fn test_null() {
			assert_eq!(fold(Value::Undefined, Period::zero()).unwrap(), Value::Undefined);
			assert_eq!(fold(3i32, Value::Undefined).unwrap(), Value::Undefined);
		}

		#[test]
		fn test_rejected() {
			assert_eq!(fold(Period::zero(), Duration::zero()).unwrap_err().code(), "OPERATOR_020");
			assert_eq!(fold(1u64, 1i64).unwrap_err().code(), "OPERATOR_020");
		}
	}
}
