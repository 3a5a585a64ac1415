// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Range;

use rayon::prelude::*;
use tessera_type::{Fragment, Result};
use tracing::{debug, trace};

use crate::{
	columnar::{Cell, CellContainer},
	evaluate::{
		EvalContext,
		warnings::{MULTI_VALUE_CAUSE, Warnings},
	},
};

/// Applies `f` to every row whose operands are both single valued.
///
/// An undefined operand yields an undefined row. A multi valued operand
/// yields an undefined row and registers a warning. The left operand is
/// inspected first. Blocks longer than the configured `rows_per_task` are
/// split into row ranges evaluated on the rayon pool and stitched back in row
/// order, so the output and the warnings do not depend on the split.
pub(crate) fn binary<L, R, O, F>(
	ctx: &EvalContext<'_>,
	fragment: &Fragment,
	left: &CellContainer<L>,
	right: &CellContainer<R>,
	f: F,
) -> Result<(CellContainer<O>, Warnings)>
where
	L: Sync,
	R: Sync,
	O: Send,
	F: Fn(&L, &R) -> Result<O> + Sync,
{
	let limit = ctx.config.warning_limit;
	let ranges = split_rows(left.len(), ctx.config.rows_per_task);

	if ranges.len() <= 1 {
		return binary_range(fragment, limit, left, right, 0..left.len(), &f);
	}

	let chunks: Vec<Result<(CellContainer<O>, Warnings)>> = ranges
		.into_par_iter()
		.map(|range| {
			trace!(start = range.start, end = range.end, "evaluating row range");
			binary_range(fragment, limit, left, right, range, &f)
		})
		.collect();

	let mut output = CellContainer::with_capacity(left.len());
	let mut warnings = Warnings::new(fragment, limit);
	for chunk in chunks {
		let (values, chunk_warnings) = chunk?;
		output.append(values);
		warnings.merge(chunk_warnings);
	}

	Ok((output, warnings))
}

fn binary_range<L, R, O, F>(
	fragment: &Fragment,
	limit: usize,
	left: &CellContainer<L>,
	right: &CellContainer<R>,
	rows: Range<usize>,
	f: &F,
) -> Result<(CellContainer<O>, Warnings)>
where
	F: Fn(&L, &R) -> Result<O>,
{
	let mut output = CellContainer::with_capacity(rows.len());
	let mut warnings = Warnings::new(fragment, limit);

	for row in rows {
		let Some(l) = single(left.cell(row), row, &mut warnings) else {
			output.push_undefined();
			continue;
		};
		let Some(r) = single(right.cell(row), row, &mut warnings) else {
			output.push_undefined();
			continue;
		};
		output.push(f(l, r)?);
	}

	Ok((output, warnings))
}

fn single<'a, T>(cell: Cell<'a, T>, row: usize, warnings: &mut Warnings) -> Option<&'a T> {
	match cell {
		Cell::Single(value) => Some(value),
		Cell::Undefined => None,
		Cell::Multi(values) => {
			debug!(row, values = values.len(), "multi valued operand, row is undefined");
			warnings.register(MULTI_VALUE_CAUSE);
			None
		}
	}
}

/// Splits `rows` into consecutive ranges of at most `rows_per_task` rows,
/// a single range when `rows_per_task` is zero.
pub(crate) fn split_rows(rows: usize, rows_per_task: usize) -> Vec<Range<usize>> {
	if rows_per_task == 0 || rows <= rows_per_task {
		return vec![0..rows];
	}
	(0..rows).step_by(rows_per_task).map(|start| start..(start + rows_per_task).min(rows)).collect()
}
