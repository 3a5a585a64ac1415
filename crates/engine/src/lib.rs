// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod columnar;
pub mod config;
pub mod evaluate;

pub use columnar::{Cell, CellContainer, Column, ColumnData, Columns};
pub use config::EvaluationConfig;
pub use evaluate::{
	EvalContext, Evaluated, Operand, SubtractEvaluator, SubtractPlan, Warning, Warnings, fold_subtract,
	plan_subtract,
};
pub use tessera_type::{Error, Result};
