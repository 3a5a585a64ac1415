// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod arith;
mod context;
pub mod warnings;

pub use arith::{Evaluated, Operand, SubtractEvaluator, SubtractPlan, fold_subtract, plan_subtract};
pub use context::EvalContext;
pub use warnings::{Warning, Warnings};
