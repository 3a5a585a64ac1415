// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod binary;
mod subtract;
mod widen;

pub use subtract::{Evaluated, Operand, SubtractEvaluator, SubtractPlan, fold_subtract, plan_subtract};
