// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

pub const DEFAULT_WARNING_LIMIT: usize = 20;
pub const DEFAULT_ROWS_PER_TASK: usize = 4096;

/// Knobs for evaluating expressions over a block of columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
	/// Distinct warning causes recorded per expression before further ones
	/// are dropped
	pub warning_limit: usize,
	/// Rows handed to one worker when a block is evaluated in parallel, `0`
	/// evaluates every block on the calling thread
	pub rows_per_task: usize,
}

impl EvaluationConfig {
	pub const DEFAULT: EvaluationConfig = EvaluationConfig {
		warning_limit: DEFAULT_WARNING_LIMIT,
		rows_per_task: DEFAULT_ROWS_PER_TASK,
	};

	pub fn with_warning_limit(mut self, limit: usize) -> Self {
		self.warning_limit = limit;
		self
	}

	pub fn with_rows_per_task(mut self, rows: usize) -> Self {
		self.rows_per_task = rows;
		self
	}
}

impl Default for EvaluationConfig {
	fn default() -> Self {
		Self::DEFAULT
	}
}
