// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tessera_type::Fragment;
use tracing::debug;

pub const MULTI_VALUE_CAUSE: &str = "single-value function encountered multi-value";

/// A deduplicated warning attached to the output of one block evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
	pub message: String,
	/// Recorded occurrences of this message
	pub count: usize,
}

/// Collects per-row failures of one expression over one block.
///
/// The first failure also records a header naming the expression. At most
/// `limit` failures are recorded, later ones are only counted as suppressed.
#[derive(Debug, Clone)]
pub struct Warnings {
	location: String,
	header: String,
	limit: usize,
	recorded: IndexMap<String, usize>,
	causes: Vec<String>,
	suppressed: usize,
}

impl Warnings {
	pub fn new(fragment: &Fragment, limit: usize) -> Self {
		let location = fragment.location();
		let header = format!(
			"Line {}: evaluation of [{}] failed, treating result as null. Only first {} failures recorded.",
			location,
			fragment.text(),
			limit
		);
		Self {
			location,
			header,
			limit,
			recorded: IndexMap::new(),
			causes: Vec::new(),
			suppressed: 0,
		}
	}

	/// Registers one failure with the given cause.
	pub fn register(&mut self, cause: &str) {
		let message = format!("Line {}: {}", self.location, cause);
		self.record(message);
	}

	fn record(&mut self, message: String) {
		if self.causes.len() >= self.limit {
			if self.suppressed == 0 {
				debug!(limit = self.limit, "warning limit reached, suppressing further warnings");
			}
			self.suppressed += 1;
			return;
		}

		if self.causes.is_empty() {
			self.recorded.insert(self.header.clone(), 1);
		}
		*self.recorded.entry(message.clone()).or_insert(0) += 1;
		self.causes.push(message);
	}

	/// Appends the failures of a later row range.
	pub fn merge(&mut self, other: Warnings) {
		let suppressed = other.suppressed;
		for message in other.causes {
			self.record(message);
		}
		self.suppressed += suppressed;
	}

	/// Failures recorded so far.
	pub fn added(&self) -> usize {
		self.causes.len()
	}

	/// Failures dropped after the limit was reached.
	pub fn suppressed(&self) -> usize {
		self.suppressed
	}

	pub fn is_empty(&self) -> bool {
		self.causes.is_empty() && self.suppressed == 0
	}

	pub fn into_records(self) -> Vec<Warning> {
		self.recorded
			.into_iter()
			.map(|(message, count)| Warning {
				message,
				count,
			})
			.collect()
	}
}
