// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tessera_type::{Result, error::TypeError};

use crate::{
	columnar::{Column, Columns},
	config::EvaluationConfig,
};

/// The block an expression is evaluated over.
#[derive(Debug, Clone, Copy)]
pub struct EvalContext<'a> {
	pub columns: &'a Columns,
	pub config: &'a EvaluationConfig,
}

impl<'a> EvalContext<'a> {
	pub fn new(columns: &'a Columns, config: &'a EvaluationConfig) -> Self {
		Self {
			columns,
			config,
		}
	}

	pub fn testing(columns: &'a Columns) -> Self {
		Self::new(columns, &EvaluationConfig::DEFAULT)
	}

	pub fn row_count(&self) -> usize {
		self.columns.row_count()
	}

	pub fn column(&self, channel: usize) -> Result<&'a Column> {
		self.columns.get(channel).ok_or_else(|| {
			TypeError::ChannelOutOfBounds {
				channel,
				width: self.columns.width(),
			}
			.into()
		})
	}
}
