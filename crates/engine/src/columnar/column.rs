// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};
use tessera_type::{Fragment, Type};

use crate::columnar::ColumnData;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
	pub name: Fragment,
	pub data: ColumnData,
}

impl Column {
	pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
		Self {
			name: Fragment::internal(name),
			data,
		}
	}

	pub fn get_type(&self) -> Type {
		self.data.get_type()
	}

	pub fn data(&self) -> &ColumnData {
		&self.data
	}
}

/// A block of equally long columns, addressed by channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Columns(Vec<Column>);

impl Columns {
	pub fn new(columns: Vec<Column>) -> Self {
		Self(columns)
	}

	pub fn get(&self, channel: usize) -> Option<&Column> {
		self.0.get(channel)
	}

	pub fn width(&self) -> usize {
		self.0.len()
	}

	pub fn row_count(&self) -> usize {
		self.0.first().map(|c| c.data.len()).unwrap_or(0)
	}

	pub fn iter(&self) -> impl Iterator<Item = &Column> {
		self.0.iter()
	}
}

impl FromIterator<Column> for Columns {
	fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}
