// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// The values one row of a column contributes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Cell<'a, T> {
	/// No value, the row is null
	Undefined,
	Single(&'a T),
	/// Two or more values, in order
	Multi(&'a [T]),
}

/// Values of a column in row order. A row holds zero, one or many values;
/// `offsets[row]..offsets[row + 1]` addresses them in `values`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellContainer<T> {
	values: Vec<T>,
	offsets: Vec<usize>,
}

impl<T> Default for CellContainer<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> CellContainer<T> {
	pub fn new() -> Self {
		Self {
			values: Vec::new(),
			offsets: vec![0],
		}
	}

	pub fn with_capacity(rows: usize) -> Self {
		let mut offsets = Vec::with_capacity(rows + 1);
		offsets.push(0);
		Self {
			values: Vec::with_capacity(rows),
			offsets,
		}
	}

	pub fn from_cells<I, C>(cells: I) -> Self
	where
		I: IntoIterator<Item = C>,
		C: IntoIterator<Item = T>,
	{
		let mut result = Self::new();
		for cell in cells {
			result.push_many(cell);
		}
		result
	}

	pub fn from_options(values: impl IntoIterator<Item = Option<T>>) -> Self {
		let mut result = Self::new();
		for value in values {
			result.push_option(value);
		}
		result
	}

	/// Number of rows.
	pub fn len(&self) -> usize {
		self.offsets.len().saturating_sub(1)
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn push(&mut self, value: T) {
		self.values.push(value);
		self.offsets.push(self.values.len());
	}

	pub fn push_undefined(&mut self) {
		self.offsets.push(self.values.len());
	}

	pub fn push_option(&mut self, value: Option<T>) {
		match value {
			Some(value) => self.push(value),
			None => self.push_undefined(),
		}
	}

	pub fn push_many(&mut self, values: impl IntoIterator<Item = T>) {
		self.values.extend(values);
		self.offsets.push(self.values.len());
	}

	pub fn values(&self, row: usize) -> &[T] {
		&self.values[self.offsets[row]..self.offsets[row + 1]]
	}

	pub fn value_count(&self, row: usize) -> usize {
		self.offsets[row + 1] - self.offsets[row]
	}

	pub fn cell(&self, row: usize) -> Cell<'_, T> {
		match self.values(row) {
			[] => Cell::Undefined,
			[value] => Cell::Single(value),
			values => Cell::Multi(values),
		}
	}

	/// The value of a single valued row.
	pub fn get(&self, row: usize) -> Option<&T> {
		match self.cell(row) {
			Cell::Single(value) => Some(value),
			_ => None,
		}
	}

	/// Appends the rows of `other` after the rows of `self`.
	pub fn append(&mut self, other: CellContainer<T>) {
		let base = self.values.len();
		self.values.extend(other.values);
		self.offsets.extend(other.offsets.into_iter().skip(1).map(|offset| offset + base));
	}

	/// Applies `f` to every value, keeping the cell structure.
	pub fn map<U>(&self, f: impl Fn(&T) -> U) -> CellContainer<U> {
		CellContainer {
			values: self.values.iter().map(f).collect(),
			offsets: self.offsets.clone(),
		}
	}
}

impl<T> FromIterator<T> for CellContainer<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let iter = iter.into_iter();
		let mut result = Self::with_capacity(iter.size_hint().0);
		for value in iter {
			result.push(value);
		}
		result
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_cells() {
		let container = CellContainer::from_cells(vec![vec![1], vec![], vec![2, 3]]);
		assert_eq!(container.len(), 3);
		assert_eq!(container.cell(0), Cell::Single(&1));
		assert_eq!(container.cell(1), Cell::Undefined);
		assert_eq!(container.cell(2), Cell::Multi(&[2, 3][..]));
		assert_eq!(container.value_count(2), 2);
	}

	#[test]
	fn test_get_only_single() {
		let container = CellContainer::from_options([Some(7), None]);
		assert_eq!(container.get(0), Some(&7));
		assert_eq!(container.get(1), None);
	}

	#[test]
	fn test_append_rebases_offsets() {
		let mut left = CellContainer::from_cells(vec![vec![1, 2], vec![3]]);
		let right = CellContainer::from_cells(vec![vec![], vec![4, 5, 6]]);
		left.append(right);
		assert_eq!(left.len(), 4);
		assert_eq!(left.values(0), &[1, 2]);
		assert_eq!(left.values(1), &[3]);
		assert_eq!(left.cell(2), Cell::Undefined);
		assert_eq!(left.values(3), &[4, 5, 6]);
	}

	#[test]
	fn test_map_keeps_structure() {
		let container = CellContainer::from_cells(vec![vec![1i32, 2], vec![], vec![3]]);
		let mapped = container.map(|v| *v as i64 * 10);
		assert_eq!(mapped.values(0), &[10i64, 20]);
		assert_eq!(mapped.cell(1), Cell::Undefined);
		assert_eq!(mapped.get(2), Some(&30));
	}

	#[test]
	fn test_empty() {
		let container: CellContainer<i32> = CellContainer::new();
		assert!(container.is_empty());
		assert_eq!(container, CellContainer::default());
	}
}
