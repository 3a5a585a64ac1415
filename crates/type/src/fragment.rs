// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Line of a fragment within its statement, 1-based.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StatementLine(pub u32);

/// Column of a fragment within its line, 1-based.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StatementColumn(pub u32);

/// Source text an expression was built from, used to place diagnostics and
/// warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fragment {
	/// No fragment information available
	#[default]
	None,

	/// Fragment from a statement with position information
	Statement {
		text: String,
		line: StatementLine,
		column: StatementColumn,
	},

	/// Fragment from internal/runtime code
	Internal {
		text: String,
	},
}

impl Fragment {
	pub fn statement(text: impl Into<String>, line: u32, column: u32) -> Self {
		Fragment::Statement {
			text: text.into(),
			line: StatementLine(line),
			column: StatementColumn(column),
		}
	}

	pub fn internal(text: impl Into<String>) -> Self {
		Fragment::Internal {
			text: text.into(),
		}
	}

	pub fn testing_empty() -> Self {
		Fragment::None
	}

	pub fn text(&self) -> &str {
		match self {
			Fragment::None => "",
			Fragment::Statement {
				text,
				..
			}
			| Fragment::Internal {
				text,
			} => text,
		}
	}

	pub fn line(&self) -> Option<StatementLine> {
		match self {
			Fragment::Statement {
				line,
				..
			} => Some(*line),
			_ => None,
		}
	}

	pub fn column(&self) -> Option<StatementColumn> {
		match self {
			Fragment::Statement {
				column,
				..
			} => Some(*column),
			_ => None,
		}
	}

	/// `line:column` of the fragment, `-1:-1` when it has no position.
	pub fn location(&self) -> String {
		match (self.line(), self.column()) {
			(Some(line), Some(column)) => format!("{}:{}", line.0, column.0),
			_ => "-1:-1".to_string(),
		}
	}
}

impl Display for Fragment {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.text())
	}
}
