// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{fragment::Fragment, value::r#type::Type};

mod diagnostic;

/// A user facing description of a failure, placed on the fragment that
/// caused it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub fragment: Fragment,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "[{}] {}", self.code, self.message)?;
		if !matches!(self.fragment, Fragment::None) {
			write!(f, " at {} `{}`", self.fragment.location(), self.fragment.text())?;
		}
		if let Some(help) = &self.help {
			write!(f, "\nhelp: {}", help)?;
		}
		for note in &self.notes {
			write!(f, "\nnote: {}", note)?;
		}
		Ok(())
	}
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Box<Diagnostic>);

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		*self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Error(Box::new(diagnostic))
	}
}

impl From<TypeError> for Error {
	fn from(err: TypeError) -> Self {
		Error(Box::new(err.into_diagnostic()))
	}
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
	Sub,
}

impl Display for BinaryOp {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			BinaryOp::Sub => f.write_str("-"),
		}
	}
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemporalKind {
	DateTime,
	Duration,
}

impl Display for TemporalKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			TemporalKind::DateTime => f.write_str("datetime"),
			TemporalKind::Duration => f.write_str("duration"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
	#[error("Cannot apply {operator} operator to {left} and {right}")]
	BinaryOperatorNotApplicable {
		operator: BinaryOp,
		left: Type,
		right: Type,
		fragment: Fragment,
	},

	#[error("Number out of range for {target}")]
	NumberOutOfRange {
		target: Type,
		fragment: Fragment,
	},

	#[error("{kind} out of range")]
	TemporalOutOfRange {
		kind: TemporalKind,
		fragment: Fragment,
	},

	#[error("Column on channel {channel} holds {actual}, expected {expected}")]
	ColumnTypeMismatch {
		channel: usize,
		expected: Type,
		actual: Type,
	},

	#[error("Column on channel {channel} has {actual} rows, expected {expected}")]
	RowCountMismatch {
		channel: usize,
		expected: usize,
		actual: usize,
	},

	#[error("Channel {channel} is out of bounds for a block of {width} columns")]
	ChannelOutOfBounds {
		channel: usize,
		width: usize,
	},
}
