// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, IntoDiagnostic, TemporalKind, TypeError};
use crate::{fragment::Fragment, value::r#type::Type};

fn value_range(ty: Type) -> Option<&'static str> {
	match ty {
		Type::Int4 => Some("-2147483648 to 2147483647"),
		Type::Int8 => Some("-9223372036854775808 to 9223372036854775807"),
		Type::Uint8 => Some("0 to 18446744073709551615"),
		Type::Period => Some("-2147483648 to 2147483647 per component"),
		_ => None,
	}
}

impl IntoDiagnostic for TypeError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			TypeError::BinaryOperatorNotApplicable {
				operator,
				left,
				right,
				fragment,
			} => {
				let mut notes = vec![];
				if left.is_temporal() || right.is_temporal() {
					notes.push("datetime accepts only a period or a duration on the right".to_string());
					notes.push("period and duration only combine with their own type".to_string());
				}
				if left == Type::Uint8 || right == Type::Uint8 {
					notes.push("uint8 only combines with uint8".to_string());
				}
				Diagnostic {
					code: "OPERATOR_020".to_string(),
					message: format!("Cannot apply {} operator to {} and {}", operator, left, right),
					fragment,
					label: Some(format!("{} {} {} is not defined", left, operator, right)),
					help: Some("Cast one of the operands so both sides have compatible types".to_string()),
					notes,
				}
			}

			TypeError::NumberOutOfRange {
				target,
				fragment,
			} => {
				let help = match value_range(target) {
					Some(range) => format!("The result must be in range [{}] for {}", range, target),
					None => format!("The result does not fit {}", target),
				};
				Diagnostic {
					code: "NUMBER_002".to_string(),
					message: format!("Number out of range for {}", target),
					fragment,
					label: Some("arithmetic overflow".to_string()),
					help: Some(help),
					notes: vec![
						"Integer arithmetic is exact, results never wrap or saturate".to_string(),
					],
				}
			}

			TypeError::TemporalOutOfRange {
				kind,
				fragment,
			} => {
				let help = match kind {
					TemporalKind::DateTime => "The resulting instant is outside the supported calendar range",
					TemporalKind::Duration => "The resulting duration exceeds the supported number of seconds",
				};
				Diagnostic {
					code: "TEMPORAL_001".to_string(),
					message: format!("{} out of range", kind),
					fragment,
					label: Some(format!("{} overflow", kind)),
					help: Some(help.to_string()),
					notes: vec![],
				}
			}

			TypeError::ColumnTypeMismatch {
				channel,
				expected,
				actual,
			} => Diagnostic {
				code: "INTERNAL_001".to_string(),
				message: format!("Column on channel {} holds {}, expected {}", channel, actual, expected),
				fragment: Fragment::None,
				label: None,
				help: Some("The input block does not match the types the expression was bound to".to_string()),
				notes: vec![],
			},

			TypeError::RowCountMismatch {
				channel,
				expected,
				actual,
			} => Diagnostic {
				code: "INTERNAL_003".to_string(),
				message: format!("Column on channel {} has {} rows, expected {}", channel, actual, expected),
				fragment: Fragment::None,
				label: None,
				help: Some("All columns of a block must have the same number of rows".to_string()),
				notes: vec![],
			},

			TypeError::ChannelOutOfBounds {
				channel,
				width,
			} => Diagnostic {
				code: "INTERNAL_002".to_string(),
				message: format!("Channel {} is out of bounds for a block of {} columns", channel, width),
				fragment: Fragment::None,
				label: None,
				help: None,
				notes: vec![],
			},
		}
	}
}
