// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{DateTime, Duration, Period, Type};

pub trait GetType {
	fn get_type() -> Type;
}

impl GetType for i32 {
	fn get_type() -> Type {
		Type::Int4
	}
}

impl GetType for i64 {
	fn get_type() -> Type {
		Type::Int8
	}
}

impl GetType for u64 {
	fn get_type() -> Type {
		Type::Uint8
	}
}

impl GetType for f64 {
	fn get_type() -> Type {
		Type::Float8
	}
}

impl GetType for DateTime {
	fn get_type() -> Type {
		Type::DateTime
	}
}

impl GetType for Period {
	fn get_type() -> Type {
		Type::Period
	}
}

impl GetType for Duration {
	fn get_type() -> Type {
		Type::Duration
	}
}
