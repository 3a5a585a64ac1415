// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod error;
pub mod fragment;
pub mod value;

pub use error::{Error, Result};
pub use fragment::Fragment;
pub use value::{
	Value,
	datetime::DateTime,
	duration::Duration,
	period::Period,
	r#type::{GetType, Type},
};
