// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod subtract;

pub use subtract::{sub_datetime_duration, sub_datetime_period, sub_duration, sub_period};
