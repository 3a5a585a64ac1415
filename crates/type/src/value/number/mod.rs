// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod safe;
mod subtract;
mod unsigned;

pub use safe::sub::SafeSub;
pub use subtract::{sub_float8, sub_int4, sub_int8};
pub use unsigned::{narrow_uint8, sub_uint8};
