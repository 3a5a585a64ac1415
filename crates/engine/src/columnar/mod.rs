// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod column;
pub mod data;

pub use column::{Column, Columns};
pub use data::{Cell, CellContainer, ColumnData};
