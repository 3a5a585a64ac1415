// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Exact subtraction for fixed width integers; `None` when the true
/// difference is not representable.
pub trait SafeSub: Sized {
	fn checked_sub(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_safe_sub {
	($($t:ty),*) => {
		$(
			impl SafeSub for $t {
				fn checked_sub(self, rhs: Self) -> Option<Self> {
					<$t>::checked_sub(self, rhs)
				}
			}
		)*
	};
}

impl_safe_sub!(i32, i64);
