// Copyright 2024-2025 Irreducible Inc.

/// Returns the base-2 logarithm of `val` if it is a power of two.
pub const fn checked_log_2(val: usize) -> Option<usize> {
	if val.is_power_of_two() {
		Some(val.trailing_zeros() as usize)
	} else {
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_checked_log2() {
		assert_eq!(checked_log_2(1), Some(0));
		assert_eq!(checked_log_2(2), Some(1));
		assert_eq!(checked_log_2(64), Some(6));
		assert_eq!(checked_log_2(0), None);
		assert_eq!(checked_log_2(6), None);
	}
}
