// Copyright 2024-2025 Irreducible Inc.

/// Get the log2 of the number of circuit instances from `GKR_LOG_INSTANCES`.
///
/// Panics if the variable is set but is not a valid integer.
pub fn get_log_instances() -> Option<usize> {
	match std::env::var("GKR_LOG_INSTANCES") {
		Ok(val) => Some(
			val.parse::<usize>()
				.expect("GKR_LOG_INSTANCES must be a valid integer"),
		),
		Err(_) => None,
	}
}
