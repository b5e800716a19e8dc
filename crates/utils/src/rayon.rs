// Copyright 2024-2025 Irreducible Inc.

use std::{env, sync::OnceLock};

/// Configures the global rayon pool from `RAYON_NUM_THREADS`.
///
/// With a single thread the pool is built with `use_current_thread`, so the prover runs on the
/// calling thread. This keeps profiles and debugger sessions free of worker hand-offs.
///
/// rayon refuses to initialize the global pool twice, so the first outcome is memoized and
/// returned by reference on every call (`ThreadPoolBuildError` is not `Clone`). Call it at the
/// start of `main` or of a benchmark.
pub fn adjust_thread_pool() -> &'static Result<(), rayon::ThreadPoolBuildError> {
	static ONCE_GUARD: OnceLock<Result<(), rayon::ThreadPoolBuildError>> = OnceLock::new();

	ONCE_GUARD.get_or_init(|| match env::var("RAYON_NUM_THREADS") {
		Ok(v) if v == "1" => rayon::ThreadPoolBuilder::new()
			.num_threads(1)
			.use_current_thread()
			.build_global(),
		_ => Ok(()),
	})
}

/// Minimum number of items handed to one rayon task in the hot loops.
///
/// Below this size the fork/join overhead dominates a handful of field multiplications.
pub fn min_parallel_chunk(total: usize) -> usize {
	let threads = rayon::current_num_threads().max(1);
	(total / (4 * threads)).max(64)
}
