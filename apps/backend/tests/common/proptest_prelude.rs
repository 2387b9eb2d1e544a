// Shared proptest configuration for the integration tests.
//
// PROPTEST_CASES sets cases per property (default 8); PROPTEST_MAX_SHRINK_MS
// caps shrinking time. Generators build valid deals and hands directly, so
// no cases are rejected.

use proptest::prelude::ProptestConfig;

pub fn proptest_prelude_config() -> ProptestConfig {
    let base = ProptestConfig::default();

    let cases = env_u32("PROPTEST_CASES").unwrap_or(8).max(1);
    let max_shrink_time = env_u32("PROPTEST_MAX_SHRINK_MS").unwrap_or(base.max_shrink_time);

    ProptestConfig {
        // Integration test binaries have no source dir for regression files.
        failure_persistence: None,
        cases,
        max_shrink_time,
        ..base
    }
}

fn env_u32(key: &str) -> Option<u32> {
    std::env::var(key).ok().and_then(|s| s.parse().ok())
}
