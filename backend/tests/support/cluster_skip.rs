//! Skip policy for suites that need the embedded PostgreSQL cluster.
//!
//! Cluster setup failures fail the test unless `SKIP_TEST_CLUSTER` is truthy,
//! in which case the suite prints a marker and passes.

/// Variable that opts out of cluster-backed tests.
pub const SKIP_TEST_CLUSTER_VAR: &str = "SKIP_TEST_CLUSTER";

/// True when `SKIP_TEST_CLUSTER` is "1", "true" or "yes" (any case).
pub fn should_skip_test_cluster() -> bool {
    std::env::var(SKIP_TEST_CLUSTER_VAR)
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Turn a setup failure into a skip (`None`) or a panic.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set {SKIP_TEST_CLUSTER_VAR}=1 to skip.");
    }
}
