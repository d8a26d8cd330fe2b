//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: isolated in-memory SQL database with migrations applied
//! - `TestDataBuilder`: deterministic test data generation
//! - `assertions`: custom assertion helpers
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let email = builder.email("alice");
//!     let product_name = builder.name("product", "main");
//! }
//! ```

mod database;

pub use database::TestDatabase;

/// Builder for test data with deterministic randomization
///
/// Values derive from a seed, so a test produces the same data on every run
/// while different tests do not collide.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (seed is the hash of the name)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_product");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// `"test-{prefix}-{seed}-{suffix}"`
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let name = TestDataBuilder::new(7).name("product", "main");
    /// assert_eq!(name, "test-product-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Unique-per-test email address
    pub fn email(&self, local: &str) -> String {
        format!("{}.{}@example.test", local, self.seed)
    }

    /// A password that differs between tests
    pub fn password(&self) -> String {
        format!("pw-{:x}-secret", self.seed)
    }
}

/// Test assertion helpers
pub mod assertions {
    use entity_id::EntityId;

    /// Assert that two identifiers are equal with a nice error message
    pub fn assert_id_eq(actual: EntityId, expected: EntityId, context: &str) {
        assert_eq!(
            actual, expected,
            "{}: expected id {}, got {}",
            context, expected, actual
        );
    }
}
