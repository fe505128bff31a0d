// Common test utilities and fixtures

pub mod fixtures;

// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::TestSite;
#[allow(unused_imports)]
pub use helpers::{assert_valid_record, build_site, capture_warnings};
