// tests/support/mod.rs
// Shared by several integration test binaries; not every binary uses every
// helper.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(dead_code, unused_imports)]
pub mod records;

#[allow(dead_code, unused_imports)]
pub mod declarations;

#[allow(unused_imports)]
pub use mocks::*;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use records::*;
#[allow(unused_imports)]
pub use declarations::*;
