// === PUBLIC CONTRACT ===
// The contract module is the stable surface for consumers
pub mod contract;

pub use contract::{error, model};

// === INTERNAL MODULES ===
// Exposed for the server binary and integration tests; external consumers
// should stick to `contract`.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
