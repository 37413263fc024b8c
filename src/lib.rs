//! blockfall (workspace facade crate).
//!
//! Re-exports the member crates under one roof so the binary and the
//! integration tests can address everything as `blockfall::{core,...}`.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
