//! ASCII cube (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, tests and
//! benches can use `ascii_cube::{core,term,types}`.

pub use ascii_cube_core as core;
pub use ascii_cube_term as term;
pub use ascii_cube_types as types;
