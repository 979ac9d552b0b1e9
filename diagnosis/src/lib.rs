//! Course diagnosis engine for the Mori no Hibi salon site.
//!
//! This crate implements the quiz that maps a visitor's answers to one of the
//! salon's recommended course packages. The architecture enforces a strict
//! separation:
//!
//! - **[`core`]**: Pure, deterministic logic (tally accumulation, the session
//!   state machine, the decision table, content invariants). No I/O, fully
//!   testable in isolation.
//! - **[`io`]**: Side-effecting operations (config and content files, schema
//!   validation, scaffolding). Isolated to enable fixtures in tests.
//!
//! Orchestration modules ([`simulate`], [`validate`], [`interactive`])
//! coordinate core logic with I/O to implement CLI commands.

pub mod content;
pub mod core;
pub mod error;
pub mod interactive;
pub mod io;
pub mod logging;
pub mod simulate;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod validate;
