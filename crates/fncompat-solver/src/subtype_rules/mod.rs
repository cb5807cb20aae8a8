//! Per-tag assignability rules, split out of `compat.rs`.
//!
//! Each file adds an `impl CompatChecker` block:
//!
//! - `intrinsics`: `void`, `never`, primitives, literals and nominal named types
//! - `unions`: union sources and targets
//! - `functions`: call and construct signature comparison

mod functions;
mod intrinsics;
mod unions;
