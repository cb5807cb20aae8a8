//! Signature Compatibility Solver
//!
//! Decides whether one function-like type is assignable to another under the
//! rules of a TypeScript-style structural type system:
//!
//! - return types are covariant, and any return fits a `void` return
//! - parameters are contravariant under strict function types, bivariant for
//!   method-declared signatures, method-originated comparisons and lenient mode
//! - a source may declare fewer parameters than the target
//! - callback parameters are compared signature-against-signature
//! - construct signatures compare parameters and returns bivariantly
//!
//! Types are interned into `TypeId` handles by [`TypeInterner`]; interfaces
//! and classes live in the [`def::DefinitionStore`] and are nominal.
//!
//! Entry points: [`is_assignable`], [`explain_assignability`],
//! [`query_relation`] and [`check_implements`].

pub mod class_hierarchy;
pub mod compat;
pub mod def;
pub mod diagnostics;
pub mod error;
pub mod format;
mod intern;
pub mod options;
pub mod recursion;
pub mod relation_queries;
mod subtype_rules;
pub mod types;

pub use class_hierarchy::{ClassHierarchy, ImplementsReport, check_implements};
pub use compat::CompatChecker;
pub use def::{DefId, DefKind, DefinitionInfo, DefinitionStore};
pub use diagnostics::{
    DiagnosticTracer, FastTracer, SignatureKind, SubtypeFailureReason, SubtypeTracer,
};
pub use error::SignatureError;
pub use format::TypeFormatter;
pub use intern::TypeInterner;
pub use options::RelationOptions;
pub use relation_queries::{
    RelationFlags, RelationKind, RelationPolicy, RelationResult, explain_assignability,
    is_assignable, query_relation,
};
pub use types::*;

#[cfg(test)]
#[path = "../tests/support.rs"]
pub(crate) mod test_support;

#[cfg(test)]
#[path = "../tests/snippet_tests.rs"]
mod snippet_tests;

#[cfg(test)]
#[path = "../tests/concurrent_tests.rs"]
mod concurrent_tests;
