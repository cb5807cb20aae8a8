//! Unified relation query entrypoints.
//!
//! Callers ask for a relation by kind and policy instead of wiring a
//! `CompatChecker` themselves.

use crate::compat::CompatChecker;
use crate::diagnostics::SubtypeFailureReason;
use crate::intern::TypeInterner;
use crate::types::TypeId;
use bitflags::bitflags;

bitflags! {
    /// Compatibility context switches.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RelationFlags: u8 {
        /// Compare plain function parameters contravariantly.
        /// When cleared, every parameter is bivariant.
        const STRICT_FUNCTION_TYPES = 1 << 0;
        /// The outermost comparison is between members where at least one is
        /// declared with method syntax; its parameters become bivariant.
        const METHOD_ORIGIN = 1 << 1;
    }
}

/// Relation categories supported by the unified query API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// Source assignable to target.
    Assignable,
    /// Assignable in both directions.
    Identical,
}

/// Policy knobs for relation checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelationPolicy {
    pub flags: RelationFlags,
}

impl Default for RelationPolicy {
    fn default() -> Self {
        Self {
            flags: RelationFlags::STRICT_FUNCTION_TYPES,
        }
    }
}

impl RelationPolicy {
    pub fn from_flags(flags: RelationFlags) -> Self {
        Self { flags }
    }

    /// Strict function types off: all parameters bivariant.
    pub fn lenient() -> Self {
        Self::from_flags(RelationFlags::empty())
    }

    pub fn with_strict_function_types(mut self, strict: bool) -> Self {
        self.flags.set(RelationFlags::STRICT_FUNCTION_TYPES, strict);
        self
    }

    pub fn with_method_origin(mut self, method_origin: bool) -> Self {
        self.flags.set(RelationFlags::METHOD_ORIGIN, method_origin);
        self
    }

    #[inline]
    pub fn strict_function_types(self) -> bool {
        self.flags.contains(RelationFlags::STRICT_FUNCTION_TYPES)
    }

    #[inline]
    pub fn method_origin(self) -> bool {
        self.flags.contains(RelationFlags::METHOD_ORIGIN)
    }
}

/// Result of a relation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationResult {
    pub kind: RelationKind,
    pub related: bool,
    /// The answer is `false` because a recursion limit was hit, not because
    /// a mismatch was found.
    pub depth_exceeded: bool,
}

impl RelationResult {
    #[inline]
    pub fn is_related(self) -> bool {
        self.related
    }
}

/// Query a relation between two types.
pub fn query_relation(
    interner: &TypeInterner,
    source: TypeId,
    target: TypeId,
    kind: RelationKind,
    policy: RelationPolicy,
) -> RelationResult {
    let mut checker = CompatChecker::new(interner, policy);
    let related = match kind {
        RelationKind::Assignable => checker.is_assignable(source, target),
        RelationKind::Identical => {
            checker.is_assignable(source, target) && checker.is_assignable(target, source)
        }
    };

    RelationResult {
        kind,
        related,
        depth_exceeded: checker.depth_exceeded(),
    }
}

/// Check if `source` is assignable to `target` under `policy`.
pub fn is_assignable(
    interner: &TypeInterner,
    source: TypeId,
    target: TypeId,
    policy: RelationPolicy,
) -> bool {
    query_relation(interner, source, target, RelationKind::Assignable, policy).is_related()
}

/// Explain why `source` is not assignable to `target`.
///
/// Returns `None` when the types are assignable.
pub fn explain_assignability(
    interner: &TypeInterner,
    source: TypeId,
    target: TypeId,
    policy: RelationPolicy,
) -> Option<SubtypeFailureReason> {
    CompatChecker::new(interner, policy).explain_failure(source, target)
}

#[cfg(test)]
#[path = "../tests/relation_queries_tests.rs"]
mod tests;
