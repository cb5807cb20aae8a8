//! Centralized limits and thresholds for the signature checker.
//!
//! Recursion limits for the relation engine itself live in
//! `fncompat_solver::recursion::RecursionProfile`, which reads the constants
//! below so there is a single place to tune them.

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum nesting depth for assignability checks.
///
/// Named definitions may refer to themselves through their members, and
/// signatures nest through parameter and return positions. Every nested
/// comparison enters the recursion guard; past this depth the check gives up
/// and reports "not assignable" with `depth_exceeded` set.
///
/// # TypeScript example
///
/// ```typescript
/// interface IA {
///   f(action: (p: IB) => void): IA; // IA's member returns IA again
/// }
/// ```
pub const MAX_SUBTYPE_DEPTH: u32 = 100;

/// Maximum number of comparisons performed by a single top-level query.
///
/// Bounds the work of pathological inputs (wide unions nested in many
/// parameter positions) independently of depth.
pub const MAX_SUBTYPE_ITERATIONS: u32 = 100_000;

// =============================================================================
// Capacity Limits
// =============================================================================

/// Inline capacity for union member buffers before spilling to the heap.
///
/// ```typescript
/// // Fits inline:
/// declare function m(x: void | number): void;
/// ```
pub const TYPE_LIST_INLINE: usize = 8;

/// Maximum union members printed in a diagnostic before eliding with `...`.
pub const UNION_MEMBER_DIAGNOSTIC_LIMIT: usize = 3;
