//! Assignability checking for signature types.
//!
//! `CompatChecker` walks a `(source, target)` pair and dispatches on the two
//! tags. The per-tag rules live in `subtype_rules/`; this module owns the
//! entry points, the recursion guard and the result cache.
//!
//! Every rule is written once, generic over a [`SubtypeTracer`]. Boolean
//! queries run with [`FastTracer`]; [`CompatChecker::explain_failure`] reruns
//! the same rules with [`DiagnosticTracer`] to produce a reason.

use crate::diagnostics::{DiagnosticTracer, FastTracer, SubtypeFailureReason, SubtypeTracer};
use crate::intern::TypeInterner;
use crate::recursion::{RecursionGuard, RecursionProfile, RecursionResult};
use crate::relation_queries::RelationPolicy;
use crate::types::{TypeData, TypeId};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

/// Compatibility checker for one policy.
///
/// Cheap to build; create one per query or per batch of queries sharing a policy.
pub struct CompatChecker<'a> {
    pub(crate) interner: &'a TypeInterner,
    pub(crate) policy: RelationPolicy,
    guard: RecursionGuard<(TypeId, TypeId)>,
    /// Completed top-level results. Intermediate results are not cached
    /// because they may rest on a cycle assumption.
    cache: FxHashMap<(TypeId, TypeId), bool>,
    /// Nesting of signature comparisons; method origin only applies at depth 0.
    pub(crate) signature_depth: u32,
    /// Set once any query has hit the recursion limits.
    limit_reached: bool,
}

impl<'a> CompatChecker<'a> {
    pub fn new(interner: &'a TypeInterner, policy: RelationPolicy) -> Self {
        Self::with_profile(interner, policy, RecursionProfile::SubtypeCheck)
    }

    pub fn with_profile(
        interner: &'a TypeInterner,
        policy: RelationPolicy,
        profile: RecursionProfile,
    ) -> Self {
        CompatChecker {
            interner,
            policy,
            guard: RecursionGuard::with_profile(profile),
            cache: FxHashMap::default(),
            signature_depth: 0,
            limit_reached: false,
        }
    }

    pub fn policy(&self) -> RelationPolicy {
        self.policy
    }

    /// Change the policy. Cached results are dropped when it differs.
    pub fn set_policy(&mut self, policy: RelationPolicy) {
        if self.policy != policy {
            self.policy = policy;
            self.cache.clear();
        }
    }

    /// Whether any query so far gave up at the recursion limit.
    pub fn depth_exceeded(&self) -> bool {
        self.limit_reached
    }

    /// Run one top-level query with a fresh depth and iteration budget.
    fn run_query<T: SubtypeTracer>(&mut self, source: TypeId, target: TypeId, tracer: &mut T) -> bool {
        self.guard.reset();
        let result = self.check_assignable(source, target, tracer);
        self.limit_reached |= self.guard.is_exceeded();
        result
    }

    /// Check if `source` is assignable to `target`.
    pub fn is_assignable(&mut self, source: TypeId, target: TypeId) -> bool {
        if let Some(&cached) = self.cache.get(&(source, target)) {
            return cached;
        }

        let result = self.run_query(source, target, &mut FastTracer);
        debug!(
            source = source.0,
            target = target.0,
            result,
            policy = ?self.policy.flags,
            "CompatChecker::is_assignable"
        );
        // A query cut short by the limits is not a stable answer.
        if !self.guard.is_exceeded() {
            self.cache.insert((source, target), result);
        }
        result
    }

    /// Explain why `source` is not assignable to `target`.
    ///
    /// Returns `None` when the types are assignable.
    pub fn explain_failure(
        &mut self,
        source: TypeId,
        target: TypeId,
    ) -> Option<SubtypeFailureReason> {
        let mut tracer = DiagnosticTracer::new();
        if self.run_query(source, target, &mut tracer) {
            return None;
        }
        Some(
            tracer
                .take_failure()
                .unwrap_or(SubtypeFailureReason::TypeMismatch {
                    source_type: source,
                    target_type: target,
                }),
        )
    }

    /// Core relation, generic over the tracer.
    pub(crate) fn check_assignable<T: SubtypeTracer>(
        &mut self,
        source: TypeId,
        target: TypeId,
        tracer: &mut T,
    ) -> bool {
        if source == target {
            return true;
        }

        let key = (source, target);
        match self.guard.enter(key) {
            RecursionResult::Entered => {
                let result = self.check_assignable_inner(source, target, tracer);
                self.guard.leave(key);
                result
            }
            RecursionResult::Cycle => {
                trace!(source = source.0, target = target.0, "cycle: assuming related");
                true
            }
            RecursionResult::DepthExceeded | RecursionResult::IterationExceeded => {
                debug!(
                    source = source.0,
                    target = target.0,
                    depth = self.guard.depth(),
                    iterations = self.guard.iterations(),
                    "recursion limit reached"
                );
                tracer.on_mismatch(|| SubtypeFailureReason::DepthExceeded {
                    source_type: source,
                    target_type: target,
                })
            }
        }
    }

    fn check_assignable_inner<T: SubtypeTracer>(
        &mut self,
        source: TypeId,
        target: TypeId,
        tracer: &mut T,
    ) -> bool {
        // never is the bottom type.
        if source.is_never() {
            return true;
        }

        let (Some(source_data), Some(target_data)) =
            (self.interner.lookup(source), self.interner.lookup(target))
        else {
            return tracer.on_mismatch(|| SubtypeFailureReason::TypeMismatch {
                source_type: source,
                target_type: target,
            });
        };

        trace!(
            source = source.0,
            target = target.0,
            source_data = ?source_data,
            target_data = ?target_data,
            "check_assignable"
        );

        match (&source_data, &target_data) {
            (TypeData::Union(members), _) => {
                self.check_union_source(*members, target, tracer)
            }
            (_, TypeData::Union(members)) => {
                self.check_union_target(source, *members, tracer)
            }
            (TypeData::Intrinsic(s), TypeData::Intrinsic(t)) => {
                self.check_intrinsic(source, *s, target, *t, tracer)
            }
            (TypeData::Literal(value), _) => {
                self.check_literal(source, *value, target, tracer)
            }
            (TypeData::Named(s_def), TypeData::Named(t_def)) => {
                self.check_named(source, *s_def, target, *t_def, tracer)
            }
            (TypeData::Function(s_shape), TypeData::Function(t_shape)) => {
                self.check_function_types(source, *s_shape, target, *t_shape, tracer)
            }
            (TypeData::Construct(s_shape), TypeData::Construct(t_shape)) => {
                self.check_construct_types(source, *s_shape, target, *t_shape, tracer)
            }
            (TypeData::Function(_), TypeData::Construct(_))
            | (TypeData::Construct(_), TypeData::Function(_)) => {
                tracer.on_mismatch(|| SubtypeFailureReason::SignatureKindMismatch {
                    source_type: source,
                    target_type: target,
                })
            }
            _ => tracer.on_mismatch(|| SubtypeFailureReason::TypeMismatch {
                source_type: source,
                target_type: target,
            }),
        }
    }
}

#[cfg(test)]
#[path = "../tests/compat_tests.rs"]
mod tests;
