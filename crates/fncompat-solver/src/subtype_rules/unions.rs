//! Union type assignability.
//!
//! Only the two quantifier rules are needed here; unions are already
//! flattened and deduplicated by the interner.

use crate::compat::CompatChecker;
use crate::diagnostics::{FastTracer, SubtypeFailureReason, SubtypeTracer};
use crate::types::{TypeId, TypeListId};

impl<'a> CompatChecker<'a> {
    /// `(A | B | C) <: T` if `A <: T` and `B <: T` and `C <: T`.
    pub(crate) fn check_union_source<T: SubtypeTracer>(
        &mut self,
        members: TypeListId,
        target: TypeId,
        tracer: &mut T,
    ) -> bool {
        let members = self.interner.type_list(members);
        for &member in members.iter() {
            // The failing member's own reason is the most useful one.
            if !self.check_assignable(member, target, tracer) {
                return false;
            }
        }
        true
    }

    /// `S <: (A | B | C)` if `S <: A` or `S <: B` or `S <: C`.
    ///
    /// Members are tried with the fast tracer so a rejected alternative
    /// leaves no stale reason behind.
    pub(crate) fn check_union_target<T: SubtypeTracer>(
        &mut self,
        source: TypeId,
        members: TypeListId,
        tracer: &mut T,
    ) -> bool {
        let members = self.interner.type_list(members);
        for &member in members.iter() {
            if self.check_assignable(source, member, &mut FastTracer) {
                return true;
            }
        }
        tracer.on_mismatch(|| SubtypeFailureReason::NoUnionMemberMatches {
            source_type: source,
            target_union_members: members.to_vec(),
        })
    }
}
