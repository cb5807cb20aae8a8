//! Intrinsic, literal and named type assignability.

use crate::compat::CompatChecker;
use crate::def::DefId;
use crate::diagnostics::{SubtypeFailureReason, SubtypeTracer};
use crate::types::{IntrinsicKind, LiteralValue, TypeId};

impl<'a> CompatChecker<'a> {
    /// Check if an intrinsic type is assignable to another intrinsic type.
    ///
    /// - same kind: assignable (handled by the identity fast path)
    /// - `undefined` <: `void`
    /// - everything else, `never` targets included, is a mismatch; there is
    ///   no primitive widening
    pub(crate) fn check_intrinsic<T: SubtypeTracer>(
        &mut self,
        source: TypeId,
        source_kind: IntrinsicKind,
        target: TypeId,
        target_kind: IntrinsicKind,
        tracer: &mut T,
    ) -> bool {
        match (source_kind, target_kind) {
            (s, t) if s == t => true,
            (IntrinsicKind::Undefined, IntrinsicKind::Void) => true,
            _ => tracer.on_mismatch(|| SubtypeFailureReason::IntrinsicTypeMismatch {
                source_type: source,
                target_type: target,
            }),
        }
    }

    /// A literal is assignable to itself and to the primitive it widens to.
    pub(crate) fn check_literal<T: SubtypeTracer>(
        &mut self,
        source: TypeId,
        value: LiteralValue,
        target: TypeId,
        tracer: &mut T,
    ) -> bool {
        if value.base_type() == target {
            return true;
        }
        tracer.on_mismatch(|| SubtypeFailureReason::TypeMismatch {
            source_type: source,
            target_type: target,
        })
    }

    /// Named types are nominal: the target must be the source or one of its supertypes.
    pub(crate) fn check_named<T: SubtypeTracer>(
        &mut self,
        source: TypeId,
        source_def: DefId,
        target: TypeId,
        target_def: DefId,
        tracer: &mut T,
    ) -> bool {
        if self
            .interner
            .definitions()
            .is_derived_from(source_def, target_def)
        {
            return true;
        }
        tracer.on_mismatch(|| SubtypeFailureReason::NominalMismatch {
            source_type: source,
            target_type: target,
        })
    }
}
