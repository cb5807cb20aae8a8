//! Call and construct signature compatibility.
//!
//! ## Variance
//!
//! Parameters are compared contravariantly ("strict variance") only when all hold:
//! - strict function types are enabled,
//! - we are not already comparing a callback,
//! - the signature is a call signature (construct signatures are bivariant),
//! - the target signature was not declared with method syntax,
//! - at the outermost signature, the comparison does not originate from a
//!   method member.
//!
//! Otherwise a parameter passes if it is assignable in either direction.
//!
//! Returns are covariant, except for construct signatures and bivariant
//! callbacks, where either direction will do. A `void` target return accepts
//! anything; for construct signatures so does a `void` source return. Bivariant
//! callbacks do not get the reverse `void` rule: a `() => number` callback
//! cannot stand in for a `() => void` one.
//!
//! ## Callback parameters
//!
//! When both parameters are themselves call signatures, the target callback is
//! compared against the source callback in callback mode. Inside callback mode
//! parameters are contravariant only, and the method-origin exception does not
//! reach nested callbacks:
//!
//! ```typescript
//! let g: (x: () => void) => number = (y: () => 7) => 7; // error
//! ```

use std::sync::Arc;

use crate::compat::CompatChecker;
use crate::diagnostics::{FastTracer, SignatureKind, SubtypeFailureReason, SubtypeTracer};
use crate::types::{FunctionShape, FunctionShapeId, TypeData, TypeId};
use tracing::trace;

/// How a signature comparison was reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum CallbackMode {
    /// A signature compared in its own right.
    None,
    /// A callback parameter of a strictly-variant signature.
    Strict,
    /// A callback parameter of a bivariant signature; returns are bivariant too.
    Bivariant,
}

impl<'a> CompatChecker<'a> {
    pub(crate) fn check_function_types<T: SubtypeTracer>(
        &mut self,
        source: TypeId,
        source_shape: FunctionShapeId,
        target: TypeId,
        target_shape: FunctionShapeId,
        tracer: &mut T,
    ) -> bool {
        self.check_shapes(
            source,
            source_shape,
            target,
            target_shape,
            SignatureKind::Call,
            tracer,
        )
    }

    pub(crate) fn check_construct_types<T: SubtypeTracer>(
        &mut self,
        source: TypeId,
        source_shape: FunctionShapeId,
        target: TypeId,
        target_shape: FunctionShapeId,
        tracer: &mut T,
    ) -> bool {
        self.check_shapes(
            source,
            source_shape,
            target,
            target_shape,
            SignatureKind::Construct,
            tracer,
        )
    }

    fn check_shapes<T: SubtypeTracer>(
        &mut self,
        source: TypeId,
        source_shape: FunctionShapeId,
        target: TypeId,
        target_shape: FunctionShapeId,
        kind: SignatureKind,
        tracer: &mut T,
    ) -> bool {
        let (Some(source_sig), Some(target_sig)) = (
            self.interner.function_shape(source_shape),
            self.interner.function_shape(target_shape),
        ) else {
            return tracer.on_mismatch(|| SubtypeFailureReason::TypeMismatch {
                source_type: source,
                target_type: target,
            });
        };
        self.check_signature(&source_sig, &target_sig, kind, CallbackMode::None, tracer)
    }

    /// Compare two signatures of the same kind.
    pub(crate) fn check_signature<T: SubtypeTracer>(
        &mut self,
        source: &FunctionShape,
        target: &FunctionShape,
        kind: SignatureKind,
        callback: CallbackMode,
        tracer: &mut T,
    ) -> bool {
        let top_level = self.signature_depth == 0;
        self.signature_depth += 1;
        let result = self.check_signature_inner(source, target, kind, callback, top_level, tracer);
        self.signature_depth -= 1;
        result
    }

    fn check_signature_inner<T: SubtypeTracer>(
        &mut self,
        source: &FunctionShape,
        target: &FunctionShape,
        kind: SignatureKind,
        callback: CallbackMode,
        top_level: bool,
        tracer: &mut T,
    ) -> bool {
        let strict_variance = callback == CallbackMode::None
            && self.policy.strict_function_types()
            && kind == SignatureKind::Call
            && !target.is_method
            && !(top_level && self.policy.method_origin());

        trace!(
            ?kind,
            ?callback,
            strict_variance,
            source_params = source.params.len(),
            target_params = target.params.len(),
            "check_signature"
        );

        // Extra source parameters would never be supplied by a caller of the target.
        if source.params.len() > target.params.len() {
            return tracer.on_mismatch(|| SubtypeFailureReason::TooManyParameters {
                source_count: source.params.len(),
                target_count: target.params.len(),
            });
        }

        for (index, (s_param, t_param)) in source.params.iter().zip(&target.params).enumerate() {
            if !self.check_parameter(
                s_param.type_id,
                t_param.type_id,
                callback,
                strict_variance,
                tracer,
            ) {
                let nested = tracer.take_nested();
                return tracer.on_mismatch(|| SubtypeFailureReason::ParameterTypeMismatch {
                    param_index: index,
                    source_name: s_param.name,
                    target_name: t_param.name,
                    source_param: s_param.type_id,
                    target_param: t_param.type_id,
                    nested_reason: nested,
                });
            }
        }

        self.check_return(source, target, kind, callback, tracer)
    }

    fn check_parameter<T: SubtypeTracer>(
        &mut self,
        source: TypeId,
        target: TypeId,
        callback: CallbackMode,
        strict_variance: bool,
        tracer: &mut T,
    ) -> bool {
        if callback == CallbackMode::None
            && let (Some(source_sig), Some(target_sig)) =
                (self.call_signature(source), self.call_signature(target))
        {
            let mode = if strict_variance {
                CallbackMode::Strict
            } else {
                CallbackMode::Bivariant
            };
            // Callbacks flip: the target's callback must accept what the source's provides.
            return self.check_signature(&target_sig, &source_sig, SignatureKind::Call, mode, tracer);
        }

        if callback == CallbackMode::None && !strict_variance {
            return self.check_assignable(source, target, &mut FastTracer)
                || self.check_assignable(target, source, tracer);
        }

        self.check_assignable(target, source, tracer)
    }

    fn check_return<T: SubtypeTracer>(
        &mut self,
        source: &FunctionShape,
        target: &FunctionShape,
        kind: SignatureKind,
        callback: CallbackMode,
        tracer: &mut T,
    ) -> bool {
        let s_ret = source.return_type;
        let t_ret = target.return_type;

        // Any return is acceptable where the caller discards it.
        if t_ret.is_void() {
            return true;
        }

        let related = if kind == SignatureKind::Construct {
            // Reversed, the source return is the accepting side: `new () => void` takes any instance.
            s_ret.is_void()
                || self.check_assignable(t_ret, s_ret, &mut FastTracer)
                || self.check_assignable(s_ret, t_ret, tracer)
        } else if callback == CallbackMode::Bivariant {
            self.check_assignable(t_ret, s_ret, &mut FastTracer)
                || self.check_assignable(s_ret, t_ret, tracer)
        } else {
            self.check_assignable(s_ret, t_ret, tracer)
        };

        if related {
            return true;
        }
        let nested = tracer.take_nested();
        tracer.on_mismatch(|| SubtypeFailureReason::ReturnTypeMismatch {
            kind,
            source_return: s_ret,
            target_return: t_ret,
            nested_reason: nested,
        })
    }

    /// The call signature of a plain function type, if `type_id` is one.
    fn call_signature(&self, type_id: TypeId) -> Option<Arc<FunctionShape>> {
        match self.interner.lookup(type_id)? {
            TypeData::Function(shape_id) => self.interner.function_shape(shape_id),
            _ => None,
        }
    }
}
