//! Diagnostic generation for the relation engine.
//!
//! ## Tracer Pattern (Zero-Cost Abstraction)
//!
//! The tracer pattern lets the same compatibility logic serve both fast boolean
//! checks and detailed diagnostic generation, so the two can never drift apart.
//!
//! - **FastTracer**: compiles to a plain `return false`
//! - **DiagnosticTracer**: records a structured `SubtypeFailureReason`
//!
//! Nested failures are threaded outward: when a parameter or return comparison
//! fails, the enclosing rule takes the recorded inner reason with
//! [`SubtypeTracer::take_nested`] and wraps it in its own reason.

use crate::format::TypeFormatter;
use crate::intern::TypeInterner;
use crate::types::TypeId;
use fncompat_common::diagnostics::{Diagnostic, diagnostic_codes as codes};
use fncompat_common::interner::Atom;

// =============================================================================
// Tracer Pattern
// =============================================================================

/// A trait for tracing compatibility failures.
pub trait SubtypeTracer {
    /// Whether this tracer records reasons. Non-recording tracers may use caches.
    const COLLECTS: bool;

    /// Called when a mismatch is detected.
    ///
    /// The `reason` closure is only called if the tracer collects failures.
    /// Returns `true` if checking should continue, `false` to stop.
    fn on_mismatch(&mut self, reason: impl FnOnce() -> SubtypeFailureReason) -> bool;

    /// Take the failure recorded by a nested check, to wrap it in an outer reason.
    fn take_nested(&mut self) -> Option<Box<SubtypeFailureReason>> {
        None
    }
}

/// Fast tracer that returns immediately on mismatch.
#[derive(Clone, Copy, Debug)]
pub struct FastTracer;

impl SubtypeTracer for FastTracer {
    const COLLECTS: bool = false;

    #[inline(always)]
    fn on_mismatch(&mut self, _reason: impl FnOnce() -> SubtypeFailureReason) -> bool {
        false
    }
}

/// Diagnostic tracer that keeps the outermost failure reason, with nested
/// reasons attached by the rules that wrap them.
#[derive(Debug, Default)]
pub struct DiagnosticTracer {
    failure: Option<SubtypeFailureReason>,
}

impl DiagnosticTracer {
    pub fn new() -> Self {
        Self { failure: None }
    }

    /// Take the collected failure reason, leaving `None` in its place.
    pub fn take_failure(&mut self) -> Option<SubtypeFailureReason> {
        self.failure.take()
    }

    pub fn get_failure(&self) -> Option<&SubtypeFailureReason> {
        self.failure.as_ref()
    }

    pub fn has_failure(&self) -> bool {
        self.failure.is_some()
    }
}

impl SubtypeTracer for DiagnosticTracer {
    const COLLECTS: bool = true;

    #[inline]
    fn on_mismatch(&mut self, reason: impl FnOnce() -> SubtypeFailureReason) -> bool {
        // A reason that is already recorded is more specific; keep it.
        if self.failure.is_none() {
            self.failure = Some(reason());
        }
        false
    }

    fn take_nested(&mut self) -> Option<Box<SubtypeFailureReason>> {
        self.failure.take().map(Box::new)
    }
}

// =============================================================================
// SubtypeFailureReason
// =============================================================================

/// Which kind of signature a return-type mismatch came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignatureKind {
    Call,
    Construct,
}

/// Detailed reason for a compatibility failure.
#[derive(Clone, Debug, PartialEq)]
pub enum SubtypeFailureReason {
    /// The source signature requires more parameters than the target provides.
    TooManyParameters {
        source_count: usize,
        target_count: usize,
    },
    /// Parameter types are incompatible in the direction(s) the variance allows.
    ParameterTypeMismatch {
        param_index: usize,
        source_name: Option<Atom>,
        target_name: Option<Atom>,
        source_param: TypeId,
        target_param: TypeId,
        nested_reason: Option<Box<SubtypeFailureReason>>,
    },
    /// Return types are incompatible.
    ReturnTypeMismatch {
        kind: SignatureKind,
        source_return: TypeId,
        target_return: TypeId,
        nested_reason: Option<Box<SubtypeFailureReason>>,
    },
    /// A call signature compared against a construct signature, or vice versa.
    SignatureKindMismatch {
        source_type: TypeId,
        target_type: TypeId,
    },
    /// The target is not the source nor one of its supertypes.
    NominalMismatch {
        source_type: TypeId,
        target_type: TypeId,
    },
    /// Intrinsic kinds differ (e.g. `void` vs `number`).
    IntrinsicTypeMismatch {
        source_type: TypeId,
        target_type: TypeId,
    },
    /// No union member accepts the source.
    NoUnionMemberMatches {
        source_type: TypeId,
        target_union_members: Vec<TypeId>,
    },
    /// A required member is missing in the source.
    MissingProperty {
        property_name: Atom,
        source_type: TypeId,
        target_type: TypeId,
    },
    /// Member types are incompatible.
    PropertyTypeMismatch {
        property_name: Atom,
        source_property_type: TypeId,
        target_property_type: TypeId,
        nested_reason: Option<Box<SubtypeFailureReason>>,
    },
    /// The relation gave up because the recursion limit was reached.
    DepthExceeded {
        source_type: TypeId,
        target_type: TypeId,
    },
    /// Generic mismatch with no more specific reason.
    TypeMismatch {
        source_type: TypeId,
        target_type: TypeId,
    },
}

// =============================================================================
// SubtypeFailureReason to Diagnostic Conversion
// =============================================================================

impl SubtypeFailureReason {
    /// Render this reason as a diagnostic for `source` not being assignable to `target`.
    pub fn to_diagnostic(&self, db: &TypeInterner, source: TypeId, target: TypeId) -> Diagnostic {
        let formatter = TypeFormatter::new(db);
        let head = not_assignable(&formatter, source, target);

        match self {
            SubtypeFailureReason::TooManyParameters {
                source_count,
                target_count,
            } => head.with_related(
                codes::TARGET_SIGNATURE_TOO_FEW_ARGUMENTS,
                formatter.message(
                    codes::TARGET_SIGNATURE_TOO_FEW_ARGUMENTS,
                    &[&source_count.to_string(), &target_count.to_string()],
                ),
            ),

            SubtypeFailureReason::ParameterTypeMismatch {
                param_index,
                source_name,
                target_name,
                source_param,
                target_param,
                nested_reason,
            } => {
                let source_name = formatter.param_name(*source_name, *param_index);
                let target_name = formatter.param_name(*target_name, *param_index);
                let diag = head.with_related(
                    codes::TYPES_OF_PARAMETERS_INCOMPATIBLE,
                    formatter.message(
                        codes::TYPES_OF_PARAMETERS_INCOMPATIBLE,
                        &[&source_name, &target_name],
                    ),
                );
                // Parameters are checked target-to-source.
                let nested = match nested_reason {
                    Some(nested) => nested.to_diagnostic(db, *target_param, *source_param),
                    None => not_assignable(&formatter, *target_param, *source_param),
                };
                diag.with_chain(nested)
            }

            SubtypeFailureReason::ReturnTypeMismatch {
                kind,
                source_return,
                target_return,
                nested_reason,
            } => {
                let code = match kind {
                    SignatureKind::Call => codes::CALL_SIGNATURE_RETURN_TYPES_INCOMPATIBLE,
                    SignatureKind::Construct => {
                        codes::CONSTRUCT_SIGNATURE_RETURN_TYPES_INCOMPATIBLE
                    }
                };
                let diag = head.with_related(
                    code,
                    formatter.message(
                        code,
                        &[&formatter.format(source), &formatter.format(target)],
                    ),
                );
                let nested = match nested_reason {
                    Some(nested) => nested.to_diagnostic(db, *source_return, *target_return),
                    None => not_assignable(&formatter, *source_return, *target_return),
                };
                diag.with_chain(nested)
            }

            SubtypeFailureReason::MissingProperty {
                property_name,
                source_type,
                target_type,
            } => Diagnostic::error(
                formatter.message(
                    codes::PROPERTY_MISSING,
                    &[
                        &db.resolve_atom(*property_name),
                        &formatter.format(*source_type),
                        &formatter.format(*target_type),
                    ],
                ),
                codes::PROPERTY_MISSING,
            ),

            SubtypeFailureReason::PropertyTypeMismatch {
                property_name,
                source_property_type,
                target_property_type,
                nested_reason,
            } => {
                let diag = head.with_related(
                    codes::TYPES_OF_PROPERTY_INCOMPATIBLE,
                    formatter.message(
                        codes::TYPES_OF_PROPERTY_INCOMPATIBLE,
                        &[&db.resolve_atom(*property_name)],
                    ),
                );
                let nested = match nested_reason {
                    Some(nested) => {
                        nested.to_diagnostic(db, *source_property_type, *target_property_type)
                    }
                    None => {
                        not_assignable(&formatter, *source_property_type, *target_property_type)
                    }
                };
                diag.with_chain(nested)
            }

            SubtypeFailureReason::SignatureKindMismatch { .. }
            | SubtypeFailureReason::NominalMismatch { .. }
            | SubtypeFailureReason::IntrinsicTypeMismatch { .. }
            | SubtypeFailureReason::NoUnionMemberMatches { .. }
            | SubtypeFailureReason::DepthExceeded { .. }
            | SubtypeFailureReason::TypeMismatch { .. } => head,
        }
    }

    /// One-paragraph human-readable explanation.
    pub fn describe(&self, db: &TypeInterner, source: TypeId, target: TypeId) -> String {
        let diag = self.to_diagnostic(db, source, target);
        let mut text = diag.message_text;
        for related in diag.related_information {
            text.push(' ');
            text.push_str(&related.message_text);
        }
        text
    }
}

fn not_assignable(formatter: &TypeFormatter<'_>, source: TypeId, target: TypeId) -> Diagnostic {
    Diagnostic::error(
        formatter.message(
            codes::TYPE_NOT_ASSIGNABLE,
            &[&formatter.format(source), &formatter.format(target)],
        ),
        codes::TYPE_NOT_ASSIGNABLE,
    )
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod tests;
