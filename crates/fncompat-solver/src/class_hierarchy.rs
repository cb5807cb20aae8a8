//! Member resolution along `extends` chains and `implements` checking.
//!
//! Responsibilities:
//! - Merge inherited members with own members (own members shadow base members)
//! - Check that a class provides every member of an interface with a
//!   compatible type (`class C implements I`)
//!
//! The definition store guarantees the `extends` chain is acyclic.

use crate::compat::CompatChecker;
use crate::def::DefId;
use crate::diagnostics::SubtypeFailureReason;
use crate::error::SignatureError;
use crate::format::TypeFormatter;
use crate::intern::TypeInterner;
use crate::relation_queries::RelationPolicy;
use crate::types::{MemberInfo, TypeId};
use fncompat_common::diagnostics::{Diagnostic, diagnostic_codes as codes};
use fncompat_common::interner::Atom;
use indexmap::IndexMap;
use tracing::debug;

/// Member lookup over a definition and its ancestors.
pub struct ClassHierarchy<'a> {
    db: &'a TypeInterner,
}

impl<'a> ClassHierarchy<'a> {
    pub fn new(db: &'a TypeInterner) -> Self {
        Self { db }
    }

    /// All members visible on `def_id`, inherited ones included.
    ///
    /// Base members come first, in declaration order; an own member with the
    /// same name replaces the inherited one in place.
    pub fn members(&self, def_id: DefId) -> Result<IndexMap<Atom, MemberInfo>, SignatureError> {
        let definitions = self.db.definitions();
        if !definitions.contains(def_id) {
            return Err(SignatureError::UnknownDefinition(def_id));
        }

        let mut chain: Vec<DefId> = definitions.supertype_chain(def_id).collect();
        chain.reverse();

        let mut merged = IndexMap::new();
        for id in chain {
            let Some(info) = definitions.get(id) else {
                continue;
            };
            for member in &info.members {
                merged.insert(member.name, member.clone());
            }
        }
        Ok(merged)
    }

    /// Look up a single member, inherited ones included.
    pub fn find_member(&self, def_id: DefId, name: Atom) -> Option<MemberInfo> {
        self.db
            .definitions()
            .supertype_chain(def_id)
            .find_map(|id| {
                let info = self.db.definitions().get(id)?;
                info.members.iter().find(|m| m.name == name).cloned()
            })
    }
}

/// Outcome of `class C implements I`.
#[derive(Clone, Debug, PartialEq)]
pub struct ImplementsReport {
    pub class: DefId,
    pub interface: DefId,
    pub class_type: TypeId,
    pub interface_type: TypeId,
    /// One entry per offending interface member, in interface order.
    /// Each is `MissingProperty` or `PropertyTypeMismatch`.
    pub failures: Vec<SubtypeFailureReason>,
}

impl ImplementsReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    /// Render the TS2420 diagnostic, or `None` if the class conforms.
    pub fn to_diagnostic(&self, db: &TypeInterner) -> Option<Diagnostic> {
        if self.is_ok() {
            return None;
        }

        let formatter = TypeFormatter::new(db);
        let class_name = definition_name(db, self.class);
        let interface_name = definition_name(db, self.interface);
        let mut diag = Diagnostic::error(
            formatter.message(
                codes::CLASS_INCORRECTLY_IMPLEMENTS_INTERFACE,
                &[&class_name, &interface_name],
            ),
            codes::CLASS_INCORRECTLY_IMPLEMENTS_INTERFACE,
        );

        for failure in &self.failures {
            match failure {
                SubtypeFailureReason::PropertyTypeMismatch {
                    property_name,
                    source_property_type,
                    target_property_type,
                    nested_reason,
                } => {
                    diag = diag.with_related(
                        codes::PROPERTY_NOT_ASSIGNABLE_TO_BASE,
                        formatter.message(
                            codes::PROPERTY_NOT_ASSIGNABLE_TO_BASE,
                            &[
                                &db.resolve_atom(*property_name),
                                &class_name,
                                &interface_name,
                            ],
                        ),
                    );
                    let nested = match nested_reason {
                        Some(nested) => nested.as_ref().clone(),
                        None => SubtypeFailureReason::TypeMismatch {
                            source_type: *source_property_type,
                            target_type: *target_property_type,
                        },
                    };
                    diag = diag.with_chain(nested.to_diagnostic(
                        db,
                        *source_property_type,
                        *target_property_type,
                    ));
                }
                _ => {
                    diag = diag.with_chain(failure.to_diagnostic(
                        db,
                        self.class_type,
                        self.interface_type,
                    ));
                }
            }
        }
        Some(diag)
    }
}

fn definition_name(db: &TypeInterner, def_id: DefId) -> String {
    db.definitions()
        .get_name(def_id)
        .map(|name| db.resolve_atom(name))
        .unwrap_or_default()
}

/// Check `class implements interface`.
///
/// Every interface member, inherited ones included, must exist on the class
/// (again including inherited members) with an assignable type. A member
/// pair where either side is a method is compared with method origin.
pub fn check_implements(
    db: &TypeInterner,
    class: DefId,
    interface: DefId,
    policy: RelationPolicy,
) -> Result<ImplementsReport, SignatureError> {
    let hierarchy = ClassHierarchy::new(db);
    let class_members = hierarchy.members(class)?;
    let interface_members = hierarchy.members(interface)?;
    let class_type = db.named(class)?;
    let interface_type = db.named(interface)?;

    let mut checker = CompatChecker::new(db, policy);
    let mut failures = Vec::new();

    for (name, required) in &interface_members {
        let Some(provided) = class_members.get(name) else {
            failures.push(SubtypeFailureReason::MissingProperty {
                property_name: *name,
                source_type: class_type,
                target_type: interface_type,
            });
            continue;
        };

        let method_origin = policy.method_origin() || provided.is_method || required.is_method;
        checker.set_policy(policy.with_method_origin(method_origin));

        if checker.is_assignable(provided.type_id, required.type_id) {
            continue;
        }
        let nested = checker
            .explain_failure(provided.type_id, required.type_id)
            .map(Box::new);
        failures.push(SubtypeFailureReason::PropertyTypeMismatch {
            property_name: *name,
            source_property_type: provided.type_id,
            target_property_type: required.type_id,
            nested_reason: nested,
        });
    }

    debug!(
        class = class.0,
        interface = interface.0,
        failures = failures.len(),
        "check_implements"
    );

    Ok(ImplementsReport {
        class,
        interface,
        class_type,
        interface_type,
        failures,
    })
}

/// Convenience wrapper returning only the verdict.
pub fn implements_interface(
    db: &TypeInterner,
    class: DefId,
    interface: DefId,
    policy: RelationPolicy,
) -> Result<bool, SignatureError> {
    check_implements(db, class, interface, policy).map(|report| report.is_ok())
}

/// Type of a member, for callers that only need the handle.
pub fn member_type(db: &TypeInterner, def_id: DefId, name: &str) -> Option<TypeId> {
    let atom = db.string_interner.get(name)?;
    ClassHierarchy::new(db)
        .find_member(def_id, atom)
        .map(|member| member.type_id)
}

#[cfg(test)]
#[path = "../tests/class_hierarchy_tests.rs"]
mod tests;
