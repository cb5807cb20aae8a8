//! Boundary errors raised while constructing types.
//!
//! The relation itself never fails. Malformed input (a dangling handle, an
//! unknown primitive keyword) is rejected when the type is built, so every
//! `TypeId` a query sees has already been validated.

use crate::def::DefId;
use crate::types::TypeId;

/// An invalid signature or type description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignatureError {
    /// A parameter, return, member or union handle the interner never issued.
    UnknownType(TypeId),
    /// A definition handle missing from the store.
    UnknownDefinition(DefId),
    /// A primitive keyword that is not part of the model.
    UnknownPrimitive(String),
    /// A union needs at least one member.
    EmptyUnion,
    /// Members of a definition can only be set once.
    MembersAlreadyDefined(DefId),
}

impl std::fmt::Display for SignatureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignatureError::UnknownType(id) => {
                write!(f, "invalid signature: unknown type id {}", id.0)
            }
            SignatureError::UnknownDefinition(id) => {
                write!(f, "invalid signature: unknown definition id {}", id.0)
            }
            SignatureError::UnknownPrimitive(name) => {
                write!(f, "invalid signature: unknown primitive type '{name}'")
            }
            SignatureError::EmptyUnion => write!(f, "invalid signature: empty union type"),
            SignatureError::MembersAlreadyDefined(id) => {
                write!(f, "invalid signature: members of definition {} already defined", id.0)
            }
        }
    }
}

impl std::error::Error for SignatureError {}
