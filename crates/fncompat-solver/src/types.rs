//! Type representation for the signature checker.
//!
//! Types are interned into `TypeId` handles by [`TypeInterner`](crate::TypeInterner).
//! Equality of two interned structural types is a `TypeId` comparison; named
//! definitions are nominal and carry a [`DefId`] into the definition store.

use crate::def::DefId;
use fncompat_common::interner::Atom;
use std::hash::{Hash, Hasher};

// =============================================================================
// TypeId
// =============================================================================

/// Handle to an interned type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const VOID: Self = Self(1);
    pub const NEVER: Self = Self(2);
    pub const UNDEFINED: Self = Self(3);
    pub const NULL: Self = Self(4);
    pub const BOOLEAN: Self = Self(5);
    pub const NUMBER: Self = Self(6);
    pub const STRING: Self = Self(7);
    pub const BIGINT: Self = Self(8);
    pub const SYMBOL: Self = Self(9);

    /// First id handed out to non-intrinsic types.
    pub const FIRST_USER: u32 = 100;

    #[inline]
    pub const fn is_intrinsic(self) -> bool {
        self.0 >= Self::VOID.0 && self.0 <= Self::SYMBOL.0
    }

    #[inline]
    pub const fn is_void(self) -> bool {
        self.0 == Self::VOID.0
    }

    #[inline]
    pub const fn is_never(self) -> bool {
        self.0 == Self::NEVER.0
    }
}

// =============================================================================
// Intrinsics and literals
// =============================================================================

/// Built-in types with reserved ids.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntrinsicKind {
    Void,
    Never,
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Bigint,
    Symbol,
}

impl IntrinsicKind {
    pub const ALL: [Self; 9] = [
        Self::Void,
        Self::Never,
        Self::Undefined,
        Self::Null,
        Self::Boolean,
        Self::Number,
        Self::String,
        Self::Bigint,
        Self::Symbol,
    ];

    pub const fn to_type_id(self) -> TypeId {
        match self {
            Self::Void => TypeId::VOID,
            Self::Never => TypeId::NEVER,
            Self::Undefined => TypeId::UNDEFINED,
            Self::Null => TypeId::NULL,
            Self::Boolean => TypeId::BOOLEAN,
            Self::Number => TypeId::NUMBER,
            Self::String => TypeId::STRING,
            Self::Bigint => TypeId::BIGINT,
            Self::Symbol => TypeId::SYMBOL,
        }
    }

    pub const fn from_type_id(id: TypeId) -> Option<Self> {
        match id {
            TypeId::VOID => Some(Self::Void),
            TypeId::NEVER => Some(Self::Never),
            TypeId::UNDEFINED => Some(Self::Undefined),
            TypeId::NULL => Some(Self::Null),
            TypeId::BOOLEAN => Some(Self::Boolean),
            TypeId::NUMBER => Some(Self::Number),
            TypeId::STRING => Some(Self::String),
            TypeId::BIGINT => Some(Self::Bigint),
            TypeId::SYMBOL => Some(Self::Symbol),
            _ => None,
        }
    }

    /// Parse a primitive keyword (`number`, `void`, ...).
    pub fn from_keyword(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.keyword() == name)
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Never => "never",
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Bigint => "bigint",
            Self::Symbol => "symbol",
        }
    }
}

/// `f64` wrapper with bitwise equality so literal types can be hashed.
#[derive(Copy, Clone, Debug)]
pub struct OrderedFloat(pub f64);

impl PartialEq for OrderedFloat {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for OrderedFloat {}

impl Hash for OrderedFloat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LiteralValue {
    Number(OrderedFloat),
    String(Atom),
    Boolean(bool),
}

impl LiteralValue {
    /// The primitive a literal widens to.
    pub const fn base_type(self) -> TypeId {
        match self {
            Self::Number(_) => TypeId::NUMBER,
            Self::String(_) => TypeId::STRING,
            Self::Boolean(_) => TypeId::BOOLEAN,
        }
    }
}

// =============================================================================
// Signatures
// =============================================================================

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeListId(pub u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionShapeId(pub u32);

/// A single parameter of a signature.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParamInfo {
    /// Parameter name, for diagnostics only.
    pub name: Option<Atom>,
    pub type_id: TypeId,
}

impl ParamInfo {
    pub const fn unnamed(type_id: TypeId) -> Self {
        Self {
            name: None,
            type_id,
        }
    }

    pub const fn named(name: Atom, type_id: TypeId) -> Self {
        Self {
            name: Some(name),
            type_id,
        }
    }
}

/// Shared shape of call and construct signatures.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionShape {
    pub params: Vec<ParamInfo>,
    pub return_type: TypeId,
    /// Declared as a method member (`m(x: T): R` rather than `m: (x: T) => R`).
    pub is_method: bool,
}

impl FunctionShape {
    pub fn new(params: Vec<ParamInfo>, return_type: TypeId) -> Self {
        Self {
            params,
            return_type,
            is_method: false,
        }
    }

    pub fn method(params: Vec<ParamInfo>, return_type: TypeId) -> Self {
        Self {
            params,
            return_type,
            is_method: true,
        }
    }
}

// =============================================================================
// TypeData
// =============================================================================

/// Structural representation of an interned type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeData {
    /// `void`, `never` and the primitive keywords.
    Intrinsic(IntrinsicKind),
    /// `7`, `"a"`, `true`.
    Literal(LiteralValue),
    /// Interface or class declared in the definition store.
    Named(DefId),
    /// Flattened, deduplicated member list.
    Union(TypeListId),
    /// Call signature `(params) => ret`.
    Function(FunctionShapeId),
    /// Construct signature `new (params) => ret`.
    Construct(FunctionShapeId),
}

/// A member of an interface or class.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MemberInfo {
    pub name: Atom,
    pub type_id: TypeId,
    /// Declared with method syntax; enables bivariant parameter checking.
    pub is_method: bool,
}

impl MemberInfo {
    pub const fn property(name: Atom, type_id: TypeId) -> Self {
        Self {
            name,
            type_id,
            is_method: false,
        }
    }

    pub const fn method(name: Atom, type_id: TypeId) -> Self {
        Self {
            name,
            type_id,
            is_method: true,
        }
    }
}

#[cfg(test)]
#[path = "../tests/types_tests.rs"]
mod tests;
