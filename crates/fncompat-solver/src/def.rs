//! Definition identifiers and storage for named types.
//!
//! Interfaces and classes are nominal: two declarations with identical members
//! are still different types. Each declaration gets a `DefId` in the
//! [`DefinitionStore`], and `TypeData::Named(DefId)` refers to it.
//!
//! ## Two-phase registration
//!
//! A definition is registered first and its members are filled in afterward,
//! so a member may mention the definition itself:
//!
//! ```ignore
//! let ia = interner.declare_interface("IA", None)?;
//! let ia_type = interner.named(ia)?;
//! // f(action: (p: IB) => void): IA
//! interner.define_members(ia, vec![MemberInfo::method(f, method_returning(ia_type))])?;
//! ```
//!
//! The supertype is fixed at registration and must already exist, so the
//! `extends` chain is acyclic by construction.

use crate::error::SignatureError;
use crate::types::MemberInfo;
use dashmap::DashMap;
use fncompat_common::interner::Atom;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::trace;

// =============================================================================
// DefId
// =============================================================================

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DefId(pub u32);

impl DefId {
    /// Sentinel value for invalid `DefId`.
    pub const INVALID: Self = Self(0);

    /// First valid `DefId`.
    pub const FIRST_VALID: u32 = 1;

    pub const fn is_valid(self) -> bool {
        self.0 >= Self::FIRST_VALID
    }
}

// =============================================================================
// DefKind / DefinitionInfo
// =============================================================================

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DefKind {
    /// `interface Event { timestamp: number }`
    Interface,
    /// `class MyClass01 implements MyInterface01 { ... }`
    Class,
}

#[derive(Clone, Debug)]
pub struct DefinitionInfo {
    pub kind: DefKind,
    /// Name of the definition (for diagnostics)
    pub name: Atom,
    /// Own members, in declaration order. Inherited members are not repeated.
    pub members: Vec<MemberInfo>,
    /// Single-inheritance parent (`extends`).
    pub supertype: Option<DefId>,
    members_defined: bool,
}

impl DefinitionInfo {
    pub const fn interface(name: Atom) -> Self {
        Self {
            kind: DefKind::Interface,
            name,
            members: Vec::new(),
            supertype: None,
            members_defined: false,
        }
    }

    pub const fn class(name: Atom) -> Self {
        Self {
            kind: DefKind::Class,
            name,
            members: Vec::new(),
            supertype: None,
            members_defined: false,
        }
    }

    pub const fn with_supertype(mut self, parent: DefId) -> Self {
        self.supertype = Some(parent);
        self
    }

    pub fn has_members(&self) -> bool {
        self.members_defined
    }
}

// =============================================================================
// DefinitionStore
// =============================================================================

/// Thread-safe storage for named definitions.
///
/// Uses `DashMap` so definitions can be registered and read from several
/// threads. Entries are `Arc`-shared; lookups never copy member lists.
pub struct DefinitionStore {
    definitions: DashMap<DefId, Arc<DefinitionInfo>>,
    next_id: AtomicU32,
}

impl Default for DefinitionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DefinitionStore {
    pub fn new() -> Self {
        Self {
            definitions: DashMap::new(),
            next_id: AtomicU32::new(DefId::FIRST_VALID),
        }
    }

    fn allocate(&self) -> DefId {
        DefId(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    /// Register a new definition and return its `DefId`.
    ///
    /// Fails if the supertype is not registered.
    pub fn register(&self, info: DefinitionInfo) -> Result<DefId, SignatureError> {
        if let Some(parent) = info.supertype
            && !self.contains(parent)
        {
            return Err(SignatureError::UnknownDefinition(parent));
        }
        let id = self.allocate();
        trace!(
            def_id = %id.0,
            kind = ?info.kind,
            supertype = ?info.supertype,
            "DefinitionStore::register"
        );
        self.definitions.insert(id, Arc::new(info));
        Ok(id)
    }

    /// Set the own members of a registered definition.
    pub fn define_members(
        &self,
        id: DefId,
        members: Vec<MemberInfo>,
    ) -> Result<(), SignatureError> {
        let mut entry = self
            .definitions
            .get_mut(&id)
            .ok_or(SignatureError::UnknownDefinition(id))?;
        if entry.members_defined {
            return Err(SignatureError::MembersAlreadyDefined(id));
        }
        trace!(def_id = %id.0, count = members.len(), "DefinitionStore::define_members");
        let info = Arc::make_mut(entry.value_mut());
        info.members = members;
        info.members_defined = true;
        Ok(())
    }

    pub fn get(&self, id: DefId) -> Option<Arc<DefinitionInfo>> {
        self.definitions.get(&id).map(|r| r.clone())
    }

    pub fn contains(&self, id: DefId) -> bool {
        self.definitions.contains_key(&id)
    }

    pub fn get_name(&self, id: DefId) -> Option<Atom> {
        self.definitions.get(&id).map(|r| r.name)
    }

    pub fn get_supertype(&self, id: DefId) -> Option<DefId> {
        self.definitions.get(&id).and_then(|r| r.supertype)
    }

    /// Walk the `extends` chain starting at (and including) `id`.
    pub fn supertype_chain(&self, id: DefId) -> SupertypeChain<'_> {
        SupertypeChain {
            store: self,
            next: self.contains(id).then_some(id),
        }
    }

    /// Check whether `ancestor` is `child` itself or reachable through `extends`.
    pub fn is_derived_from(&self, child: DefId, ancestor: DefId) -> bool {
        self.supertype_chain(child).any(|id| id == ancestor)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Iterator over a definition and its ancestors, nearest first.
pub struct SupertypeChain<'a> {
    store: &'a DefinitionStore,
    next: Option<DefId>,
}

impl Iterator for SupertypeChain<'_> {
    type Item = DefId;

    fn next(&mut self) -> Option<DefId> {
        let current = self.next?;
        self.next = self.store.get_supertype(current);
        Some(current)
    }
}

#[cfg(test)]
#[path = "../tests/def_tests.rs"]
mod tests;
