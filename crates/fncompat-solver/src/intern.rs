//! Type interning for structural deduplication.
//!
//! This module converts `TypeData` structures into lightweight `TypeId` handles.
//!
//! Benefits:
//! - O(1) type equality (just compare `TypeId` values)
//! - Each unique structure is stored once
//! - Handles are `Copy`, so the relation engine works on `u32` pairs
//!
//! Every constructor validates the handles it is given and returns
//! `SignatureError` for anything the interner did not issue. Queries can
//! therefore assume well-formed input.

use crate::def::{DefId, DefinitionInfo, DefinitionStore};
use crate::error::SignatureError;
use crate::types::*;
use fncompat_common::interner::{Atom, Interner};
use fncompat_common::limits::TYPE_LIST_INLINE;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::hash::Hash;
use std::sync::{Arc, RwLock};
use tracing::trace;

type TypeListBuffer = SmallVec<[TypeId; TYPE_LIST_INLINE]>;

struct SliceInterner<T> {
    items: Vec<Arc<[T]>>,
    map: FxHashMap<Arc<[T]>, u32>,
}

impl<T> SliceInterner<T>
where
    T: Eq + Hash,
{
    fn new() -> Self {
        let empty: Arc<[T]> = Arc::from(Vec::new());
        let mut map = FxHashMap::default();
        map.insert(empty.clone(), 0);
        SliceInterner {
            items: vec![empty],
            map,
        }
    }

    fn intern(&mut self, items: Vec<T>) -> u32 {
        if items.is_empty() {
            return 0;
        }

        if let Some(&id) = self.map.get(items.as_slice()) {
            return id;
        }

        let arc: Arc<[T]> = items.into();
        let id = self.items.len() as u32;
        self.items.push(arc.clone());
        self.map.insert(arc, id);
        id
    }

    fn get(&self, id: u32) -> Option<Arc<[T]>> {
        self.items.get(id as usize).cloned()
    }

    fn empty(&self) -> Arc<[T]> {
        self.items[0].clone()
    }
}

struct ValueInterner<T> {
    items: Vec<Arc<T>>,
    map: FxHashMap<Arc<T>, u32>,
}

impl<T> ValueInterner<T>
where
    T: Eq + Hash,
{
    fn new() -> Self {
        ValueInterner {
            items: Vec::new(),
            map: FxHashMap::default(),
        }
    }

    fn intern(&mut self, value: T) -> u32 {
        if let Some(&id) = self.map.get(&value) {
            return id;
        }

        let arc = Arc::new(value);
        let id = self.items.len() as u32;
        self.items.push(arc.clone());
        self.map.insert(arc, id);
        id
    }

    fn get(&self, id: u32) -> Option<Arc<T>> {
        self.items.get(id as usize).cloned()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Type interning table.
/// Thread-safe via `RwLock` for concurrent access.
pub struct TypeInterner {
    /// String interner for names and string literals
    pub string_interner: Interner,
    types: RwLock<ValueInterner<TypeData>>,
    type_lists: RwLock<SliceInterner<TypeId>>,
    function_shapes: RwLock<ValueInterner<FunctionShape>>,
    definitions: DefinitionStore,
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeInterner {
    /// Create a new type interner. Intrinsics have reserved ids and need no registration.
    pub fn new() -> Self {
        TypeInterner {
            string_interner: Interner::new(),
            types: RwLock::new(ValueInterner::new()),
            type_lists: RwLock::new(SliceInterner::new()),
            function_shapes: RwLock::new(ValueInterner::new()),
            definitions: DefinitionStore::new(),
        }
    }

    /// Intern a string into an Atom.
    pub fn intern_string(&self, s: &str) -> Atom {
        self.string_interner.intern(s)
    }

    /// Resolve an Atom back to its string value.
    pub fn resolve_atom(&self, atom: Atom) -> String {
        self.string_interner.resolve(atom).to_string()
    }

    pub fn definitions(&self) -> &DefinitionStore {
        &self.definitions
    }

    pub fn type_list(&self, id: TypeListId) -> Arc<[TypeId]> {
        let lists = self.type_lists.read().expect("type_lists lock poisoned");
        lists.get(id.0).unwrap_or_else(|| lists.empty())
    }

    pub fn function_shape(&self, id: FunctionShapeId) -> Option<Arc<FunctionShape>> {
        self.function_shapes
            .read()
            .expect("function_shapes lock poisoned")
            .get(id.0)
    }

    /// Intern a type and return its `TypeId`.
    /// If the data already exists, returns the existing `TypeId`.
    fn intern(&self, data: TypeData) -> TypeId {
        if let TypeData::Intrinsic(kind) = data {
            return kind.to_type_id();
        }
        let mut types = self.types.write().expect("types lock poisoned");
        let before = types.len();
        let index = types.intern(data);
        let id = TypeId(TypeId::FIRST_USER + index);
        if types.len() != before {
            trace!(type_id = id.0, "TypeInterner::intern - new type");
        }
        id
    }

    /// Look up the `TypeData` for a given `TypeId`.
    pub fn lookup(&self, id: TypeId) -> Option<TypeData> {
        if let Some(kind) = IntrinsicKind::from_type_id(id) {
            return Some(TypeData::Intrinsic(kind));
        }
        let index = id.0.checked_sub(TypeId::FIRST_USER)?;
        let types = self.types.read().expect("types lock poisoned");
        types.get(index).map(|data| (*data).clone())
    }

    /// Check that a handle was issued by this interner.
    pub fn contains(&self, id: TypeId) -> bool {
        if id.is_intrinsic() {
            return true;
        }
        match id.0.checked_sub(TypeId::FIRST_USER) {
            Some(index) => {
                (index as usize) < self.types.read().expect("types lock poisoned").len()
            }
            None => false,
        }
    }

    fn ensure_known(&self, id: TypeId) -> Result<TypeId, SignatureError> {
        if self.contains(id) {
            Ok(id)
        } else {
            Err(SignatureError::UnknownType(id))
        }
    }

    /// Get the number of interned types, intrinsics included.
    pub fn len(&self) -> usize {
        IntrinsicKind::ALL.len() + self.types.read().expect("types lock poisoned").len()
    }

    /// Check if the interner only has intrinsics.
    pub fn is_empty(&self) -> bool {
        self.len() <= IntrinsicKind::ALL.len()
    }

    // =========================================================================
    // Convenience methods for common type constructions
    // =========================================================================

    pub fn intrinsic(&self, kind: IntrinsicKind) -> TypeId {
        kind.to_type_id()
    }

    /// Resolve a primitive keyword (`"number"`, `"void"`, ...) to its type.
    pub fn primitive(&self, name: &str) -> Result<TypeId, SignatureError> {
        IntrinsicKind::from_keyword(name)
            .map(IntrinsicKind::to_type_id)
            .ok_or_else(|| SignatureError::UnknownPrimitive(name.to_string()))
    }

    pub fn literal_number(&self, value: f64) -> TypeId {
        self.intern(TypeData::Literal(LiteralValue::Number(OrderedFloat(value))))
    }

    pub fn literal_string(&self, value: &str) -> TypeId {
        let atom = self.intern_string(value);
        self.intern(TypeData::Literal(LiteralValue::String(atom)))
    }

    pub fn literal_boolean(&self, value: bool) -> TypeId {
        self.intern(TypeData::Literal(LiteralValue::Boolean(value)))
    }

    /// Intern a union type, flattening nested unions and deduplicating members.
    ///
    /// `never` members are dropped; a single remaining member is returned as is.
    pub fn union(&self, members: Vec<TypeId>) -> Result<TypeId, SignatureError> {
        if members.is_empty() {
            return Err(SignatureError::EmptyUnion);
        }

        let mut flat: TypeListBuffer = SmallVec::new();
        for member in members {
            self.ensure_known(member)?;
            match self.lookup(member) {
                Some(TypeData::Union(list_id)) => {
                    for &inner in self.type_list(list_id).iter() {
                        if !flat.contains(&inner) {
                            flat.push(inner);
                        }
                    }
                }
                _ if member.is_never() => {}
                _ => {
                    if !flat.contains(&member) {
                        flat.push(member);
                    }
                }
            }
        }

        match flat.len() {
            0 => Ok(TypeId::NEVER),
            1 => Ok(flat[0]),
            _ => {
                flat.sort_unstable();
                let list_id = {
                    let mut lists = self.type_lists.write().expect("type_lists lock poisoned");
                    TypeListId(lists.intern(flat.into_vec()))
                };
                Ok(self.intern(TypeData::Union(list_id)))
            }
        }
    }

    pub fn union2(&self, left: TypeId, right: TypeId) -> Result<TypeId, SignatureError> {
        self.union(vec![left, right])
    }

    fn intern_function_shape(&self, shape: FunctionShape) -> Result<FunctionShapeId, SignatureError> {
        for param in &shape.params {
            self.ensure_known(param.type_id)?;
        }
        self.ensure_known(shape.return_type)?;
        let mut shapes = self.function_shapes.write().expect("function_shapes lock poisoned");
        Ok(FunctionShapeId(shapes.intern(shape)))
    }

    /// Intern a call signature.
    pub fn function(&self, shape: FunctionShape) -> Result<TypeId, SignatureError> {
        let shape_id = self.intern_function_shape(shape)?;
        Ok(self.intern(TypeData::Function(shape_id)))
    }

    /// Intern a construct signature (`new (...) => T`).
    pub fn construct(&self, shape: FunctionShape) -> Result<TypeId, SignatureError> {
        let shape_id = self.intern_function_shape(shape)?;
        Ok(self.intern(TypeData::Construct(shape_id)))
    }

    /// `(p0, p1, ...) => ret` with unnamed parameters.
    pub fn function_type(&self, params: &[TypeId], ret: TypeId) -> Result<TypeId, SignatureError> {
        let params = params.iter().copied().map(ParamInfo::unnamed).collect();
        self.function(FunctionShape::new(params, ret))
    }

    /// Method-syntax signature `m(p0, p1, ...): ret`.
    pub fn method_type(&self, params: &[TypeId], ret: TypeId) -> Result<TypeId, SignatureError> {
        let params = params.iter().copied().map(ParamInfo::unnamed).collect();
        self.function(FunctionShape::method(params, ret))
    }

    /// `new (p0, p1, ...) => ret` with unnamed parameters.
    pub fn construct_type(&self, params: &[TypeId], ret: TypeId) -> Result<TypeId, SignatureError> {
        let params = params.iter().copied().map(ParamInfo::unnamed).collect();
        self.construct(FunctionShape::new(params, ret))
    }

    // =========================================================================
    // Named definitions
    // =========================================================================

    /// Register an interface. Members are attached later with [`Self::define_members`].
    pub fn declare_interface(
        &self,
        name: &str,
        supertype: Option<DefId>,
    ) -> Result<DefId, SignatureError> {
        let mut info = DefinitionInfo::interface(self.intern_string(name));
        if let Some(parent) = supertype {
            info = info.with_supertype(parent);
        }
        self.definitions.register(info)
    }

    /// Register a class. Members are attached later with [`Self::define_members`].
    pub fn declare_class(
        &self,
        name: &str,
        supertype: Option<DefId>,
    ) -> Result<DefId, SignatureError> {
        let mut info = DefinitionInfo::class(self.intern_string(name));
        if let Some(parent) = supertype {
            info = info.with_supertype(parent);
        }
        self.definitions.register(info)
    }

    pub fn define_members(
        &self,
        def_id: DefId,
        members: Vec<MemberInfo>,
    ) -> Result<(), SignatureError> {
        for member in &members {
            self.ensure_known(member.type_id)?;
        }
        self.definitions.define_members(def_id, members)
    }

    /// The instance type of a named definition.
    pub fn named(&self, def_id: DefId) -> Result<TypeId, SignatureError> {
        if !self.definitions.contains(def_id) {
            return Err(SignatureError::UnknownDefinition(def_id));
        }
        Ok(self.intern(TypeData::Named(def_id)))
    }
}

#[cfg(test)]
#[path = "../tests/intern_tests.rs"]
mod tests;
