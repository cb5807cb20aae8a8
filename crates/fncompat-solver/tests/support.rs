//! Shared helpers for the solver tests.
//!
//! Set `FNCOMPAT_LOG` (or `RUST_LOG`) to see the relation engine's trace
//! output while a test runs, and `FNCOMPAT_LOG_FORMAT=json` for JSON lines.

use crate::class_hierarchy::{ImplementsReport, check_implements};
use crate::def::DefId;
use crate::intern::TypeInterner;
use crate::relation_queries::{RelationPolicy, is_assignable};
use crate::types::{FunctionShape, MemberInfo, ParamInfo, TypeId};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a test-writer subscriber once per test binary, if requested.
pub(crate) fn init_tracing() {
    INIT.call_once(|| {
        let filter = match std::env::var("FNCOMPAT_LOG") {
            Ok(value) => EnvFilter::builder().parse_lossy(value),
            Err(_) if std::env::var("RUST_LOG").is_ok() => EnvFilter::from_default_env(),
            Err(_) => return,
        };
        let json = std::env::var("FNCOMPAT_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer();
        // Another harness may already own the global subscriber.
        let _ = if json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });
}

/// A type database plus shorthand constructors for snippet-sized tests.
pub(crate) struct Fixture {
    pub db: TypeInterner,
}

impl Fixture {
    pub fn new() -> Self {
        init_tracing();
        Self {
            db: TypeInterner::new(),
        }
    }

    pub fn interface(&self, name: &str, supertype: Option<DefId>) -> DefId {
        self.db.declare_interface(name, supertype).unwrap()
    }

    pub fn class(&self, name: &str, supertype: Option<DefId>) -> DefId {
        self.db.declare_class(name, supertype).unwrap()
    }

    pub fn named(&self, def: DefId) -> TypeId {
        self.db.named(def).unwrap()
    }

    /// `(p0, ...) => ret`
    pub fn func(&self, params: &[TypeId], ret: TypeId) -> TypeId {
        self.db.function_type(params, ret).unwrap()
    }

    /// `m(p0, ...): ret`
    pub fn method(&self, params: &[TypeId], ret: TypeId) -> TypeId {
        self.db.method_type(params, ret).unwrap()
    }

    /// `(name: type, ...) => ret`
    pub fn func_named(&self, params: &[(&str, TypeId)], ret: TypeId) -> TypeId {
        self.db.function(FunctionShape::new(self.params(params), ret)).unwrap()
    }

    /// `m(name: type, ...): ret`
    pub fn method_named(&self, params: &[(&str, TypeId)], ret: TypeId) -> TypeId {
        self.db.function(FunctionShape::method(self.params(params), ret)).unwrap()
    }

    fn params(&self, params: &[(&str, TypeId)]) -> Vec<ParamInfo> {
        params
            .iter()
            .map(|&(name, type_id)| ParamInfo::named(self.db.intern_string(name), type_id))
            .collect()
    }

    /// `new (p0, ...) => ret`
    pub fn ctor(&self, params: &[TypeId], ret: TypeId) -> TypeId {
        self.db.construct_type(params, ret).unwrap()
    }

    pub fn union(&self, members: &[TypeId]) -> TypeId {
        self.db.union(members.to_vec()).unwrap()
    }

    /// Define members; `true` marks method syntax.
    pub fn members(&self, def: DefId, members: &[(&str, TypeId, bool)]) {
        let members = members
            .iter()
            .map(|&(name, type_id, is_method)| {
                let name = self.db.intern_string(name);
                if is_method {
                    MemberInfo::method(name, type_id)
                } else {
                    MemberInfo::property(name, type_id)
                }
            })
            .collect();
        self.db.define_members(def, members).unwrap();
    }

    /// Interface with a single method member.
    pub fn interface_with_method(&self, name: &str, member: &str, params: &[TypeId], ret: TypeId) -> DefId {
        let def = self.interface(name, None);
        let method = self.method(params, ret);
        self.members(def, &[(member, method, true)]);
        def
    }

    /// Class with a single method member.
    pub fn class_with_method(&self, name: &str, member: &str, params: &[TypeId], ret: TypeId) -> DefId {
        let def = self.class(name, None);
        let method = self.method(params, ret);
        self.members(def, &[(member, method, true)]);
        def
    }

    pub fn assignable(&self, source: TypeId, target: TypeId) -> bool {
        is_assignable(&self.db, source, target, RelationPolicy::default())
    }

    pub fn assignable_with(&self, source: TypeId, target: TypeId, policy: RelationPolicy) -> bool {
        is_assignable(&self.db, source, target, policy)
    }

    pub fn implements(&self, class: DefId, interface: DefId) -> ImplementsReport {
        check_implements(&self.db, class, interface, RelationPolicy::default()).unwrap()
    }
}
