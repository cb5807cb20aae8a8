//! Type formatting for diagnostics.
//!
//! Renders interned types as TypeScript source text so diagnostic messages
//! read like tsc's: `void | number`, `(x: number) => void`, `new () => Event`.

use crate::intern::TypeInterner;
use crate::types::*;
use fncompat_common::diagnostics::{format_message, get_message_template};
use fncompat_common::interner::Atom;
use fncompat_common::limits::UNION_MEMBER_DIAGNOSTIC_LIMIT;

/// Renders types as TypeScript-like text.
pub struct TypeFormatter<'a> {
    db: &'a TypeInterner,
    /// Elide union members after this many, tsc-style (`a | b | ... 3 more ...`).
    max_union_members: usize,
}

impl<'a> TypeFormatter<'a> {
    pub fn new(db: &'a TypeInterner) -> Self {
        TypeFormatter {
            db,
            max_union_members: UNION_MEMBER_DIAGNOSTIC_LIMIT,
        }
    }

    pub fn with_max_union_members(mut self, max: usize) -> Self {
        self.max_union_members = max.max(1);
        self
    }

    pub fn format(&self, type_id: TypeId) -> String {
        let Some(data) = self.db.lookup(type_id) else {
            return format!("<unknown type {}>", type_id.0);
        };

        match data {
            TypeData::Intrinsic(kind) => kind.keyword().to_string(),
            TypeData::Literal(value) => self.format_literal(value),
            TypeData::Named(def_id) => match self.db.definitions().get_name(def_id) {
                Some(name) => self.db.resolve_atom(name),
                None => format!("<unknown definition {}>", def_id.0),
            },
            TypeData::Union(list_id) => self.format_union(&self.db.type_list(list_id)),
            TypeData::Function(shape_id) => match self.db.function_shape(shape_id) {
                Some(shape) => self.format_signature(&shape, ""),
                None => "Function".to_string(),
            },
            TypeData::Construct(shape_id) => match self.db.function_shape(shape_id) {
                Some(shape) => self.format_signature(&shape, "new "),
                None => "Function".to_string(),
            },
        }
    }

    fn format_literal(&self, value: LiteralValue) -> String {
        match value {
            LiteralValue::Number(n) => n.0.to_string(),
            LiteralValue::String(atom) => format!("\"{}\"", self.db.resolve_atom(atom)),
            LiteralValue::Boolean(b) => b.to_string(),
        }
    }

    fn format_union(&self, members: &[TypeId]) -> String {
        let mut parts: Vec<String> = members
            .iter()
            .take(self.max_union_members)
            .map(|&member| self.format_union_member(member))
            .collect();
        if members.len() > self.max_union_members {
            parts.push(format!(
                "... {} more ...",
                members.len() - self.max_union_members
            ));
        }
        parts.join(" | ")
    }

    // Function types bind looser than `|`, so they need parentheses inside a union.
    fn format_union_member(&self, member: TypeId) -> String {
        let text = self.format(member);
        match self.db.lookup(member) {
            Some(TypeData::Function(_) | TypeData::Construct(_)) => format!("({text})"),
            _ => text,
        }
    }

    fn format_signature(&self, shape: &FunctionShape, prefix: &str) -> String {
        let params: Vec<String> = shape
            .params
            .iter()
            .enumerate()
            .map(|(i, param)| {
                format!(
                    "{}: {}",
                    self.param_name(param.name, i),
                    self.format(param.type_id)
                )
            })
            .collect();
        format!(
            "{prefix}({}) => {}",
            params.join(", "),
            self.format(shape.return_type)
        )
    }

    /// Display name of a parameter; unnamed parameters are shown as `argN`.
    pub fn param_name(&self, name: Option<Atom>, index: usize) -> String {
        match name {
            Some(atom) => self.db.resolve_atom(atom),
            None => format!("arg{index}"),
        }
    }

    /// Fill a diagnostic template by code.
    pub fn message(&self, code: u32, args: &[&str]) -> String {
        format_message(get_message_template(code).unwrap_or(""), args)
    }
}

#[cfg(test)]
#[path = "../tests/format_tests.rs"]
mod tests;
