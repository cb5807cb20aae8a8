use super::*;
use crate::test_support::Fixture;

#[test]
fn test_members_include_inherited() {
    let fx = Fixture::new();
    let base = fx.class("Base", None);
    fx.members(
        base,
        &[("a", TypeId::NUMBER, false), ("b", TypeId::STRING, false)],
    );
    let derived = fx.class("Derived", Some(base));
    fx.members(
        derived,
        &[("b", TypeId::BOOLEAN, false), ("c", TypeId::VOID, false)],
    );

    let members = ClassHierarchy::new(&fx.db).members(derived).unwrap();
    let names: Vec<String> = members.keys().map(|&a| fx.db.resolve_atom(a)).collect();
    assert_eq!(names, vec!["a", "b", "c"]);

    let b = fx.db.intern_string("b");
    assert_eq!(members[&b].type_id, TypeId::BOOLEAN);
    assert_eq!(member_type(&fx.db, derived, "b"), Some(TypeId::BOOLEAN));
    assert_eq!(member_type(&fx.db, base, "b"), Some(TypeId::STRING));
    assert_eq!(member_type(&fx.db, base, "c"), None);
    assert_eq!(member_type(&fx.db, base, "never-interned"), None);
}

#[test]
fn test_members_of_unknown_definition() {
    let fx = Fixture::new();
    assert_eq!(
        ClassHierarchy::new(&fx.db).members(DefId(500)).unwrap_err(),
        SignatureError::UnknownDefinition(DefId(500))
    );
    assert!(check_implements(&fx.db, DefId(500), DefId(501), RelationPolicy::default()).is_err());
}

#[test]
fn test_missing_member() {
    let fx = Fixture::new();
    let iface = fx.interface_with_method("I", "run", &[], TypeId::VOID);
    let class = fx.class("C", None);
    fx.members(class, &[]);

    let report = fx.implements(class, iface);
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(
        report.failures[0],
        SubtypeFailureReason::MissingProperty { .. }
    ));

    let diag = report.to_diagnostic(&fx.db).unwrap();
    assert_eq!(diag.code, 2420);
    assert_eq!(diag.related_information.len(), 1);
    assert_eq!(diag.related_information[0].code, 2741);
    assert_eq!(
        diag.related_information[0].message_text,
        "Property 'run' is missing in type 'C' but required in type 'I'."
    );
}

#[test]
fn test_inherited_members_satisfy_interface() {
    let fx = Fixture::new();
    let iface_base = fx.interface_with_method("IBase", "run", &[], TypeId::VOID);
    let iface = fx.interface("I", Some(iface_base));
    fx.members(iface, &[("size", TypeId::NUMBER, false)]);

    let base = fx.class_with_method("Base", "run", &[], TypeId::NUMBER);
    let class = fx.class("C", Some(base));
    fx.members(class, &[("size", TypeId::NUMBER, false)]);

    assert!(fx.implements(class, iface).is_ok());
    assert!(implements_interface(&fx.db, class, iface, RelationPolicy::default()).unwrap());
    // The base class alone lacks `size`.
    assert!(!fx.implements(base, iface).is_ok());
}

#[test]
fn test_every_offending_member_is_reported_in_order() {
    let fx = Fixture::new();
    let iface = fx.interface("I", None);
    fx.members(
        iface,
        &[
            ("a", fx.method(&[], TypeId::NUMBER), true),
            ("b", TypeId::NUMBER, false),
            ("c", TypeId::STRING, false),
        ],
    );
    let class = fx.class("C", None);
    fx.members(
        class,
        &[
            ("a", fx.method(&[], TypeId::VOID), true),
            ("b", TypeId::NUMBER, false),
        ],
    );

    let report = fx.implements(class, iface);
    assert_eq!(report.failures.len(), 2);
    assert!(matches!(
        report.failures[0],
        SubtypeFailureReason::PropertyTypeMismatch { .. }
    ));
    assert!(matches!(
        report.failures[1],
        SubtypeFailureReason::MissingProperty { .. }
    ));
}

#[test]
fn test_property_members_compare_strictly() {
    let fx = Fixture::new();
    let event = fx.interface("Event", None);
    let mouse = fx.interface("MouseEvent", Some(event));
    let takes_event = fx.func(&[fx.named(event)], TypeId::VOID);
    let takes_mouse = fx.func(&[fx.named(mouse)], TypeId::VOID);

    // Both sides are function-typed properties: no method origin.
    let iface = fx.interface("I", None);
    fx.members(iface, &[("handler", takes_event, false)]);
    let class = fx.class("C", None);
    fx.members(class, &[("handler", takes_mouse, false)]);
    assert!(!fx.implements(class, iface).is_ok());

    // Method syntax on either side makes the parameters bivariant.
    let iface_method = fx.interface("IM", None);
    fx.members(iface_method, &[("handler", takes_event, true)]);
    assert!(fx.implements(class, iface_method).is_ok());
}

#[test]
fn test_conforming_class_has_no_diagnostic() {
    let fx = Fixture::new();
    let iface = fx.interface_with_method("I", "run", &[TypeId::NUMBER], TypeId::VOID);
    let class = fx.class_with_method("C", "run", &[], TypeId::STRING);
    let report = fx.implements(class, iface);
    assert!(report.is_ok());
    assert!(report.to_diagnostic(&fx.db).is_none());
}
