use super::*;
use crate::test_support::Fixture;

#[test]
fn test_default_policy_is_strict() {
    let policy = RelationPolicy::default();
    assert!(policy.strict_function_types());
    assert!(!policy.method_origin());
    assert!(!RelationPolicy::lenient().strict_function_types());
}

#[test]
fn test_policy_builders() {
    let policy = RelationPolicy::default()
        .with_method_origin(true)
        .with_strict_function_types(false);
    assert_eq!(policy.flags, RelationFlags::METHOD_ORIGIN);
    assert_eq!(
        RelationPolicy::from_flags(RelationFlags::all()).with_method_origin(false),
        RelationPolicy::default()
    );
}

#[test]
fn test_query_assignable() {
    let fx = Fixture::new();
    let source = fx.func(&[], TypeId::NUMBER);
    let target = fx.func(&[], TypeId::VOID);

    let result = query_relation(&fx.db, source, target, RelationKind::Assignable, RelationPolicy::default());
    assert_eq!(result.kind, RelationKind::Assignable);
    assert!(result.is_related());
    assert!(!result.depth_exceeded);

    let reverse = query_relation(&fx.db, target, source, RelationKind::Assignable, RelationPolicy::default());
    assert!(!reverse.is_related());
}

#[test]
fn test_query_identical() {
    let fx = Fixture::new();
    let returns_number = fx.func(&[], TypeId::NUMBER);
    let returns_void = fx.func(&[], TypeId::VOID);
    let method_returns_number = fx.method(&[], TypeId::NUMBER);
    let policy = RelationPolicy::default();

    assert!(
        !query_relation(&fx.db, returns_number, returns_void, RelationKind::Identical, policy)
            .is_related()
    );
    assert!(
        query_relation(&fx.db, returns_number, method_returns_number, RelationKind::Identical, policy)
            .is_related()
    );
    // Construct signatures with `void` and `Event` returns accept each other.
    let event = fx.named(fx.interface("Event", None));
    let new_void = fx.ctor(&[], TypeId::VOID);
    let new_event = fx.ctor(&[], event);
    assert!(query_relation(&fx.db, new_void, new_event, RelationKind::Identical, policy).is_related());
}

#[test]
fn test_is_assignable_respects_policy() {
    let fx = Fixture::new();
    let event = fx.interface("Event", None);
    let mouse = fx.interface("MouseEvent", Some(event));
    let takes_event = fx.func(&[fx.named(event)], TypeId::NUMBER);
    let takes_mouse = fx.func(&[fx.named(mouse)], TypeId::NUMBER);

    assert!(!is_assignable(&fx.db, takes_mouse, takes_event, RelationPolicy::default()));
    assert!(is_assignable(&fx.db, takes_mouse, takes_event, RelationPolicy::lenient()));
    assert!(is_assignable(
        &fx.db,
        takes_mouse,
        takes_event,
        RelationPolicy::default().with_method_origin(true)
    ));
}

#[test]
fn test_explain_assignability() {
    let fx = Fixture::new();
    let returns_number = fx.func(&[], TypeId::NUMBER);
    let returns_void = fx.func(&[], TypeId::VOID);
    let policy = RelationPolicy::default();

    assert_eq!(explain_assignability(&fx.db, returns_number, returns_void, policy), None);
    let reason = explain_assignability(&fx.db, returns_void, returns_number, policy).unwrap();
    assert_eq!(
        reason.describe(&fx.db, returns_void, returns_number),
        "Type '() => void' is not assignable to type '() => number'. \
         Call signature return types '() => void' and '() => number' are incompatible. \
         Type 'void' is not assignable to type 'number'."
    );
}
