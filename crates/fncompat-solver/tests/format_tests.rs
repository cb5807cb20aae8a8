use super::*;

#[test]
fn test_format_intrinsics_and_literals() {
    let interner = TypeInterner::new();
    let fmt = TypeFormatter::new(&interner);
    assert_eq!(fmt.format(TypeId::VOID), "void");
    assert_eq!(fmt.format(TypeId::NUMBER), "number");
    assert_eq!(fmt.format(interner.literal_number(7.0)), "7");
    assert_eq!(fmt.format(interner.literal_number(1.5)), "1.5");
    assert_eq!(fmt.format(interner.literal_string("a")), "\"a\"");
    assert_eq!(fmt.format(interner.literal_boolean(false)), "false");
}

#[test]
fn test_format_union() {
    let interner = TypeInterner::new();
    let union = interner.union2(TypeId::VOID, TypeId::NUMBER).unwrap();
    // Members are stored sorted by id; intrinsics keep keyword order.
    assert_eq!(TypeFormatter::new(&interner).format(union), "void | number");
}

#[test]
fn test_format_long_union_is_elided() {
    let interner = TypeInterner::new();
    let union = interner
        .union(vec![
            TypeId::VOID,
            TypeId::NULL,
            TypeId::BOOLEAN,
            TypeId::NUMBER,
            TypeId::STRING,
        ])
        .unwrap();
    let fmt = TypeFormatter::new(&interner).with_max_union_members(2);
    assert_eq!(fmt.format(union), "void | null | ... 3 more ...");
}

#[test]
fn test_format_signatures() {
    let interner = TypeInterner::new();
    let x = interner.intern_string("x");
    let named = interner
        .function(FunctionShape::new(
            vec![ParamInfo::named(x, TypeId::NUMBER)],
            TypeId::VOID,
        ))
        .unwrap();
    let fmt = TypeFormatter::new(&interner);
    assert_eq!(fmt.format(named), "(x: number) => void");

    let unnamed = interner
        .function_type(&[TypeId::STRING, TypeId::NUMBER], TypeId::NUMBER)
        .unwrap();
    assert_eq!(fmt.format(unnamed), "(arg0: string, arg1: number) => number");

    let event = interner.declare_interface("Event", None).unwrap();
    let event_type = interner.named(event).unwrap();
    let ctor = interner.construct_type(&[], event_type).unwrap();
    assert_eq!(fmt.format(ctor), "new () => Event");
}

#[test]
fn test_format_function_in_union_is_parenthesized() {
    let interner = TypeInterner::new();
    let f = interner.function_type(&[], TypeId::VOID).unwrap();
    let union = interner.union2(f, TypeId::NUMBER).unwrap();
    assert_eq!(
        TypeFormatter::new(&interner).format(union),
        "number | (() => void)"
    );
}

#[test]
fn test_format_unknown_handle() {
    let interner = TypeInterner::new();
    let text = TypeFormatter::new(&interner).format(TypeId(TypeId::FIRST_USER + 3));
    assert!(text.starts_with("<unknown type"));
}
