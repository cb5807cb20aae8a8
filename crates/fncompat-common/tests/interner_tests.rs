use super::*;

#[test]
fn test_empty_string_is_preregistered() {
    let interner = Interner::new();
    assert_eq!(interner.get(""), Some(Atom::EMPTY));
    assert!(interner.is_empty());
}

#[test]
fn test_intern_deduplicates() {
    let interner = Interner::new();
    let a = interner.intern("timestamp");
    let b = interner.intern("timestamp");
    let c = interner.intern("x");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(interner.len(), 3);
}

#[test]
fn test_resolve_round_trip() {
    let interner = Interner::new();
    let atom = interner.intern("MouseEvent");
    assert_eq!(&*interner.resolve(atom), "MouseEvent");
}

#[test]
fn test_resolve_unknown_atom_is_empty() {
    let interner = Interner::new();
    assert_eq!(&*interner.resolve(Atom(999)), "");
}

#[test]
fn test_get_does_not_intern() {
    let interner = Interner::new();
    assert_eq!(interner.get("myMethod"), None);
    assert_eq!(interner.len(), 1);
}
