use super::*;

#[test]
fn test_format_message_replaces_placeholders() {
    let text = format_message(
        diagnostic_messages::TYPE_NOT_ASSIGNABLE,
        &["() => void", "() => number"],
    );
    assert_eq!(
        text,
        "Type '() => void' is not assignable to type '() => number'."
    );
}

#[test]
fn test_every_code_has_a_template() {
    for message in DIAGNOSTIC_MESSAGES {
        assert_eq!(get_message_template(message.code), Some(message.message));
        assert_eq!(message.category, DiagnosticCategory::Error);
    }
}

#[test]
fn test_unknown_code_has_no_template() {
    assert!(get_message_template(9999).is_none());
    assert_eq!(Diagnostic::from_code(9999, &[]).message_text, "");
}

#[test]
fn test_render_indents_related_information() {
    let diag = Diagnostic::from_code(
        diagnostic_codes::CLASS_INCORRECTLY_IMPLEMENTS_INTERFACE,
        &["MyClassB", "MyInterface02"],
    )
    .with_related(
        diagnostic_codes::TYPE_NOT_ASSIGNABLE,
        "Type 'void' is not assignable to type 'number'.".to_string(),
    );

    assert_eq!(
        diag.render(),
        "error TS2420: Class 'MyClassB' incorrectly implements interface 'MyInterface02'.\n  \
         Type 'void' is not assignable to type 'number'."
    );
}

#[test]
fn test_with_chain_flattens_nested_diagnostic() {
    let nested = Diagnostic::from_code(diagnostic_codes::TYPE_NOT_ASSIGNABLE, &["a", "b"])
        .with_related(diagnostic_codes::TYPE_NOT_ASSIGNABLE, "inner".to_string());
    let diag = Diagnostic::from_code(diagnostic_codes::TYPE_NOT_ASSIGNABLE, &["c", "d"])
        .with_chain(nested);

    assert_eq!(diag.related_information.len(), 2);
    assert_eq!(diag.related_information[1].message_text, "inner");
}

#[test]
fn test_diagnostic_serializes_without_empty_related() {
    let diag = Diagnostic::from_code(diagnostic_codes::TYPE_NOT_ASSIGNABLE, &["void", "number"]);
    let json = serde_json::to_value(&diag).expect("diagnostic serializes");
    assert_eq!(json["code"], 2322);
    assert_eq!(json["category"], "Error");
    assert!(json.get("related_information").is_none());
}
