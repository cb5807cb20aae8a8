// Diagnostic message table. Codes and templates follow tsc so snippet
// annotations can be compared against the checker output verbatim.

use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_codes {
    pub const CALL_SIGNATURE_RETURN_TYPES_INCOMPATIBLE: u32 = 2202;
    pub const CONSTRUCT_SIGNATURE_RETURN_TYPES_INCOMPATIBLE: u32 = 2203;
    pub const TYPE_NOT_ASSIGNABLE: u32 = 2322;
    pub const TYPES_OF_PROPERTY_INCOMPATIBLE: u32 = 2326;
    pub const TYPES_OF_PARAMETERS_INCOMPATIBLE: u32 = 2328;
    pub const PROPERTY_NOT_ASSIGNABLE_TO_BASE: u32 = 2416;
    pub const CLASS_INCORRECTLY_IMPLEMENTS_INTERFACE: u32 = 2420;
    pub const PROPERTY_MISSING: u32 = 2741;
    pub const TARGET_SIGNATURE_TOO_FEW_ARGUMENTS: u32 = 2849;
}

pub mod diagnostic_messages {
    pub const CALL_SIGNATURE_RETURN_TYPES_INCOMPATIBLE: &str =
        "Call signature return types '{0}' and '{1}' are incompatible.";
    pub const CONSTRUCT_SIGNATURE_RETURN_TYPES_INCOMPATIBLE: &str =
        "Construct signature return types '{0}' and '{1}' are incompatible.";
    pub const TYPE_NOT_ASSIGNABLE: &str = "Type '{0}' is not assignable to type '{1}'.";
    pub const TYPES_OF_PROPERTY_INCOMPATIBLE: &str = "Types of property '{0}' are incompatible.";
    pub const TYPES_OF_PARAMETERS_INCOMPATIBLE: &str =
        "Types of parameters '{0}' and '{1}' are incompatible.";
    pub const PROPERTY_NOT_ASSIGNABLE_TO_BASE: &str =
        "Property '{0}' in type '{1}' is not assignable to the same property in base type '{2}'.";
    pub const CLASS_INCORRECTLY_IMPLEMENTS_INTERFACE: &str =
        "Class '{0}' incorrectly implements interface '{1}'.";
    pub const PROPERTY_MISSING: &str =
        "Property '{0}' is missing in type '{1}' but required in type '{2}'.";
    pub const TARGET_SIGNATURE_TOO_FEW_ARGUMENTS: &str =
        "Target signature provides too few arguments. Expected {0} or more, but got {1}.";
}

macro_rules! message {
    ($name:ident) => {
        DiagnosticMessage {
            code: diagnostic_codes::$name,
            category: DiagnosticCategory::Error,
            message: diagnostic_messages::$name,
        }
    };
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    message!(CALL_SIGNATURE_RETURN_TYPES_INCOMPATIBLE),
    message!(CONSTRUCT_SIGNATURE_RETURN_TYPES_INCOMPATIBLE),
    message!(TYPE_NOT_ASSIGNABLE),
    message!(TYPES_OF_PROPERTY_INCOMPATIBLE),
    message!(TYPES_OF_PARAMETERS_INCOMPATIBLE),
    message!(PROPERTY_NOT_ASSIGNABLE_TO_BASE),
    message!(CLASS_INCORRECTLY_IMPLEMENTS_INTERFACE),
    message!(PROPERTY_MISSING),
    message!(TARGET_SIGNATURE_TOO_FEW_ARGUMENTS),
];
