//! Compiler options that select a relation policy.
//!
//! Deserialized from the `compilerOptions` shape of a tsconfig file. Unknown
//! keys are ignored so a whole `compilerOptions` object can be passed in.

use crate::relation_queries::{RelationFlags, RelationPolicy};
use serde::{Deserialize, Deserializer};

/// Accept both `true` and `"true"`, as tsconfig files in the wild do.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationOptions {
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub strict: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub strict_function_types: Option<bool>,
    /// Compare as if the outermost signatures came from method members.
    #[serde(default)]
    pub method_origin: bool,
}

impl RelationOptions {
    /// `strictFunctionTypes` wins over `strict`; both default to off.
    pub fn strict_function_types(&self) -> bool {
        self.strict_function_types
            .or(self.strict)
            .unwrap_or(false)
    }

    pub fn to_policy(&self) -> RelationPolicy {
        let mut flags = RelationFlags::empty();
        flags.set(
            RelationFlags::STRICT_FUNCTION_TYPES,
            self.strict_function_types(),
        );
        flags.set(RelationFlags::METHOD_ORIGIN, self.method_origin);
        RelationPolicy::from_flags(flags)
    }
}

impl From<RelationOptions> for RelationPolicy {
    fn from(options: RelationOptions) -> Self {
        options.to_policy()
    }
}

#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod tests;
