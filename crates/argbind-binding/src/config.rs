use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};

use crate::error::{BindingError, BindingResult};

/// How an inferred key is derived from a Rust field name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyStyle {
    /// The field name as written (`user_id` -> `user_id`).
    #[default]
    Verbatim,
    /// `user_id` -> `userId`.
    CamelCase,
    /// `user_id` -> `user-id`.
    KebabCase,
    /// `user_id` -> `USER_ID`.
    ScreamingSnakeCase,
}

impl KeyStyle {
    /// Convert a field name to this style.
    pub fn apply(&self, field: &str) -> String {
        match self {
            KeyStyle::Verbatim => field.to_string(),
            KeyStyle::CamelCase => field.to_case(Case::Camel),
            KeyStyle::KebabCase => field.to_case(Case::Kebab),
            KeyStyle::ScreamingSnakeCase => field.to_case(Case::Constant),
        }
    }
}

/// Configuration for key inference.
///
/// Only keys inferred from field names are affected; explicit keys are used
/// as given.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingConfig {
    /// Case conversion applied to the field name.
    pub key_style: KeyStyle,
    /// Prepended to the converted field name, e.g. `"com.example.extra."`.
    pub key_prefix: Option<String>,
}

impl BindingConfig {
    /// Parse a configuration from TOML. Missing fields take their defaults.
    pub fn from_toml_str(s: &str) -> BindingResult<Self> {
        toml::from_str(s).map_err(|e| BindingError::Config(e.to_string()))
    }

    /// Derive the lookup key for a field name.
    ///
    /// A raw identifier prefix (`r#type`) is dropped before conversion.
    pub fn infer_key(&self, field: &str) -> String {
        let field = field.strip_prefix("r#").unwrap_or(field);
        let key = self.key_style.apply(field);
        match &self.key_prefix {
            Some(prefix) => format!("{prefix}{key}"),
            None => key,
        }
    }
}
