//! Metadata shared by every message a client sends.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Name reported in `context.library.name`.
pub const LIBRARY_NAME: &str = env!("CARGO_PKG_NAME");

/// Version reported in `context.library.version`.
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wire names of the named [`Context`] fields.
pub const NAMED_FIELDS: &[&str] = &["app", "library", "ip", "locale", "timezone", "userAgent", "traits"];

/// The context object attached to messages.
///
/// Keys in `extra` are serialized inline, next to the named fields. A key that collides with a
/// named field is removed by [`Context::remove_shadowing_extra`] during resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<AppInfo>,

    /// Identifies the library that sent the message.
    ///
    /// Resolution always overwrites it with [`LibraryInfo::current`].
    #[serde(default)]
    pub library: LibraryInfo,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub traits: BTreeMap<String, Value>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// The application sending messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub build: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
}

/// Name and version of the library that sends messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
}

impl Context {
    /// Remove `extra` keys that would duplicate a named field on the wire.
    ///
    /// Flattened keys are written after the named fields, so a colliding key would replace the
    /// named value for most readers.
    pub fn remove_shadowing_extra(&mut self) {
        for name in NAMED_FIELDS {
            if self.extra.remove(*name).is_some() {
                tracing::warn!(key = *name, "Context.extra key shadows a named field, removed");
            }
        }
    }
}

impl LibraryInfo {
    /// The identity of this crate.
    pub fn current() -> Self {
        Self {
            name: LIBRARY_NAME.to_string(),
            version: LIBRARY_VERSION.to_string(),
        }
    }
}
