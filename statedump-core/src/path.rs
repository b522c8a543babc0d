use std::fmt;

use serde::{Deserialize, Serialize};

/// The only namespace whose block states end up in the generated table.
pub const MINECRAFT_NAMESPACE: &str = "minecraft";

/// A block state model location, written `namespace:identifier#variant`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct NamespacedPath {
    pub namespace: String,
    pub identifier: String,
    pub variant: String,
}

impl NamespacedPath {
    pub fn new(
        namespace: impl Into<String>,
        identifier: impl Into<String>,
        variant: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            identifier: identifier.into(),
            variant: variant.into(),
        }
    }

    pub fn is_minecraft(&self) -> bool {
        self.namespace == MINECRAFT_NAMESPACE
    }

    /// Both the identifier and the variant are needed to emit a table row.
    pub fn is_well_formed(&self) -> bool {
        !self.identifier.is_empty() && !self.variant.is_empty()
    }
}

impl From<&str> for NamespacedPath {
    fn from(raw: &str) -> Self {
        let (location, variant) = raw.split_once('#').unwrap_or((raw, ""));
        let (namespace, identifier) = location
            .split_once(':')
            .unwrap_or((MINECRAFT_NAMESPACE, location));
        Self::new(namespace, identifier, variant)
    }
}

impl From<String> for NamespacedPath {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<NamespacedPath> for String {
    fn from(path: NamespacedPath) -> Self {
        path.to_string()
    }
}

impl fmt::Display for NamespacedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}#{}", self.namespace, self.identifier, self.variant)
    }
}
