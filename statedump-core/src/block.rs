use std::fmt;

use crate::NamespacedPath;

/// One block registry entry together with the state path it maps to, if any.
#[derive(Debug)]
pub struct BlockEntry<'a, K: ?Sized> {
    pub id: u16,
    pub key: &'a K,
    pub path: Option<NamespacedPath>,
}

/// Why a block entry is written as a comment instead of a table row.
#[derive(Debug, PartialEq, Eq)]
pub enum Unresolved<'a> {
    Unmapped,
    ForeignNamespace(&'a NamespacedPath),
    Malformed(&'a NamespacedPath),
}

impl<'a, K: ?Sized> BlockEntry<'a, K> {
    pub fn new(id: u16, key: &'a K, path: Option<NamespacedPath>) -> Self {
        Self { id, key, path }
    }

    /// The `minecraft` path this entry is emitted under.
    pub fn resolution(&self) -> Result<&NamespacedPath, Unresolved<'_>> {
        match &self.path {
            None => Err(Unresolved::Unmapped),
            Some(path) if !path.is_minecraft() => Err(Unresolved::ForeignNamespace(path)),
            Some(path) if !path.is_well_formed() => Err(Unresolved::Malformed(path)),
            Some(path) => Ok(path),
        }
    }
}

impl fmt::Display for Unresolved<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unmapped => f.write_str("no state mapping"),
            Self::ForeignNamespace(path) => write!(f, "foreign namespace: {path}"),
            Self::Malformed(path) => write!(f, "malformed path: {path}"),
        }
    }
}
