//! Document identity.

use std::borrow::Borrow;
use std::fmt;
use std::path::{Component, Path};
use std::sync::Arc;

/// Opaque identity of an open document, usually a workspace-relative path.
///
/// The manager never interprets the contents; only equality and hashing matter.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(Arc<str>);

impl DocumentId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Build an identity from a workspace-relative path.
    ///
    /// Normalization is purely lexical: `.` segments are dropped, `..` folds
    /// into its parent where one exists, and separators become `/`. Paths
    /// outside the workspace stay absolute, keeping their root (and drive
    /// prefix), and `..` directly under a root is dropped. The file system is
    /// never touched.
    ///
    /// # Example
    /// ```
    /// use symdex::DocumentId;
    /// use std::path::Path;
    ///
    /// let id = DocumentId::from_relative_path(Path::new("shaders/./lib/../main.fx"));
    /// assert_eq!(id.as_str(), "shaders/main.fx");
    ///
    /// let outside = DocumentId::from_relative_path(Path::new("/lib/../shared/noise.fx"));
    /// assert_eq!(outside.as_str(), "/shared/noise.fx");
    /// ```
    pub fn from_relative_path(path: &Path) -> Self {
        let mut root = String::new();
        let mut parts: Vec<String> = Vec::new();
        for component in path.components() {
            match component {
                Component::Prefix(prefix) => {
                    root.push_str(&prefix.as_os_str().to_string_lossy());
                }
                Component::RootDir => root.push('/'),
                Component::CurDir => {}
                Component::ParentDir => match parts.last() {
                    Some(last) if last != ".." => {
                        parts.pop();
                    }
                    // Nothing above a root.
                    _ if root.ends_with('/') => {}
                    _ => parts.push("..".to_string()),
                },
                Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            }
        }
        if root.is_empty() && parts.is_empty() {
            return Self::new(".");
        }
        Self::new(root + &parts.join("/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocumentId({:?})", &*self.0)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for DocumentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}
