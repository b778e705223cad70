//! Shared types for manifest parsing.
//!
//! This module defines the data structures used to represent npm package
//! manifests as they exist on disk.

use serde::{Deserialize, Serialize};

/// A table of dependency declarations: package name mapped to its version
/// constraint.
///
/// Backed by [`serde_json::Map`], which preserves the declared key order
/// (the crate enables serde_json's `preserve_order` feature). The graph
/// builder relies on that order when recording dependency lists.
pub type DependencyTable = serde_json::Map<String, serde_json::Value>;

/// Represents the structure of a package.json file.
///
/// This struct mirrors the npm package.json specification, capturing the
/// fields needed for dependency graph construction. Unknown fields are
/// ignored during deserialization.
///
/// # Example
///
/// ```
/// use depviz::parser::PackageJson;
///
/// let json = r#"{"name": "my-app", "version": "1.0.0"}"#;
/// let pkg: PackageJson = serde_json::from_str(json).unwrap();
/// assert_eq!(pkg.name, Some("my-app".to_string()));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PackageJson {
    /// The name of the package.
    pub name: Option<String>,

    /// The version of the package (semver format, uninterpreted).
    pub version: Option<String>,

    /// A brief description of the package.
    pub description: Option<String>,

    /// Production dependencies required at runtime. The traversal follows
    /// only this table.
    pub dependencies: Option<DependencyTable>,

    /// Development-only dependencies (testing, building, etc.).
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: Option<DependencyTable>,

    /// Peer dependencies that the host package must provide.
    #[serde(rename = "peerDependencies")]
    pub peer_dependencies: Option<DependencyTable>,

    /// Optional dependencies that enhance functionality if available.
    #[serde(rename = "optionalDependencies")]
    pub optional_dependencies: Option<DependencyTable>,
}

impl PackageJson {
    /// Returns the names of the production dependencies, in declared order.
    ///
    /// A missing or empty `dependencies` table yields an empty vector.
    ///
    /// # Example
    ///
    /// ```
    /// use depviz::parser::PackageJson;
    ///
    /// let json = r#"{"name": "app", "dependencies": {"b": "^1.0.0", "a": "^2.0.0"}}"#;
    /// let pkg: PackageJson = serde_json::from_str(json).unwrap();
    /// assert_eq!(pkg.dependency_names(), vec!["b", "a"]);
    /// ```
    pub fn dependency_names(&self) -> Vec<String> {
        self.dependencies
            .as_ref()
            .map(|deps| deps.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns true if the package has any dependencies defined.
    pub fn has_dependencies(&self) -> bool {
        self.dependencies.as_ref().is_some_and(|d| !d.is_empty())
            || self
                .dev_dependencies
                .as_ref()
                .is_some_and(|d| !d.is_empty())
            || self
                .peer_dependencies
                .as_ref()
                .is_some_and(|d| !d.is_empty())
            || self
                .optional_dependencies
                .as_ref()
                .is_some_and(|d| !d.is_empty())
    }

    /// Returns the total count of all dependencies across the four tables.
    pub fn dependency_count(&self) -> usize {
        self.dependencies.as_ref().map_or(0, |d| d.len())
            + self.dev_dependencies.as_ref().map_or(0, |d| d.len())
            + self.peer_dependencies.as_ref().map_or(0, |d| d.len())
            + self.optional_dependencies.as_ref().map_or(0, |d| d.len())
    }
}
