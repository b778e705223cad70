//! Manifest lookup for the graph builder.
//!
//! The builder never touches the filesystem directly; it goes through the
//! [`ManifestSource`] trait so tests can substitute an in-memory package
//! tree for a real `node_modules` directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::parser::{parse_file, parse_str, PackageJson, ParseError};

/// The manifest filename npm writes at every package root.
pub const MANIFEST_FILE: &str = "package.json";

/// The fixed directory under which installed packages live.
pub const MODULES_DIR: &str = "node_modules";

/// Errors that abort a graph build.
///
/// A missing transitive manifest is deliberately not represented here: it
/// is an expected outcome (e.g. an uninstalled peer or optional dependency)
/// and surfaces as `Ok(None)` from [`ManifestSource::lookup`].
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// The root package.json does not exist. Fatal: there is no project
    /// to analyze.
    #[error("No package.json found at project root: {}", path.display())]
    ProjectNotFound {
        /// Path that was probed for the root manifest.
        path: PathBuf,
    },

    /// A manifest file exists but could not be parsed. Fatal: a corrupt
    /// manifest invalidates the whole build.
    #[error("Failed to parse manifest at {}", path.display())]
    Manifest {
        /// Path of the offending manifest file.
        path: PathBuf,
        /// The underlying parse failure.
        #[source]
        source: ParseError,
    },

    /// The root manifest carries no "name" field, so the graph would have
    /// no root key.
    #[error("Root package.json has no \"name\" field")]
    UnnamedProject,
}

/// Capability interface for locating package manifests.
///
/// Implementations isolate filesystem and parse failures from the graph
/// logic: absence of a transitive manifest is `Ok(None)`, while a manifest
/// that exists but cannot be parsed is a fatal [`GraphError::Manifest`].
pub trait ManifestSource {
    /// Reads the root manifest of the project under analysis.
    ///
    /// Unlike [`lookup`](Self::lookup), absence here is fatal and reported
    /// as [`GraphError::ProjectNotFound`].
    fn root(&self) -> Result<PackageJson, GraphError>;

    /// Looks up the installed manifest for a package by name.
    ///
    /// Returns `Ok(None)` when the package is not installed.
    fn lookup(&self, name: &str) -> Result<Option<PackageJson>, GraphError>;
}

/// Manifest source backed by a real package tree on disk.
///
/// Resolves `<package_root>/package.json` for the root manifest and
/// `<package_root>/node_modules/<name>/package.json` for installed
/// dependencies. Read-only; never writes.
///
/// # Example
///
/// ```no_run
/// use depviz::graph::{FsManifestSource, ManifestSource};
///
/// let source = FsManifestSource::new("/path/to/project");
/// let root = source.root().unwrap();
/// println!("analyzing {:?}", root.name);
/// ```
#[derive(Debug, Clone)]
pub struct FsManifestSource {
    package_root: PathBuf,
}

impl FsManifestSource {
    /// Creates a source rooted at the given project directory.
    pub fn new(package_root: impl Into<PathBuf>) -> Self {
        Self {
            package_root: package_root.into(),
        }
    }

    /// Returns the project directory this source reads from.
    pub fn package_root(&self) -> &Path {
        &self.package_root
    }

    fn manifest_path(&self, name: &str) -> PathBuf {
        // Scoped names like "@babel/core" contain a separator; Path::join
        // handles the nested directory for free.
        self.package_root
            .join(MODULES_DIR)
            .join(name)
            .join(MANIFEST_FILE)
    }
}

impl ManifestSource for FsManifestSource {
    fn root(&self) -> Result<PackageJson, GraphError> {
        let path = self.package_root.join(MANIFEST_FILE);
        if !path.is_file() {
            return Err(GraphError::ProjectNotFound { path });
        }
        parse_file(&path).map_err(|source| GraphError::Manifest { path, source })
    }

    fn lookup(&self, name: &str) -> Result<Option<PackageJson>, GraphError> {
        let path = self.manifest_path(name);
        if !path.is_file() {
            trace!(package = name, path = %path.display(), "manifest not installed");
            return Ok(None);
        }
        parse_file(&path)
            .map(Some)
            .map_err(|source| GraphError::Manifest { path, source })
    }
}

/// Manifest source backed by raw JSON documents held in memory.
///
/// Stores the same bytes a real tree would, and parses them on lookup, so
/// parse-failure paths behave exactly like the filesystem source. Intended
/// for tests and benchmarks.
///
/// # Example
///
/// ```
/// use depviz::graph::{InMemorySource, ManifestSource};
///
/// let source = InMemorySource::new()
///     .with_root(r#"{"name": "app", "dependencies": {"left-pad": "^1.3.0"}}"#)
///     .with_package("left-pad", r#"{"name": "left-pad"}"#);
///
/// assert!(source.lookup("left-pad").unwrap().is_some());
/// assert!(source.lookup("right-pad").unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    root: Option<String>,
    packages: HashMap<String, String>,
}

impl InMemorySource {
    /// Creates an empty source with no root manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root package.json document.
    pub fn with_root(mut self, raw: impl Into<String>) -> Self {
        self.root = Some(raw.into());
        self
    }

    /// Adds an installed package's package.json document.
    pub fn with_package(mut self, name: impl Into<String>, raw: impl Into<String>) -> Self {
        self.packages.insert(name.into(), raw.into());
        self
    }
}

impl ManifestSource for InMemorySource {
    fn root(&self) -> Result<PackageJson, GraphError> {
        let path = PathBuf::from(MANIFEST_FILE);
        let raw = self
            .root
            .as_deref()
            .ok_or(GraphError::ProjectNotFound { path: path.clone() })?;
        parse_str(raw).map_err(|source| GraphError::Manifest { path, source })
    }

    fn lookup(&self, name: &str) -> Result<Option<PackageJson>, GraphError> {
        let Some(raw) = self.packages.get(name) else {
            return Ok(None);
        };
        let path = Path::new(MODULES_DIR).join(name).join(MANIFEST_FILE);
        parse_str(raw)
            .map(Some)
            .map_err(|source| GraphError::Manifest { path, source })
    }
}
