//! Parser module for depviz.
//!
//! This module provides parsing for npm package.json manifests, the only
//! manifest format the graph builder consumes.
//!
//! # Example
//!
//! ```
//! use depviz::parser::parse_str;
//!
//! let pkg = parse_str(r#"{"name": "app", "dependencies": {"react": "^18.2.0"}}"#).unwrap();
//! assert_eq!(pkg.dependency_names(), vec!["react"]);
//! ```

pub mod package_json;
pub mod types;

// Re-export commonly used types for convenience
pub use package_json::{parse_file, parse_str, validate, ParseError, ParseResult};

pub use types::{DependencyTable, PackageJson};
