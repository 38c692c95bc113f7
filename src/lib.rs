//! # Clove Path
//!
//! A path micro-language for addressing values inside a parsed document tree.
//!
//! Validate a path once, then evaluate it against any number of documents:
//!
//! ```
//! use clove_path::{Classification, ValidatedPath};
//! use serde_json::json;
//!
//! let path = ValidatedPath::parse("$.users[*].name").unwrap();
//! assert_eq!(path.classification(), Classification::Wildcard);
//!
//! let doc = json!({"users": [{"name": "Ada"}, {"name": "Grace"}]});
//! assert_eq!(path.get_all(&doc), [&json!("Ada"), &json!("Grace")]);
//! ```
pub mod ast;
pub mod cache;
pub mod cli;
pub mod document;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;
pub mod value;

pub use ast::{Classification, PathComponent};
pub use cache::{CacheConfig, PathCache};
pub use document::Document;
pub use error::{PathError, PathErrorKind};
pub use evaluator::{get, get_all, select, Matches};
pub use lexer::{Lexer, MAX_INDEX_DIGITS, MAX_PATH_LEN};
pub use parser::{validate, ValidatedPath};
pub use value::Value;
