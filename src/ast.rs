//! # Clove Path - Component Model
//!
//! This module defines the building blocks of the clove path micro-language,
//! a compact notation for addressing values inside a parsed document tree.
//!
//! ## Architecture Overview
//!
//! - **[component]** - Path components produced by the lexer
//! - **[classification]** - Regular vs. wildcard classification of whole paths
//!
//! ## Quick Start
//!
//! ```text
//! $.store.books[0].title
//! ```
//!
//! Every path starts with `$` (the root document) and chains member and
//! element accessors.
//!
//! ## Core Concepts
//!
//! ### Member access
//!
//! - `.name` or `."quoted name"` - One member of an object
//! - `.*` - Every member of an object
//! - `..name` - `name` anywhere at or below the current node
//! - `..*`, `.**`, `..[` - Every node below the current node
//!
//! ### Element access
//!
//! - `[2]` - Third element
//! - `[-1]`, `[#-1]` - Last element
//! - `[*]` - Every element
//! - `[#]` - Never matches
//!
//! ### Classification
//!
//! A path with no wildcard and no recursive component addresses at most one
//! value and is **regular**. Anything else is a **wildcard** path.
pub mod classification;
pub mod component;

pub use classification::Classification;
pub use component::PathComponent;
