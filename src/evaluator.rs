//! Path evaluation against a [`Document`].
//!
//! Regular paths are walked directly: one lookup per component, no
//! allocation. Wildcard paths fan out at every wildcard or recursive
//! component and collect their matches in document order.
//!
//! Evaluation never fails. A component that does not apply to the node it
//! meets (a member lookup on an array, an index past the end, `[#]`) simply
//! contributes no match.

use std::fmt;

use log::{error, trace};

use crate::{ast::PathComponent, document::Document, lexer::Lexer, parser::ValidatedPath};

/// The values addressed by a path.
#[derive(Debug, Clone, PartialEq)]
pub enum Matches<'d, D> {
    /// Result of a regular path
    Single(Option<&'d D>),
    /// Result of a wildcard path, in document order
    Many(Vec<&'d D>),
}

impl<'d, D> Matches<'d, D> {
    pub fn len(&self) -> usize {
        match self {
            Matches::Single(found) => usize::from(found.is_some()),
            Matches::Many(all) => all.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn first(&self) -> Option<&'d D> {
        match self {
            Matches::Single(found) => *found,
            Matches::Many(all) => all.first().copied(),
        }
    }

    pub fn into_vec(self) -> Vec<&'d D> {
        self.into_iter().collect()
    }
}

impl<'d, D> IntoIterator for Matches<'d, D> {
    type Item = &'d D;
    type IntoIter = std::iter::Chain<std::option::IntoIter<&'d D>, std::vec::IntoIter<&'d D>>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Matches::Single(found) => found.into_iter().chain(Vec::new()),
            Matches::Many(all) => None.into_iter().chain(all),
        }
    }
}

/// Evaluates a regular path, returning its single match.
///
/// Called with a wildcard path, returns the first value [`get_all`] would.
///
/// # Examples
///
/// ```
/// use clove_path::{get, ValidatedPath};
/// use serde_json::json;
///
/// let doc = json!([10, 20, 30]);
/// let last = ValidatedPath::parse("$[-1]").unwrap();
/// assert_eq!(get(&last, &doc), Some(&json!(30)));
///
/// let never = ValidatedPath::parse("$[#]").unwrap();
/// assert_eq!(get(&never, &doc), None);
/// ```
pub fn get<'d, D: Document>(path: &ValidatedPath, root: &'d D) -> Option<&'d D> {
    if path.is_wildcard() {
        return get_all(path, root).into_iter().next();
    }

    let mut current = root;
    for step in path.lexer() {
        let component = match step {
            Ok(component) => component,
            Err(e) => {
                broken_contract(path, &e);
                return None;
            }
        };

        current = match component {
            PathComponent::Field {
                key,
                recursive: false,
            } => lookup_member(current, &key)?,
            PathComponent::Index { value, from_back } => lookup_element(current, value, from_back)?,
            PathComponent::IndexNullSentinel => return None,
            wildcard => {
                broken_contract(path, &format_args!("regular path contains '{}'", wildcard));
                return None;
            }
        };
    }
    Some(current)
}

/// Evaluates a path, returning every match in document order.
///
/// # Examples
///
/// ```
/// use clove_path::{get_all, ValidatedPath};
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": 1}});
/// let path = ValidatedPath::parse("$..*").unwrap();
/// assert_eq!(get_all(&path, &doc), [&json!({"b": 1}), &json!(1)]);
/// ```
pub fn get_all<'d, D: Document>(path: &ValidatedPath, root: &'d D) -> Vec<&'d D> {
    trace!("collecting matches for {}", path);
    let mut out = Vec::new();
    collect(path, path.lexer(), root, &mut out);
    out
}

/// Evaluates a path according to its classification.
pub fn select<'d, D: Document>(path: &ValidatedPath, root: &'d D) -> Matches<'d, D> {
    if path.is_wildcard() {
        Matches::Many(get_all(path, root))
    } else {
        Matches::Single(get(path, root))
    }
}

impl ValidatedPath {
    /// See [`get`].
    pub fn get<'d, D: Document>(&self, root: &'d D) -> Option<&'d D> {
        get(self, root)
    }

    /// See [`get_all`].
    pub fn get_all<'d, D: Document>(&self, root: &'d D) -> Vec<&'d D> {
        get_all(self, root)
    }

    /// See [`select`].
    pub fn select<'d, D: Document>(&self, root: &'d D) -> Matches<'d, D> {
        select(self, root)
    }
}

// Follows plain lookups in place and recurses only where the path branches.
fn collect<'d, D: Document>(
    path: &ValidatedPath,
    mut rest: Lexer<'_>,
    mut node: &'d D,
    out: &mut Vec<&'d D>,
) {
    loop {
        let component = match rest.next() {
            None => {
                out.push(node);
                return;
            }
            Some(Ok(component)) => component,
            Some(Err(e)) => {
                broken_contract(path, &e);
                return;
            }
        };

        match component {
            PathComponent::Field {
                key,
                recursive: false,
            } => match lookup_member(node, &key) {
                Some(child) => node = child,
                None => return,
            },
            PathComponent::Index { value, from_back } => match lookup_element(node, value, from_back) {
                Some(child) => node = child,
                None => return,
            },
            PathComponent::IndexNullSentinel => return,
            PathComponent::FieldWildcard { recursive: false } => {
                for (_, child) in node.members() {
                    collect(path, rest.clone(), child, out);
                }
                return;
            }
            PathComponent::IndexWildcard => {
                for child in node.elements() {
                    collect(path, rest.clone(), child, out);
                }
                return;
            }
            PathComponent::FieldWildcard { recursive: true } => {
                // A trailing descent marker selects strict descendants only.
                let skip_self = usize::from(rest.is_finished());
                for candidate in descendants_or_self(node).into_iter().skip(skip_self) {
                    collect(path, rest.clone(), candidate, out);
                }
                return;
            }
            PathComponent::Field {
                key,
                recursive: true,
            } => {
                for candidate in descendants_or_self(node) {
                    if let Some(child) = lookup_member(candidate, &key) {
                        collect(path, rest.clone(), child, out);
                    }
                }
                return;
            }
        }
    }
}

/// `node` followed by all of its descendants, level by level.
fn descendants_or_self<'d, D: Document>(node: &'d D) -> Vec<&'d D> {
    let mut closure = vec![node];
    let mut next = 0;
    while let Some(&current) = closure.get(next) {
        closure.extend(current.children());
        next += 1;
    }
    closure
}

fn lookup_member<'d, D: Document>(node: &'d D, key: &str) -> Option<&'d D> {
    if !node.is_object() {
        return None;
    }
    node.member(key)
}

fn lookup_element<'d, D: Document>(node: &'d D, value: u64, from_back: bool) -> Option<&'d D> {
    if !node.is_array() {
        return None;
    }
    node.element(resolve_index(node.len(), value, from_back)?)
}

/// Maps an index literal onto a position in an array of `len` elements.
///
/// A from-back literal of zero is position 0, not the last element.
pub fn resolve_index(len: usize, value: u64, from_back: bool) -> Option<usize> {
    let value = usize::try_from(value).ok()?;
    match (from_back, value) {
        (true, 0) => Some(0),
        (true, n) => len.checked_sub(n),
        (false, n) => Some(n),
    }
}

#[cold]
fn broken_contract(path: &ValidatedPath, detail: &dyn fmt::Display) {
    debug_assert!(false, "validated path {} cannot be evaluated: {}", path, detail);
    error!("validated path {} cannot be evaluated: {}", path, detail);
}
