use std::fmt;

use super::PathComponent;

/// How many values a path can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Zero or one match
    Regular,
    /// Zero or more matches
    Wildcard,
}

impl Classification {
    /// Classifies a component sequence.
    ///
    /// A single wildcard or recursive component is enough to make the whole
    /// path a `Wildcard` path.
    pub fn of<'a, 'c: 'a, I>(components: I) -> Self
    where
        I: IntoIterator<Item = &'a PathComponent<'c>>,
    {
        let mut class = Classification::Regular;
        for component in components {
            class = class.merge(component);
        }
        class
    }

    /// Folds one more component into a running classification.
    pub fn merge(self, component: &PathComponent<'_>) -> Self {
        if component.is_wildcard() {
            Classification::Wildcard
        } else {
            self
        }
    }

    pub fn is_wildcard(self) -> bool {
        self == Classification::Wildcard
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Regular => f.write_str("regular"),
            Classification::Wildcard => f.write_str("wildcard"),
        }
    }
}
