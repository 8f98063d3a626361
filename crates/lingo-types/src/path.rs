//! Locations inside a JSON document.
//!
//! A [`NodePath`] is rendered the way people read JSON accessors:
//! `work[0].highlights[2]`, with `$` standing for the document root.

use std::fmt;

use serde::{Serialize, Serializer};

/// One step from a node to one of its children.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object member.
    Key(String),
    /// Array element.
    Index(usize),
}

/// Path from the document root to a node.
///
/// Serializes as its display form, so JSON reports read like error messages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodePath {
    segments: Vec<PathSegment>,
}

impl NodePath {
    /// The document root.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments, i.e. the depth of the node below the root.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Descend into an object member.
    pub fn push_key(&mut self, key: impl Into<String>) {
        self.segments.push(PathSegment::Key(key.into()));
    }

    /// Descend into an array element.
    pub fn push_index(&mut self, index: usize) {
        self.segments.push(PathSegment::Index(index));
    }

    /// Return to the parent node.
    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    /// A new path one member below this one.
    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut child = self.clone();
        child.push_key(key);
        child
    }

    /// A new path one element below this one.
    pub fn index(&self, index: usize) -> Self {
        let mut child = self.clone();
        child.push_index(index);
        child
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("$");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{key}")?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for NodePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromIterator<PathSegment> for NodePath {
    fn from_iter<I: IntoIterator<Item = PathSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_displays_as_dollar() {
        assert_eq!(NodePath::root().to_string(), "$");
        assert!(NodePath::root().is_root());
    }

    #[test]
    fn single_key_displays_bare() {
        assert_eq!(NodePath::root().key("a").to_string(), "a");
    }

    #[test]
    fn mixed_segments() {
        let path = NodePath::root().key("work").index(0).key("highlights").index(2);
        assert_eq!(path.to_string(), "work[0].highlights[2]");
        assert_eq!(path.depth(), 4);
    }

    #[test]
    fn leading_index() {
        assert_eq!(NodePath::root().index(3).key("name").to_string(), "[3].name");
    }

    #[test]
    fn serializes_as_display_form() {
        let path = NodePath::root().key("work").index(0).key("position");
        assert_eq!(serde_json::to_value(&path).unwrap(), serde_json::json!("work[0].position"));
        assert_eq!(serde_json::to_value(NodePath::root()).unwrap(), serde_json::json!("$"));
    }

    #[test]
    fn push_and_pop_restore_parent() {
        let mut path = NodePath::root().key("skills");
        path.push_index(1);
        assert_eq!(path.to_string(), "skills[1]");
        assert_eq!(path.pop(), Some(PathSegment::Index(1)));
        assert_eq!(path.to_string(), "skills");
    }
}
