//! Field Paths

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Serialize, Serializer};
use smallvec::SmallVec;

/// Rendered name of the empty path.
pub const ROOT: &str = "<root>";

/// One step into a payload: a named field or an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    /// Object field
    Field(&'static str),

    /// Array element
    Index(usize),
}

/// Location of a value inside a payload, rendered as `variations[1].price`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: SmallVec<[PathSegment; 4]>,
}

impl FieldPath {
    /// The payload root.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Whether this path points at the payload root.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub(crate) fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }
}

impl From<&[PathSegment]> for FieldPath {
    fn from(segments: &[PathSegment]) -> Self {
        Self {
            segments: SmallVec::from_slice(segments),
        }
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.is_root() {
            return f.write_str(ROOT);
        }

        for (position, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if position == 0 => f.write_str(name)?,
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }

        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
