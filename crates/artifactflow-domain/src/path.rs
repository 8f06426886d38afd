//! Key path resolution against an artifact.
//!
//! A path is a dot-separated list of segments. Resolution walks a small state machine:
//!
//! - `RootLookup`: a single segment that is not the metadata attribute name. The
//!   metadata map wins over fixed attributes; fixed attributes are the fallback.
//! - `EnterMetadata`: the first segment names the metadata attribute itself; the rest
//!   of the path (possibly empty) addresses the metadata document.
//! - `InsideMetadata`: descending through nested maps one segment at a time. A
//!   multi-segment path whose first segment is not the metadata name starts here too.
//!
//! Missing keys and non-map intermediates resolve to `None`; nothing here panics.

use artifactflow_types::{Artifact, Value};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Names that address the open-ended metadata attribute.
pub const METADATA_ATTRIBUTES: [&str; 2] = ["metadata", "artifactMetadata"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathParseError {
    #[error("key path is empty")]
    Empty,
    #[error("empty segment at position {0} in key path")]
    EmptySegment(usize),
}

/// A parsed, non-empty key path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    pub fn parse(s: &str) -> Result<Self, PathParseError> {
        if s.is_empty() {
            return Err(PathParseError::Empty);
        }
        let segments = s
            .split('.')
            .enumerate()
            .map(|(i, seg)| {
                if seg.is_empty() {
                    Err(PathParseError::EmptySegment(i))
                } else {
                    Ok(seg.to_string())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl FromStr for KeyPath {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyPath::parse(s)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

pub fn is_metadata_attribute(segment: &str) -> bool {
    METADATA_ATTRIBUTES.contains(&segment)
}

/// Fixed top-level attributes, addressable by their short or serialized names.
pub fn fixed_attribute<'a>(artifact: &'a Artifact, name: &str) -> Option<&'a str> {
    match name {
        "id" => Some(artifact.id.as_str()),
        "name" => Some(artifact.name.as_str()),
        "description" => Some(artifact.description.as_str()),
        "type" | "artifactType" => Some(artifact.artifact_type.as_str()),
        "family" | "artifactFamily" => Some(artifact.artifact_family.as_str()),
        _ => None,
    }
}

enum Cursor<'a> {
    RootLookup(&'a str),
    EnterMetadata(&'a [String]),
    InsideMetadata {
        map: &'a BTreeMap<String, Value>,
        rest: &'a [String],
    },
}

/// Resolve `path` against `artifact`.
///
/// Metadata values are borrowed; fixed attributes and the whole-metadata view are
/// materialized.
pub fn resolve<'a>(artifact: &'a Artifact, path: &'a KeyPath) -> Option<Cow<'a, Value>> {
    let segments = path.segments();
    let mut cursor = match segments {
        [] => return None,
        [only] if !is_metadata_attribute(only) => Cursor::RootLookup(only.as_str()),
        [first, rest @ ..] if is_metadata_attribute(first) => Cursor::EnterMetadata(rest),
        _ => Cursor::InsideMetadata {
            map: &artifact.artifact_metadata,
            rest: segments,
        },
    };

    loop {
        cursor = match cursor {
            Cursor::RootLookup(key) => {
                return artifact
                    .artifact_metadata
                    .get(key)
                    .map(Cow::Borrowed)
                    .or_else(|| {
                        fixed_attribute(artifact, key)
                            .map(|s| Cow::Owned(Value::String(s.to_string())))
                    });
            }
            Cursor::EnterMetadata([]) => {
                return Some(Cow::Owned(Value::Map(artifact.artifact_metadata.clone())));
            }
            Cursor::EnterMetadata(rest) => Cursor::InsideMetadata {
                map: &artifact.artifact_metadata,
                rest,
            },
            Cursor::InsideMetadata { map, rest } => {
                let (key, tail) = rest.split_first()?;
                let value = map.get(key)?;
                if tail.is_empty() {
                    return Some(Cow::Borrowed(value));
                }
                Cursor::InsideMetadata {
                    map: value.as_map()?,
                    rest: tail,
                }
            }
        };
    }
}
