//! Dotted-key resolution.
//!
//! Maps a dotted key such as `lang.demo.key` to and from a nested
//! [`TranslationMap`]. Both directions are pure and never fail: malformed keys
//! just produce empty segments, and a path that cannot be walked is reported
//! as absence.

use std::fmt;

use super::node::{TranslationMap, TranslationNode};

const KEY_SEPARATOR: char = '.';

/// A dotted key split into its segments.
///
/// Always holds at least one segment; `""` parses to a single empty segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    pub fn parse(key: &str) -> Self {
        Self {
            segments: key.split(KEY_SEPARATOR).map(str::to_string).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// True when any segment is empty (`""`, `"a..b"`, `".a"`).
    pub fn has_empty_segment(&self) -> bool {
        self.segments.iter().any(String::is_empty)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", KEY_SEPARATOR)?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// Walk `source` along `key` and return whatever node sits at the end.
///
/// Returns `None` as soon as a segment is missing or an intermediate node is
/// not a mapping.
pub fn resolve<'a>(key: &KeyPath, source: &'a TranslationMap) -> Option<&'a TranslationNode> {
    let (first, rest) = key.segments.split_first()?;
    let mut current = source.get(first)?;
    for segment in rest {
        current = current.as_map()?.get(segment)?;
    }
    Some(current)
}

/// Find the first node on a proper prefix of `key` that is not a mapping.
///
/// Building `key` into `source` replaces that node with a mapping, so the
/// value it holds is lost. Returns the prefix together with the node.
pub fn blocking_prefix<'a>(
    key: &KeyPath,
    source: &'a TranslationMap,
) -> Option<(KeyPath, &'a TranslationNode)> {
    let (_, parents) = key.segments.split_last()?;
    let mut current = source;
    for (depth, segment) in parents.iter().enumerate() {
        let node = current.get(segment)?;
        match node.as_map() {
            Some(map) => current = map,
            None => {
                let prefix = KeyPath {
                    segments: key.segments[..=depth].to_vec(),
                };
                return Some((prefix, node));
            }
        }
    }
    None
}

/// Look up the translated text stored at `key`.
///
/// Absent when the path does not exist or ends on something other than a
/// text leaf.
pub fn lookup<'a>(key: &KeyPath, source: &'a TranslationMap) -> Option<&'a str> {
    resolve(key, source).and_then(TranslationNode::as_text)
}

/// Build the minimal nested mapping that holds `value` at `key`.
pub fn build(key: &KeyPath, value: impl Into<String>) -> TranslationMap {
    let mut segments = key.segments.iter().rev();
    let mut node = TranslationNode::Leaf(value.into());
    let mut map = TranslationMap::new();

    if let Some(last) = segments.next() {
        map.insert(last.clone(), node);
    }
    for segment in segments {
        node = TranslationNode::Node(map);
        map = TranslationMap::new();
        map.insert(segment.clone(), node);
    }
    map
}

/// Convenience wrapper over [`lookup`] for a raw dotted string.
pub fn lookup_str<'a>(key: &str, source: &'a TranslationMap) -> Option<&'a str> {
    lookup(&KeyPath::parse(key), source)
}

/// Convenience wrapper over [`build`] for a raw dotted string.
pub fn build_str(key: &str, value: impl Into<String>) -> TranslationMap {
    build(&KeyPath::parse(key), value)
}
