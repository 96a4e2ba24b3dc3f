//! Typed translation tree.
//!
//! A parsed resource file is a tree of [`TranslationNode`]s. Internal nodes are
//! ordered maps, leaves are the translated text. JSON values that are neither
//! strings nor objects are carried as [`TranslationNode::Other`] so that files
//! survive a read/write cycle untouched.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One level of a translation tree. Keeps insertion order.
pub type TranslationMap = IndexMap<String, TranslationNode>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationNode {
    /// Translated text.
    Leaf(String),
    /// Nested mapping.
    Node(TranslationMap),
    /// Numbers, booleans, null and arrays. Opaque to key resolution.
    Other(Value),
}

impl TranslationNode {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TranslationNode::Leaf(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&TranslationMap> {
        match self {
            TranslationNode::Node(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, TranslationNode::Node(_))
    }

    /// Empty-string leaves are placeholders, not translations.
    pub fn is_blank(&self) -> bool {
        matches!(self, TranslationNode::Leaf(text) if text.is_empty())
    }
}

impl From<&str> for TranslationNode {
    fn from(text: &str) -> Self {
        TranslationNode::Leaf(text.to_string())
    }
}

impl From<String> for TranslationNode {
    fn from(text: String) -> Self {
        TranslationNode::Leaf(text)
    }
}

impl From<TranslationMap> for TranslationNode {
    fn from(map: TranslationMap) -> Self {
        TranslationNode::Node(map)
    }
}
