//! Reverse lookup: from translated text back to its dotted key.

use super::node::{TranslationMap, TranslationNode};

/// Collect every text leaf with its dotted key, depth-first in document order.
pub fn flatten(map: &TranslationMap) -> Vec<(String, &str)> {
    let mut result = Vec::new();
    flatten_into(map, "", &mut result);
    result
}

fn flatten_into<'a>(map: &'a TranslationMap, prefix: &str, result: &mut Vec<(String, &'a str)>) {
    for (key, node) in map {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match node {
            TranslationNode::Leaf(text) => result.push((full_key, text.as_str())),
            TranslationNode::Node(child) => flatten_into(child, &full_key, result),
            TranslationNode::Other(_) => {}
        }
    }
}

/// Find the first key whose text is exactly `text`.
pub fn find_key_by_text(map: &TranslationMap, text: &str) -> Option<String> {
    for (key, node) in map {
        match node {
            TranslationNode::Leaf(value) if value == text => return Some(key.clone()),
            TranslationNode::Node(child) => {
                if let Some(found) = find_key_by_text(child, text) {
                    return Some(format!("{}.{}", key, found));
                }
            }
            _ => {}
        }
    }
    None
}
