//! Deep merge of translation trees.
//!
//! Conflict policy: when both sides hold a mapping under the same key the merge
//! recurses, in every other case the incoming node replaces the existing one.
//! Replaced keys keep their position; new keys are appended.

use super::node::{TranslationMap, TranslationNode};

pub fn merge_into(base: &mut TranslationMap, incoming: TranslationMap) {
    for (key, node) in incoming {
        match base.get_mut(&key) {
            Some(existing) => merge_node(existing, node),
            None => {
                base.insert(key, node);
            }
        }
    }
}

fn merge_node(existing: &mut TranslationNode, incoming: TranslationNode) {
    match (existing, incoming) {
        (TranslationNode::Node(existing), TranslationNode::Node(child)) => {
            merge_into(existing, child);
        }
        (existing, incoming) => *existing = incoming,
    }
}

pub fn merge(mut base: TranslationMap, incoming: TranslationMap) -> TranslationMap {
    merge_into(&mut base, incoming);
    base
}
