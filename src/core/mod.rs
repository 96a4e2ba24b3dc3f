//! Core engine: key resolution, tree merging and resource files.
//!
//! ## Module Structure
//!
//! - `node`: the typed translation tree (`Leaf` / `Node` / `Other`)
//! - `key_path`: dotted-key `lookup` and `build`
//! - `merge`: recursive merge with incoming-wins conflict policy
//! - `search`: flattening and reverse lookup by text
//! - `resources`: per-locale JSON resource files
//! - `extract`: extraction planning and application
//! - `rewrite`: replacing extracted text in source files

pub mod extract;
pub mod key_path;
pub mod merge;
pub mod node;
pub mod resources;
pub mod rewrite;
pub mod search;

pub use extract::{CallStyle, ExtractPlan, ExtractRequest, PlannedWrite, apply_plan, plan_extraction};
pub use key_path::{KeyPath, build, lookup, resolve};
pub use merge::{merge, merge_into};
pub use node::{TranslationMap, TranslationNode};
pub use resources::{
    KeyAction, KeyConflict, ResourceFile, ResourceSet, TextMatch, discover_locales,
    resource_file_name,
};
pub use rewrite::rewrite_source;
pub use search::{find_key_by_text, flatten};
