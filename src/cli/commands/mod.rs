mod context;
pub mod extract;
pub mod find;
pub mod init;
pub mod lookup;

pub use context::ProjectContext;
