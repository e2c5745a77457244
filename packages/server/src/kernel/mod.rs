//! Kernel module - server infrastructure and dependencies.

pub mod ai;
pub mod deps;
pub mod stores;
pub mod test_dependencies;
pub mod traits;

pub use ai::GroqAI;
pub use deps::ServerDeps;
pub use stores::{FirestoreChatStore, RealtimeChatStore, CHATS};
pub use test_dependencies::TestDependencies;
pub use traits::*;
