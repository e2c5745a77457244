//! Chat actions - business logic for answering and recording messages

pub mod handle_message;
pub mod persist_exchange;
pub mod resolve_reply;

pub use handle_message::handle_message;
pub use persist_exchange::persist_exchange;
pub use resolve_reply::resolve_reply;
