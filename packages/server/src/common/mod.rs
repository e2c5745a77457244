// Common types shared across the application

pub mod chat_exchange;

pub use chat_exchange::ChatExchange;
