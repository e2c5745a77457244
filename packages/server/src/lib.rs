// Groq chatbot backend - API core
//
// A chat message is answered by the Groq completion API, or by a small
// keyword table when the API is unavailable, and every exchange is written
// to Firestore and (optionally) the Firebase Realtime Database.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
