pub mod chat;
pub mod error;
pub mod rest;
pub mod routes;
pub mod search;
mod state;

pub use state::AppState;
