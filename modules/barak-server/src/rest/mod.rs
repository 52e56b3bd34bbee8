pub mod chat;

pub use chat::{api_chat, api_health};
