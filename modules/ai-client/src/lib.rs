pub mod gemini;
pub mod traits;
pub mod util;

pub use gemini::Gemini;
pub use traits::CompletionAgent;
pub use util::strip_code_blocks;
