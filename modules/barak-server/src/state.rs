use std::sync::Arc;

use ai_client::CompletionAgent;

use crate::search::PropertySearch;

/// Shared immutable state handed to every request handler.
///
/// `ai` is `None` when the completion credential is absent; the chat endpoint
/// then answers with a fixed unavailability message instead of refusing to
/// start.
pub struct AppState {
    pub ai: Option<Arc<dyn CompletionAgent>>,
    pub search: Arc<dyn PropertySearch>,
}
