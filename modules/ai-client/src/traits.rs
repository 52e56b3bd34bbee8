use anyhow::Result;
use async_trait::async_trait;

/// Dyn-compatible seam over a text completion provider.
///
/// One prompt in, one text completion out. No retries and no timeout at this
/// layer; callers decide how to degrade when the provider fails.
#[async_trait]
pub trait CompletionAgent: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}
