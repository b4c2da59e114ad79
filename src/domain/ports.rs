use crate::utils::error::Result;
use async_trait::async_trait;

/// Minimal capability the pipeline needs from the Joplin data API.
///
/// Paths are relative to the API base URL (`notes`, `notes/<id>/tags`, ...). Implementations
/// are responsible for authentication; callers never pass the token.
#[async_trait]
pub trait NoteTransport: Send + Sync {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<serde_json::Value>;
    async fn put(&self, path: &str, body: &serde_json::Value) -> Result<()>;
}
