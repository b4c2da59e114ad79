use crate::domain::model::{NoteDetail, NoteRef, NotesPage, TagList};
use crate::domain::ports::NoteTransport;
use crate::utils::error::Result;

const DETAIL_FIELDS: &str = "body,title,user_created_time,user_updated_time";

/// Note-level operations on top of a [`NoteTransport`].
pub struct NoteClient<T: NoteTransport> {
    transport: T,
    page_size: usize,
}

impl<T: NoteTransport> NoteClient<T> {
    pub fn new(transport: T, page_size: usize) -> Self {
        Self {
            transport,
            page_size,
        }
    }

    /// Lists every note ordered by title, following `has_more` until the last page.
    pub async fn list_all_notes(&self) -> Result<Vec<NoteRef>> {
        let mut notes = Vec::new();
        let mut page = 0usize;

        loop {
            let query = [
                ("order_by", "title".to_string()),
                ("limit", self.page_size.to_string()),
                ("page", page.to_string()),
            ];
            let value = self.transport.get("notes", &query).await?;
            let listing: NotesPage = serde_json::from_value(value)?;

            tracing::debug!(
                "📄 Page {}: {} notes (has_more: {})",
                page,
                listing.items.len(),
                listing.has_more
            );
            notes.extend(listing.items);

            if !listing.has_more {
                break;
            }
            page += 1;
        }

        Ok(notes)
    }

    pub async fn get_note_detail(&self, id: &str) -> Result<NoteDetail> {
        let value = self
            .transport
            .get(
                &format!("notes/{}/", id),
                &[("fields", DETAIL_FIELDS.to_string())],
            )
            .await?;

        Ok(serde_json::from_value(value)?)
    }

    pub async fn get_note_tags(&self, id: &str) -> Result<Vec<String>> {
        let value = self.transport.get(&format!("notes/{}/tags", id), &[]).await?;
        let listing: TagList = serde_json::from_value(value)?;
        Ok(listing.items.into_iter().map(|tag| tag.title).collect())
    }

    /// Replaces the note body. An empty body is never sent; returns whether a write happened.
    pub async fn update_note_body(&self, id: &str, new_body: &str) -> Result<bool> {
        if new_body.is_empty() {
            tracing::warn!("⚠️ Refusing to write an empty body to note {}", id);
            return Ok(false);
        }

        let payload = serde_json::json!({ "body": new_body });
        self.transport.put(&format!("notes/{}", id), &payload).await?;
        Ok(true)
    }
}
