//! Rendering of the front-matter block prepended to note bodies.
//!
//! ```text
//! ---
//! joplin-id: 039c4d1ad9c4403baad10acda1b48a90
//! created-at: 2012-11-10T09:05:49-0800
//! modified-at: 2012-11-10T09:09:35-0800
//! tags: [Note, Multi-Word-Tag, lower-case-tag]
//! ---
//! ```

use crate::utils::error::{Result, SyncError};
use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};

pub const DELIMITER: &str = "---";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Zone the block timestamps are rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockTimezone {
    /// The system zone, resolved per instant so DST is honoured.
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl BlockTimezone {
    pub fn format_millis(&self, millis: i64) -> Result<String> {
        let utc: DateTime<Utc> = Utc
            .timestamp_millis_opt(millis)
            .single()
            .ok_or(SyncError::InvalidTimestamp { millis })?;

        Ok(match self {
            BlockTimezone::Local => utc.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string(),
            BlockTimezone::Fixed(offset) => {
                utc.with_timezone(offset).format(TIMESTAMP_FORMAT).to_string()
            }
        })
    }
}

/// Obsidian does not accept spaces inside a tag.
pub fn sanitize_tag(tag: &str) -> String {
    tag.replace(' ', "-")
}

/// Renders the metadata block for one note. Every line, including the closing delimiter,
/// ends with `\n`, so the original body can be appended directly.
pub fn render(
    id: &str,
    created_ms: i64,
    updated_ms: i64,
    tags: &[String],
    zone: BlockTimezone,
) -> Result<String> {
    let created_at = zone.format_millis(created_ms)?;
    let modified_at = zone.format_millis(updated_ms)?;

    let mut block = String::new();
    block.push_str(DELIMITER);
    block.push('\n');
    block.push_str(&format!("joplin-id: {}\n", id));
    block.push_str(&format!("created-at: {}\n", created_at));
    block.push_str(&format!("modified-at: {}\n", modified_at));

    if !tags.is_empty() {
        let tag_list: Vec<String> = tags.iter().map(|t| sanitize_tag(t)).collect();
        block.push_str(&format!("tags: [{}]\n", tag_list.join(", ")));
    }

    block.push_str(DELIMITER);
    block.push('\n');
    Ok(block)
}
