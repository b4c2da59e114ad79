use serde::Deserialize;

/// A note as listed by the enumerator: enough to drive iteration and debug output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NoteRef {
    pub id: String,
    pub title: String,
}

/// Body and user-adjustable timestamps of a single note.
///
/// `user_created_time`/`user_updated_time` are the times a user may override in Joplin,
/// as opposed to the system-maintained `created_time`/`updated_time`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NoteDetail {
    pub title: String,
    pub body: String,
    pub user_created_time: i64, // ms since epoch
    pub user_updated_time: i64, // ms since epoch
}

/// One page of `GET /notes`. `has_more` is required: a listing without it is malformed.
#[derive(Debug, Clone, Deserialize)]
pub struct NotesPage {
    pub items: Vec<NoteRef>,
    pub has_more: bool,
}

/// `GET /notes/<id>/tags`; only `items` is read.
#[derive(Debug, Clone, Deserialize)]
pub struct TagList {
    pub items: Vec<TagItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagItem {
    pub title: String,
}

/// Gates the updater for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunMode {
    /// Render and print blocks without ever writing to Joplin.
    pub inspect: bool,
    /// With `inspect`, stop after printing the first note that has tags.
    pub stop_after_first_tagged: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub notes_found: usize,
    pub notes_processed: usize,
    pub notes_updated: usize,
    pub notes_skipped: usize,
    pub notes_inspected: usize,
    pub stopped_early: bool,
}
