pub mod client;
pub mod frontmatter;
pub mod sync;

pub use crate::domain::model::{NoteDetail, NoteRef, RunMode, RunSummary};
pub use crate::domain::ports::NoteTransport;
pub use crate::utils::error::Result;
