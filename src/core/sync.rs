use crate::core::client::NoteClient;
use crate::core::frontmatter::{self, BlockTimezone};
use crate::domain::model::{NoteRef, RunMode, RunSummary};
use crate::domain::ports::NoteTransport;
use crate::utils::error::Result;
use std::io::Write;

/// What happened to a single note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NoteOutcome {
    Updated,
    Skipped,
    Inspected,
    InspectedAndStop,
}

/// Drives the enumerate → fetch → render → update loop, one note at a time.
pub struct FrontmatterSync<T: NoteTransport> {
    client: NoteClient<T>,
    mode: RunMode,
    zone: BlockTimezone,
}

impl<T: NoteTransport> FrontmatterSync<T> {
    pub fn new(client: NoteClient<T>, mode: RunMode, zone: BlockTimezone) -> Self {
        Self { client, mode, zone }
    }

    /// Runs over every note. Inspect output (titles and blocks) goes to `out`.
    ///
    /// The first failure aborts the run; notes updated before it keep their new body.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        tracing::info!("🔎 Listing notes...");
        let notes = self.client.list_all_notes().await?;
        tracing::info!("📚 Found {} notes", notes.len());

        let mut summary = RunSummary {
            notes_found: notes.len(),
            ..RunSummary::default()
        };

        for note in &notes {
            let outcome = self.process_note(note, out).await?;
            summary.notes_processed += 1;

            match outcome {
                NoteOutcome::Updated => summary.notes_updated += 1,
                NoteOutcome::Skipped => summary.notes_skipped += 1,
                NoteOutcome::Inspected => summary.notes_inspected += 1,
                NoteOutcome::InspectedAndStop => {
                    summary.notes_inspected += 1;
                    summary.stopped_early = true;
                    tracing::info!("🛑 Stopping after first tagged note '{}'", note.title);
                    break;
                }
            }
        }

        tracing::info!(
            "✅ Processed {}/{} notes: {} updated, {} skipped, {} inspected",
            summary.notes_processed,
            summary.notes_found,
            summary.notes_updated,
            summary.notes_skipped,
            summary.notes_inspected
        );
        Ok(summary)
    }

    async fn process_note<W: Write>(&self, note: &NoteRef, out: &mut W) -> Result<NoteOutcome> {
        let detail = self.client.get_note_detail(&note.id).await?;
        let tags = self.client.get_note_tags(&note.id).await?;
        tracing::debug!("📝 {} '{}' ({} tags)", note.id, note.title, tags.len());

        let block = frontmatter::render(
            &note.id,
            detail.user_created_time,
            detail.user_updated_time,
            &tags,
            self.zone,
        )?;

        if self.mode.inspect {
            writeln!(out, "{}", detail.title)?;
            writeln!(out, "{}", block)?;

            if self.mode.stop_after_first_tagged && !tags.is_empty() {
                return Ok(NoteOutcome::InspectedAndStop);
            }
            return Ok(NoteOutcome::Inspected);
        }

        let new_body = format!("{}{}", block, detail.body);
        if self.client.update_note_body(&note.id, &new_body).await? {
            tracing::debug!("💾 Updated {}", note.id);
            Ok(NoteOutcome::Updated)
        } else {
            Ok(NoteOutcome::Skipped)
        }
    }
}
