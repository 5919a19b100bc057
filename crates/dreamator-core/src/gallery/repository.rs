//! Gallery and prompt-history persistence traits.
//!
//! Defines the interface for the durable, user-visible collection of
//! generated images and the bounded list of recent prompts.

use super::model::GeneratedImage;

/// Maximum number of prompts kept in the history.
pub const PROMPT_HISTORY_LIMIT: usize = 10;

/// An abstract store for the durable, ordered gallery of generated images.
///
/// The gallery is persisted as a whole (read-whole/write-whole) under a
/// single durable slot. All compound operations are read-modify-write cycles
/// built from [`load_all`](Self::load_all) and [`save_all`](Self::save_all),
/// which keeps the sequencing in one place and makes the single-writer
/// assumption explicit: nothing here is atomic across concurrent callers, and
/// concurrent writers are last-writer-wins.
///
/// # Implementation Notes
///
/// Durability is best-effort. Implementations must:
/// - treat an absent or unparseable payload as an empty gallery (lenient
///   read, never surfaced);
/// - log and swallow persistence failures so the in-memory view stays
///   authoritative for the current session.
pub trait GalleryRepository: Send + Sync {
    /// Returns the persisted gallery, oldest first.
    ///
    /// Absent or unparseable payloads read as an empty gallery.
    fn load_all(&self) -> Vec<GeneratedImage>;

    /// Overwrites the entire persisted gallery.
    fn save_all(&self, images: &[GeneratedImage]);

    /// Appends records at the end of the persisted gallery.
    fn append(&self, images: &[GeneratedImage]) {
        let mut all = self.load_all();
        all.extend_from_slice(images);
        self.save_all(&all);
    }

    /// Replaces the first record whose url equals `old_url`.
    ///
    /// A miss is a silent no-op; nothing is written.
    fn replace_by_url(&self, old_url: &str, image: GeneratedImage) {
        let mut all = self.load_all();
        if let Some(slot) = all.iter_mut().find(|record| record.url == old_url) {
            *slot = image;
            self.save_all(&all);
        }
    }

    /// Removes the record at `index`.
    ///
    /// An out-of-range index is a silent no-op, matching splice semantics.
    fn remove_at(&self, index: usize) {
        let mut all = self.load_all();
        if index < all.len() {
            all.remove(index);
            self.save_all(&all);
        }
    }
}

/// An abstract store for the bounded, most-recent-first prompt history.
///
/// Persisted independently of the gallery under its own durable slot, with
/// the same lenient-read and best-effort-write policies. The
/// [`PROMPT_HISTORY_LIMIT`] bound is enforced by the writer, not the store.
pub trait PromptHistoryRepository: Send + Sync {
    /// Returns the persisted prompts, most recent first.
    fn load_all(&self) -> Vec<String>;

    /// Overwrites the entire persisted history.
    fn save_all(&self, prompts: &[String]);
}
