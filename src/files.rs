//! Attachment metadata and the upload size ceiling.

/// Per-file size ceiling for attachments (10 MiB).
pub const MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;

/// A file queued for sending. Only metadata is tracked; contents stay on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub size_bytes: u64,
}

impl Attachment {
    #[must_use]
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    /// Whether this file fits under the upload ceiling.
    #[must_use]
    pub fn within_limit(&self) -> bool {
        self.size_bytes <= MAX_ATTACHMENT_BYTES
    }

    /// Size rendered for the uploaded-files list, e.g. `2.00 MB`.
    #[must_use]
    pub fn size_display(&self) -> String {
        let mb = self.size_bytes as f64 / 1024.0 / 1024.0;
        format!("{mb:.2} MB")
    }
}

/// Split a batch into accepted and rejected files, preserving order.
///
/// Oversized files are rejected individually; the rest of the batch is still
/// accepted. Rejections are silent at this boundary, the caller turns them
/// into notifications.
#[must_use]
pub fn split_valid(batch: Vec<Attachment>) -> (Vec<Attachment>, Vec<Attachment>) {
    batch
        .into_iter()
        .partition(|file| file.within_limit())
}
