//! Profile picture checks and preview encoding. The picker advertises
//! `image/*`, but only JPEG and PNG are kept; anything else is rejected before
//! the file is read.

use base64::Engine;
use serde::Serialize;
use std::fmt;

/// MIME types accepted for a profile picture. `image/jpg` is non-standard but
/// some platforms report it.
pub const ALLOWED_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/jpg"];

/// Largest accepted file, inclusive.
pub const MAX_PICTURE_BYTES: u64 = 2 * 1024 * 1024;

/// Shown when the browser fails to read an accepted file.
pub const READ_FAILED: &str = "Unable to read the selected file.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PictureRejection {
    UnsupportedType,
    TooLarge,
}

impl fmt::Display for PictureRejection {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PictureRejection::UnsupportedType => {
                write!(formatter, "Only JPG, JPEG, and PNG files are allowed.")
            }
            PictureRejection::TooLarge => write!(formatter, "File size must be less than 2MB."),
        }
    }
}

impl std::error::Error for PictureRejection {}

/// What the form keeps about an accepted file. The bytes only live in the preview.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PictureMeta {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl PictureMeta {
    /// Type first, then size.
    pub fn check(&self) -> Result<(), PictureRejection> {
        if !ALLOWED_TYPES.contains(&self.mime.as_str()) {
            return Err(PictureRejection::UnsupportedType);
        }
        if self.size > MAX_PICTURE_BYTES {
            return Err(PictureRejection::TooLarge);
        }
        Ok(())
    }
}

/// Handle for one in-flight read. Only the most recent one may land.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadTicket {
    generation: u64,
    meta: PictureMeta,
}

/// Picker state between selection and preview. Every accepted file starts a
/// new read generation; results from older generations are dropped, so a slow
/// read of an earlier file never overwrites a later one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PictureSelection {
    generation: u64,
    reading: bool,
    preview: Option<String>,
    error: Option<String>,
}

impl PictureSelection {
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_reading(&self) -> bool {
        self.reading
    }

    /// Handles a change on the file input. `None` is a cancelled dialog and
    /// leaves everything as it was. A rejected file sets the error but keeps
    /// the current preview. An accepted file returns the ticket to read it with.
    pub fn select(&mut self, meta: Option<PictureMeta>) -> Option<ReadTicket> {
        let meta = meta?;
        if let Err(rejection) = meta.check() {
            tracing::debug!(mime = %meta.mime, size = meta.size, %rejection, "profile picture rejected");
            self.error = Some(rejection.to_string());
            return None;
        }

        self.generation += 1;
        self.reading = true;
        self.error = None;
        Some(ReadTicket {
            generation: self.generation,
            meta,
        })
    }

    /// Stores the preview for a finished read. Returns the metadata to keep in
    /// the form, or `None` when a newer file was selected meanwhile.
    pub fn on_read_ok(&mut self, ticket: ReadTicket, bytes: &[u8]) -> Option<PictureMeta> {
        if ticket.generation != self.generation {
            return None;
        }
        self.reading = false;
        self.preview = Some(data_url(&ticket.meta.mime, bytes));
        Some(ticket.meta)
    }

    pub fn on_read_err(&mut self, ticket: &ReadTicket) {
        if ticket.generation != self.generation {
            return;
        }
        self.reading = false;
        self.error = Some(READ_FAILED.to_string());
    }
}

/// Encodes file contents as a `data:` URL usable as an `<img src>`.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!(
        "data:{mime};base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}
