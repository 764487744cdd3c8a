//! Browser glue for the profile picture input: pulls the selected `File` out of
//! a change event and reads its bytes.

use super::picture::PictureMeta;
use crate::app_lib::AppError;
use js_sys::Uint8Array;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, File, HtmlInputElement};

/// First file of the `<input type="file">` that fired `event`, if any.
pub fn selected_file(event: &Event) -> Option<File> {
    event
        .target()?
        .dyn_into::<HtmlInputElement>()
        .ok()?
        .files()?
        .get(0)
}

pub fn meta(file: &File) -> PictureMeta {
    PictureMeta {
        name: file.name(),
        mime: file.type_(),
        // Blob sizes are integral; the f64 is a JS number.
        size: file.size() as u64,
    }
}

/// Reads the whole file into memory.
pub async fn read_bytes(file: &File) -> Result<Vec<u8>, AppError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|err| AppError::FileRead(format!("{err:?}")))?;
    Ok(Uint8Array::new(&buffer).to_vec())
}
