//! Photo encoding capability for the sell flow.
//!
//! The draft only ever holds plain strings. Turning a picked file into an
//! embeddable string is the job of a [`PhotoEncoder`], which the front end
//! awaits before handing the results to the draft.

use crate::domain::error::{Result, SparesError};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use futures::future::BoxFuture;
use std::path::Path;

/// Converts a picked photo file into a string a listing can embed.
pub trait PhotoEncoder: Send + Sync {
    fn encode<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, Result<String>>;
}

/// Encodes photos as `data:<mime>;base64,<payload>` URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlEncoder;

impl DataUrlEncoder {
    fn mime_for(path: &Path) -> Result<&'static str> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "png" => Ok("image/png"),
            "jpg" | "jpeg" => Ok("image/jpeg"),
            "gif" => Ok("image/gif"),
            "webp" => Ok("image/webp"),
            "bmp" => Ok("image/bmp"),
            _ => Err(SparesError::Encode(format!(
                "not an image file: {}",
                path.display()
            ))),
        }
    }
}

impl PhotoEncoder for DataUrlEncoder {
    fn encode<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, Result<String>> {
        Box::pin(async move {
            let _span = tracing::debug_span!("encode_photo", path = ?path).entered();

            let mime = Self::mime_for(path)?;
            let bytes = std::fs::read(path)?;
            tracing::debug!(bytes = bytes.len(), mime, "photo read");

            Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
        })
    }
}
