//! Subscription blob decoder
//!
//! Turns the on-disk subscription file into decoded text:
//!
//! 1. **Load** - read the file as UTF-8 and trim surrounding whitespace
//! 2. **Pad** - append missing `=` so the length is a multiple of four
//! 3. **Decode** - base64 to bytes, bytes to UTF-8 text
//!
//! Failures surface as [`AppError::FileAccess`], [`AppError::Base64`] or
//! [`AppError::Utf8`]. Nothing is printed from here.

mod padding;

pub use padding::{repair_padding, strip_line_wraps};

use crate::errors::{AppError, AppResult};
use base64::{
    alphabet,
    engine::{self, general_purpose::GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Standard-alphabet engine used after padding repair
///
/// Accepts non-zero trailing bits in the final quantum, which some
/// subscription producers emit.
pub const BASE64_SUBSCRIPTION: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(engine::DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// URL-safe fallback (`-` and `_` in place of `+` and `/`)
pub const BASE64_SUBSCRIPTION_URL_SAFE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(engine::DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Read the subscription file and trim leading/trailing whitespace
pub fn load_blob(path: &Path) -> AppResult<String> {
    let file_access = |source| AppError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(file_access)?;
    let mut content = String::new();
    file.read_to_string(&mut content).map_err(file_access)?;

    debug!("Loaded {} bytes from {}", content.len(), path.display());
    Ok(content.trim().to_string())
}

/// Decode a (possibly unpadded) base64 blob into UTF-8 text
pub fn decode_blob(blob: &str) -> AppResult<String> {
    let compact = strip_line_wraps(blob.trim());
    let padded = repair_padding(&compact);
    if padded.len() != compact.len() {
        debug!(
            "Repaired base64 padding: appended {} '='",
            padded.len() - compact.len()
        );
    }

    let bytes = match BASE64_SUBSCRIPTION.decode(padded.as_bytes()) {
        Ok(bytes) => bytes,
        Err(standard_err) if uses_url_safe_alphabet(&padded) => {
            debug!("Standard alphabet failed ({}), retrying URL-safe", standard_err);
            BASE64_SUBSCRIPTION_URL_SAFE
                .decode(padded.as_bytes())
                .map_err(|_| AppError::Base64(standard_err))?
        }
        Err(e) => return Err(e.into()),
    };

    Ok(String::from_utf8(bytes)?)
}

/// Load, pad and decode the subscription file at `path`
pub fn load_and_decode(path: &Path) -> AppResult<String> {
    info!("Decoding subscription file: {}", path.display());
    let blob = load_blob(path)?;
    let decoded = decode_blob(&blob)?;
    info!("Decoded {} characters of node text", decoded.len());
    Ok(decoded)
}

fn uses_url_safe_alphabet(encoded: &str) -> bool {
    encoded.contains(['-', '_']) && !encoded.contains(['+', '/'])
}
