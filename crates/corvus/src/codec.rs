//! Envelope encoding
//!
//! Serializes an event to JSON, compresses it with zlib, and wraps the
//! result in padded standard base64. The pipeline is one-directional:
//! server responses are opaque text and are never decoded here.

use std::io::Write;

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};
use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::error::{Error, Result};
use crate::event::Event;

/// Encode one event into its transport envelope.
///
/// Each stage is finished before the next consumes its output, so a
/// failure at any stage aborts the pipeline and no partially flushed
/// buffer can escape.
pub fn encode(event: &Event) -> Result<String> {
    let json = serde_json::to_vec(event)?;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&json).map_err(Error::Encoding)?;
    let compressed = encoder.finish().map_err(Error::Encoding)?;

    Ok(BASE64_STANDARD.encode(compressed))
}
