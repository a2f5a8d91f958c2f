//! Running the transformer over byte streams and files.
//!
//! The transformer works on `&str`; these helpers handle decoding input
//! bytes, normalizing line endings and writing the rendered HTML.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::markup::transform;
use crate::util::{decode_text, is_known_encoding, normalize_line_endings};

/// Options for decoding input before rendering.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Encoding label to try when the input is not valid UTF-8.
    pub encoding: Option<String>,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback encoding label.
    ///
    /// Returns an error for labels encoding_rs does not recognize.
    pub fn with_encoding(mut self, label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        if !is_known_encoding(&label) {
            return Err(Error::InvalidInput(format!("unknown encoding: {label}")));
        }
        self.encoding = Some(label);
        Ok(self)
    }
}

/// Render raw input bytes to HTML.
pub fn linkify_bytes(bytes: &[u8], options: &ConvertOptions) -> String {
    let text = decode_text(bytes, options.encoding.as_deref());
    let text = normalize_line_endings(&text);
    transform(&text)
}

/// Read all of `reader`, render it, and write the HTML to `writer`.
///
/// Returns the number of HTML bytes written.
pub fn linkify_reader<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    options: &ConvertOptions,
) -> Result<usize> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    debug!(bytes = input.len(), "read input");

    let html = linkify_bytes(&input, options);
    writer.write_all(html.as_bytes())?;
    writer.flush()?;
    debug!(bytes = html.len(), "wrote html");

    Ok(html.len())
}

/// Render the file at `input` and write the HTML to `output`.
pub fn linkify_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<usize> {
    let input = input.as_ref();
    let output = output.as_ref();
    debug!(input = %input.display(), output = %output.display(), "converting file");

    let bytes = fs::read(input)?;
    let html = linkify_bytes(&bytes, options);
    fs::write(output, html.as_bytes())?;

    Ok(html.len())
}
