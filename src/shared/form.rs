//! Ordered form-parameter payloads for request submission.
//!
//! The API consumes `application/x-www-form-urlencoded` bodies, switching
//! to `multipart/form-data` when local files are attached. Field names use
//! PHP-style bracket nesting (`signers[0][email_address]`) and the server
//! is sensitive to parameter order, so payloads are kept as an ordered
//! list rather than a map.

use std::path::PathBuf;

/// A local file to be sent as a multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    /// Form field name, e.g. `file[0]`.
    pub key: String,
    pub path: PathBuf,
}

/// An ordered set of form parameters plus any file parts.
///
/// Built by the request models' `to_payload()` methods and consumed by the
/// HTTP layer, which picks urlencoded vs multipart based on
/// [`FormPayload::has_files`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPayload {
    params: Vec<(String, String)>,
    files: Vec<FilePart>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter. Keys repeat freely; order is preserved.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.push((key.into(), value.into()));
    }

    /// Append a local file part.
    pub fn push_file(&mut self, key: impl Into<String>, path: impl Into<PathBuf>) {
        self.files.push(FilePart {
            key: key.into(),
            path: path.into(),
        });
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn files(&self) -> &[FilePart] {
        &self.files
    }

    pub fn has_files(&self) -> bool {
        !self.files.is_empty()
    }

    /// Look up the first value for a key. Test helper, mostly.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
