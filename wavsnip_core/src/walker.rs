//! Recording discovery and lazy, one-file-at-a-time decoding.

use std::path::{Path, PathBuf};
use std::slice;

use log::{debug, info};
use walkdir::WalkDir;

use crate::wav::{self, RawRecording, RECORDING_SUFFIX};
use crate::WavSnipError;

/// Walks a location once and remembers every recording it contains.
///
/// Discovery happens eagerly in [`Walker::new`]; afterwards the walker is an
/// immutable, restartable snapshot of the collection. Decoding is deferred
/// to [`Walker::decode_all`], which loads one file at a time.
#[derive(Clone, Debug)]
pub struct Walker {
    recordings: Vec<PathBuf>,
}

impl Walker {
    /// Discover every recording at or below `root`.
    ///
    /// A `root` that is itself a recording becomes the sole entry. A
    /// directory root is traversed depth-first with entries sorted by file
    /// name, so a fixed tree always yields the same ordering. Entries that
    /// cannot be read are skipped, and a missing root yields an empty
    /// walker. The suffix match is case-sensitive (see
    /// [`RECORDING_SUFFIX`]).
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let mut recordings = Vec::new();

        if root.is_file() {
            if has_recording_suffix(root) {
                recordings.push(root.to_path_buf());
            }
        } else {
            for entry in WalkDir::new(root)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
            {
                if has_recording_suffix(entry.path()) {
                    recordings.push(entry.into_path());
                }
            }
        }

        info!(
            "discovered {} recording(s) under '{}'",
            recordings.len(),
            root.display()
        );

        Walker { recordings }
    }

    /// The discovered recordings, in traversal order.
    ///
    /// The slice is stable for the walker's lifetime; repeated calls always
    /// observe the same sequence.
    pub fn recordings(&self) -> &[PathBuf] {
        &self.recordings
    }

    /// Number of discovered recordings.
    pub fn count(&self) -> usize {
        self.recordings.len()
    }

    /// Decode the collection lazily, one file per advance.
    ///
    /// The returned cursor is single-pass: nothing is decoded until it is
    /// advanced, each advance decodes exactly one recording, and at most one
    /// decoded buffer is resident at a time no matter how large the
    /// collection is. A recording that fails to decode yields `Err` for that
    /// entry, naming the path, and the cursor continues with the next one. A
    /// consumed cursor stays exhausted; call `decode_all` again for a fresh
    /// pass over the same snapshot.
    pub fn decode_all(&self) -> DecodeAll<'_> {
        DecodeAll {
            entries: self.recordings.iter(),
        }
    }
}

fn has_recording_suffix(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(RECORDING_SUFFIX))
}

/// Lazy single-pass decode cursor created by [`Walker::decode_all`].
#[derive(Debug)]
pub struct DecodeAll<'a> {
    entries: slice::Iter<'a, PathBuf>,
}

impl Iterator for DecodeAll<'_> {
    type Item = Result<RawRecording, WavSnipError>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.entries.next()?;
        debug!("decoding '{}'", path.display());
        Some(wav::decode(path))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for DecodeAll<'_> {}
