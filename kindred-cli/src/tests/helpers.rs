//! Fixture helpers shared by the CLI test modules.

use camino::{Utf8Path, Utf8PathBuf};
use flate2::{Compression, write::GzEncoder};
use std::{fs, io::Write};

/// Write a gzip-compressed dump fixture and return its path.
pub(super) fn write_gzip_dump(dir: &Utf8Path, name: &str, contents: &str) -> Utf8PathBuf {
    let path = dir.join(name);
    let file = fs::File::create(&path)
        .unwrap_or_else(|err| panic!("failed to create dump fixture {path}: {err}"));
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder
        .write_all(contents.as_bytes())
        .unwrap_or_else(|err| panic!("failed to write dump fixture: {err}"));
    encoder
        .finish()
        .unwrap_or_else(|err| panic!("failed to finish gzip stream: {err}"));
    path
}

/// Convert a temporary directory path into a UTF-8 path.
pub(super) fn utf8_workspace(dir: &tempfile::TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
        .unwrap_or_else(|path| panic!("temporary directory is not UTF-8: {path:?}"))
}
