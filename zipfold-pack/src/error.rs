use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while packaging a directory tree into an archive.
///
/// Both variants are I/O failures at heart: either the destination could not
/// be opened, or a source file could not be read or written into the
/// archive. Failures propagate to the caller unmodified; there are no
/// retries and no partial-success reporting.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),
}
