mod error;
pub mod path;
mod writer;

pub use error::{Error, Result};
pub use path::ZipPath;
pub use writer::{
    archive_directory, PackWriter, ARCHIVE_KIND, ARCHIVE_MIME_TYPE, FILE_BUFFER_SIZE,
};
