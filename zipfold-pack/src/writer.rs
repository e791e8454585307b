use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;
use crate::path::ZipPath;

/// Identifier of the archive scheme this crate produces.
pub const ARCHIVE_KIND: &str = "ZIP";

/// MIME type of the archives this crate produces.
pub const ARCHIVE_MIME_TYPE: &str = "application/zip";

/// Size of the read buffer used when streaming a file into an entry.
pub const FILE_BUFFER_SIZE: usize = 4096;

/// Writer for a single ZIP archive under construction.
///
/// The underlying stream is finalized when the writer is finished or
/// dropped, so an archive abandoned by an error mid-walk is still closed.
pub struct PackWriter {
    zip: ZipWriter<BufWriter<File>>,
    path: PathBuf,
    options: FileOptions,
}

impl PackWriter {
    /// Creates a new archive at `path`, replacing any existing file.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<PackWriter> {
        let file = File::create(path.as_ref())?;

        Ok(PackWriter {
            zip: ZipWriter::new(BufWriter::new(file)),
            path: path.as_ref().to_path_buf(),
            options: FileOptions::default().compression_method(CompressionMethod::Deflated),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends every regular file under `dir` to the archive, mirroring the
    /// source directory structure in entry names.
    ///
    /// Does nothing if `dir` does not exist or is not a directory.
    /// Directories themselves produce no entries, so an empty directory is
    /// silently omitted from the archive.
    pub fn append_tree<P: AsRef<Path>>(&mut self, dir: P) -> Result<()> {
        self.append_tree_at(dir.as_ref(), &ZipPath::root())
    }

    fn append_tree_at(&mut self, dir: &Path, prefix: &ZipPath) -> Result<()> {
        if !dir.is_dir() {
            return Ok(());
        }

        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let name = entry.file_name();
            let name = name.to_string_lossy();

            if file_type.is_dir() {
                self.append_tree_at(&entry.path(), &prefix.join(&name))?;
            } else if file_type.is_file() {
                let mut file = File::open(entry.path())?;
                self.insert(prefix.join(&name), &mut file)?;
            }
            // Symlinks and other special files are not archived.
        }

        Ok(())
    }

    /// Streams `value` into a new entry named `path`, reading in
    /// [`FILE_BUFFER_SIZE`] chunks.
    pub fn insert<R: Read>(&mut self, path: ZipPath, value: &mut R) -> Result<()> {
        debug!("adding entry: {}", path);

        self.zip.start_file(path.as_str(), self.options)?;

        let mut buf = [0u8; FILE_BUFFER_SIZE];
        loop {
            let read = value.read(&mut buf)?;
            if read == 0 {
                break;
            }
            self.zip.write_all(&buf[..read])?;
        }

        Ok(())
    }

    /// Finalizes the archive and returns its length in bytes.
    pub fn finish(mut self) -> Result<u64> {
        let mut file = self.zip.finish()?;
        file.flush()?;
        Ok(file.get_ref().metadata()?.len())
    }
}

/// Packages the directory at `source_dir` into
/// `destination_dir/archive_name`, replacing any existing archive at that
/// path.
///
/// A `source_dir` that does not exist or is not a directory yields an
/// archive with no entries. Any I/O failure while opening the destination or
/// walking the tree propagates to the caller; the output stream is closed
/// either way.
pub fn archive_directory<P, Q>(source_dir: P, destination_dir: Q, archive_name: &str) -> Result<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let destination = destination_dir.as_ref().join(archive_name);
    debug!(
        "packaging {} into {}",
        source_dir.as_ref().display(),
        destination.display()
    );

    let mut writer = PackWriter::create(&destination)?;
    writer.append_tree(source_dir)?;
    writer.finish()?;

    Ok(())
}
