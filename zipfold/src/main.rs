use std::path::{Path, PathBuf};
use std::process;

use structopt::StructOpt;
use zipfold_pack::PackWriter;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "zipfold",
    about = "Package a directory tree into a single ZIP archive.",
    usage = "zipfold [FLAGS] <source-dir> <destination-dir> <archive-name>"
)]
struct CliOpts {
    #[structopt(short, long, help = "Show verbose output")]
    verbose: bool,

    #[structopt(
        name = "source-dir",
        parse(from_os_str),
        help = "Directory whose contents will be packaged"
    )]
    source: PathBuf,

    #[structopt(
        name = "destination-dir",
        parse(from_os_str),
        help = "Directory that receives the archive"
    )]
    destination: PathBuf,

    #[structopt(name = "archive-name", help = "File name for the archive, e.g. documents.zip")]
    archive_name: String,
}

fn run(opts: &CliOpts, destination: &Path) -> zipfold_pack::Result<u64> {
    let mut writer = PackWriter::create(destination)?;
    writer.append_tree(&opts.source)?;
    writer.finish()
}

fn main() {
    let opts = CliOpts::from_args();

    if opts.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let destination = opts.destination.join(&opts.archive_name);
    if destination.starts_with(&opts.source) {
        eprintln!("Cowardly refusing to write the archive inside the tree being archived; aborting.");
        process::exit(1);
    }

    match run(&opts, &destination) {
        Ok(length) => {
            if opts.verbose {
                use humansize::{file_size_opts as options, FileSize};

                println!(
                    "Wrote {} ({})",
                    destination.display(),
                    length.file_size(options::BINARY).unwrap()
                );
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
