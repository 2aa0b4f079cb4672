//! Thin CLI front-end wiring the tdmsync core crates together for the
//! `prepare` / `update` contract described in the workspace's external
//! interfaces. This binary carries no algorithmic logic of its own — it
//! only opens files, drives `signature`/`planner`, and reports errors.

#![deny(unsafe_code)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use planner::{PlanApplier, Planner};
use signature::{Signer, SignatureCodec};
use sync_io::{ByteStream, Downloader, FileRangeDownloader, FileStream, MemStream};
use thiserror::Error;

/// Default block size used by `prepare` when `--block-size` is omitted.
const DEFAULT_BLOCK_SIZE: i32 = 4096;

#[derive(Debug, Parser)]
#[command(name = "tdmsync", about = "Differential file synchronization: prepare signatures, plan and apply updates", version)]
struct Cli {
    /// Increase logging verbosity; repeat for more detail (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Scan a file into a block index and write it alongside as `<file>.tdmsync`.
    Prepare {
        /// File to build a signature for.
        file: PathBuf,
        /// Block size in bytes, must be greater than zero.
        #[arg(default_value_t = DEFAULT_BLOCK_SIZE)]
        block_size: i32,
    },
    /// Reconstruct a remote file locally, reusing bytes already present in
    /// `local_to_update` and fetching the rest.
    Update {
        #[command(flatten)]
        source: UpdateSource,
        /// The possibly-stale local copy to reconcile against the remote.
        local_to_update: PathBuf,
    },
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
struct UpdateSource {
    /// Path to the remote file's own bytes, used as both signature source
    /// and download source (a local stand-in for a real transport).
    #[arg(long)]
    file: Option<PathBuf>,
    /// URL of the remote file. Requires a transport that implements
    /// `sync_io::Downloader` to be linked into the binary; this build does
    /// not bundle one.
    #[arg(long)]
    url: Option<String>,
}

/// Errors this CLI surfaces to the user. THE CORE's own error kinds are
/// wrapped rather than flattened, so a `--verbose` run can still print the
/// originating crate's diagnostic.
#[derive(Debug, Error)]
enum SyncError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Stream(#[from] sync_io::IoError),
    #[error(transparent)]
    Signature(#[from] signature::SignatureError),
    #[error(transparent)]
    Plan(#[from] planner::PlanError),
    #[error(transparent)]
    Downloader(#[from] sync_io::DownloaderError),
    #[error(
        "update --url requires a transport linked into this build that implements \
         sync_io::Downloader; this binary does not bundle an HTTP client, pass --file \
         with a local copy of the remote instead"
    )]
    HttpUnsupported,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(verbosity_from_count(cli.verbose));

    let result = match cli.command {
        Command::Prepare { file, block_size } => prepare(&file, block_size),
        Command::Update {
            source,
            local_to_update,
        } => update(&source, &local_to_update),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tdmsync: {err}");
            ExitCode::FAILURE
        }
    }
}

fn verbosity_from_count(count: u8) -> logging::Verbosity {
    match count {
        0 => logging::Verbosity::Warn,
        1 => logging::Verbosity::Info,
        2 => logging::Verbosity::Debug,
        _ => logging::Verbosity::Trace,
    }
}

/// Opens `path` truncated for writing, creating it if absent — used for the
/// signature and output files this CLI produces, neither of which should
/// inherit stale bytes from a previous run.
fn create_truncated(path: &Path) -> Result<FileStream, SyncError> {
    let file = std::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    Ok(FileStream::from_file(file))
}

fn prepare(file: &Path, block_size: i32) -> Result<(), SyncError> {
    let mut data = FileStream::open_read_only(file)?;
    let file_size = data.size()? as i64;

    let sig = Signer::compute_from_stream(&mut data, file_size, block_size)?;

    let sig_path = signature_path(file);
    let mut sig_stream = create_truncated(&sig_path)?;
    SignatureCodec::serialize(&sig, &mut sig_stream)?;

    println!(
        "wrote {} ({} block{}) to {}",
        file.display(),
        sig.blocks.len(),
        if sig.blocks.len() == 1 { "" } else { "s" },
        sig_path.display()
    );
    Ok(())
}

fn update(source: &UpdateSource, local_to_update: &Path) -> Result<(), SyncError> {
    let remote_path = match (&source.file, &source.url) {
        (Some(path), None) => path.clone(),
        (None, Some(_)) => return Err(SyncError::HttpUnsupported),
        _ => unreachable!("clap enforces exactly one of --file/--url"),
    };

    let sig_path = signature_path(&remote_path);
    let mut sig_stream = FileStream::open_read_only(&sig_path)?;
    let sig = SignatureCodec::deserialize(&mut sig_stream)?;

    let mut local = FileStream::open_read_only(local_to_update)?;
    let plan = Planner::create_update_plan(&sig, &mut local)?;

    println!(
        "plan: {} segment{}, {} bytes local, {} bytes remote",
        plan.segments.len(),
        if plan.segments.len() == 1 { "" } else { "s" },
        plan.bytes_local,
        plan.bytes_remote
    );

    let mut remote = FileStream::open_read_only(&remote_path)?;
    let mut extras = MemStream::new();
    let downloader = FileRangeDownloader::new(&mut remote);
    let ranges: Vec<sync_io::RangeRequest> = plan
        .segments
        .iter()
        .filter(|seg| seg.remote)
        .map(|seg| sync_io::RangeRequest {
            offset: seg.src_offset,
            len: seg.size,
        })
        .collect();
    downloader.fetch(&remote_path.to_string_lossy(), &ranges, &mut extras)?;

    let output_path = updated_path(local_to_update);
    let mut output = create_truncated(&output_path)?;
    extras.seek(0)?;
    PlanApplier::apply(&plan, &mut local, &mut extras, &mut output)?;

    println!("wrote {}", output_path.display());
    Ok(())
}

fn signature_path(data_path: &Path) -> PathBuf {
    let mut name = data_path.as_os_str().to_owned();
    name.push(".tdmsync");
    PathBuf::from(name)
}

fn updated_path(local_path: &Path) -> PathBuf {
    let mut name = local_path.as_os_str().to_owned();
    name.push(".updated");
    PathBuf::from(name)
}
