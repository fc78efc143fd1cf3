use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use color_eyre::eyre::eyre;
use std::path::Path;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "kubenav=info";
const LOG_FILE_NAME: &str = "kubenav.log";

/// `~/.kubenav/log/kubenav.log`, or the working directory when there is no
/// home directory.
pub(crate) fn default_log_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".kubenav").join("log").join(LOG_FILE_NAME),
        None => PathBuf::from(LOG_FILE_NAME),
    }
}

/// Sends `tracing` output to `path`. The terminal belongs to the UI, so
/// nothing is written to stdout or stderr. Keep the guard alive until exit
/// so buffered lines are flushed.
pub(crate) fn init(path: &Path) -> Result<WorkerGuard> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| eyre!("log path {} has no file name", path.display()))?;
    std::fs::create_dir_all(&directory)
        .wrap_err_with(|| format!("failed to create log directory {}", directory.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(&directory)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))?;
    Ok(guard)
}
