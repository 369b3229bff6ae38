use {
  super::*,
  tracing_subscriber::{
    EnvFilter, filter::ParseError, fmt, prelude::*,
    util::TryInitError,
  },
};

#[derive(Debug, Error)]
pub(crate) enum LoggingError {
  #[error("invalid log filter")]
  Filter {
    #[from]
    source: ParseError,
  },
  #[error("could not install log subscriber")]
  Init {
    #[from]
    source: TryInitError,
  },
  #[error("could not open log file `{}`", path.display())]
  Io { path: PathBuf, source: io::Error },
}

const DEFAULT_FILTER: &str = "info";

pub(crate) fn init() -> Result<PathBuf, LoggingError> {
  let path = log_path();

  let io_error = |source: io::Error| LoggingError::Io {
    path: path.clone(),
    source,
  };

  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).map_err(io_error)?;
  }

  let file = fs::OpenOptions::new()
    .create(true)
    .append(true)
    .open(&path)
    .map_err(io_error)?;

  let filter = EnvFilter::try_from_default_env()
    .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;

  tracing_subscriber::registry()
    .with(filter)
    .with(
      fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(file)),
    )
    .try_init()?;

  Ok(path)
}

fn log_path() -> PathBuf {
  if let Ok(path) = env::var("HN_TRENDING_LOG") {
    return PathBuf::from(path);
  }

  let base_dir = if let Ok(dir) = env::var("XDG_STATE_HOME") {
    PathBuf::from(dir)
  } else if let Ok(home) = env::var("HOME") {
    PathBuf::from(home).join(".local").join("state")
  } else {
    env::temp_dir()
  };

  base_dir.join("hn-trending").join("hn-trending.log")
}
