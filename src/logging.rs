use {
  super::*,
  tracing_appender::non_blocking::WorkerGuard,
  tracing_subscriber::EnvFilter,
};

/// Routes `tracing` output to the configured log file. The terminal belongs
/// to the UI, so nothing is written to stdout or stderr. Keep the returned
/// guard alive until exit so buffered lines get flushed.
pub(crate) fn init(config: &Config) -> Result<WorkerGuard> {
  let directory = config
    .log_file
    .parent()
    .filter(|parent| !parent.as_os_str().is_empty())
    .unwrap_or_else(|| Path::new("."));

  fs::create_dir_all(directory).with_context(|| {
    format!("could not create log directory {}", directory.display())
  })?;

  let file_name = config
    .log_file
    .file_name()
    .context("log file path has no file name")?;

  let filter = EnvFilter::try_new(&config.log_filter)
    .with_context(|| format!("invalid log filter `{}`", config.log_filter))?;

  let (writer, guard) = tracing_appender::non_blocking(
    tracing_appender::rolling::never(directory, file_name),
  );

  tracing_subscriber::fmt()
    .with_ansi(false)
    .with_env_filter(filter)
    .with_writer(writer)
    .try_init()
    .map_err(|error| anyhow!(error))
    .context("could not install log subscriber")?;

  Ok(guard)
}
