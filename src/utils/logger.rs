use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    /// One object per line.
    Json,
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Stderr layer in the requested format; stdout is kept for command output.
pub fn fmt_layer(format: LogFormat) -> BoxedLayer {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match format {
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

/// `RUST_LOG` wins; otherwise this crate logs at info, or debug when verbose.
pub fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("donordrive=debug,info")
        } else {
            EnvFilter::new("donordrive=info")
        }
    })
}

pub fn init(format: LogFormat, verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt_layer(format))
        .with(default_filter(verbose))
        .init();
}

pub fn init_cli_logger(verbose: bool) {
    init(LogFormat::Compact, verbose);
}

pub fn init_json_logger() {
    init(LogFormat::Json, false);
}
