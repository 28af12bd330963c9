//! Logging for the dashboard binary.
//!
//! One global `EnvFilter` caps everything; the console and an optional log
//! file are two independent layers beneath it. Both the level and the
//! console gate can be changed after start-up through reload handles.

use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};

use anyhow::{Context, Result, anyhow, bail};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
        writer::BoxMakeWriter,
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

const DEFAULT_DIRECTIVES: &str = "info,wine_dashboard=debug,wine_ui=debug,wine_core=debug";

// --- Formatter ---

/// `2026-10-17T09:30:00.123456+02:00  INFO wine_core::navigation: msg k=v`
struct DashboardFmt;

impl DashboardFmt {
    fn level_colour(level: &Level) -> &'static str {
        match *level {
            Level::ERROR => "\x1b[1;31m",
            Level::WARN => "\x1b[1;33m",
            Level::INFO => "\x1b[1;32m",
            Level::DEBUG => "\x1b[1;34m",
            Level::TRACE => "\x1b[1;35m",
        }
    }
}

impl<S, N> FormatEvent<S, N> for DashboardFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.6f%:z");

        if writer.has_ansi_escapes() {
            write!(
                writer,
                "\x1b[2m{timestamp}\x1b[0m {}{:>5}\x1b[0m \x1b[36m{}:\x1b[0m ",
                Self::level_colour(meta.level()),
                meta.level(),
                meta.target(),
            )?;
        } else {
            write!(writer, "{timestamp} {:>5} {}: ", meta.level(), meta.target())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Late-bound file writer ---

type SharedFile = Arc<Mutex<Option<File>>>;

/// Writes into whatever file is currently installed; discards otherwise.
#[derive(Clone)]
struct FileSlot(SharedFile);

struct SlotWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for SlotWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match self.0.as_mut() {
            Some(file) => file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.as_mut().map_or(Ok(()), |file| file.flush())
    }
}

impl<'a> MakeWriter<'a> for FileSlot {
    type Writer = SlotWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SlotWriter(self.0.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

// --- Console ---

/// Stream the console layer writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Console {
    #[default]
    Stdout,
    /// Keeps stdout free for program output, e.g. the headless scene dump.
    Stderr,
}

impl Console {
    fn is_terminal(self) -> bool {
        match self {
            Self::Stdout => io::stdout().is_terminal(),
            Self::Stderr => io::stderr().is_terminal(),
        }
    }

    fn writer(self) -> BoxMakeWriter {
        match self {
            Self::Stdout => BoxMakeWriter::new(io::stdout),
            Self::Stderr => BoxMakeWriter::new(io::stderr),
        }
    }
}

// --- Statics ---

type Reloader = Box<dyn Fn(EnvFilter) -> Result<()> + Send + Sync>;

static LEVEL_RELOAD: OnceLock<Reloader> = OnceLock::new();
static CONSOLE_RELOAD: OnceLock<Reloader> = OnceLock::new();
static FILE_SLOT: OnceLock<SharedFile> = OnceLock::new();

fn reloader<S>(
    handle: reload::Handle<EnvFilter, S>,
    what: &'static str,
) -> Reloader
where
    S: Subscriber + Send + Sync + 'static,
{
    Box::new(move |filter| {
        handle
            .reload(filter)
            .map_err(|e| anyhow!("{what} reload failed: {e}"))
    })
}

fn installed(slot: &'static OnceLock<Reloader>) -> Result<&'static Reloader> {
    slot.get()
        .ok_or_else(|| anyhow!("logging not yet initialized"))
}

// --- Public API ---

/// Changes the global filter at runtime. Accepts a bare level (`"debug"`)
/// or any `EnvFilter` directive string.
pub fn set_log_level(directives: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directives)
        .with_context(|| format!("invalid log level '{directives}'"))?;
    installed(&LEVEL_RELOAD)?(filter)
}

/// Shows or hides console output; file logging is unaffected.
pub fn set_stdout_enabled(enabled: bool) -> Result<()> {
    let gate = EnvFilter::new(if enabled { "trace" } else { "off" });
    installed(&CONSOLE_RELOAD)?(gate)
}

/// Appends log output to `path`, replacing any file already open.
/// The parent directory must exist.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))?;

    let Some(slot) = FILE_SLOT.get() else {
        bail!("logging not yet initialized");
    };
    *slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(file);
    Ok(())
}

/// Initializes logging. Call once, before the window opens.
///
/// `RUST_LOG` wins over the built-in default directives.
pub fn init_logging(console: Console) {
    let file: SharedFile = Arc::new(Mutex::new(None));
    let _ = FILE_SLOT.set(file.clone());

    let default_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    let (level_filter, level_handle) = reload::Layer::new(default_filter);
    let (console_gate, console_handle) = reload::Layer::new(EnvFilter::new("trace"));

    let console_layer = tracing_subscriber::fmt::layer()
        .event_format(DashboardFmt)
        .with_ansi(console.is_terminal())
        .with_writer(console.writer())
        .with_filter(console_gate);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(DashboardFmt)
        .with_ansi(false)
        .with_writer(FileSlot(file));

    if tracing_subscriber::registry()
        .with(level_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        let _ = LEVEL_RELOAD.set(reloader(level_handle, "level"));
        let _ = CONSOLE_RELOAD.set(reloader(console_handle, "console"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_directive_is_rejected_before_reload() {
        let err = set_log_level("wine_ui=notalevel").unwrap_err();

        assert!(err.to_string().contains("invalid log level"));
    }

    #[test]
    fn default_directives_cover_every_crate() {
        for target in ["wine_dashboard=debug", "wine_ui=debug", "wine_core=debug"] {
            assert!(DEFAULT_DIRECTIVES.contains(target), "missing {target}");
        }
        assert!(EnvFilter::try_new(DEFAULT_DIRECTIVES).is_ok());
    }
}
