//! Logger of a single run: every event is printed as `<program> - <message>` on stdout.

use std::{ffi::OsStr, fmt, io, path::Path};

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter, format::Writer},
    registry::LookupSpan,
};

/// Event format prefixing the message with the program name.
pub(crate) struct ProgramPrefix {
    program: String,
}

impl<S, N> FormatEvent<S, N> for ProgramPrefix
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
    N: for<'fields> FormatFields<'fields> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "{} - ", self.program)?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Logger writing to stdout, meant to be installed with
/// [`tracing::subscriber::with_default`] for the duration of the run.
pub(crate) fn subscriber(program: String) -> impl Subscriber + Send + Sync {
    subscriber_with_writer(program, io::stdout)
}

pub(crate) fn subscriber_with_writer<W>(program: String, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(writer)
        .event_format(ProgramPrefix { program })
        .finish()
}

/// Base name of the executable as invoked, or `fallback` when unavailable.
pub(crate) fn program_name(arg0: Option<&OsStr>, fallback: &str) -> String {
    arg0.map(Path::new)
        .and_then(Path::file_name)
        .map_or_else(|| fallback.to_owned(), |name| name.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use std::{
        io::Write,
        sync::{Arc, Mutex},
    };

    use tracing::{debug, error};

    use super::*;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Buffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_events_are_prefixed() {
        let buffer = Buffer::default();
        let captured = buffer.clone();
        let subscriber =
            subscriber_with_writer("print-calendar".to_owned(), move || captured.clone());
        tracing::subscriber::with_default(subscriber, || {
            error!("cannot read calendar.json");
            debug!("filtered out");
        });
        assert_eq!(buffer.contents(), "print-calendar - cannot read calendar.json\n");
    }

    #[test]
    fn test_program_name() {
        assert_eq!(
            program_name(Some(OsStr::new("/usr/local/bin/print-calendar")), "x"),
            "print-calendar"
        );
        assert_eq!(program_name(None, "print-calendar"), "print-calendar");
    }
}
