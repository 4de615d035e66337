//! Print the waste collection calendar of one Sherbrooke district.
//!
//! ```text
//! print-calendar calendrier-collectes.json | lp -o columns=2 -o page-top=72
//! ```

mod logging;

use std::{
    env,
    ffi::OsString,
    io::{self, BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use collectes_core::{CalendarConfig, CalendarLine, CalendarService};
use collectes_provider_sherbrooke::SherbrookeFile;
use tracing::{debug, error};

const PROGRAM: &str = "print-calendar";

#[derive(Debug, Parser)]
#[command(name = PROGRAM, disable_help_flag = true, disable_version_flag = true)]
struct Arguments {
    /// the Sherbrooke JSON calendar file
    #[arg(allow_hyphen_values = true)]
    file: PathBuf,
}

fn main() -> ExitCode {
    let program = logging::program_name(env::args_os().next().as_deref(), PROGRAM);
    let subscriber = logging::subscriber(program.clone());

    tracing::subscriber::with_default(subscriber, || {
        let result = run(&program, env::args_os(), &mut io::stdout().lock());
        match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                error!("{err:#}");
                ExitCode::FAILURE
            }
        }
    })
}

/// Parse `args`, build the calendar with the default configuration and write it to `out`.
fn run<I, W>(program: &str, args: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = OsString>,
    W: Write,
{
    let arguments = match Arguments::try_parse_from(args) {
        Ok(arguments) => arguments,
        Err(err) => {
            writeln!(out, "{}", usage(program)).context("cannot write usage")?;
            debug!(kind = ?err.kind(), "rejected arguments");
            bail!("expected exactly one argument, the calendar file");
        }
    };

    let service = CalendarService::new(
        SherbrookeFile::new(arguments.file),
        CalendarConfig::default(),
    );
    debug!(district = %service.config().district, "printing calendar");

    let lines = service.lines()?;
    write_lines(out, &lines).context("cannot write calendar")
}

fn usage(program: &str) -> String {
    Arguments::command()
        .bin_name(program)
        .render_usage()
        .to_string()
}

fn write_lines<W: Write>(out: &mut W, lines: &[CalendarLine]) -> io::Result<()> {
    let mut writer = BufWriter::new(out);
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}
