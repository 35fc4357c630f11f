// crates/logging/src/sink.rs
use std::io;
use tracing_subscriber::fmt::MakeWriter;

/// Console destination. Workflow commands must reach stdout to be picked up
/// by the Actions runner; everything else goes to stderr so stdout stays
/// reserved for results.
#[derive(Clone, Copy, Debug)]
pub(crate) enum LogWriter {
    Stdout,
    Stderr,
}

pub(crate) enum ConsoleWriter {
    Stdout(io::Stdout),
    Stderr(io::Stderr),
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            ConsoleWriter::Stdout(out) => out.write(buf),
            ConsoleWriter::Stderr(err) => err.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            ConsoleWriter::Stdout(out) => out.flush(),
            ConsoleWriter::Stderr(err) => err.flush(),
        }
    }
}

impl<'a> MakeWriter<'a> for LogWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        match self {
            LogWriter::Stdout => ConsoleWriter::Stdout(io::stdout()),
            LogWriter::Stderr => ConsoleWriter::Stderr(io::stderr()),
        }
    }
}
