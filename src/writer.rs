use std::io::{self, Stderr, Stdout, Write};

/// Output sink for commands: codes go to `out`, diagnostics to `err`.
pub trait OutErr {
    fn write_err(&mut self, s: &str);
    fn write(&mut self, s: &str);
}

pub struct OtpWriter<O: Write, E: Write> {
    pub out: O,
    pub err: E,
}

impl OtpWriter<Stdout, Stderr> {
    pub fn new() -> Self {
        OtpWriter {
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

impl Default for OtpWriter<Stdout, Stderr> {
    fn default() -> Self {
        OtpWriter::new()
    }
}

impl<O: Write, E: Write> OutErr for OtpWriter<O, E> {
    fn write_err(&mut self, s: &str) {
        if let Err(e) = self.err.write_all(s.as_bytes()).and_then(|_| self.err.flush()) {
            log::error!("unable to write to stderr: {}", e);
        }
    }

    fn write(&mut self, s: &str) {
        if let Err(e) = self.out.write_all(s.as_bytes()).and_then(|_| self.out.flush()) {
            log::error!("unable to write to stdout: {}", e);
        }
    }
}
