use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    sync::{Arc, LazyLock, Mutex, PoisonError},
};

/// Destination of formatted log lines.
pub trait LogWriter: Send {
    /// Writes one line, appending the newline.
    fn regular(&mut self, line: &str) -> std::io::Result<()>;
    fn flush(&mut self) -> std::io::Result<()>;
}

/// A sink shared between logger instances. The mutex serializes whole lines.
pub type SharedWriter = Arc<Mutex<dyn LogWriter>>;

static STDERR: LazyLock<SharedWriter> = LazyLock::new(|| {
    let writer: SharedWriter = Arc::new(Mutex::new(LogStderr));
    writer
});

/// The process-wide standard error sink.
pub fn shared_stderr() -> SharedWriter {
    STDERR.clone()
}

#[derive(Default, Debug, Clone, Copy)]
pub struct LogStderr;

impl LogWriter for LogStderr {
    fn regular(&mut self, line: &str) -> std::io::Result<()> {
        writeln!(std::io::stderr().lock(), "{line}")
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stderr().flush()
    }
}

/// Appends lines to a file, created if it does not exist.
pub struct LogFile {
    file: BufWriter<File>,
}

impl LogFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, std::io::Error> {
        let file = File::options().create(true).append(true).open(&path)?;
        Ok(Self {
            file: BufWriter::new(file),
        })
    }
}

impl LogWriter for LogFile {
    fn regular(&mut self, line: &str) -> std::io::Result<()> {
        writeln!(self.file, "{line}")?;
        self.file.flush()
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.file.flush()
    }
}

/// In-memory sink. Clones share the same line buffer.
#[derive(Default, Debug, Clone)]
pub struct LogBuffer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far, without newlines.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl LogWriter for LogBuffer {
    fn regular(&mut self, line: &str) -> std::io::Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_owned());
        Ok(())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_log_file() {
    let path = std::env::temp_dir().join("logr_test_log_file.log");
    std::fs::remove_file(&path).ok();
    let mut log_file = LogFile::new(&path).unwrap();
    log_file.regular("Hello, world!").unwrap();
    log_file.regular("rust is awesome !").unwrap();
    drop(log_file);
    let mut log_file = LogFile::new(&path).unwrap();
    log_file.regular("test").unwrap();
    log_file.flush().unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Hello, world!\nrust is awesome !\ntest\n"
    );
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_log_buffer_shares_lines() {
    let buffer = LogBuffer::new();
    let mut writer = buffer.clone();
    writer.regular("first").unwrap();
    writer.regular("second").unwrap();
    assert_eq!(buffer.lines(), vec!["first", "second"]);
    buffer.clear();
    assert!(writer.lines().is_empty());
}

#[test]
fn test_shared_stderr_is_one_sink() {
    assert!(Arc::ptr_eq(&shared_stderr(), &shared_stderr()));
    let mut stderr = LogStderr;
    stderr.regular("logr stderr sink test").unwrap();
}
