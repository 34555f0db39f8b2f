use std::sync::{Arc, Mutex, OnceLock};

/// Console-equivalent destination for log and reaction output.
///
/// Writes are fire-and-forget; a failing sink is not surfaced to callers.
pub trait OutputSink: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Prints each line to standard output.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }
}

/// Captures lines in call order. Used by tests to assert output sequences.
#[derive(Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl OutputSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

/// Handle to the logging facility. Cheap to clone; clones share the sink.
///
/// Components take a `Logger` as an injected dependency, owned at the
/// composition root. `Logger::global()` covers callers that do not inject
/// one, keeping exactly one logical logger per process.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn OutputSink>,
}

impl Logger {
    pub fn new(sink: Arc<dyn OutputSink>) -> Self {
        Self { sink }
    }

    /// The process-wide logger, backed by stdout. Initialized once on first
    /// access; every call returns the same instance.
    pub fn global() -> &'static Logger {
        static LOGGER: OnceLock<Logger> = OnceLock::new();
        LOGGER.get_or_init(|| Logger::new(Arc::new(StdoutSink)))
    }

    pub fn log_message(&self, text: &str) {
        self.sink.write_line(&format!("[LOG]: {text}"));
    }
}
