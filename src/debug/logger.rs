// Logger - structured diagnostics for CPU and PPU execution
//
// A bounded in-memory ring of trace entries plus an optional mirror to a
// sink file. Never panics on a full buffer; the oldest entry is dropped.

use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// No logging
    None,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warning,
    /// Info, warnings, and errors
    Info,
    /// Debug information (includes traces)
    Debug,
    /// Verbose trace logging
    Trace,
}

/// A single entry in the diagnostics ring buffer.
#[derive(Debug, Clone)]
pub enum TraceEntry {
    /// One formatted CPU trace line (see `cpu::trace_line`).
    Cpu(String),
    /// One formatted PPU trace line.
    Ppu(String),
    /// A free-form diagnostic message.
    Message(String),
}

impl std::fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceEntry::Cpu(line) => write!(f, "CPU: {}", line),
            TraceEntry::Ppu(line) => write!(f, "PPU: {}", line),
            TraceEntry::Message(msg) => write!(f, "{}", msg),
        }
    }
}

/// Handles trace logging for CPU and PPU execution. Can log to an
/// in-memory buffer, a sink file, or both.
pub struct Logger {
    log_level: LogLevel,
    cpu_trace: bool,
    ppu_trace: bool,
    trace_buffer: Vec<TraceEntry>,
    /// Maximum number of entries in the trace buffer (0 = unlimited)
    max_buffer_size: usize,
    output_file: Option<File>,
}

impl Logger {
    pub fn new() -> Self {
        Logger {
            log_level: LogLevel::None,
            cpu_trace: false,
            ppu_trace: false,
            trace_buffer: Vec::new(),
            max_buffer_size: 10000,
            output_file: None,
        }
    }

    pub fn set_log_level(&mut self, level: LogLevel) {
        self.log_level = level;
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn enable_cpu_trace(&mut self) {
        self.cpu_trace = true;
    }

    pub fn disable_cpu_trace(&mut self) {
        self.cpu_trace = false;
    }

    pub fn is_cpu_trace_enabled(&self) -> bool {
        self.cpu_trace && self.log_level >= LogLevel::Trace
    }

    pub fn enable_ppu_trace(&mut self) {
        self.ppu_trace = true;
    }

    pub fn disable_ppu_trace(&mut self) {
        self.ppu_trace = false;
    }

    pub fn is_ppu_trace_enabled(&self) -> bool {
        self.ppu_trace && self.log_level >= LogLevel::Trace
    }

    /// Set maximum trace buffer size. 0 means unlimited. Trims the buffer
    /// immediately if it is already over the new limit.
    pub fn set_max_buffer_size(&mut self, size: usize) {
        self.max_buffer_size = size;
        if size > 0 && self.trace_buffer.len() > size {
            self.trace_buffer.drain(0..self.trace_buffer.len() - size);
        }
    }

    pub fn open_log_file<P: AsRef<Path>>(&mut self, path: P) -> std::io::Result<()> {
        let file = File::create(path)?;
        self.output_file = Some(file);
        Ok(())
    }

    pub fn close_log_file(&mut self) {
        self.output_file = None;
    }

    /// Record a CPU trace line, if CPU tracing is currently enabled.
    pub fn log_cpu_trace(&mut self, line: String) {
        if !self.is_cpu_trace_enabled() {
            return;
        }
        self.add_entry(TraceEntry::Cpu(line));
    }

    /// Record a PPU trace line, if PPU tracing is currently enabled.
    pub fn log_ppu_trace(&mut self, line: String) {
        if !self.is_ppu_trace_enabled() {
            return;
        }
        self.add_entry(TraceEntry::Ppu(line));
    }

    pub fn log_message(&mut self, level: LogLevel, message: String) {
        if level > self.log_level {
            return;
        }
        self.add_entry(TraceEntry::Message(message));
    }

    fn add_entry(&mut self, entry: TraceEntry) {
        if let Some(ref mut file) = self.output_file {
            let _ = writeln!(file, "{}", entry);
        }

        self.trace_buffer.push(entry);
        if self.max_buffer_size > 0 && self.trace_buffer.len() > self.max_buffer_size {
            self.trace_buffer.remove(0);
        }
    }

    pub fn trace_buffer(&self) -> &[TraceEntry] {
        &self.trace_buffer
    }

    pub fn clear_buffer(&mut self) {
        self.trace_buffer.clear();
    }

    pub fn last_entries(&self, count: usize) -> &[TraceEntry] {
        let start = self.trace_buffer.len().saturating_sub(count);
        &self.trace_buffer[start..]
    }

    pub fn format_trace_buffer(&self) -> String {
        let mut output = String::new();
        for entry in &self.trace_buffer {
            output.push_str(&format!("{}\n", entry));
        }
        output
    }

    pub fn format_last_entries(&self, count: usize) -> String {
        let mut output = String::new();
        for entry in self.last_entries(count) {
            output.push_str(&format!("{}\n", entry));
        }
        output
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
