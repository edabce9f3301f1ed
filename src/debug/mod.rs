// Debug module - structured diagnostics for the emulator core
//
// A debug GUI, memory/pattern-table viewers, and a standalone disassembler
// are out of scope for this core; what remains is the ambient logging
// surface every subsystem reports through: a bounded trace ring with
// independent per-subsystem enable flags.

pub mod logger;

pub use logger::{LogLevel, Logger, TraceEntry};
