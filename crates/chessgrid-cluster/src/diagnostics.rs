//! Optional, write-only sink for human-readable progress and failure notes.
//!
//! A sink is handed to a single conversion call. It never influences the
//! outcome of the conversion.

/// Receiver of diagnostic messages.
pub trait DiagnosticSink {
    fn report(&mut self, message: &str);
}

/// Collects messages in memory.
impl DiagnosticSink for Vec<String> {
    fn report(&mut self, message: &str) {
        self.push(message.to_owned());
    }
}

/// Forwards every message to the `log` facade at `info` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, message: &str) {
        log::info!("{message}");
    }
}

/// Wrapper used by the pipeline so stages can emit notes without caring
/// whether anyone is listening. Messages are only formatted when a sink is
/// attached.
pub(crate) struct Diagnostics<'a> {
    sink: Option<&'a mut dyn DiagnosticSink>,
}

impl<'a> Diagnostics<'a> {
    pub(crate) fn new(sink: Option<&'a mut dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    pub(crate) fn note(&mut self, message: impl FnOnce() -> String) {
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.report(&message());
        }
    }
}
