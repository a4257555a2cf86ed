//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use coop_sim::{Event, SimObserver};

use crate::row::EventRow;
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that streams every processed entry and exit straight to
/// an [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value. After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error], then reclaim the writer
/// with [`into_writer`][Self::into_writer] to add the end-of-run artifacts
/// (occupancy totals, pair counts) and close it — the observer never sees
/// the final tracker state, only the event stream.
pub struct SimOutputObserver<W: OutputWriter> {
    writer: W,
    events_written: u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            events_written: 0,
            last_error: None,
        }
    }

    /// Rows successfully handed to the writer so far.
    pub fn events_written(&self) -> u64 {
        self.events_written
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer to write the final artifacts and finish.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_event(&mut self, event: &Event) {
        let row = EventRow::from(event);
        let result = self.writer.write_event(&row);
        if result.is_ok() {
            self.events_written += 1;
        }
        self.store_err(result);
    }
}
