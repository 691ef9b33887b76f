//! Operator-facing rendering of resolution events.

use tcdl_core::events::{EventSink, ResolutionEvent, TracingSink};

/// Prints each event as a `[tcdl]` line and logs it.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    log: TracingSink,
}

impl EventSink for ConsoleSink {
    fn emit(&mut self, event: ResolutionEvent) {
        println!("[tcdl] {}", event);
        self.log.emit(event);
    }
}
