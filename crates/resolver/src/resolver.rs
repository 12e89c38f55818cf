//! Gesture resolver
//!
//! Turns raw status bytes into semantic gesture events. A resolution uses at
//! most two consecutive primary reads: the initial flag and, for direction
//! flags, one lookahead read after the settle window. The settle wait is an
//! async sleep; read → wait → second read ordering is preserved.

use contracts::{GestureEvent, GestureFlags, GestureReader, PipelineError, ResolverConfig};
use tokio::time::sleep;
use tracing::{debug, trace};

use crate::decode::{completion_override, decode, ResolvePolicy};

/// Table-driven gesture resolver over a [`GestureReader`]
pub struct GestureResolver<R> {
    reader: R,
    config: ResolverConfig,
}

impl<R: GestureReader> GestureResolver<R> {
    /// Create a resolver with the given settle configuration
    pub fn new(reader: R, config: ResolverConfig) -> Self {
        Self { reader, config }
    }

    /// Access the underlying reader
    pub fn reader_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// One full polling cycle: initial read plus resolution
    ///
    /// `Ok(None)` is the normal no-gesture result; bus errors propagate.
    pub async fn poll_once(&mut self) -> Result<Option<GestureEvent>, PipelineError> {
        let initial = self.reader.read_gesture()?;
        self.resolve(initial).await
    }

    /// Resolve an already-read status byte
    pub async fn resolve(
        &mut self,
        initial: GestureFlags,
    ) -> Result<Option<GestureEvent>, PipelineError> {
        let Some(entry) = decode(initial) else {
            // No primary flag: the wave gesture only shows up in the
            // secondary status register.
            let wave = self.reader.read_wave()?;
            if wave {
                debug!(gesture = %GestureEvent::Wave, "gesture resolved");
                return Ok(Some(GestureEvent::Wave));
            }
            trace!("no gesture");
            return Ok(None);
        };

        let event = match entry.policy {
            ResolvePolicy::Immediate => entry.event,
            ResolvePolicy::Settle => {
                sleep(self.config.settle).await;
                entry.event
            }
            ResolvePolicy::Lookahead => {
                sleep(self.config.settle).await;
                let lookahead = self.reader.read_gesture()?;
                let completed = completion_override(lookahead);
                observability::record_lookahead(completed.is_some());
                match completed {
                    Some(completed) => {
                        debug!(
                            initial = %entry.event,
                            completed = %completed,
                            "compound gesture"
                        );
                        completed
                    }
                    None => entry.event,
                }
            }
        };

        debug!(gesture = %event, "gesture resolved");
        Ok(Some(event))
    }
}
