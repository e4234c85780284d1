//! Counted sampling: emit every Nth occurrence of a recurring event.

use std::io;

use crate::level::Level;
use crate::logger::Logger;

/// Caller-owned counter that emits through a [`Logger`] on every
/// `every`-th tick.
///
/// The counter advances on every tick whether or not a line comes out, so
/// its value always reflects the number of occurrences seen. An `every` of
/// zero counts but never emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleCounter {
    count: u64,
    every: u64,
}

impl SampleCounter {
    /// Create a counter that emits on every `every`-th occurrence.
    pub fn new(every: u64) -> SampleCounter {
        SampleCounter { count: 0, every }
    }

    /// Occurrences recorded so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Record one occurrence; emit when the count lands on a multiple of
    /// `every`.
    ///
    /// The increment happens first, unconditionally. Whether the delegated
    /// line survives the logger's level filter is then the emitter's
    /// business, not the counter's.
    ///
    /// # Errors
    ///
    /// Propagates sink write failures from the delegated emission.
    pub fn tick(
        &mut self,
        logger: &mut Logger,
        level: Level,
        label: &str,
        message: &str,
    ) -> io::Result<()> {
        self.count += 1;
        if self.every > 0 && self.count % self.every == 0 {
            logger.log(level, label, message)
        } else {
            Ok(())
        }
    }
}
