//! Wall-clock budget enforcement for time-bounded search.
//!
//! A turn gets one `TimeSource` (real or fake), one `DeadlineMonitor`, and a
//! safety threshold. The monitor is consulted at the start of every recursive
//! search call; once remaining time falls below the threshold the check
//! returns `Err(SearchAborted)` and the whole in-progress tree unwinds
//! through the usual `?` plumbing.

use std::cell::Cell;
use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

pub type SearchOutcome<T> = Result<T, SearchAborted>;

/// Slack left for unwinding the search and returning a move before the
/// external turn clock actually expires.
pub const DEFAULT_TIMER_THRESHOLD: Duration = Duration::from_millis(10);

/// The turn's time budget is (nearly) exhausted and the search must stop.
///
/// This is the only error kind the search core produces. It is never handled
/// inside an engine; recovery happens at the iterative-deepening driver,
/// which keeps the result of the last fully completed depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchAborted;

impl fmt::Display for SearchAborted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "search aborted: turn time budget exhausted")
    }
}

impl Error for SearchAborted {}

/// Source of "time remaining in the current turn" queries.
///
/// Injected into the monitor so gameplay can use the real clock while tests
/// supply deterministic, countable fakes.
pub trait TimeSource {
    fn remaining(&self) -> Duration;
}

/// Real clock counting down from a fixed per-turn budget.
#[derive(Debug, Clone)]
pub struct WallClock {
    deadline: Instant,
}

impl WallClock {
    pub fn starting_now(budget: Duration) -> Self {
        Self {
            deadline: Instant::now() + budget,
        }
    }
}

impl TimeSource for WallClock {
    fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }
}

/// Clock that never runs out. Used for depth-capped searches and benches.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnlimitedClock;

impl TimeSource for UnlimitedClock {
    fn remaining(&self) -> Duration {
        Duration::MAX
    }
}

/// Deterministic fake clock: each query reports the current remaining time,
/// then decrements it by a fixed step. Expires after a predictable number of
/// queries, which makes abort paths testable without real sleeping.
#[derive(Debug)]
pub struct CountdownClock {
    remaining_ms: Cell<u64>,
    step_ms: u64,
    queries: Cell<u64>,
}

impl CountdownClock {
    pub fn new(initial_ms: u64, step_ms: u64) -> Self {
        Self {
            remaining_ms: Cell::new(initial_ms),
            step_ms,
            queries: Cell::new(0),
        }
    }

    /// Number of `remaining()` queries served so far.
    pub fn queries(&self) -> u64 {
        self.queries.get()
    }
}

impl TimeSource for CountdownClock {
    fn remaining(&self) -> Duration {
        self.queries.set(self.queries.get() + 1);
        let now = self.remaining_ms.get();
        self.remaining_ms.set(now.saturating_sub(self.step_ms));
        Duration::from_millis(now)
    }
}

/// Per-move abort authority shared read-only by every frame of one search.
pub struct DeadlineMonitor<'a> {
    clock: &'a dyn TimeSource,
    threshold: Duration,
}

impl<'a> DeadlineMonitor<'a> {
    pub fn new(clock: &'a dyn TimeSource, threshold: Duration) -> Self {
        Self { clock, threshold }
    }

    /// Abort once remaining time drops below the safety threshold.
    ///
    /// Called at the start of every recursive search entry, every ply, every
    /// node; root-only checking cannot bound worst-case overrun on deep
    /// trees.
    #[inline]
    pub fn check(&self) -> SearchOutcome<()> {
        if self.clock.remaining() < self.threshold {
            Err(SearchAborted)
        } else {
            Ok(())
        }
    }

    #[inline]
    pub fn remaining(&self) -> Duration {
        self.clock.remaining()
    }
}
