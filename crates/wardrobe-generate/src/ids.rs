//! Category-prefixed item ids.
//!
//! An id is the category prefix digit followed by the decimal digits of a
//! nanosecond tick, parsed back as one integer. Two items of the same category
//! sampled on the same tick get the same id unless `unique_ticks` is enabled.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use wardrobe_core::Category;

use crate::errors::GenerationError;

/// 2024-01-01T00:00:00Z. Ticks count from here so prefixed ids fit in `i64`.
const TICK_EPOCH: Duration = Duration::from_secs(1_704_067_200);

/// Source of nanosecond ticks.
pub trait Clock: Send + Sync {
    fn now_ns(&self) -> u64;
}

/// Monotonic nanosecond clock anchored to wall time once per process.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now_ns(&self) -> u64 {
        static ANCHOR: OnceLock<(Instant, u64)> = OnceLock::new();
        let (instant, offset) = ANCHOR.get_or_init(|| {
            let since_epoch = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .saturating_sub(TICK_EPOCH);
            (Instant::now(), saturating_nanos(since_epoch))
        });
        offset.saturating_add(saturating_nanos(instant.elapsed()))
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ns(&self) -> u64 {
        (**self).now_ns()
    }
}

fn saturating_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

/// Generates ids from a clock, optionally forcing distinct ticks per category.
#[derive(Debug)]
pub struct IdGenerator<C = MonotonicClock> {
    clock: C,
    unique_ticks: bool,
    last_ticks: [AtomicU64; 4],
}

impl IdGenerator<MonotonicClock> {
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock)
    }
}

impl Default for IdGenerator<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> IdGenerator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            unique_ticks: false,
            last_ticks: Default::default(),
        }
    }

    /// When enabled, a tick already used for a category is bumped past the
    /// last one handed out, so ids never repeat within this generator.
    pub fn unique_ticks(mut self, enabled: bool) -> Self {
        self.unique_ticks = enabled;
        self
    }

    pub fn generate(&self, category: Category) -> Result<i64, GenerationError> {
        let now = self.clock.now_ns();
        let tick = if self.unique_ticks {
            self.reserve_tick(category, now)
        } else {
            now
        };
        compose_id(category, tick)
    }

    fn reserve_tick(&self, category: Category, now: u64) -> u64 {
        // Slots hold the last reserved tick plus one; zero means unused.
        let slot = &self.last_ticks[usize::from(category.id_prefix() - 1)];
        let mut floor = slot.load(Ordering::Relaxed);
        loop {
            let tick = now.max(floor);
            match slot.compare_exchange_weak(
                floor,
                tick.saturating_add(1),
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return tick,
                Err(current) => floor = current,
            }
        }
    }
}

/// Concatenate the category prefix and `tick`, then parse the digits.
pub fn compose_id(category: Category, tick: u64) -> Result<i64, GenerationError> {
    format!("{}{tick}", category.id_prefix())
        .parse::<i64>()
        .map_err(|_| GenerationError::IdOverflow { category, tick })
}
