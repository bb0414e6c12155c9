use std::{
    sync::atomic::{AtomicBool, Ordering},
    time::{Duration, Instant},
};

use atomic_time::{AtomicInstant, AtomicOptionInstant};

use crate::*;

/*----------------------------------------------------------------*/

/// Budget when the protocol supplies no clock information at all.
pub const FALLBACK_MOVE_TIME: Duration = Duration::from_secs(2);

/// Assumed moves remaining when the protocol does not say.
pub const DEFAULT_MOVES_TO_GO: u32 = 30;

/// Fraction of the raw allocation actually spent.
const SAFETY_FACTOR: f64 = 0.95;

/*----------------------------------------------------------------*/

/// Shared clock state for one search: the input thread stores a deadline
/// and stop requests, the search worker polls them cooperatively.
pub struct TimeManager {
    start: AtomicInstant,
    deadline: AtomicOptionInstant,
    stop: AtomicBool,
}

impl TimeManager {
    pub fn new() -> TimeManager {
        TimeManager {
            start: AtomicInstant::new(Instant::now()),
            deadline: AtomicOptionInstant::new(None),
            stop: AtomicBool::new(false),
        }
    }

    /// Starts the clock for one search and derives its deadline from the
    /// limits. `infinite` clears the deadline entirely; a fixed move time
    /// is taken as-is; otherwise the remaining clock is split across the
    /// expected number of moves.
    pub fn init(&self, stm: Color, limits: &[SearchLimit]) {
        let mut remaining = None;
        let mut increment = Duration::ZERO;
        let mut moves_to_go = None;
        let mut move_time = None;
        let mut infinite = false;

        for limit in limits {
            match *limit {
                SearchLimit::WhiteTime(time) if stm == Color::White => remaining = Some(time),
                SearchLimit::BlackTime(time) if stm == Color::Black => remaining = Some(time),
                SearchLimit::WhiteInc(inc) if stm == Color::White => increment = inc,
                SearchLimit::BlackInc(inc) if stm == Color::Black => increment = inc,
                SearchLimit::MovesToGo(moves) => moves_to_go = Some(moves as u32),
                SearchLimit::MoveTime(time) => move_time = Some(time),
                SearchLimit::Infinite => infinite = true,
                _ => {}
            }
        }

        let budget = if infinite {
            None
        } else if let Some(time) = move_time {
            Some(time)
        } else if let Some(time) = remaining {
            Some(allocate(time, increment, moves_to_go))
        } else {
            Some(FALLBACK_MOVE_TIME)
        };

        let now = Instant::now();
        self.start.store(now, Ordering::Relaxed);
        self.deadline.store(budget.map(|budget| now + budget), Ordering::Relaxed);
        self.stop.store(false, Ordering::Relaxed);
    }

    /*----------------------------------------------------------------*/

    #[inline]
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.deadline.load(Ordering::Relaxed).is_none()
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.load(Ordering::Relaxed).elapsed()
    }

    /// True once the deadline has passed or an external stop arrived.
    #[inline]
    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
            || self
                .deadline
                .load(Ordering::Relaxed)
                .is_some_and(|deadline| Instant::now() >= deadline)
    }
}

impl Default for TimeManager {
    fn default() -> Self {
        Self::new()
    }
}

/*----------------------------------------------------------------*/

/// Per-move allocation from the remaining clock: an even split across the
/// moves to go plus the increment, scaled down by the safety factor.
fn allocate(remaining: Duration, increment: Duration, moves_to_go: Option<u32>) -> Duration {
    let moves = moves_to_go.unwrap_or(DEFAULT_MOVES_TO_GO).max(1);

    (remaining / moves + increment).mul_f64(SAFETY_FACTOR)
}

/*----------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_splits_the_clock() {
        let budget = allocate(Duration::from_millis(60_000), Duration::from_millis(1000), None);
        assert_eq!(budget, Duration::from_millis(60_000 / 30 + 1000).mul_f64(0.95));

        let budget = allocate(Duration::from_millis(30_000), Duration::ZERO, Some(10));
        assert_eq!(budget, Duration::from_millis(3000).mul_f64(0.95));

        // A zero moves-to-go field cannot divide by zero.
        let budget = allocate(Duration::from_millis(1000), Duration::ZERO, Some(0));
        assert_eq!(budget, Duration::from_millis(1000).mul_f64(0.95));
    }

    #[test]
    fn limits_decide_the_deadline() {
        let time_man = TimeManager::new();

        time_man.init(Color::White, &[SearchLimit::Infinite]);
        assert!(time_man.is_infinite());
        assert!(!time_man.should_stop());

        time_man.init(Color::White, &[SearchLimit::MoveTime(Duration::from_secs(5))]);
        assert!(!time_man.is_infinite());
        assert!(!time_man.should_stop());

        // The opponent's clock alone leaves us on the fallback budget.
        time_man.init(Color::White, &[SearchLimit::BlackTime(Duration::from_millis(1))]);
        assert!(!time_man.is_infinite());

        time_man.init(Color::Black, &[SearchLimit::BlackTime(Duration::ZERO)]);
        assert!(time_man.should_stop());

        time_man.init(Color::White, &[]);
        time_man.stop();
        assert!(time_man.should_stop());
    }
}
