use std::pin::Pin;
use std::time::Duration;

use tokio::time::{Instant, Sleep};

/// Animation rate tier, fixed for the whole session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Performance {
    /// 60 FPS
    #[default]
    Normal,
    /// 15 FPS for slow terminals
    Low,
}

impl Performance {
    pub fn from_low_flag(low: bool) -> Self {
        if low { Self::Low } else { Self::Normal }
    }

    pub fn period(self) -> Duration {
        match self {
            Self::Normal => Duration::from_millis(1000 / 60),
            Self::Low => Duration::from_millis(1000 / 15),
        }
    }
}

/// One firing of the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub at: Instant,
}

/// One-shot tick source.
///
/// A tick is armed only when [`Ticker::next`] is awaited and disarmed when it
/// fires, so at most one tick is ever pending and slow frames never pile up.
/// Dropping a `next()` future keeps the armed deadline, which makes it safe to
/// use as a `tokio::select!` branch.
pub struct Ticker {
    period: Duration,
    pending: Option<Pin<Box<Sleep>>>,
}

impl Ticker {
    pub fn new(performance: Performance) -> Self {
        Self {
            period: performance.period(),
            pending: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub async fn next(&mut self) -> Tick {
        let period = self.period;
        let sleep = self
            .pending
            .get_or_insert_with(|| Box::pin(tokio::time::sleep(period)));
        sleep.as_mut().await;
        self.pending = None;
        Tick { at: Instant::now() }
    }
}
