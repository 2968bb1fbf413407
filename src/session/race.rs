//! First-to-complete race between a unit of work and a timer.
//!
//! The loser is dropped as soon as the race is decided. A dropped HTTP
//! future is not aborted at the network layer, but its eventual result can
//! no longer reach the caller.

#[cfg(test)]
#[path = "race_test.rs"]
mod race_test;

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{Either, select};

/// Source of sleep futures. Swapped for a tokio timer in tests.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Timer backed by `setTimeout` in the browser.
///
/// Outside the browser there is no timer source and the sleep resolves
/// immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        #[cfg(feature = "csr")]
        {
            gloo_timers::future::sleep(duration)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = duration;
            std::future::ready(())
        }
    }
}

/// The timer won the race.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Elapsed {
    pub after: Duration,
}

/// Drive `work` until it finishes or `limit` elapses, whichever is first.
///
/// When both are ready on the same poll the work wins.
///
/// # Errors
///
/// Returns `Elapsed` if the timer fires before `work` completes.
pub async fn race_timeout<T, F>(timer: &T, limit: Duration, work: F) -> Result<F::Output, Elapsed>
where
    T: Timer,
    F: Future,
{
    let work = pin!(work);
    let deadline = pin!(timer.sleep(limit));
    match select(work, deadline).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(((), _)) => Err(Elapsed { after: limit }),
    }
}
