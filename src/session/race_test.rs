use std::cell::Cell;

use super::*;

struct TokioTimer;

impl Timer for TokioTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

#[tokio::test(start_paused = true)]
async fn work_that_finishes_first_wins() {
    let result = race_timeout(&TokioTimer, Duration::from_millis(5000), async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        7
    })
    .await;
    assert_eq!(result, Ok(7));
}

#[tokio::test(start_paused = true)]
async fn timer_that_fires_first_wins() {
    let start = tokio::time::Instant::now();
    let result = race_timeout(&TokioTimer, Duration::from_millis(5000), async {
        tokio::time::sleep(Duration::from_millis(6000)).await;
        7
    })
    .await;
    assert_eq!(result, Err(Elapsed { after: Duration::from_millis(5000) }));
    assert_eq!(start.elapsed(), Duration::from_millis(5000));
}

#[tokio::test(start_paused = true)]
async fn pending_work_times_out() {
    let result = race_timeout(&TokioTimer, Duration::from_millis(250), std::future::pending::<()>()).await;
    assert_eq!(result, Err(Elapsed { after: Duration::from_millis(250) }));
}

#[tokio::test(start_paused = true)]
async fn losing_work_never_runs_past_the_deadline() {
    let finished = Cell::new(false);
    let result = race_timeout(&TokioTimer, Duration::from_millis(10), async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        finished.set(true);
    })
    .await;
    assert!(result.is_err());
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!finished.get());
}

#[cfg(not(feature = "csr"))]
#[tokio::test]
async fn ready_work_beats_an_immediate_timer() {
    let result = race_timeout(&BrowserTimer, Duration::ZERO, std::future::ready("done")).await;
    assert_eq!(result, Ok("done"));
}
