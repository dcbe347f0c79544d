use super::*;
use crate::collab::NoProgress;
use std::sync::{
    Mutex,
    atomic::{AtomicU32, Ordering},
};

fn policy(max_attempts: u32) -> PollPolicy {
    PollPolicy::new(Duration::from_secs(10), max_attempts)
}

#[test]
fn budget_is_interval_times_attempts() {
    assert_eq!(policy(60).budget(), Duration::from_secs(600));
}

#[tokio::test(start_paused = true)]
async fn returns_value_once_ready() {
    let calls = AtomicU32::new(0);
    let seen = Mutex::new(Vec::<String>::new());
    let sink = |s: &str| seen.lock().unwrap().push(s.to_string());

    let out = poll_until(policy(5), &CancellationToken::new(), &sink, |attempt| {
        calls.fetch_add(1, Ordering::SeqCst);
        async move {
            Ok(if attempt == 3 {
                PollStatus::Ready("uri")
            } else {
                PollStatus::Pending
            })
        }
    })
    .await
    .unwrap();

    assert_eq!(out, "uri");
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 3);
    assert!(seen[2].contains("attempt 3/5"));
}

#[tokio::test(start_paused = true)]
async fn times_out_after_max_attempts() {
    let calls = AtomicU32::new(0);
    let started = tokio::time::Instant::now();
    let err = poll_until(policy(4), &CancellationToken::new(), &NoProgress, |_| {
        calls.fetch_add(1, Ordering::SeqCst);
        async { Ok(PollStatus::<()>::Pending) }
    })
    .await
    .unwrap_err();

    assert!(matches!(err, FractalError::Timeout { attempts: 4 }));
    assert_eq!(calls.load(Ordering::SeqCst), 4);
    assert!(started.elapsed() >= Duration::from_secs(40));
}

#[tokio::test(start_paused = true)]
async fn cancelled_token_stops_before_probing() {
    let cancel = CancellationToken::new();
    cancel.cancel();
    let calls = AtomicU32::new(0);
    let err = poll_until(policy(60), &cancel, &NoProgress, |_| {
        calls.fetch_add(1, Ordering::SeqCst);
        async { Ok(PollStatus::Ready(())) }
    })
    .await
    .unwrap_err();

    assert!(matches!(err, FractalError::Cancelled));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn cancel_mid_wait_ends_the_loop_early() {
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(25)).await;
        trigger.cancel();
    });

    let started = tokio::time::Instant::now();
    let err = poll_until(policy(60), &cancel, &NoProgress, |_| async {
        Ok(PollStatus::<()>::Pending)
    })
    .await
    .unwrap_err();

    assert!(matches!(err, FractalError::Cancelled));
    assert!(started.elapsed() < Duration::from_secs(31));
}

#[tokio::test(start_paused = true)]
async fn probe_error_propagates() {
    let err = poll_until(policy(3), &CancellationToken::new(), &NoProgress, |_| async {
        Err::<PollStatus<()>, _>(FractalError::collaborator("boom"))
    })
    .await
    .unwrap_err();
    assert!(matches!(err, FractalError::Collaborator(_)));
}
