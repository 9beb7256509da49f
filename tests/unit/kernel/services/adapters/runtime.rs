use super::*;
use std::sync::mpsc;

fn request(id: u64, query: &str) -> AssistantRequest {
    AssistantRequest {
        id,
        query: query.to_string(),
    }
}

#[test]
fn reply_arrives_after_delay() {
    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx).unwrap();

    let handle = runtime.ask_assistant(request(7, "react hooks"), Duration::from_millis(20));
    assert_eq!(handle.request_id(), 7);
    // The call itself never waits for the reply.
    assert!(rx.try_recv().is_err());

    let msg = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(
        msg,
        AppMessage::AssistantReply {
            request_id: 7,
            content: assistant::respond("react hooks"),
        }
    );
}

#[test]
fn replies_keep_request_ids() {
    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx).unwrap();

    let _a = runtime.ask_assistant(request(1, "loop"), Duration::from_millis(10));
    let _b = runtime.ask_assistant(request(2, "async"), Duration::from_millis(10));

    let mut ids: Vec<u64> = (0..2)
        .map(|_| match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            AppMessage::AssistantReply { request_id, .. } => request_id,
        })
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, [1, 2]);
}

#[test]
fn cancelled_reply_is_never_sent() {
    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx).unwrap();

    let handle = runtime.ask_assistant(request(3, "help"), Duration::from_millis(200));
    handle.cancel();

    assert!(rx.recv_timeout(Duration::from_millis(500)).is_err());
    assert!(handle.is_finished());
}

#[test]
fn closed_receiver_does_not_panic() {
    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx).unwrap();
    drop(rx);

    let handle = runtime.ask_assistant(request(4, "x"), Duration::from_millis(1));
    let deadline = std::time::Instant::now() + Duration::from_secs(5);
    while !handle.is_finished() && std::time::Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(5));
    }
    assert!(handle.is_finished());
}
