use serde_json::json;
use std::sync::Arc;
use trevor_kernel::{ProcessRequest, Processor};
use trevor_testing::MockProcessor;
use trevor_testing::processor::MockOutcome;

#[tokio::test]
async fn test_mock_processor_records_calls() {
    let mock = MockProcessor::succeeding("greeting", json!({ "reply": "hi" }));
    assert_eq!(mock.call_count(), 0);

    let mut req = ProcessRequest::new("1", "/process", "hello");
    let out = mock.process(&mut req).await.unwrap();
    assert_eq!(out.kind, "greeting");
    assert_eq!(out.data, json!({ "reply": "hi" }));

    assert_eq!(mock.history()[0].text(), "hello");
    trevor_testing::assert_processed!(mock, 1);
}

#[tokio::test]
async fn test_mock_processor_failure_message() {
    let mock = MockProcessor::failing("backend unavailable");
    let mut req = ProcessRequest::new("1", "/process", "hello");
    let err = mock.process(&mut req).await.unwrap_err();
    assert_eq!(err.to_string(), "backend unavailable");
}

#[tokio::test]
async fn test_rotation_applies_only_on_success() {
    let mock = MockProcessor::new().rotating_token("fresh");

    let mut req = ProcessRequest::new("1", "/process", "hi").with_token("stale");
    mock.process(&mut req).await.unwrap();
    assert_eq!(req.token(), "fresh");
    assert_eq!(mock.history()[0].token(), "stale");

    mock.set_outcome(MockOutcome::Fail("no".into()));
    let mut req = ProcessRequest::new("2", "/process", "hi").with_token("stale");
    assert!(mock.process(&mut req).await.is_err());
    assert_eq!(req.token(), "stale");
}

#[tokio::test]
async fn test_clones_share_state() {
    let mock = MockProcessor::new().with_session_header("x-session");
    let shared: Arc<dyn Processor> = Arc::new(mock.clone());

    let mut req = ProcessRequest::new("1", "/process", "hi");
    shared.process(&mut req).await.unwrap();
    shared.schedule_background_tasks();

    assert_eq!(mock.call_count(), 1);
    assert_eq!(mock.scheduled_count(), 1);
    assert_eq!(
        shared.session_store().map(|s| s.token_header()),
        Some("x-session")
    );
}

#[tokio::test]
async fn test_concurrent_calls_are_all_recorded() {
    let mock = MockProcessor::new();
    let calls = (0..16).map(|i| {
        let mock = mock.clone();
        async move {
            let mut req = ProcessRequest::new(i.to_string(), "/process", "hi");
            mock.process(&mut req).await
        }
    });
    let results = futures::future::join_all(calls).await;
    assert!(results.iter().all(Result::is_ok));
    trevor_testing::assert_processed!(mock, 16);
}
