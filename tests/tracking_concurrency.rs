//! Concurrency behavior of the tracking engine over the in-memory stores.

mod common;

use std::collections::HashSet;
use std::sync::Arc;

use mail_tracker::application::services::{RequestSigner, TrackingService};
use mail_tracker::domain::repositories::EventRepository;
use mail_tracker::infrastructure::memory::{MemoryEventRepository, MemoryLinkRepository};

fn engine() -> (Arc<TrackingService>, Arc<MemoryEventRepository>) {
    let events = Arc::new(MemoryEventRepository::new());
    let service = Arc::new(TrackingService::new(
        Arc::new(MemoryLinkRepository::new()),
        events.clone(),
        RequestSigner::new(common::TEST_SECRET.to_string()),
    ));
    (service, events)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_opens_are_neither_lost_nor_duplicated() {
    let (service, events) = engine();
    let signer = RequestSigner::new(common::TEST_SECRET.to_string());

    let mut handles = Vec::new();
    for i in 0..100 {
        let service = service.clone();
        let tid = format!("tid-{i}");
        let mid = format!("mid-{i}");
        let sig = signer.sign(&[&tid, &mid]);

        handles.push(tokio::spawn(async move {
            service
                .record_open(Some(&tid), Some(&mid), Some(&sig), None)
                .await
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }

    let all = events.recent(1000).await.unwrap();
    assert_eq!(all.len(), 100);

    // Every pair recorded exactly once.
    let tids: HashSet<_> = all.iter().map(|e| e.tid.clone().unwrap()).collect();
    assert_eq!(tids.len(), 100);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_yield_distinct_resolvable_tokens() {
    let (service, _events) = engine();

    let mut handles = Vec::new();
    for i in 0..50 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service
                .create_link(&format!("https://example.com/page/{i}"))
                .await
                .unwrap()
        }));
    }

    let mut tokens = HashSet::new();
    for handle in handles {
        tokens.insert(handle.await.unwrap());
    }

    assert_eq!(tokens.len(), 50);

    for token in &tokens {
        let url = service
            .resolve_and_record_click(token, None, None, None)
            .await
            .unwrap();
        assert!(url.starts_with("https://example.com/page/"));
    }
}
