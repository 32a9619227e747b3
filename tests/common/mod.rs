#![allow(dead_code)]

use axum::{Router, extract::ConnectInfo, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;

use mail_tracker::api::handlers::{health_handler, pixel_handler, redirect_handler};
use mail_tracker::api::routes::api_routes;
use mail_tracker::application::services::{RequestSigner, StatsService, TrackingService};
use mail_tracker::domain::repositories::{EventRepository, LinkRepository};
use mail_tracker::infrastructure::memory::{MemoryEventRepository, MemoryLinkRepository};
use mail_tracker::state::AppState;
use mail_tracker::web;

pub const TEST_SECRET: &str = "test-signing-secret";

/// Signs (tid, mid) the way a link issuer holding the shared secret would.
pub fn sign(tid: &str, mid: &str) -> String {
    RequestSigner::new(TEST_SECRET.to_string()).sign(&[tid, mid])
}

/// Builds an application state backed by fresh in-memory stores.
pub fn test_state() -> AppState {
    let links: Arc<dyn LinkRepository> = Arc::new(MemoryLinkRepository::new());
    let events: Arc<dyn EventRepository> = Arc::new(MemoryEventRepository::new());

    let signer = RequestSigner::new(TEST_SECRET.to_string());
    let tracking_service = Arc::new(TrackingService::new(links, events.clone(), signer));
    let stats_service = Arc::new(StatsService::new(events));

    AppState::new(tracking_service, stats_service, "memory", 100)
}

/// Builds the full route set over the given state, with a fixed peer
/// address injected for the `ConnectInfo` extractor.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/s/pixel", get(pixel_handler))
        .route("/r/{token}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        .nest("/dashboard", web::routes::routes())
        .layer(MockConnectInfoLayer)
        .with_state(state)
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
