#![allow(dead_code)]

use axum_test::TestServer;
use chrono::Utc;
use link_redirector::domain::entities::ShortLinkRecord;
use link_redirector::infrastructure::storage::MemoryBlobStore;
use link_redirector::routes::app_router;
use link_redirector::state::AppState;
use std::sync::Arc;

pub fn create_test_state() -> (AppState, Arc<MemoryBlobStore>) {
    let store = Arc::new(MemoryBlobStore::new());
    let state = AppState::new(store.clone());
    (state, store)
}

pub fn create_test_server() -> (TestServer, Arc<MemoryBlobStore>) {
    let (state, store) = create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();
    (server, store)
}

pub async fn create_active_link(store: &MemoryBlobStore, code: &str, url: &str) {
    let expires = Utc::now().timestamp() + 3600;
    store
        .put_record(code, &ShortLinkRecord::new(url, expires))
        .await;
}

pub async fn create_expired_link(store: &MemoryBlobStore, code: &str, url: &str) {
    let expired = Utc::now().timestamp() - 3600;
    store
        .put_record(code, &ShortLinkRecord::new(url, expired))
        .await;
}
