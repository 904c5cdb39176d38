#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

use linkgecko::application::services::RedirectService;
use linkgecko::domain::click_event::ClickEvent;
use linkgecko::domain::entities::{Link, NewClick};
use linkgecko::domain::repositories::{ClickRepository, LinkRepository};
use linkgecko::error::AppError;
use linkgecko::state::AppState;

/// In-memory link store for handler tests.
///
/// Substitutes for the PostgreSQL repository via the injected trait, so
/// tests exercise the full handler path without a database.
pub struct InMemoryLinkStore {
    links: HashMap<String, Link>,
}

impl InMemoryLinkStore {
    pub fn new(links: Vec<Link>) -> Self {
        Self {
            links: links.into_iter().map(|l| (l.slug.clone(), l)).collect(),
        }
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkStore {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.get(slug).cloned())
    }
}

/// Link store whose every lookup fails, simulating a store outage.
pub struct FailingLinkStore;

#[async_trait]
impl LinkRepository for FailingLinkStore {
    async fn find_by_slug(&self, _slug: &str) -> Result<Option<Link>, AppError> {
        Err(AppError::internal(
            "Database error",
            serde_json::json!({}),
        ))
    }
}

/// Click store collecting inserted records for assertions.
#[derive(Default)]
pub struct RecordingClickStore {
    pub records: Mutex<Vec<NewClick>>,
}

#[async_trait]
impl ClickRepository for RecordingClickStore {
    async fn insert_click(&self, new_click: NewClick) -> Result<(), AppError> {
        self.records.lock().unwrap().push(new_click);
        Ok(())
    }
}

/// Click store whose every insert fails.
pub struct FailingClickStore;

#[async_trait]
impl ClickRepository for FailingClickStore {
    async fn insert_click(&self, _new_click: NewClick) -> Result<(), AppError> {
        Err(AppError::internal(
            "Database error",
            serde_json::json!({}),
        ))
    }
}

pub fn active_link(id: i64, slug: &str, url: &str) -> Link {
    Link::new(id, slug.to_string(), url.to_string(), None, true, Utc::now())
}

pub fn profile_link(id: i64, slug: &str, url: &str, profile_id: i64) -> Link {
    Link::new(
        id,
        slug.to_string(),
        url.to_string(),
        Some(profile_id),
        true,
        Utc::now(),
    )
}

pub fn disabled_link(id: i64, slug: &str, url: &str) -> Link {
    Link::new(id, slug.to_string(), url.to_string(), None, false, Utc::now())
}

/// Builds test state over the given links, returning the click receiver
/// for event assertions.
pub fn create_test_state(links: Vec<Link>) -> (AppState, mpsc::Receiver<ClickEvent>) {
    let (tx, rx) = mpsc::channel(100);

    let redirect_service = Arc::new(RedirectService::new(Arc::new(InMemoryLinkStore::new(links))));

    (AppState::new(redirect_service, tx), rx)
}

/// Builds test state whose slug lookups always fail.
pub fn create_failing_state() -> (AppState, mpsc::Receiver<ClickEvent>) {
    let (tx, rx) = mpsc::channel(100);

    let redirect_service = Arc::new(RedirectService::new(Arc::new(FailingLinkStore)));

    (AppState::new(redirect_service, tx), rx)
}
