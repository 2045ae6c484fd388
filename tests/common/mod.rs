#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use record_services::{
    directory::{UserDirectory, VerifyError},
    models::{ObjectId, Post, User},
    store::{PostStore, StoreError, UserStore},
};
use serde_json::Value;
use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};
use tower::ServiceExt;

/// Sends one request through the router and returns status plus JSON body
/// (`Value::Null` when the body is not JSON).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, method, uri, body.map(|v| v.to_string())).await;
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(text) => {
            builder = builder.header("content-type", "application/json");
            Body::from(text)
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

/// Directory with a fixed answer that counts how often it was asked.
pub struct StubDirectory {
    answer: Option<bool>,
    calls: AtomicUsize,
}

impl StubDirectory {
    pub fn exists() -> Self {
        Self::with(Some(true))
    }

    pub fn missing() -> Self {
        Self::with(Some(false))
    }

    /// Every check fails as if the user-service were down.
    pub fn unreachable() -> Self {
        Self::with(None)
    }

    fn with(answer: Option<bool>) -> Self {
        Self {
            answer,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserDirectory for StubDirectory {
    async fn user_exists(&self, _user_id: &str) -> Result<bool, VerifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.ok_or(VerifyError::Status(
            reqwest::StatusCode::SERVICE_UNAVAILABLE,
        ))
    }
}

/// Store whose every operation fails as if its deadline expired, counting calls.
#[derive(Default)]
pub struct BrokenStore {
    calls: AtomicUsize,
}

impl BrokenStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> Result<T, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Timeout(Duration::from_secs(5)))
    }
}

#[async_trait]
impl UserStore for BrokenStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        self.fail()
    }

    async fn insert(&self, _user: &User) -> Result<(), StoreError> {
        self.fail()
    }

    async fn delete(&self, _id: ObjectId) -> Result<bool, StoreError> {
        self.fail()
    }

    async fn count(&self, _id: ObjectId) -> Result<u64, StoreError> {
        self.fail()
    }
}

#[async_trait]
impl PostStore for BrokenStore {
    async fn find_by_user(&self, _user_id: &str) -> Result<Vec<Post>, StoreError> {
        self.fail()
    }

    async fn insert(&self, _post: &Post) -> Result<(), StoreError> {
        self.fail()
    }

    async fn delete(&self, _id: ObjectId) -> Result<bool, StoreError> {
        self.fail()
    }
}

/// Store that never answers, for deadline tests.
pub struct HangingStore;

#[async_trait]
impl UserStore for HangingStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        std::future::pending().await
    }

    async fn insert(&self, _user: &User) -> Result<(), StoreError> {
        std::future::pending().await
    }

    async fn delete(&self, _id: ObjectId) -> Result<bool, StoreError> {
        std::future::pending().await
    }

    async fn count(&self, _id: ObjectId) -> Result<u64, StoreError> {
        std::future::pending().await
    }
}
