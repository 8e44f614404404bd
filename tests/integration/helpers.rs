//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use ais_api::{AppState, build_router};
use ais_core::config::AppConfig;
use ais_entity::{AssetType, Folder, InventoryFlags, InventoryType, Item};
use ais_service::InventoryService;
use ais_store::{InventoryStore, MemoryStore};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Direct handle on the backing store for seeding and inspection
    pub store: Arc<MemoryStore>,
    /// The test agent whose inventory the requests operate on
    pub agent: Uuid,
    /// The agent's seeded root folder
    pub root: Folder,
    base: String,
}

impl TestApp {
    /// Create a new test application with one seeded agent
    pub fn new() -> Self {
        let config = AppConfig::default();
        let store = Arc::new(MemoryStore::new());
        let agent = Uuid::new_v4();
        let root = store.seed_owner(agent);

        let base = format!(
            "{}/api/inventory/{}",
            config.api.public_base_url.trim_end_matches('/'),
            agent
        );
        let state = AppState::new(config, InventoryService::new(store.clone()));
        let router = build_router(state);

        Self {
            router,
            store,
            agent,
            root,
            base,
        }
    }

    /// Relative request path for a category resource
    pub fn category_path(&self, token: &str) -> String {
        format!("/api/inventory/{}/category/{}", self.agent, token)
    }

    /// Relative request path for an item resource
    pub fn item_path(&self, id: Uuid) -> String {
        format!("/api/inventory/{}/item/{}", self.agent, id)
    }

    /// Absolute category URL, as required by `Destination` headers
    pub fn category_url(&self, token: &str) -> String {
        format!("{}/category/{}", self.base, token)
    }

    /// Seed an ordinary subfolder
    pub async fn add_folder(&self, parent: Uuid, name: &str) -> Folder {
        self.store
            .add_folder(Folder {
                id: Uuid::nil(),
                name: name.to_string(),
                parent_id: parent,
                default_type: AssetType::Unknown,
                version: 1,
                owner_id: self.agent,
            })
            .await
            .expect("Failed to seed folder")
    }

    /// Seed a plain notecard item
    pub async fn add_notecard(&self, parent: Uuid, name: &str) -> Item {
        let mut item = Item::new(self.agent, parent);
        item.name = name.to_string();
        item.asset_id = Uuid::new_v4();
        item.asset_type = AssetType::Notecard;
        item.inventory_type = InventoryType::Notecard;
        self.store.add_item(item).await.expect("Failed to seed item")
    }

    /// Seed an item link pointing at `target`
    pub async fn add_link(&self, parent: Uuid, name: &str, target: Uuid) -> Item {
        let mut link = Item::new(self.agent, parent);
        link.name = name.to_string();
        link.asset_type = AssetType::Link;
        link.asset_id = target;
        self.store.add_item(link).await.expect("Failed to seed link")
    }

    /// Seed a gesture item, optionally flagged active
    pub async fn add_gesture(&self, parent: Uuid, name: &str, active: bool) -> Item {
        let mut item = Item::new(self.agent, parent);
        item.name = name.to_string();
        item.asset_id = Uuid::new_v4();
        item.asset_type = AssetType::Gesture;
        item.inventory_type = InventoryType::Gesture;
        if active {
            item.flags = InventoryFlags::GESTURE_ACTIVE;
        }
        self.store.add_item(item).await.expect("Failed to seed item")
    }

    /// Make a JSON request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        self.request_full(method, path, body, None).await
    }

    /// Make a request carrying a `Destination` header (MOVE/COPY)
    pub async fn request_to(
        &self,
        method: &str,
        path: &str,
        destination: &str,
    ) -> TestResponse {
        self.request_full(method, path, None, Some(destination)).await
    }

    async fn request_full(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        destination: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(destination) = destination {
            req = req.header("Destination", destination);
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Make a request with an arbitrary content type and raw body
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        content_type: &str,
        body: &str,
    ) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", content_type)
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
