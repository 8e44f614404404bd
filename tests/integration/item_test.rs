//! Integration tests for item resources.

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use ais_entity::{PermissionMask, Permissions};

use crate::helpers::TestApp;

#[tokio::test]
async fn test_get_item() {
    let app = TestApp::new();
    let item = app.add_notecard(app.root.id, "note").await;

    let response = app.request("GET", &app.item_path(item.id), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["item_id"], json!(item.id.to_string()));
    assert_eq!(response.body["name"], json!("note"));
    assert_eq!(response.body["parent_id"], json!(app.root.id.to_string()));
    assert!(response.body.get("permissions").is_some());
}

#[tokio::test]
async fn test_get_broken_link_flags_but_succeeds() {
    let app = TestApp::new();
    let target = app.add_notecard(app.root.id, "target").await;
    let live = app.add_link(app.root.id, "live", target.id).await;
    let broken = app.add_link(app.root.id, "broken", Uuid::new_v4()).await;

    let response = app.request("GET", &app.item_path(live.id), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["_broken"], json!(false));
    assert_eq!(
        response.body["_embedded"]["item"]["item_id"],
        json!(target.id.to_string())
    );

    let response = app.request("GET", &app.item_path(broken.id), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["_broken"], json!(true));
    assert!(response.body.get("_embedded").is_none());
}

#[tokio::test]
async fn test_patch_item_clamps_permissions_to_base() {
    let app = TestApp::new();
    let mut seed = ais_entity::Item::new(app.agent, app.root.id);
    seed.name = "script".to_string();
    seed.asset_id = Uuid::new_v4();
    seed.asset_type = ais_entity::AssetType::LslText;
    seed.inventory_type = ais_entity::InventoryType::Lsl;
    seed.permissions = Permissions {
        base: PermissionMask::MODIFY | PermissionMask::COPY,
        ..Permissions::open()
    };
    seed.permissions.clamp_to_base();
    let item = ais_store::InventoryStore::add_item(&*app.store, seed)
        .await
        .unwrap();

    let body = json!({
        "name": "renamed",
        "permissions": { "owner_mask": PermissionMask::ALL.bits() },
    });
    let response = app
        .request("PATCH", &app.item_path(item.id), Some(body))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], json!("renamed"));
    assert_eq!(
        response.body["permissions"]["owner_mask"],
        json!((PermissionMask::MODIFY | PermissionMask::COPY).bits())
    );
    assert_eq!(
        response.body["_updated_items"][0],
        json!(item.id.to_string())
    );
}

#[tokio::test]
async fn test_delete_item_then_gone() {
    let app = TestApp::new();
    let item = app.add_notecard(app.root.id, "note").await;

    let response = app.request("DELETE", &app.item_path(item.id), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["_total_items_removed"], json!(1));

    let response = app.request("DELETE", &app.item_path(item.id), None).await;
    assert_eq!(response.status, StatusCode::GONE);
    assert_eq!(response.body["error_code"], json!(9));
}

#[tokio::test]
async fn test_move_item_between_categories() {
    let app = TestApp::new();
    let src = app.add_folder(app.root.id, "Src").await;
    let dst = app.add_folder(app.root.id, "Dst").await;
    let item = app.add_notecard(src.id, "note").await;

    let response = app
        .request_to(
            "MOVE",
            &app.item_path(item.id),
            &app.category_url(&dst.id.to_string()),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["parent_id"], json!(dst.id.to_string()));
    let versions = response.body["_updated_category_versions"]
        .as_object()
        .unwrap();
    assert!(versions.contains_key(&src.id.to_string()));
    assert!(versions.contains_key(&dst.id.to_string()));
}

#[tokio::test]
async fn test_copy_item_lands_under_destination() {
    let app = TestApp::new();
    let dst = app.add_folder(app.root.id, "Dst").await;
    let item = app.add_notecard(app.root.id, "note").await;

    let response = app
        .request_to(
            "COPY",
            &app.item_path(item.id),
            &app.category_url(&dst.id.to_string()),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["parent_id"], json!(dst.id.to_string()));
    let copy_id = response.body["_created_items"][0].as_str().unwrap();
    assert_ne!(copy_id, item.id.to_string());

    // The original is untouched.
    let response = app.request("GET", &app.item_path(item.id), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["parent_id"], json!(app.root.id.to_string()));
}

#[tokio::test]
async fn test_copy_item_without_copy_permission_forbidden() {
    let app = TestApp::new();
    let dst = app.add_folder(app.root.id, "Dst").await;
    let mut seed = ais_entity::Item::new(app.agent, app.root.id);
    seed.name = "nocopy".to_string();
    seed.asset_id = Uuid::new_v4();
    seed.asset_type = ais_entity::AssetType::Object;
    seed.inventory_type = ais_entity::InventoryType::Object;
    seed.permissions.current = PermissionMask::MODIFY;
    let item = ais_store::InventoryStore::add_item(&*app.store, seed)
        .await
        .unwrap();

    let response = app
        .request_to(
            "COPY",
            &app.item_path(item.id),
            &app.category_url(&dst.id.to_string()),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error_code"], json!(12));
}

#[tokio::test]
async fn test_item_unsupported_method_rejected() {
    let app = TestApp::new();
    let item = app.add_notecard(app.root.id, "note").await;

    let response = app
        .request("PUT", &app.item_path(item.id), Some(json!({})))
        .await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.body["error_code"], json!(7));
}
