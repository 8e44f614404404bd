//! Integration tests for category resources.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_get_category_embeds_subtree() {
    let app = TestApp::new();
    let docs = app.add_folder(app.root.id, "Docs").await;
    let nested = app.add_folder(docs.id, "Nested").await;
    app.add_notecard(docs.id, "note").await;

    let path = format!("{}?depth=*", app.category_path("root"));
    let response = app.request("GET", &path, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let level1 = &response.body["_embedded"]["categories"][docs.id.to_string()];
    assert_eq!(level1["name"], json!("Docs"));
    let level2 = &level1["_embedded"]["categories"][nested.id.to_string()];
    assert_eq!(level2["category_id"], json!(nested.id.to_string()));
    assert_eq!(level1["_embedded"]["items"].as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_unknown_category_not_found() {
    let app = TestApp::new();

    let response = app
        .request(
            "GET",
            &app.category_path(&uuid::Uuid::new_v4().to_string()),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error_code"], json!(4));
}

#[tokio::test]
async fn test_post_creates_items_and_skips_malformed() {
    let app = TestApp::new();

    let body = json!({
        "items": [
            { "name": "one", "inv_type": 7, "type": 7, "asset_id": uuid::Uuid::new_v4().to_string() },
            { "name": "two", "inv_type": 7, "type": 7, "asset_id": uuid::Uuid::new_v4().to_string() },
            { "inv_type": 7, "type": 7 },
        ],
    });
    let response = app
        .request("POST", &app.category_path("root"), Some(body))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["_created_items"].as_array().unwrap().len(), 2);
    let versions = response.body["_updated_category_versions"]
        .as_object()
        .unwrap();
    assert!(versions.contains_key(&app.root.id.to_string()));
}

#[tokio::test]
async fn test_post_nested_categories() {
    let app = TestApp::new();

    let body = json!({
        "categories": [
            {
                "name": "Outer",
                "_embedded": {
                    "categories": [{ "name": "Inner" }],
                },
            },
        ],
    });
    let response = app
        .request("POST", &app.category_path("root"), Some(body))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(
        response.body["_created_categories"].as_array().unwrap().len(),
        2
    );
    let outer = response.body["_embedded"]["categories"]
        .as_object()
        .unwrap()
        .values()
        .next()
        .unwrap();
    assert_eq!(outer["name"], json!("Outer"));
    let inner = outer["_embedded"]["categories"]
        .as_object()
        .unwrap()
        .values()
        .next()
        .unwrap();
    assert_eq!(inner["name"], json!("Inner"));
}

#[tokio::test]
async fn test_patch_renames_category() {
    let app = TestApp::new();
    let docs = app.add_folder(app.root.id, "Docs").await;

    let response = app
        .request(
            "PATCH",
            &app.category_path(&docs.id.to_string()),
            Some(json!({"name": "Archive"})),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], json!("Archive"));

    let response = app
        .request(
            "PATCH",
            &app.category_path(&docs.id.to_string()),
            Some(json!({})),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error_code"], json!(0));
}

#[tokio::test]
async fn test_delete_category_cascades() {
    let app = TestApp::new();
    let docs = app.add_folder(app.root.id, "Docs").await;
    let sub = app.add_folder(docs.id, "Sub").await;
    app.add_notecard(docs.id, "a").await;
    let gesture = app.add_gesture(sub.id, "wave", true).await;

    let response = app
        .request("DELETE", &app.category_path(&docs.id.to_string()), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["_total_items_removed"], json!(2));
    // Only descendants are reported; the target's removal is implied
    // by the request itself.
    let removed = response.body["_categories_removed"].as_array().unwrap();
    assert_eq!(removed, &vec![json!(sub.id.to_string())]);
    assert_eq!(
        response.body["_active_gestures_removed"][0],
        json!(gesture.id.to_string())
    );

    let response = app
        .request("GET", &app.category_path(&docs.id.to_string()), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_system_folder_forbidden() {
    let app = TestApp::new();

    for token in ["root", "trash"] {
        let response = app.request("DELETE", &app.category_path(token), None).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN);
        assert_eq!(response.body["error_code"], json!(12));
    }
}

#[tokio::test]
async fn test_delete_children_purges_but_keeps_folder() {
    let app = TestApp::new();
    let docs = app.add_folder(app.root.id, "Docs").await;
    let sub = app.add_folder(docs.id, "Sub").await;
    app.add_notecard(sub.id, "a").await;

    let path = format!("{}/children", app.category_path(&docs.id.to_string()));
    let response = app.request("DELETE", &path, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["_total_items_removed"], json!(1));

    let response = app
        .request("GET", &app.category_path(&docs.id.to_string()), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let response = app
        .request("GET", &app.category_path(&sub.id.to_string()), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_purge_bumps_parent_version_one_step() {
    let app = TestApp::new();
    let docs = app.add_folder(app.root.id, "Docs").await;
    let sub = app.add_folder(docs.id, "Sub").await;
    app.add_notecard(sub.id, "note").await;

    let before = app
        .request("GET", &app.category_path(&docs.id.to_string()), None)
        .await;
    let before_version = before.body["version"].as_i64().unwrap();

    let path = format!("{}/children", app.category_path(&docs.id.to_string()));
    let response = app.request("DELETE", &path, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["_updated_category_versions"][docs.id.to_string()],
        json!(before_version + 1)
    );
}

#[tokio::test]
async fn test_move_category_reports_both_parent_versions() {
    let app = TestApp::new();
    let src = app.add_folder(app.root.id, "Src").await;
    let dst = app.add_folder(app.root.id, "Dst").await;
    let payload = app.add_folder(src.id, "Payload").await;

    let response = app
        .request_to(
            "MOVE",
            &app.category_path(&payload.id.to_string()),
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
async fn test_move_to_unknown_destination_not_found() {
    let app = TestApp::new();
    let payload = app.add_folder(app.root.id, "Payload").await;

    let response = app
        .request_to(
            "MOVE",
            &app.category_path(&payload.id.to_string()),
            &app.category_url(&uuid::Uuid::new_v4().to_string()),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error_code"], json!(4));
}

#[tokio::test]
async fn test_move_destination_outside_base_rejected() {
    let app = TestApp::new();
    let payload = app.add_folder(app.root.id, "Payload").await;

    let response = app
        .request_to(
            "MOVE",
            &app.category_path(&payload.id.to_string()),
            "http://elsewhere.example/api/inventory/x/category/root",
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_copy_category_creates_fresh_identities() {
    let app = TestApp::new();
    let src = app.add_folder(app.root.id, "Src").await;
    let item = app.add_notecard(src.id, "note").await;
    let dst = app.add_folder(app.root.id, "Dst").await;

    let response = app
        .request_to(
            "COPY",
            &app.category_path(&src.id.to_string()),
            &app.category_url(&dst.id.to_string()),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let clone_id = response.body["category_id"].as_str().unwrap();
    assert_ne!(clone_id, src.id.to_string());
    assert_eq!(response.body["parent_id"], json!(dst.id.to_string()));
    let created_items = response.body["_created_items"].as_array().unwrap();
    assert_eq!(created_items.len(), 1);
    assert_ne!(created_items[0], json!(item.id.to_string()));

    // The source subtree is untouched.
    let response = app
        .request("GET", &app.category_path(&src.id.to_string()), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_put_links_replaces_link_set() {
    let app = TestApp::new();
    let target = app.add_notecard(app.root.id, "target").await;
    let stale = app.add_link(app.root.id, "stale", target.id).await;

    let body = json!([
        { "linked_id": target.id.to_string(), "name": "fresh", "type": 24 },
        { "linked_id": uuid::Uuid::new_v4().to_string(), "name": "dangling", "type": 24 },
    ]);
    let path = format!("{}/links", app.category_path("root"));
    let response = app.request("PUT", &path, Some(body)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["_created_items"].as_array().unwrap().len(), 1);
    assert_eq!(
        response.body["_category_items_removed"][0],
        json!(stale.id.to_string())
    );
    let links = response.body["_embedded"]["links"].as_object().unwrap();
    let fresh = links.values().next().unwrap();
    assert_eq!(
        fresh["_embedded"]["item"]["item_id"],
        json!(target.id.to_string())
    );
}

#[tokio::test]
async fn test_unsupported_method_rejected() {
    let app = TestApp::new();

    let response = app
        .request("PUT", &app.category_path("root"), Some(json!({})))
        .await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.body["error_code"], json!(7));
}

#[tokio::test]
async fn test_wrong_content_type_rejected() {
    let app = TestApp::new();

    let response = app
        .request_raw("POST", &app.category_path("root"), "text/plain", "{}")
        .await;

    assert_eq!(response.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(response.body["error_code"], json!(17));
}
