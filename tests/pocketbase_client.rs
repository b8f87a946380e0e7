//! PocketBase client integration tests
//!
//! Drives the REST wrapper against a local mock server: password auth,
//! collection CRUD, paging, the not-found-as-absent lookup and the like
//! create/delete flow.

use mockito::Matcher;
use pretty_assertions::assert_eq;
use serde_json::json;

use oblog::app::session;
use oblog::pocketbase::{Client, ClientError, LikeRecord, ListOptions, PostPayload, PostRecord};

fn user_json(id: &str, email: &str, name: &str) -> serde_json::Value {
    json!({"id": id, "email": email, "name": name})
}

#[test]
fn auth_with_password_saves_session() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/collections/users/auth-with-password")
        .match_body(Matcher::PartialJson(json!({
            "identity": "ana@example.com",
            "password": "password1",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "token": "jwt-token",
                "record": user_json("u1", "ana@example.com", "Ana"),
            })
            .to_string(),
        )
        .create();

    let client = Client::new(server.url());
    let auth = client
        .collection("users")
        .auth_with_password("ana@example.com", "password1")
        .unwrap();

    mock.assert();
    assert_eq!(auth.token, "jwt-token");
    assert_eq!(auth.record.name, "Ana");
    // The very next read of the store reflects the new session.
    assert!(client.auth_store().is_valid());
    assert_eq!(client.auth_store().token().as_deref(), Some("jwt-token"));
}

#[test]
fn auth_with_password_failure_leaves_store_empty() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/api/collections/users/auth-with-password")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(json!({"code": 400, "message": "Failed to authenticate.", "data": {}}).to_string())
        .create();

    let client = Client::new(server.url());
    let result = client
        .collection("users")
        .auth_with_password("ana@example.com", "wrong");

    match result {
        Err(ClientError::Api { status, message, .. }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Failed to authenticate.");
        }
        other => panic!("expected Api error, got {:?}", other.map(|a| a.token)),
    }
    assert!(!client.auth_store().is_valid());
}

#[test]
fn expired_session_is_cleared_on_401() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/collections/posts/records")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(json!({"code": 401, "message": "The request requires valid record authorization token to be set.", "data": {}}).to_string())
        .create();

    let client = Client::new(server.url());
    client.auth_store().save(
        "stale-token".to_string(),
        serde_json::from_value(user_json("u1", "ana@example.com", "Ana")).unwrap(),
    );

    let result = client
        .collection("posts")
        .get_list::<PostRecord>(1, 30, &ListOptions::new());

    assert!(result.is_err());
    assert!(!client.auth_store().is_valid());
}

#[test]
fn get_full_list_pages_until_exhausted() {
    let mut server = mockito::Server::new();
    let page1 = server
        .mock("GET", "/api/collections/posts/records")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("perPage".into(), "200".into()),
            Matcher::UrlEncoded("sort".into(), "-created".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "page": 1, "perPage": 200, "totalItems": 201, "totalPages": 2,
                "items": (0..200).map(|i| json!({"id": format!("p{}", i), "title": format!("Post {}", i)})).collect::<Vec<_>>(),
            })
            .to_string(),
        )
        .create();
    let page2 = server
        .mock("GET", "/api/collections/posts/records")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("perPage".into(), "200".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "page": 2, "perPage": 200, "totalItems": 201, "totalPages": 2,
                "items": [{"id": "p200", "title": "Post 200"}],
            })
            .to_string(),
        )
        .create();

    let client = Client::new(server.url());
    let posts = client
        .collection("posts")
        .get_full_list::<PostRecord>(&ListOptions::new().sort("-created"))
        .unwrap();

    page1.assert();
    page2.assert();
    assert_eq!(posts.len(), 201);
    assert_eq!(posts[200].id, "p200");
}

#[test]
fn get_first_list_item_maps_empty_to_not_found() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/collections/likes/records")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("perPage".into(), "1".into()),
            Matcher::UrlEncoded("filter".into(), "post=\"p1\" && user=\"u1\"".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({"page": 1, "perPage": 1, "totalItems": 0, "totalPages": 0, "items": []})
                .to_string(),
        )
        .create();

    let client = Client::new(server.url());
    let result = client
        .collection("likes")
        .get_first_list_item::<LikeRecord>("post=\"p1\" && user=\"u1\"");

    // Absence is a signal, not a failure.
    assert!(matches!(result, Err(ref e) if e.is_not_found()));
}

#[test]
fn get_first_list_item_returns_match() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/collections/likes/records")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "page": 1, "perPage": 1, "totalItems": 1, "totalPages": 1,
                "items": [{"id": "l1", "post": "p1", "user": "u1"}],
            })
            .to_string(),
        )
        .create();

    let client = Client::new(server.url());
    let like = client
        .collection("likes")
        .get_first_list_item::<LikeRecord>("post=\"p1\" && user=\"u1\"")
        .unwrap();
    assert_eq!(like.id, "l1");
}

#[test]
fn get_one_missing_record_is_not_found() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/collections/posts/records/missing")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(json!({"code": 404, "message": "The requested resource wasn't found.", "data": {}}).to_string())
        .create();

    let client = Client::new(server.url());
    let result = client
        .collection("posts")
        .get_one::<PostRecord>("missing", &ListOptions::new());
    assert!(matches!(result, Err(ClientError::NotFound)));
}

#[test]
fn like_toggle_creates_then_deletes_one_record() {
    let mut server = mockito::Server::new();
    let create = server
        .mock("POST", "/api/collections/likes/records")
        .match_body(Matcher::PartialJson(json!({"post": "p1", "user": "u1"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"id": "l1", "post": "p1", "user": "u1"}).to_string())
        .expect(1)
        .create();
    let delete = server
        .mock("DELETE", "/api/collections/likes/records/l1")
        .with_status(204)
        .expect(1)
        .create();

    let client = Client::new(server.url());
    let likes = client.collection("likes");

    let like: LikeRecord = likes
        .create(&json!({"post": "p1", "user": "u1"}))
        .unwrap();
    assert_eq!(like.id, "l1");
    likes.delete(&like.id).unwrap();

    create.assert();
    delete.assert();
}

#[test]
fn multipart_create_sends_fields_and_file() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/collections/posts/records")
        .match_header(
            "content-type",
            Matcher::Regex("multipart/form-data.*".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("Prvi post".to_string()),
            Matcher::Regex("naslovna.png".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "p1", "collectionId": "posts123", "title": "Prvi post",
                "content": "Sadržaj prvog posta", "author": "u1", "image": "naslovna.png",
            })
            .to_string(),
        )
        .create();

    let dir = tempfile::tempdir().unwrap();
    let image_path = dir.path().join("naslovna.png");
    std::fs::write(&image_path, b"not-really-a-png").unwrap();

    let payload = PostPayload {
        title: "Prvi post".to_string(),
        content: "Sadržaj prvog posta".to_string(),
        author: Some("u1".to_string()),
        category: None,
        image: Some((
            "naslovna.png".to_string(),
            std::fs::read(&image_path).unwrap(),
        )),
    };

    let client = Client::new(server.url());
    let post = client
        .collection("posts")
        .create_multipart::<PostRecord>(payload.into_form())
        .unwrap();

    mock.assert();
    assert_eq!(post.id, "p1");
    assert_eq!(post.image, "naslovna.png");
}

#[test]
fn update_sends_patch() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("PATCH", "/api/collections/posts/records/p1")
        .match_body(Matcher::PartialJson(json!({"title": "Novi naslov"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"id": "p1", "title": "Novi naslov"}).to_string())
        .create();

    let client = Client::new(server.url());
    let post: PostRecord = client
        .collection("posts")
        .update("p1", &json!({"title": "Novi naslov"}))
        .unwrap();

    mock.assert();
    assert_eq!(post.title, "Novi naslov");
}

#[test]
fn register_and_login_establishes_session() {
    let mut server = mockito::Server::new();
    let register = server
        .mock("POST", "/api/collections/users/records")
        .match_body(Matcher::PartialJson(json!({
            "email": "ana@example.com",
            "password": "password1",
            "passwordConfirm": "password1",
            "name": "Ana",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(user_json("u1", "ana@example.com", "Ana").to_string())
        .create();
    let login = server
        .mock("POST", "/api/collections/users/auth-with-password")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "token": "jwt-token",
                "record": user_json("u1", "ana@example.com", "Ana"),
            })
            .to_string(),
        )
        .create();

    let client = Client::new(server.url());
    let auth = session::register_and_login(
        &client,
        "ana@example.com",
        "password1",
        "password1",
        "Ana",
    )
    .unwrap();

    register.assert();
    login.assert();
    assert_eq!(auth.record.id, "u1");
    assert!(client.auth_store().is_valid());
}

#[test]
fn register_surfaces_email_field_message() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/api/collections/users/records")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "code": 400,
                "message": "Failed to create record.",
                "data": {
                    "email": {
                        "code": "validation_invalid_email",
                        "message": "The email is invalid or already in use."
                    }
                }
            })
            .to_string(),
        )
        .create();

    let client = Client::new(server.url());
    let result =
        session::register_and_login(&client, "ana@example.com", "password1", "password1", "Ana");

    assert_eq!(
        result.unwrap_err(),
        "The email is invalid or already in use."
    );
    assert!(!client.auth_store().is_valid());
}

#[test]
fn authed_requests_carry_the_token() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/collections/posts/records")
        .match_header("authorization", "jwt-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"id": "p1", "title": "Prvi post"}).to_string())
        .create();

    let client = Client::new(server.url());
    client.auth_store().save(
        "jwt-token".to_string(),
        serde_json::from_value(user_json("u1", "ana@example.com", "Ana")).unwrap(),
    );

    let _post: PostRecord = client
        .collection("posts")
        .create(&json!({"title": "Prvi post", "content": "Sadržaj prvog posta", "author": "u1"}))
        .unwrap();
    mock.assert();
}
