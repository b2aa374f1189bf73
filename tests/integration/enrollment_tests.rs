// Enrollment service against a mock Thinkific server

use crate::common::{self, TEST_API_KEY, TEST_SUBDOMAIN};
use assert_json_diff::assert_json_eq;
use mockito::{Matcher, Server};
use serde_json::json;
use thinkific_client::prelude::*;

#[tokio::test]
async fn test_list_enrollments() {
    let mut server = Server::new_async().await;
    let body = json!({
        "items": [{"id": 1, "user_id": 5}, {"id": 2, "user_id": 6}],
        "meta": {"pagination": {"current_page": 1, "total_pages": 1, "total_items": 2}}
    });
    let mock = server
        .mock("GET", "/enrollments")
        .match_header("X-Auth-API-Key", TEST_API_KEY)
        .match_header("X-Auth-Subdomain", TEST_SUBDOMAIN)
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = common::create_test_client(&server.url());
    let page = client.enrollments().list(&Options::new()).await.unwrap();

    mock.assert_async().await;
    assert_json_eq!(serde_json::to_value(&page).unwrap(), body);
}

#[tokio::test]
async fn test_list_enrollments_with_paging() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/enrollments")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("limit".into(), "25".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"items": []}"#)
        .create_async()
        .await;

    let client = common::create_test_client(&server.url());
    let page = client
        .enrollments()
        .list(&Options::new().with("page", 2).with("limit", 25))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(page.items().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_create_enrollment() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/enrollments")
        .match_header("Content-Type", "application/json")
        .match_body(Matcher::Json(json!({
            "course_id": 3,
            "user_id": 5,
            "activated_at": "2026-10-18T00:00:00Z"
        })))
        .with_status(201)
        .with_body(r#"{"id": 99, "course_id": 3, "user_id": 5}"#)
        .create_async()
        .await;

    let client = common::create_test_client(&server.url());
    let created = client
        .enrollments()
        .create(
            &Options::new()
                .with("course_id", 3)
                .with("user_id", 5)
                .with("activated_at", "2026-10-18T00:00:00Z"),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(created.id(), Some(&json!(99)));
}

#[tokio::test]
async fn test_get_enrollment() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/enrollments/42")
        .with_status(200)
        .with_body(r#"{"id": 42, "user_email": "a@b.com", "expiry_date": "2027-01-01T00:00:00Z"}"#)
        .create_async()
        .await;

    let client = common::create_test_client(&server.url());
    let enrollment = client.enrollments().get("42").await.unwrap();

    mock.assert_async().await;
    assert_eq!(enrollment.user_email(), Some("a@b.com"));
    assert_eq!(enrollment.expiry_date(), Some("2027-01-01T00:00:00Z"));
}

#[tokio::test]
async fn test_get_missing_enrollment_is_not_found() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/enrollments/404")
        .with_status(404)
        .with_body(r#"{"error": "Record not found"}"#)
        .create_async()
        .await;

    let client = common::create_test_client(&server.url());
    let err = client.enrollments().get("404").await.unwrap_err();

    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn test_update_enrollment_without_content() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/enrollments/42")
        .match_body(Matcher::Json(json!({"email": "a@b.com"})))
        .with_status(204)
        .create_async()
        .await;

    let client = common::create_test_client(&server.url());
    let updated = client
        .enrollments()
        .update("42", &Options::new().with("email", "a@b.com"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(updated.is_none());
}

#[tokio::test]
async fn test_expire_enrollment_with_given_date() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/enrollments/42")
        .match_body(Matcher::Json(json!({"expiry_date": "2023-01-01T00:00:00+00:00"})))
        .with_status(204)
        .create_async()
        .await;

    let client = common::create_test_client(&server.url());
    client
        .enrollments()
        .expire("42", Some("2023-01-01T00:00:00+00:00"))
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_expire_enrollment_today() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/enrollments/42")
        .match_body(Matcher::Json(json!({"expiry_date": today_midnight_iso8601()})))
        .with_status(204)
        .create_async()
        .await;

    let client = common::create_test_client(&server.url());
    client.enrollments().expire("42", None).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_find_by_user_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/enrollments")
        .match_query(Matcher::UrlEncoded("query[user_id]".into(), "5".into()))
        .with_status(200)
        .with_body(r#"{"items": [{"id": 1}, {"id": 2}], "meta": {}}"#)
        .create_async()
        .await;

    let client = common::create_test_client(&server.url());
    let result = client
        .enrollments()
        .find_by(&FindByRequest::new("5"))
        .await
        .unwrap();

    mock.assert_async().await;
    let page = result.into_page().expect("expected the raw page");
    assert_eq!(page.items().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_find_single_by_email() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/enrollments")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query[email]".into(), "a@b.com".into()),
            Matcher::UrlEncoded("page".into(), "1".into()),
            Matcher::UrlEncoded("limit".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"items": [{"id": 1, "user_email": "a@b.com"}, {"id": 2}]}"#)
        .create_async()
        .await;

    let client = common::create_test_client(&server.url());
    let request = FindByRequest::new("a@b.com")
        .with_field("email")
        .with_options(Options::new().with("page", 3))
        .single();
    let found = client
        .enrollments()
        .find_by(&request)
        .await
        .unwrap()
        .into_enrollment()
        .expect("expected an enrollment");

    mock.assert_async().await;
    assert_eq!(found.id(), Some(&json!(1)));
}
