//! HTTP tests for the repository-browsing endpoints, GitHub stubbed by wiremock.

use actix_web::{test, App};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::handlers::configure_repo_routes;
use crate::handlers::test_support::test_state;

#[actix_web::test]
async fn github_backed_endpoints_without_auth_header_are_401() {
    let state = test_state("http://unused", "http://unused", "http://unused");
    let app = test::init_service(
        App::new()
            .app_data(state)
            .configure(configure_repo_routes),
    )
    .await;

    for uri in ["/repos/", "/files/u1/r1/", "/files/u1/r1/src/a.py"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 401, "expected 401 for {uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Authorization header missing");
    }
}

#[actix_web::test]
async fn malformed_auth_header_is_401() {
    let state = test_state("http://unused", "http://unused", "http://unused");
    let app = test::init_service(
        App::new()
            .app_data(state)
            .configure(configure_repo_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/repos/")
        .insert_header(("Authorization", "token t0k"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401);
}

#[actix_web::test]
async fn repo_list_projects_name_and_owner_login() {
    let github = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/repos"))
        .and(header("Authorization", "token t0k"))
        .and(header("Accept", "application/vnd.github.v3+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "r1", "owner": {"login": "u1"}, "private": false, "stargazers_count": 7},
            {"name": "r2", "owner": {"login": "u1"}, "private": true}
        ])))
        .mount(&github)
        .await;

    let state = test_state(&github.uri(), "http://unused", "http://unused");
    let app = test::init_service(
        App::new()
            .app_data(state)
            .configure(configure_repo_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/repos/")
        .insert_header(("Authorization", "Bearer t0k"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!([
            {"name": "r1", "owner": "u1"},
            {"name": "r2", "owner": "u1"}
        ])
    );
}

#[actix_web::test]
async fn repo_list_upstream_error_is_500_with_error_body() {
    let github = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/repos"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&github)
        .await;

    let state = test_state(&github.uri(), "http://unused", "http://unused");
    let app = test::init_service(
        App::new()
            .app_data(state)
            .configure(configure_repo_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/repos/")
        .insert_header(("Authorization", "Bearer t0k"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 500);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn file_tree_relays_name_path_and_type() {
    let github = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/u1/r1/contents/"))
        .and(header("Authorization", "token t0k"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "a.py", "path": "a.py", "type": "file", "size": 120, "sha": "abc"},
            {"name": "src", "path": "src", "type": "dir"}
        ])))
        .mount(&github)
        .await;

    let state = test_state(&github.uri(), "http://unused", "http://unused");
    let app = test::init_service(
        App::new()
            .app_data(state)
            .configure(configure_repo_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/files/u1/r1/")
        .insert_header(("Authorization", "Bearer t0k"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!([
            {"name": "a.py", "path": "a.py", "type": "file"},
            {"name": "src", "path": "src", "type": "dir"}
        ])
    );
}

#[actix_web::test]
async fn file_path_with_slashes_routes_to_content_fetcher_verbatim() {
    let github = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/u1/r1/contents/src/util/helper.py"))
        .and(header("Accept", "application/vnd.github.v3.raw"))
        .and(header("Authorization", "token t0k"))
        .respond_with(ResponseTemplate::new(200).set_body_string("def helper():\n    return 1\n"))
        .mount(&github)
        .await;

    let state = test_state(&github.uri(), "http://unused", "http://unused");
    let app = test::init_service(
        App::new()
            .app_data(state)
            .configure(configure_repo_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/files/u1/r1/src/util/helper.py")
        .insert_header(("Authorization", "Bearer t0k"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["content"], "def helper():\n    return 1\n");
}

#[actix_web::test]
async fn missing_file_is_500_with_error_body() {
    let github = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/u1/r1/contents/nope.py"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&github)
        .await;

    let state = test_state(&github.uri(), "http://unused", "http://unused");
    let app = test::init_service(
        App::new()
            .app_data(state)
            .configure(configure_repo_routes),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/files/u1/r1/nope.py")
        .insert_header(("Authorization", "Bearer t0k"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 500);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}
