use appctl::{MemorySink, OutputFormat, ReqwestTransport, ViewEngine, ViewError, ViewOptions};
use httpmock::prelude::*;
use serde_json::{json, Value};

const APP_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

fn options(args: &[&str], show_all: bool, format: &str) -> ViewOptions {
    ViewOptions::new(args.iter().map(|a| a.to_string()).collect(), show_all, format).unwrap()
}

fn engine(server: &MockServer) -> ViewEngine<ReqwestTransport> {
    let transport = ReqwestTransport::new(Some("test-token".to_string()), None).unwrap();
    ViewEngine::new(server.base_url(), transport)
}

#[tokio::test]
async fn test_view_by_id_renders_document() {
    let server = MockServer::start();
    let document = json!({
        "id": APP_ID,
        "name": "bookinfo",
        "application_file": "name: bookinfo\nservices: {}"
    });

    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/api/application/{}", APP_ID))
            .header("Authorization", "Bearer test-token");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(document.clone());
    });

    let mut sink = MemorySink::new();
    let emitted = engine(&server)
        .run(&options(&[APP_ID], false, "json"), &mut sink)
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(emitted, 1);
    assert_eq!(sink.blocks()[0], serde_json::to_string_pretty(&document).unwrap());
}

#[tokio::test]
async fn test_view_by_id_defaults_to_yaml() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(format!("/api/application/{}", APP_ID));
        then.status(200).json_body(json!({"owner": "mesh", "name": "bookinfo"}));
    });

    let mut sink = MemorySink::new();
    let options = ViewOptions {
        args: vec![APP_ID.to_string()],
        show_all: false,
        format: OutputFormat::default(),
    };
    engine(&server).run(&options, &mut sink).await.unwrap();

    assert_eq!(sink.blocks(), ["name: bookinfo\nowner: mesh\n"]);
}

#[tokio::test]
async fn test_view_all_renders_wrapper() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/application")
            .query_param("page_size", "10000");
        then.status(200).json_body(json!({
            "page": 0,
            "page_size": 10000,
            "total_count": 1,
            "applications": [{"name": "x"}]
        }));
    });

    let mut sink = MemorySink::new();
    let emitted = engine(&server)
        .run(&options(&[], true, "json"), &mut sink)
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(emitted, 1);
    assert_eq!(
        sink.blocks()[0],
        serde_json::to_string_pretty(&json!({"applications": [{"name": "x"}]})).unwrap()
    );
}

#[tokio::test]
async fn test_view_by_name_fans_out_every_match() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/application")
            .query_param("search", "bookinfo");
        then.status(200).json_body(json!({
            "total_count": 2,
            "applications": [{"name": "a"}, {"name": "b"}]
        }));
    });

    let mut sink = MemorySink::new();
    let emitted = engine(&server)
        .run(&options(&["bookinfo"], false, "json"), &mut sink)
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(emitted, 2);
    let blocks: Vec<Value> = sink
        .into_blocks()
        .iter()
        .map(|b| serde_json::from_str(b).unwrap())
        .collect();
    assert_eq!(blocks, vec![json!({"name": "a"}), json!({"name": "b"})]);
}

#[tokio::test]
async fn test_view_by_multi_word_name_joins_with_encoded_space() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/application")
            .query_param("search", "book info");
        then.status(200).json_body(json!({
            "total_count": 1,
            "applications": [{"name": "book info"}]
        }));
    });

    let mut sink = MemorySink::new();
    engine(&server)
        .run(&options(&["book", "info"], false, "yaml"), &mut sink)
        .await
        .unwrap();

    api_mock.assert();
    assert_eq!(sink.blocks(), ["name: book info\n"]);
}

#[tokio::test]
async fn test_view_by_name_without_results() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/application");
        then.status(200)
            .json_body(json!({"total_count": 0, "applications": []}));
    });

    let mut sink = MemorySink::new();
    let result = engine(&server)
        .run(&options(&["ghost"], false, "yaml"), &mut sink)
        .await;

    assert!(matches!(result, Err(ViewError::NoMatch)));
    assert!(sink.blocks().is_empty());
}

#[tokio::test]
async fn test_view_by_name_count_without_records_fails() {
    for body in [
        json!({"total_count": 1, "applications": null}),
        json!({"total_count": 3, "applications": []}),
    ] {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/application")
                .query_param("search", "bookinfo");
            then.status(200).json_body(body);
        });

        let mut sink = MemorySink::new();
        let result = engine(&server)
            .run(&options(&["bookinfo"], false, "json"), &mut sink)
            .await;

        assert!(matches!(result, Err(ViewError::MalformedResponse { .. })));
        assert!(sink.blocks().is_empty());
    }
}

#[tokio::test]
async fn test_non_200_is_reported_as_unexpected_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(format!("/api/application/{}", APP_ID));
        then.status(500).body("internal error");
    });

    let mut sink = MemorySink::new();
    let result = engine(&server)
        .run(&options(&[APP_ID], false, "json"), &mut sink)
        .await;

    assert!(matches!(result, Err(ViewError::UnexpectedStatus { code: 500 })));
    assert!(sink.blocks().is_empty());
}

#[tokio::test]
async fn test_malformed_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/application");
        then.status(200).body("<html>gateway</html>");
    });

    let mut sink = MemorySink::new();
    let result = engine(&server)
        .run(&options(&[], true, "json"), &mut sink)
        .await;

    assert!(matches!(result, Err(ViewError::MalformedResponse { .. })));
}

#[tokio::test]
async fn test_conflicting_selectors_never_reach_server() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(json!({"applications": []}));
    });

    let mut sink = MemorySink::new();
    let result = engine(&server)
        .run(&options(&["bookinfo"], true, "json"), &mut sink)
        .await;

    assert!(matches!(result, Err(ViewError::ConflictingSelectors)));
    api_mock.assert_hits(0);
}

#[tokio::test]
async fn test_missing_selector_never_reaches_server() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(json!({"applications": []}));
    });

    let mut sink = MemorySink::new();
    let result = engine(&server)
        .run(&options(&[], false, "yaml"), &mut sink)
        .await;

    assert!(matches!(result, Err(ViewError::MissingSelector)));
    api_mock.assert_hits(0);
}

#[test]
fn test_invalid_format_rejected_for_every_mode() {
    for (args, show_all) in [(vec![], true), (vec![APP_ID], false), (vec!["bookinfo"], false)] {
        let result = ViewOptions::new(
            args.iter().map(|a: &&str| a.to_string()).collect(),
            show_all,
            "xml",
        );
        assert!(matches!(result, Err(ViewError::InvalidFormat { .. })));
    }
}
