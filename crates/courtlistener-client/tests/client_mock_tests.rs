//! Mock-based client tests using wiremock.
//!
//! These tests run the real reqwest transport against a mocked CourtListener API.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use courtlistener_client::{ClientError, Config, CourtListenerClient, QueryParams, ReqwestTransport};

fn setup_client(mock_server: &MockServer) -> CourtListenerClient {
    let config = Config::for_testing(&mock_server.uri());
    CourtListenerClient::new(config).unwrap()
}

fn page(count: serde_json::Value, next: Option<&str>, results: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "count": count,
        "next": next,
        "previous": null,
        "results": results
    })
}

fn sample_docket(id: u64, case_name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "absolute_url": format!("/docket/{id}/sample/"),
        "case_name": case_name,
        "court_id": "scotus",
        "docket_number": "21-476",
        "date_filed": "2021-09-24",
        "date_terminated": null,
        "clusters": [],
        "audio_files": [],
        "panel": [],
        "tags": []
    })
}

// =============================================================================
// Dockets
// =============================================================================

#[tokio::test]
async fn test_dockets_with_url_count() {
    let mock_server = MockServer::start().await;
    let next = format!("{}/api/rest/v4/dockets/?court=scotus&cursor=cD0xMjM%3D", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/api/rest/v4/dockets/"))
        .and(query_param("court", "scotus"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            json!("https://www.courtlistener.com/api/rest/v4/dockets/?count=on&court=scotus"),
            Some(next.as_str()),
            vec![sample_docket(1, "303 Creative LLC v. Elenis"), sample_docket(2, "Moore v. Harper")],
        )))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let result = client.dockets(&QueryParams::from([("court", "scotus")])).await.unwrap();

    assert_eq!(result.count, 0_u64);
    assert!(!result.count.is_known());
    assert_eq!(result.len(), 2);
    assert_eq!(result.results[0].case_name, "303 Creative LLC v. Elenis");
    assert_eq!(result.next_cursor().as_deref(), Some("cD0xMjM="));
}

#[tokio::test]
async fn test_dockets_follow_cursor_manually() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/rest/v4/dockets/"))
        .and(query_param("cursor", "cD0xMjM="))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            json!(3),
            None,
            vec![sample_docket(3, "Loper Bright Enterprises v. Raimondo")],
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let result = client.dockets(&QueryParams::new().with_cursor("cD0xMjM=")).await.unwrap();

    assert_eq!(result.count.known(), Some(3));
    assert!(!result.has_next());
}

#[tokio::test]
async fn test_get_docket_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/rest/v4/dockets/65663213/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_docket(65_663_213, "Trump v. Anderson")))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let docket = client.get_docket(65_663_213).await.unwrap();

    assert_eq!(docket.id, 65_663_213);
    assert_eq!(docket.case_name_or_default(), "Trump v. Anderson");
}

// =============================================================================
// Opinions
// =============================================================================

#[tokio::test]
async fn test_opinions_with_numeric_count() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/rest/v4/opinions/"))
        .and(query_param("cluster", "6405013"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            json!(1),
            None,
            vec![json!({
                "id": 6_405_013,
                "cluster": "https://www.courtlistener.com/api/rest/v4/clusters/6405013/",
                "author_str": "Alito",
                "per_curiam": false,
                "type": "020lead",
                "cites": [108_713, 112_241]
            })],
        )))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let result = client.opinions(&QueryParams::from([("cluster", "6405013")])).await.unwrap();

    assert_eq!(result.count, 1_u64);
    let opinion = &result.results[0];
    assert_eq!(opinion.author_str.as_deref(), Some("Alito"));
    assert!(opinion.is_cited());
}

#[tokio::test]
async fn test_get_opinion_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/rest/v4/opinions/999/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.get_opinion(999).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    match err {
        ClientError::UnexpectedStatus { endpoint, body, .. } => {
            assert_eq!(endpoint, "opinions/999");
            assert!(body.contains("Not found."));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_with_string_count() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/rest/v4/search/"))
        .and(query_param("q", "qualified immunity"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            json!("42"),
            None,
            vec![json!({
                "caseName": "Pearson v. Callahan",
                "cluster_id": 145_853,
                "docket_id": 772_002,
                "citation": ["555 U.S. 223"],
                "opinions": [{"id": 145_853, "snippet": "qualified immunity", "cites": []}]
            })],
        )))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let result = client.search("qualified immunity").await.unwrap();

    assert_eq!(result.count.known(), Some(42));
    assert_eq!(result.results[0].case_name_or_default(), "Pearson v. Callahan");
    assert_eq!(result.results[0].opinion_count(), 1);
}

#[tokio::test]
async fn test_search_with_type_and_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/rest/v4/search/"))
        .and(query_param("type", "r"))
        .and(query_param("order_by", "dateFiled desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(json!(0), None, vec![])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let params = QueryParams::new()
        .with("q", "bankruptcy")
        .with("type", courtlistener_client::models::SearchType::Recap.as_param())
        .with("order_by", "dateFiled desc");
    let result = client.search_with_params(&params).await.unwrap();

    assert!(result.is_empty());
    assert!(result.count.is_known());
}

// =============================================================================
// Originating court information
// =============================================================================

#[tokio::test]
async fn test_originating_court_information() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/rest/v4/originating-court-information/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            json!(2),
            None,
            vec![
                json!({"id": 1, "docket_number": "1:20-cv-1", "date_filed_noa": "2021-01-04"}),
                json!({"id": 2, "docket_number": "1:20-cv-2"}),
            ],
        )))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let result = client.originating_court_information(&QueryParams::new()).await.unwrap();

    assert_eq!(result.count, 2_u64);
    let numbers: Vec<_> = result.iter().filter_map(|r| r.docket_number.as_deref()).collect();
    assert_eq!(numbers, ["1:20-cv-1", "1:20-cv-2"]);
}

#[tokio::test]
async fn test_get_originating_court_information_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/rest/v4/originating-court-information/7/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7, "court_reporter": "J. Doe"})))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let info = client.get_originating_court_information(7).await.unwrap();

    assert_eq!(info.court_reporter.as_deref(), Some("J. Doe"));
}

// =============================================================================
// Headers
// =============================================================================

#[tokio::test]
async fn test_email_header_sent_when_configured() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/rest/v4/dockets/"))
        .and(header("X-User-Email", "clerk@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(json!(0), None, vec![])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri()).with_email("clerk@example.com");
    let client = CourtListenerClient::new(config).unwrap();

    client.dockets(&QueryParams::new()).await.unwrap();
}

#[tokio::test]
async fn test_email_header_omitted_when_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/rest/v4/dockets/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(json!(0), None, vec![])))
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri()).with_email("");
    let client = CourtListenerClient::new(config).unwrap();
    client.dockets(&QueryParams::new()).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("x-user-email").is_none());
}

#[tokio::test]
async fn test_custom_reqwest_client_is_used() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/rest/v4/opinions/"))
        .and(header("User-Agent", "docket-watch/1.0"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(json!(0), None, vec![])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let http = reqwest::Client::builder().user_agent("docket-watch/1.0").build().unwrap();
    let transport = ReqwestTransport::from_client(http);
    let client = CourtListenerClient::with_transport(Config::for_testing(&mock_server.uri()), transport);

    let result = client.opinions(&QueryParams::new()).await.unwrap();
    assert!(result.is_empty());
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn test_server_error_carries_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/rest/v4/search/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.search("anything").await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_malformed_json_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/rest/v4/opinions/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ invalid json here"))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.opinions(&QueryParams::new()).await.unwrap_err();

    assert!(err.is_parse());
}

#[tokio::test]
async fn test_unparseable_count_fails_whole_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/rest/v4/dockets/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            json!("about a dozen"),
            None,
            vec![sample_docket(1, "Valid docket")],
        )))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.dockets(&QueryParams::new()).await.unwrap_err();

    assert!(err.is_parse());
    assert!(err.to_string().contains("about a dozen"));
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let client = CourtListenerClient::new(Config::for_testing(&uri)).unwrap();
    let err = client.dockets(&QueryParams::new()).await.unwrap_err();

    assert!(matches!(err, ClientError::Http(_)));
    assert_eq!(err.status(), None);
}
