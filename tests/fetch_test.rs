#![cfg(feature = "fetch")]

use rs_index_tickers::{Config, Error, Fetcher, Source};
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher() -> Fetcher {
    Fetcher::new(&Config::default()).expect("client")
}

fn page_url(server: &MockServer, page: &str) -> Url {
    Url::parse(&format!("{}/{page}", server.uri())).expect("url")
}

#[tokio::test]
async fn fetched_page_feeds_the_extractor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sp500"))
        .and(header("user-agent", "Mozilla/5.0"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(include_str!("fixtures/sp500.html")),
        )
        .mount(&server)
        .await;

    let doc = fetcher().fetch(&page_url(&server, "sp500")).await.expect("fetch");
    let symbols = Source::Sp500.extractor().extract(&doc);
    assert_eq!(symbols.to_strings(), vec!["AAPL", "AOS", "MMM", "MSFT"]);
}

#[tokio::test]
async fn header_charset_is_used_for_decoding() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/latin1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=windows-1252")
                .set_body_bytes(b"<p>Soci\xE9t\xE9 G\xE9n\xE9rale</p>".to_vec()),
        )
        .mount(&server)
        .await;

    let doc = fetcher().fetch(&page_url(&server, "latin1")).await.expect("fetch");
    assert!(doc.raw().contains("Société Générale"));
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = fetcher().fetch(&page_url(&server, "gone")).await.err();
    match err {
        Some(Error::Http { url, reason }) => {
            assert!(url.ends_with("/gone"));
            assert!(reason.contains("404"));
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn custom_user_agent_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", "tickers-test/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"<i data-symbol="IBM"></i>"#))
        .mount(&server)
        .await;

    let config = Config {
        user_agent: "tickers-test/0.1".to_string(),
        ..Config::default()
    };
    let doc = Fetcher::new(&config)
        .expect("client")
        .fetch(&page_url(&server, "any"))
        .await
        .expect("fetch");
    assert_eq!(Source::Nasdaq100.extractor().extract(&doc).to_strings(), vec!["IBM"]);
}
