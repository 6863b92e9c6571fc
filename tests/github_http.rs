use chrono::{Duration, Utc};
use mockito::{Matcher, Server, ServerGuard};
use prshame::{Config, GitHubClient, Mode, ShameError, shame_stale_pull_requests};
use url::Url;

const ACCEPT: &str = "application/vnd.github.shadow-cat-preview+json";

fn config_for(server: &ServerGuard) -> Config {
    Config::new("owner/repo", "t0ken").with_api_url(Url::parse(&server.url()).unwrap())
}

fn pulls_body(prs: &[(u64, &str, Duration)]) -> String {
    let now = Utc::now();
    let prs: Vec<_> = prs
        .iter()
        .map(|(number, title, age)| {
            serde_json::json!({
                "number": number,
                "title": title,
                "created_at": (now - *age).to_rfc3339(),
                "state": "open",
            })
        })
        .collect();
    serde_json::Value::Array(prs).to_string()
}

#[tokio::test]
async fn test_lists_and_comments_with_auth_headers() {
    let mut server = Server::new_async().await;
    let list = server
        .mock("GET", "/repos/owner/repo/pulls")
        .match_header("accept", ACCEPT)
        .match_header("authorization", "token t0ken")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(pulls_body(&[
            (1, "New", Duration::days(2)),
            (2, "Old", Duration::days(10)),
            (3, "Newer", Duration::hours(5)),
        ]))
        .create_async()
        .await;
    let comment = server
        .mock("POST", "/repos/owner/repo/issues/2/comments")
        .match_header("accept", ACCEPT)
        .match_header("authorization", "token t0ken")
        .match_body(Matcher::Regex(r#"^\{"body":"this PR is 10 days old! "#.into()))
        .with_status(201)
        .create_async()
        .await;
    let other_comments = server
        .mock("POST", Matcher::Regex(r"^/repos/owner/repo/issues/[13]/comments$".into()))
        .expect(0)
        .create_async()
        .await;

    let config = config_for(&server);
    let client = GitHubClient::new(&config).unwrap();
    let shamings = shame_stale_pull_requests(&client, &config, Utc::now(), Mode::Post)
        .await
        .unwrap();

    assert_eq!(shamings.len(), 1);
    assert_eq!(shamings[0].number, 2);
    list.assert_async().await;
    comment.assert_async().await;
    other_comments.assert_async().await;
}

#[tokio::test]
async fn test_invalid_json_is_a_decode_error_and_posts_nothing() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/repos/owner/repo/pulls")
        .with_status(200)
        .with_body("this is not json")
        .create_async()
        .await;
    let comments = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let config = config_for(&server);
    let client = GitHubClient::new(&config).unwrap();
    let err = shame_stale_pull_requests(&client, &config, Utc::now(), Mode::Post)
        .await
        .unwrap_err();

    assert!(matches!(err, ShameError::Decode { .. }));
    comments.assert_async().await;
}

#[tokio::test]
async fn test_bad_credentials_listing_is_a_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/repos/owner/repo/pulls")
        .with_status(401)
        .with_body(r#"{"message":"Bad credentials"}"#)
        .create_async()
        .await;

    let config = config_for(&server);
    let client = GitHubClient::new(&config).unwrap();
    let err = shame_stale_pull_requests(&client, &config, Utc::now(), Mode::Post)
        .await
        .unwrap_err();

    match err {
        ShameError::Decode { status, .. } => assert_eq!(status.as_u16(), 401),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_created_status_stops_before_next_pr() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/repos/owner/repo/pulls")
        .with_status(200)
        .with_body(pulls_body(&[
            (4, "Old", Duration::days(20)),
            (5, "Older", Duration::days(40)),
        ]))
        .create_async()
        .await;
    let first = server
        .mock("POST", "/repos/owner/repo/issues/4/comments")
        .with_status(200)
        .expect(1)
        .create_async()
        .await;
    let second = server
        .mock("POST", "/repos/owner/repo/issues/5/comments")
        .with_status(201)
        .expect(0)
        .create_async()
        .await;

    let config = config_for(&server);
    let client = GitHubClient::new(&config).unwrap();
    let err = shame_stale_pull_requests(&client, &config, Utc::now(), Mode::Post)
        .await
        .unwrap_err();

    match &err {
        ShameError::Authorization { number, status } => {
            assert_eq!(*number, 4);
            assert_eq!(status.as_u16(), 200);
        }
        other => panic!("expected authorization error, got {other:?}"),
    }
    assert!(err.to_string().contains("GITHUB_TOKEN"));
    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_error() {
    // Nothing listens on port 1.
    let config =
        Config::new("owner/repo", "t0ken").with_api_url(Url::parse("http://127.0.0.1:1").unwrap());

    let client = GitHubClient::new(&config).unwrap();
    let err = shame_stale_pull_requests(&client, &config, Utc::now(), Mode::Post)
        .await
        .unwrap_err();

    assert!(matches!(err, ShameError::Transport(_)));
}
