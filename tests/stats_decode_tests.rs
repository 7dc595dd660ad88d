use reqwest::StatusCode;
use serde_json::json;

use teamrank::stats::client::decode_envelope;
use teamrank::stats::models::{Member, MemberActivity, podium_order};
use teamrank::stats::{Endpoint, FetchError};

fn members_body() -> String {
    json!({
        "status": true,
        "path": "/stat/member-performance",
        "message": "success",
        "statusCode": 200,
        "data": [
            { "username": "namphph", "avatar": "https://example.com/a.png", "performance": 174, "commitCount": 0, "prCount": 87, "reviewCount": 0 },
            { "username": "QuangSangFC", "performance": 150, "commitCount": 0, "prCount": 75, "reviewCount": 0 },
            { "username": "hantk2010", "performance": 68, "commitCount": 0, "prCount": 34, "reviewCount": 0 },
            { "username": "TheAnh533", "performance": 62, "commitCount": 0, "prCount": 31, "reviewCount": 0 }
        ],
        "timestamp": "2025-08-25 13:59:50"
    })
    .to_string()
}

fn activity_body() -> String {
    json!({
        "status": true,
        "data": {
            "username": "KietFC",
            "from": "28/07/2025",
            "to": "25/08/2025",
            "commits": [{
                "id": "c1",
                "sha": "0123456789abcdef",
                "repo": "web",
                "owner": "foxcode",
                "author_name": "Kiet",
                "author_email": "kiet@example.com",
                "date": "2025-08-01T09:15:00Z",
                "message": "Fix login redirect",
                "commit_raw": { "html_url": "https://github.com/foxcode/web/commit/0123456" }
            }],
            "pull_requests": [{
                "pr_id": "42",
                "repo": "web",
                "owner": "foxcode",
                "pr_raw": {
                    "url": "https://api.github.com/repos/foxcode/web/pulls/42",
                    "html_url": "https://github.com/foxcode/web/pull/42",
                    "title": "Add rankings page",
                    "state": "closed",
                    "created_at": "2025-08-02T10:00:00Z",
                    "updated_at": "2025-08-03T10:00:00Z",
                    "closed_at": "2025-08-03T10:00:00Z",
                    "merged_at": null
                }
            }]
        }
    })
    .to_string()
}

#[test]
fn test_decode_member_performance() {
    let members: Vec<Member> =
        decode_envelope(Endpoint::MemberPerformance, StatusCode::OK, &members_body()).unwrap();
    assert_eq!(members.len(), 4);
    assert_eq!(members[0].username, "namphph");
    assert_eq!(members[0].avatar.as_deref(), Some("https://example.com/a.png"));
    assert_eq!(members[0].performance, 174.0);
    assert_eq!(members[1].pr_count, 75);
    assert!(members[1].avatar.is_none());
}

#[test]
fn test_decode_member_activity_without_reviews() {
    let activity: MemberActivity =
        decode_envelope(Endpoint::MemberActivities, StatusCode::OK, &activity_body()).unwrap();
    assert_eq!(activity.username, "KietFC");
    assert_eq!(activity.commits.len(), 1);
    assert_eq!(activity.commits[0].short_sha(), "0123456");
    assert_eq!(
        activity.commits[0].url(),
        "https://github.com/foxcode/web/commit/0123456"
    );
    assert_eq!(activity.pull_requests[0].pr_raw.title, "Add rankings page");
    assert!(activity.pull_requests[0].is_closed());
    assert!(activity.reviews.is_empty());
}

#[test]
fn test_http_failure_message_names_endpoint() {
    let err = decode_envelope::<Vec<Member>>(
        Endpoint::MemberPerformance,
        StatusCode::INTERNAL_SERVER_ERROR,
        "",
    )
    .unwrap_err();
    assert!(matches!(err, FetchError::Http { .. }));
    assert_eq!(err.to_string(), "Failed to fetch member performance data");

    let err = decode_envelope::<MemberActivity>(
        Endpoint::MemberActivities,
        StatusCode::NOT_FOUND,
        &activity_body(),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch member activity data");
}

#[test]
fn test_false_status_is_format_error() {
    let err = decode_envelope::<Vec<Member>>(
        Endpoint::MemberPerformance,
        StatusCode::OK,
        r#"{"status": false}"#,
    )
    .unwrap_err();
    assert!(matches!(err, FetchError::Format));
    assert_eq!(err.to_string(), "Invalid response format");
}

#[test]
fn test_missing_data_is_format_error() {
    let err = decode_envelope::<Vec<Member>>(
        Endpoint::MemberPerformance,
        StatusCode::OK,
        r#"{"status": true, "message": "nothing"}"#,
    )
    .unwrap_err();
    assert!(matches!(err, FetchError::Format));
}

#[test]
fn test_empty_list_data_is_accepted() {
    let members: Vec<Member> = decode_envelope(
        Endpoint::MemberPerformance,
        StatusCode::OK,
        r#"{"status": true, "data": []}"#,
    )
    .unwrap();
    assert!(members.is_empty());
}

#[test]
fn test_wrong_data_shape_is_format_error() {
    let err = decode_envelope::<Vec<Member>>(
        Endpoint::MemberPerformance,
        StatusCode::OK,
        r#"{"status": true, "data": {"username": "x"}}"#,
    )
    .unwrap_err();
    assert!(matches!(err, FetchError::Format));
}

#[test]
fn test_non_json_body_is_unknown_error() {
    let err =
        decode_envelope::<Vec<Member>>(Endpoint::MemberPerformance, StatusCode::OK, "<html>")
            .unwrap_err();
    assert!(matches!(err, FetchError::Unknown(_)));
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_unknown_error_without_message() {
    assert_eq!(
        FetchError::Unknown(String::new()).to_string(),
        "An error occurred"
    );
}

fn member(name: &str, performance: f64) -> Member {
    Member {
        username: name.into(),
        avatar: None,
        performance,
        commit_count: 0,
        pr_count: 0,
        review_count: 0,
    }
}

#[test]
fn test_podium_order_second_first_third() {
    let members = vec![
        member("a", 10.0),
        member("b", 8.0),
        member("c", 6.0),
        member("d", 4.0),
    ];
    let names: Vec<&str> = podium_order(&members)
        .iter()
        .map(|m| m.username.as_str())
        .collect();
    assert_eq!(names, vec!["b", "a", "c"]);
}

#[test]
fn test_podium_with_fewer_than_three() {
    let members = vec![member("a", 10.0), member("b", 8.0)];
    let names: Vec<&str> = podium_order(&members)
        .iter()
        .map(|m| m.username.as_str())
        .collect();
    assert_eq!(names, vec!["b", "a"]);

    assert!(podium_order(&[]).is_empty());
}
