use serde_json::json;
use thinkific_client::model::options::Options;

#[test]
fn test_options_serialize_in_insertion_order() {
    let options = Options::new()
        .with("user_id", 5)
        .with("course_id", 9)
        .with("activated_at", "2026-01-01T00:00:00Z");

    assert_eq!(
        serde_json::to_string(&options).unwrap(),
        r#"{"user_id":5,"course_id":9,"activated_at":"2026-01-01T00:00:00Z"}"#
    );
}

#[test]
fn test_merge_last_write_wins() {
    let mut base = Options::new().with("query[user_id]", "5").with("page", 2);
    base.merge(Options::new().with("page", 3).with("limit", 10));

    assert_eq!(base.get("page"), Some(&json!(3)));
    assert_eq!(base.get("limit"), Some(&json!(10)));
    assert_eq!(base.get("query[user_id]"), Some(&json!("5")));
}

#[test]
fn test_merged_is_chainable() {
    let options = Options::new()
        .with("a", 1)
        .merged(Options::new().with("a", 2))
        .merged(Options::new().with("b", 3));

    assert_eq!(options, Options::new().with("a", 2).with("b", 3));
}

#[test]
fn test_query_pairs_for_scalars() {
    let options = Options::new()
        .with("query[email]", "a@b.com")
        .with("page", 1)
        .with("ratio", 0.5)
        .with("active", false);

    assert_eq!(
        options.to_query_pairs(),
        vec![
            ("query[email]".to_string(), "a@b.com".to_string()),
            ("page".to_string(), "1".to_string()),
            ("ratio".to_string(), "0.5".to_string()),
            ("active".to_string(), "0".to_string()),
        ]
    );
}

#[test]
fn test_collect_from_pairs() {
    let options: Options = vec![("a", json!(1)), ("b", json!("x"))].into_iter().collect();
    assert_eq!(options.len(), 2);
    assert!(options.contains_key("b"));
}

#[test]
fn test_try_from_null_is_empty() {
    let options = Options::try_from(serde_json::Value::Null).unwrap();
    assert!(options.is_empty());
}
