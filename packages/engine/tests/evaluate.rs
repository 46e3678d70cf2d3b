mod support;

use support::seeded_session;

const FIXTURE: &str = "CREATE TABLE t(id int); INSERT INTO t VALUES (1),(2);";

#[tokio::test]
async fn identical_queries_pass() {
    let mut session = seeded_session(FIXTURE).await;
    let verdict = session
        .evaluate("SELECT id FROM t ORDER BY id;", "SELECT id FROM t ORDER BY id;")
        .await
        .expect("engine should be up");

    assert!(verdict.passed, "{}", verdict.message);
    assert_eq!(verdict.user_row_count, 2);
    assert_eq!(verdict.expected_row_count, 2);
    assert!(verdict.differences.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn wrong_row_order_fails() {
    let mut session = seeded_session(FIXTURE).await;
    let verdict = session
        .evaluate(
            "SELECT id FROM t ORDER BY id DESC;",
            "SELECT id FROM t ORDER BY id;",
        )
        .await
        .expect("engine should be up");

    assert!(!verdict.passed);
    assert_eq!(
        verdict.differences,
        Some(vec![
            r#"Row 1: Got {"id":2}, Expected {"id":1}"#.to_string(),
            r#"Row 2: Got {"id":1}, Expected {"id":2}"#.to_string(),
        ])
    );
}

#[tokio::test]
async fn candidate_error_is_reported_first() {
    let mut session = seeded_session(FIXTURE).await;
    let verdict = session
        .evaluate(
            "SELECT abs(-9223372036854775807 - 1);",
            "SELECT id FROM t ORDER BY id;",
        )
        .await
        .expect("engine should be up");

    assert!(!verdict.passed);
    assert!(
        verdict.message.starts_with("candidate query error:"),
        "{}",
        verdict.message
    );
    assert_eq!(verdict.user_row_count, 0);
    assert_eq!(verdict.expected_row_count, 0);
}

#[tokio::test]
async fn reference_error_is_worded_as_authoring_bug() {
    let mut session = seeded_session(FIXTURE).await;
    let verdict = session
        .evaluate("SELECT id FROM t;", "SELECT id FROM missing_table;")
        .await
        .expect("engine should be up");

    assert!(!verdict.passed);
    assert!(verdict.message.starts_with("reference solution error:"));
    assert!(verdict.message.contains("missing_table"));
    assert_eq!(verdict.user_row_count, 2);
    assert_eq!(verdict.expected_row_count, 0);
}

#[tokio::test]
async fn row_count_mismatch_cites_both_counts() {
    let mut session =
        seeded_session("CREATE TABLE t(id int); INSERT INTO t VALUES (1),(2),(3);").await;
    let verdict = session
        .evaluate("SELECT id FROM t;", "SELECT id FROM t WHERE id < 3;")
        .await
        .expect("engine should be up");

    assert!(!verdict.passed);
    assert!(verdict.message.contains('3'));
    assert!(verdict.message.contains('2'));
    assert!(verdict.differences.is_none());
}

#[tokio::test]
async fn renamed_columns_still_pass() {
    let mut session = seeded_session(FIXTURE).await;
    let verdict = session
        .evaluate(
            "SELECT id AS identifier FROM t ORDER BY id;",
            "SELECT id FROM t ORDER BY id;",
        )
        .await
        .expect("engine should be up");
    assert!(verdict.passed);
}

#[tokio::test]
async fn every_row_differing_reports_three() {
    let mut session = seeded_session(
        "CREATE TABLE n(v int);
         INSERT INTO n VALUES (1),(2),(3),(4),(5),(6),(7),(8),(9),(10);",
    )
    .await;
    let verdict = session
        .evaluate(
            "SELECT v * 10 AS v FROM n ORDER BY v;",
            "SELECT v FROM n ORDER BY v;",
        )
        .await
        .expect("engine should be up");

    assert!(!verdict.passed);
    assert_eq!(verdict.user_row_count, 10);
    assert_eq!(verdict.differences.map(|diffs| diffs.len()), Some(3));
}

#[tokio::test]
async fn integer_and_real_outputs_compare_numerically() {
    let mut session = seeded_session(FIXTURE).await;
    let verdict = session
        .evaluate("SELECT AVG(id) * 2 FROM t;", "SELECT SUM(id) FROM t;")
        .await
        .expect("engine should be up");
    assert!(verdict.passed, "{}", verdict.message);
}

#[tokio::test]
async fn candidate_mutation_is_visible_to_reference() {
    let mut session = seeded_session(FIXTURE).await;
    let verdict = session
        .evaluate("DELETE FROM t WHERE id = 2;", "SELECT id FROM t;")
        .await
        .expect("engine should be up");

    assert!(!verdict.passed);
    assert_eq!(verdict.user_row_count, 0);
    assert_eq!(verdict.expected_row_count, 1);
}

#[tokio::test]
async fn sqlite_division_by_zero_yields_null_not_error() {
    let mut session = seeded_session(FIXTURE).await;
    let verdict = session
        .evaluate("SELECT 1/0;", "SELECT NULL;")
        .await
        .expect("engine should be up");
    assert!(verdict.passed, "{}", verdict.message);
}

#[tokio::test]
async fn integers_beyond_double_precision_are_compared_exactly() {
    let mut session = seeded_session(FIXTURE).await;
    let verdict = session
        .evaluate("SELECT 9007199254740993;", "SELECT 9007199254740992.0;")
        .await
        .expect("engine should be up");
    assert!(!verdict.passed);
    assert_eq!(verdict.differences.map(|diffs| diffs.len()), Some(1));
}
