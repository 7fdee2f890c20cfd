//! Integration tests for the builder module.

use crate::builder::{self, Method, sanitize_param, sanitize_pattern_param};
use serde_json::json;

#[test]
fn test_init_defaults() {
    let state = builder::init("public");

    assert_eq!(state.method(), Method::Get);
    assert_eq!(state.path(), "http://localhost:3000");
    assert_eq!(state.schema_name(), "public");
    assert_eq!(state.header("Accept"), Some("application/json"));
    assert_eq!(state.header("Content-Type"), Some("application/json"));
    assert_eq!(state.header("Accept-Profile"), Some("public"));
    assert_eq!(state.header("Content-Profile"), Some("public"));
    assert!(state.params().is_empty());
    assert_eq!(state.body(), &json!({}));
}

#[test]
fn test_init_with_custom_base_url() {
    let state = builder::init_with_base_url("public", "https://db.example.com");
    assert_eq!(state.path(), "https://db.example.com");
}

#[test]
fn test_from_appends_path_segments() {
    let state = builder::init("public").from("users");
    assert_eq!(state.path(), "http://localhost:3000/users");

    // Repeated calls keep appending.
    let state = state.from("extra");
    assert_eq!(state.path(), "http://localhost:3000/users/extra");
}

#[test]
fn test_auth_bearer_header() {
    let state = builder::init("public").auth("token-123");
    assert_eq!(state.header("Authorization"), Some("Bearer token-123"));
    assert!(state.options().basic_auth.is_none());
}

#[test]
fn test_auth_basic_goes_to_options() {
    let state = builder::init("public").auth_basic("admin", "secret");
    let auth = state.options().basic_auth.as_ref().expect("basic auth");
    assert_eq!(auth.username, "admin");
    assert_eq!(auth.password, "secret");
    assert_eq!(state.header("Authorization"), None);
}

#[test]
fn test_schema_switch_is_a_read_reset() {
    let rows = json!([{"id": 1}]);
    let state = builder::init("public")
        .from("users")
        .insert(&rows, false)
        .schema("audit");

    assert_eq!(state.method(), Method::Get);
    assert_eq!(state.schema_name(), "audit");
    assert_eq!(state.header("Accept-Profile"), Some("audit"));
    assert_eq!(state.header("Content-Profile"), Some("audit"));
}

#[test]
fn test_rpc_sets_path_body_and_post() {
    let params = json!({"name": "alice"});
    let state = builder::init("public").rpc("say_hello", &params);

    assert_eq!(state.path(), "http://localhost:3000/say_hello");
    assert_eq!(state.method(), Method::Post);
    assert_eq!(state.body(), &params);
}

#[test]
fn test_filter_accumulates_on_same_column() {
    let state = builder::init("public")
        .from("users")
        .gt("age", "20")
        .lt("age", "30");

    let values = state.params().get("age").expect("age entry");
    assert_eq!(values, ["gt.20", "lt.30"]);
    assert_eq!(state.params().len(), 1);
}

#[test]
fn test_filter_does_not_change_method() {
    let state = builder::init("public").from("users").eq("id", "1");
    assert_eq!(state.method(), Method::Get);
}

#[test]
fn test_not_negates_exactly_one_filter() {
    let state = builder::init("public")
        .from("users")
        .not()
        .eq("status", "active")
        .eq("role", "admin");

    assert_eq!(
        state.params().get("status").expect("status entry"),
        ["not.eq.active"]
    );
    assert_eq!(
        state.params().get("role").expect("role entry"),
        ["eq.admin"]
    );
}

#[test]
fn test_comparison_operators() {
    let state = builder::init("public")
        .from("users")
        .neq("status", "banned")
        .gte("age", "18")
        .lte("age", "65")
        .is("verified", "true");

    assert_eq!(state.params().get("status").unwrap(), ["neq.banned"]);
    assert_eq!(state.params().get("age").unwrap(), ["gte.18", "lte.65"]);
    assert_eq!(state.params().get("verified").unwrap(), ["is.true"]);
}

#[test]
fn test_like_translates_wildcards() {
    let state = builder::init("public").from("users").like("name", "%li%");
    assert_eq!(state.params().get("name").unwrap(), ["like.*li*"]);
}

#[test]
fn test_ilike_uses_its_own_operator_token() {
    let state = builder::init("public").from("users").ilike("name", "AL%");
    assert_eq!(state.params().get("name").unwrap(), ["ilike.AL*"]);
}

#[test]
fn test_full_text_operators() {
    let state = builder::init("public")
        .from("articles")
        .fts("title", "rust")
        .plfts("summary", "fat cats")
        .phfts("body", "the quick fox")
        .wfts("notes", "client");

    assert_eq!(state.params().get("title").unwrap(), ["fts.rust"]);
    assert_eq!(state.params().get("summary").unwrap(), ["plfts.fat cats"]);
    assert_eq!(state.params().get("body").unwrap(), ["phfts.the quick fox"]);
    assert_eq!(state.params().get("notes").unwrap(), ["wfts.client"]);
}

#[test]
fn test_in_encoding() {
    let state = builder::init("public")
        .from("users")
        .in_("id", &["1", "2", "3"]);
    assert_eq!(state.params().get("id").unwrap(), ["in.(1,2,3)"]);
}

#[test]
fn test_set_operators_use_braces() {
    let state = builder::init("public")
        .from("events")
        .cs("tags", &["rust", "web"])
        .cd("roles", &["admin"])
        .ov("period", &["2024-01-01", "2024-12-31"]);

    assert_eq!(state.params().get("tags").unwrap(), ["cs.{rust,web}"]);
    assert_eq!(state.params().get("roles").unwrap(), ["cd.{admin}"]);
    assert_eq!(
        state.params().get("period").unwrap(),
        ["ov.{2024-01-01,2024-12-31}"]
    );
}

#[test]
fn test_range_operators_encode_pairs() {
    let state = builder::init("public")
        .from("bookings")
        .sl("span", ("1", "10"))
        .adj("slot", ("10", "20"));

    assert_eq!(state.params().get("span").unwrap(), ["sl.(1,10)"]);
    assert_eq!(state.params().get("slot").unwrap(), ["adj.(10,20)"]);
}

#[test]
fn test_sanitize_param_quotes_reserved_characters() {
    assert_eq!(sanitize_param("plain"), "plain");
    assert_eq!(sanitize_param("a,b"), "\"a,b\"");
    assert_eq!(sanitize_param("1.5"), "\"1.5\"");
    assert_eq!(sanitize_param("a:b"), "\"a:b\"");
    assert_eq!(sanitize_param("(x)"), "\"(x)\"");
}

#[test]
fn test_sanitize_pattern_param() {
    assert_eq!(sanitize_pattern_param("%foo%"), "*foo*");
    assert_eq!(sanitize_pattern_param("bar"), "bar");
}

#[test]
fn test_reserved_values_inside_set_encoding() {
    let state = builder::init("public")
        .from("users")
        .in_("name", &["a,b", "c"]);
    assert_eq!(state.params().get("name").unwrap(), ["in.(\"a,b\",c)"]);
}

#[test]
fn test_select_sets_header_and_forces_get() {
    let rows = json!([{"id": 1}]);
    let state = builder::init("public")
        .from("users")
        .insert(&rows, false)
        .select(&["id", "name"]);

    assert_eq!(state.header("select"), Some("id,name"));
    assert_eq!(state.method(), Method::Get);
}

#[test]
fn test_insert_plain() {
    let rows = json!([{"name": "alice"}]);
    let state = builder::init("public").from("users").insert(&rows, false);

    assert_eq!(state.method(), Method::Post);
    assert_eq!(state.header("Prefer"), Some(""));
    assert_eq!(state.body(), &rows);
}

#[test]
fn test_insert_upsert_sets_prefer() {
    let rows = json!([{"name": "alice"}]);
    let state = builder::init("public").from("users").insert(&rows, true);

    assert_eq!(state.method(), Method::Post);
    assert_eq!(state.header("Prefer"), Some("resolution=merge-duplicates"));
    assert_eq!(state.body(), &rows);
}

#[test]
fn test_update_sets_patch_and_prefer() {
    let changes = json!({"status": "inactive"});
    let state = builder::init("public")
        .from("users")
        .eq("id", "1")
        .update(&changes);

    assert_eq!(state.method(), Method::Patch);
    assert_eq!(state.header("Prefer"), Some("return=representation"));
    assert_eq!(state.body(), &changes);
}

#[test]
fn test_delete_sets_method_and_body() {
    let criteria = json!({"id": 1});
    let state = builder::init("public").from("users").delete(&criteria);

    assert_eq!(state.method(), Method::Delete);
    assert_eq!(state.body(), &criteria);
}

#[test]
fn test_order_header_keeps_empty_tokens() {
    let state = builder::init("public").from("users").order("age", true, false);
    assert_eq!(state.header("order"), Some("age .desc "));

    let state = builder::init("public")
        .from("users")
        .order("age", true, true);
    assert_eq!(state.header("order"), Some("age .desc .nullsfirst"));
}

#[test]
fn test_limit_encodes_item_range() {
    let state = builder::init("public").from("users").limit(10, 20);
    assert_eq!(state.header("Range"), Some("20-29"));
    assert_eq!(state.header("Range-Unit"), Some("items"));
}

#[test]
fn test_range_headers() {
    let state = builder::init("public").from("users").range(0, 24);
    assert_eq!(state.header("Range"), Some("0-24"));
    assert_eq!(state.header("Range-Unit"), Some("items"));
}

#[test]
fn test_single_replaces_accept_header() {
    let state = builder::init("public").from("users").single();
    assert_eq!(
        state.header("Accept"),
        Some("application/vnd.pgrst.object+json")
    );
    // The other three init headers survive.
    assert_eq!(state.header("Content-Type"), Some("application/json"));
    assert_eq!(state.header("Accept-Profile"), Some("public"));
    assert_eq!(state.header("Content-Profile"), Some("public"));
}

#[test]
fn test_query_pairs_preserve_application_order() {
    let state = builder::init("public")
        .from("users")
        .gt("age", "20")
        .eq("status", "active")
        .lt("age", "30");

    let query = state.params().to_query();
    assert_eq!(
        query,
        vec![
            ("age".to_string(), "gt.20".to_string()),
            ("age".to_string(), "lt.30".to_string()),
            ("status".to_string(), "eq.active".to_string()),
        ]
    );
}

#[test]
fn test_replayed_chain_is_deterministic() {
    let build = || {
        builder::init("public")
            .auth("token")
            .from("users")
            .select(&["id", "name"])
            .not()
            .eq("status", "banned")
            .gt("age", "18")
            .order("age", true, false)
            .limit(10, 0)
            .into_request()
    };

    assert_eq!(build(), build());
}
