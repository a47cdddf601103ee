use serde_json::json;

use qaforge_assert::{
    AssertResult, JsonKind, assert_close_to, assert_contains, assert_date_format,
    assert_deep_equals, assert_disjoint, assert_equals, assert_greater_than, assert_has_keys,
    assert_has_property, assert_in_range, assert_in_range_inclusive, assert_is_array,
    assert_is_empty, assert_is_number, assert_is_true, assert_is_type_of, assert_length,
    assert_nested_contains, assert_same_members, assert_string_contains, assert_string_length,
    assert_string_matches, assert_subset_of, assert_throws, assert_valid_email, assert_valid_url,
};

// Every failing assertion carries the caller-supplied prefix in its
// message; every satisfied one returns Ok. One probe per family.
#[test]
fn failures_carry_the_caller_prefix() {
    let prefix = "ctx-0147";
    let failures: Vec<AssertResult> = vec![
        assert_is_true(false, prefix),
        assert_equals(&1, &2, prefix),
        assert_deep_equals(&vec![1], &vec![2], prefix),
        assert_in_range(10.0, 1.0, 5.0, prefix),
        assert_in_range_inclusive(10.0, 1.0, 5.0, prefix),
        assert_greater_than(1.0, 2.0, prefix),
        assert_close_to(1.0, 2.0, 0.5, prefix),
        assert_contains(&[1, 2], &3, prefix),
        assert_subset_of(&[3], &[1, 2], prefix),
        assert_disjoint(&[1], &[1], prefix),
        assert_same_members(&[1], &[2], prefix),
        assert_length(&[1], 2, prefix),
        assert_nested_contains(&[vec![1]], &2, prefix),
        assert_string_length("ab", 3, prefix),
        assert_string_contains("ab", "z", prefix),
        assert_string_matches("ab", r"\d+", prefix),
        assert_valid_url("nope", prefix),
        assert_valid_email("nope", prefix),
        assert_date_format("nope", "%Y-%m-%d", prefix),
        assert_is_number(&json!("x"), prefix),
        assert_is_type_of(JsonKind::Object, &json!(1), prefix),
        assert_has_property(&json!({}), "k", prefix),
        assert_has_keys(&json!({"a": 1}), &["b"], prefix),
        assert_is_array(&json!(1), prefix),
        assert_throws(|| Ok::<_, String>(()), prefix),
    ];

    for outcome in failures {
        let err = outcome.expect_err("probe should have failed");
        assert!(
            err.message().starts_with(prefix),
            "prefix missing from: {}",
            err.message()
        );
    }
}

#[test]
fn satisfied_probes_return_ok() {
    let prefix = "ctx-ok";
    assert!(assert_is_true(true, prefix).is_ok());
    assert!(assert_equals(&"x", &"x", prefix).is_ok());
    assert!(assert_in_range(3.0, 1.0, 5.0, prefix).is_ok());
    assert!(assert_contains(&[1, 2], &2, prefix).is_ok());
    assert!(assert_string_matches("abc", r"[a-c]+", prefix).is_ok());
    assert!(assert_valid_url("https://example.com", prefix).is_ok());
    assert!(assert_is_type_of(JsonKind::Object, &json!({}), prefix).is_ok());
    assert!(assert_has_keys(&json!({"a": 1}), &["a"], prefix).is_ok());
    assert!(assert_throws(|| Err::<(), _>("boom"), prefix).is_ok());
    assert!(assert_is_empty(&[] as &[u8], prefix).is_ok());
}

#[test]
fn display_output_is_red_wrapped() {
    let err = assert_is_true(false, "styled").unwrap_err();
    let rendered = err.to_string();
    assert!(rendered.starts_with("\u{1b}[31m"));
    assert!(rendered.ends_with("\u{1b}[0m"));
    assert!(rendered.contains("styled"));
}
