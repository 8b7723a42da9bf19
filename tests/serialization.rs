// Wire-shape guarantees for the HTTP layer.
use chaperone::moderate;

#[test]
fn test_result_shape() {
    let json = moderate("call me on 98 76 54 32 10").to_json();

    assert_eq!(json["is_blocked"], true);
    assert_eq!(json["confidence"], "high");
    assert_eq!(json["violation_type"], "phone_number");
    assert!(json["detected_pattern"].as_str().is_some());
    assert_eq!(json["original_text"], "call me on 98 76 54 32 10");
    assert_eq!(json["normalized_text"], "callmeon9876543210");
    assert!(json["severity_score"].as_u64().unwrap_or(0) > 0);

    let violations = json["all_violations"].as_array().cloned().unwrap_or_default();
    assert!(!violations.is_empty());
    for v in &violations {
        assert!(v["type"].is_string());
        assert!(v["pattern"].is_string());
    }
}

#[test]
fn test_clean_result_shape() {
    let json = moderate("good morning!").to_json();

    assert_eq!(json["is_blocked"], false);
    assert_eq!(json["confidence"], "low");
    assert_eq!(json["violation_type"], serde_json::Value::Null);
    assert_eq!(json["detected_pattern"], serde_json::Value::Null);
    assert_eq!(json["severity_score"], 0);
    assert_eq!(json["all_violations"], serde_json::json!([]));
}

#[test]
fn test_kind_names_are_lower_snake_case() {
    let json = moderate("pay 9876543210@paytm").to_json();
    assert_eq!(json["violation_type"], "upi_id");
    assert_eq!(json["all_violations"][0]["type"], "upi_id");
}
