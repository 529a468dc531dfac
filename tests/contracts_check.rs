mod common;

use common::TestEnv;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn contracts_check() {
    let env = TestEnv::new();

    let browse = env.run_json(&["browse"]);
    assert_eq!(browse["ok"], true);
    validate("browse.schema.json", &browse["data"]);

    let show = env.run_json(&["show", "demo_1"]);
    assert_eq!(show["ok"], true);
    validate("show.schema.json", &show["data"]);

    env.login("ben@campus.example", "password123");
    let profile = env.run_json(&["profile"]);
    assert_eq!(profile["ok"], true);
    validate("profile.schema.json", &profile["data"]);
    env.logout();

    env.login("admin@campus.example", "Admin123");
    let review = env.run_json(&["admin", "review"]);
    assert_eq!(review["ok"], true);
    // The demo data ships one flagged listing, so the queue is never empty.
    assert!(!review["data"].as_array().unwrap().is_empty());
    validate("review.schema.json", &review["data"]);
}
