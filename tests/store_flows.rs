mod common;

use common::TestEnv;

#[test]
fn seed_merge_is_idempotent_and_keeps_user_listings() {
    let env = TestEnv::new();
    env.login("ben@campus.example", "password123");
    let id = env.post_listing("My own listing");

    // Every invocation reloads and re-reconciles; the collection must not grow.
    let before = env.read_services().as_array().unwrap().len();
    env.run_json(&["browse"]);
    env.run_json(&["browse"]);
    let services = env.read_services();
    let after = services.as_array().unwrap();
    assert_eq!(after.len(), before);

    let demo_count = after.iter().filter(|l| l["id"] == "demo_1").count();
    assert_eq!(demo_count, 1);
    assert!(after.iter().any(|l| l["id"] == id.as_str()));
}

#[test]
fn stale_seed_entries_are_refreshed_from_code() {
    let env = TestEnv::new();
    env.login("ben@campus.example", "password123");
    let id = env.post_listing("Survivor listing");

    // Simulate a state file written by an older build: one seed entry drifted.
    let mut services = env.read_services();
    let entry = services
        .as_array_mut()
        .unwrap()
        .iter_mut()
        .find(|l| l["id"] == "demo_1")
        .expect("seed entry present");
    entry["title"] = serde_json::json!("stale seed title");
    env.write_services(&services);

    env.run_json(&["browse"]);

    let services = env.read_services();
    let refreshed = services
        .as_array()
        .unwrap()
        .iter()
        .find(|l| l["id"] == "demo_1")
        .unwrap();
    assert_eq!(refreshed["title"], "Graphic design and club branding");
    assert!(services
        .as_array()
        .unwrap()
        .iter()
        .any(|l| l["id"] == id.as_str()));
}

#[test]
fn corrupt_state_files_reset_to_seed_data() {
    let env = TestEnv::new();
    // Prime the store, then wreck it.
    env.run_json(&["browse"]);
    std::fs::write(env.services_path(), "{definitely not json").expect("corrupt file");

    let browse = env.run_json(&["browse"]);
    assert!(!browse["data"].as_array().unwrap().is_empty());

    let services = env.read_services();
    assert!(services
        .as_array()
        .unwrap()
        .iter()
        .all(|l| l["id"].as_str().unwrap().starts_with("demo_")));
}

#[test]
fn daily_quota_blocks_sixth_post_but_not_after_a_day() {
    let env = TestEnv::new();
    env.login("ben@campus.example", "password123");

    let mut ids = Vec::new();
    for i in 0..5 {
        ids.push(env.post_listing(&format!("Quota listing {i}")));
    }

    let blocked = env.run_json_err(&[
        "post",
        "--title",
        "One too many",
        "--category",
        "print",
        "--description",
        "test listing",
        "--price",
        "5000",
        "--contact",
        "WA: 0800",
        "--photo",
        "https://img.example/photo.jpg",
    ]);
    assert_eq!(blocked["error"]["code"], "QUOTA_EXCEEDED");

    // Age one of today's listings by a day; the quota frees up one slot.
    let mut services = env.read_services();
    let aged = services
        .as_array_mut()
        .unwrap()
        .iter_mut()
        .find(|l| l["id"] == ids[0].as_str())
        .unwrap();
    aged["created_at"] = serde_json::json!("2020-01-01T00:00:00Z");
    env.write_services(&services);

    env.post_listing("Fits again");
}
