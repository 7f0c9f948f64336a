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

    let check = env.run_json(&["check", "tylenol", "advil"]);
    assert_eq!(check["ok"], true);
    validate("check.schema.json", &check["data"]);
    for drug in check["data"]["drugs"].as_array().unwrap() {
        validate("resolve.schema.json", drug);
    }

    let not_found = env.run_json(&["check", "glucophage", "motrin"]);
    validate("check.schema.json", &not_found["data"]);

    let unresolved = env.run_json_unresolved(&["check", "tylenoll", "advil"]);
    assert_eq!(unresolved["ok"], false);
    validate("check.schema.json", &unresolved["data"]);

    let resolved = env.run_json(&["resolve", "ibuprofen"]);
    validate("resolve.schema.json", &resolved["data"]);

    let summary = env.run_json(&["validate"]);
    assert_eq!(summary["ok"], true);
    validate("validate.schema.json", &summary["data"]);
}
