#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub data: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let data = make_fixture_data(tmp.path());

        Self {
            _tmp: tmp,
            home,
            data,
        }
    }

    /// Binary with an isolated HOME and no data dir configured.
    pub fn bare_cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("drugcheck");
        cmd.env("HOME", &self.home)
            .env_remove("DRUGCHECK_DATA_DIR")
            .env_remove("DRUGCHECK_LOG");
        cmd
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.arg("--data-dir").arg(&self.data);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    /// Like `run_json` for commands that exit with the unresolved status.
    pub fn run_json_unresolved(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .code(2)
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn tmp_path(&self) -> &Path {
        self._tmp.path()
    }
}

fn make_fixture_data(base: &Path) -> PathBuf {
    let data = base.join("data");
    fs::create_dir_all(&data).expect("create data dir");

    fs::write(
        data.join("drug_name_mapping.json"),
        serde_json::to_string_pretty(&serde_json::json!({
            "Tylenol": "Acetaminophen",
            "Tylenol PM": "acetaminophen",
            "Advil": "ibuprofen",
            "Motrin": "ibuprofen",
            "Glucophage": "metformin",
            "Coumadin": "warfarin"
        }))
        .expect("serialize mapping"),
    )
    .expect("write mapping");

    fs::write(
        data.join("interactions_db.json"),
        serde_json::to_string_pretty(&serde_json::json!({
            "acetaminophen|ibuprofen": {
                "severity": "Moderate",
                "description": "Taking Acetaminophen with Ibuprofen can lead to kidney damage.",
                "advice": "Avoid combination if possible or monitor closely under medical supervision."
            },
            "warfarin||ibuprofen": {
                "severity": "high",
                "description": "Taking Warfarin with Ibuprofen may increase the risk of bleeding.",
                "advice": "Do not combine without supervision."
            }
        }))
        .expect("serialize interactions"),
    )
    .expect("write interactions");

    fs::write(
        data.join("side_effects_db.json"),
        serde_json::to_string_pretty(&serde_json::json!({
            "acetaminophen": ["Liver damage", "Nausea", "Rash"],
            "ibuprofen": ["Stomach pain", "Nausea", "Dizziness"]
        }))
        .expect("serialize side effects"),
    )
    .expect("write side effects");

    data
}
