#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

pub const ISSUER: &str = "0xd5064bd244138fa4ff1b9048d165491889af5c15";

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let dir = tmp.path().to_path_buf();
        Self {
            _tmp: tmp,
            home,
            dir,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("offerboard");
        cmd.env("HOME", &self.home)
            .env_remove("RUST_LOG")
            .env_remove("OFFERBOARD_CONFIG")
            .env_remove("OFFERBOARD_ENDPOINT")
            .env_remove("OFFERBOARD_SCHEMA_ID")
            .env_remove("OFFERBOARD_ISSUER");
        cmd
    }

    /// Saves a registry response body and returns its path.
    pub fn write_response(&self, name: &str, body: &Value) -> PathBuf {
        let p = self.dir.join(name);
        fs::write(&p, serde_json::to_string_pretty(body).expect("serialize response"))
            .expect("write response");
        p
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
}

pub fn payload(offerings: &[&str]) -> String {
    let fields: Vec<Value> = offerings
        .iter()
        .map(|o| {
            json!({
                "name": "offering",
                "type": "string",
                "signature": "string offering",
                "value": {"name": "offering", "type": "string", "value": o}
            })
        })
        .collect();
    Value::Array(fields).to_string()
}

pub fn attestation(attester: &str, recipient: &str, payload: String) -> Value {
    json!({"attester": attester, "recipient": recipient, "decodedDataJson": payload})
}

pub fn response(attestations: Vec<Value>) -> Value {
    json!({"data": {"schema": {"attestations": attestations}}})
}

/// Serves `body` with `status` to every request; returns the endpoint URL.
pub fn serve(status: u16, body: String) -> String {
    use tiny_http::{Header, Response, StatusCode};
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let addr = listener.local_addr().expect("local addr");
    let server = tiny_http::Server::from_listener(listener, None).expect("start server");
    std::thread::spawn(move || {
        for req in server.incoming_requests() {
            let resp = Response::from_string(body.clone())
                .with_status_code(StatusCode(status))
                .with_header(
                    Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                        .expect("header"),
                );
            let _ = req.respond(resp);
        }
    });
    format!("http://{}/graphql", addr)
}
