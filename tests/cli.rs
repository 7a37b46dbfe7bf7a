mod common;

use common::{attestation, payload, response, TestEnv, ISSUER};
use predicates::str::contains;

#[test]
fn rank_prints_text_rows() {
    let env = TestEnv::new();
    let file = env.write_response(
        "resp.json",
        &response(vec![
            attestation(ISSUER, "0xAAA", payload(&["X", "Y", "X"])),
            attestation(ISSUER, "0xBBB", payload(&["X"])),
        ]),
    );
    env.cmd()
        .args(["--from-file", file.to_str().unwrap(), "rank"])
        .assert()
        .success()
        .stdout(contains("Rank 1: 0xAAA (2 unique)"))
        .stdout(contains("Rank 2: 0xBBB (1 unique)"));
}

#[test]
fn decode_prints_fields() {
    let env = TestEnv::new();
    env.cmd()
        .args(["decode", payload(&["bounty-3"]).as_str()])
        .assert()
        .success()
        .stdout(contains("offering\tstring\tbounty-3"));
}

#[test]
fn decode_reads_stdin() {
    let env = TestEnv::new();
    let out = env
        .cmd()
        .args(["--json", "decode", "-"])
        .write_stdin(payload(&["a", "b"]))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["data"][1]["value"], "b");
    assert_eq!(v["data"][0]["type"], "string");
}

#[test]
fn decode_rejects_malformed_payload() {
    let env = TestEnv::new();
    env.cmd()
        .args(["decode", "[{\"name\": \"offering\"}]"])
        .assert()
        .failure()
        .stderr(contains("could not be decoded"));
}
