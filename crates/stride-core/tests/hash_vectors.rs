//! # Inputs-Hash Vector Tests
//!
//! End-to-end vectors for the canonicalize → stringify → SHA-256 pipeline.
//! The hex digests are pinned against an independent implementation
//! (`sha256sum` over the expected canonical text), so a formatting or
//! ordering regression anywhere in the pipeline shows up as a digest
//! mismatch here — not just as two Rust runs agreeing with each other.

use serde_json::json;
use stride_core::{inputs_hash, sha256_hex, stable_stringify, CanonicalBytes};

// ---------------------------------------------------------------------------
// Pinned digests
// ---------------------------------------------------------------------------

#[test]
fn test_minimal_payload_vector() {
    let payload = json!({"programId": "p1", "horizon": "H1"});
    assert_eq!(
        stable_stringify(&payload).unwrap(),
        r#"{"horizon":"H1","programId":"p1"}"#
    );
    // printf '{"horizon":"H1","programId":"p1"}' | sha256sum
    assert_eq!(
        inputs_hash(&payload).unwrap(),
        "8588987d04e7ecb40511e2364871e99fea7308a51fbf65e9253b0f8ff72be816"
    );
}

#[test]
fn test_empty_containers_vectors() {
    // printf '{}' | sha256sum ; printf '[]' | sha256sum
    assert_eq!(
        inputs_hash(&json!({})).unwrap(),
        "44136fa355b3678a1146ad16f7e8649e94fb4fc21fe77e8310c060f61caaff8a"
    );
    assert_eq!(
        inputs_hash(&json!([])).unwrap(),
        "4f53cda18c2baa0c0354bb5f9a3ecbe5ed12ab4d8e11ba873c2f11161202b945"
    );
}

// ---------------------------------------------------------------------------
// Recruiting-impact scenario: same bundle, different key insertion order
// ---------------------------------------------------------------------------

fn scenario_payload_a() -> serde_json::Value {
    json!({
        "programId": "p1",
        "horizon": "H1",
        "evidence": {"marks": [15.12, 15.34], "verified": true},
        "alignment": {"type": "primary", "capabilityNodeId": "c1"},
        "constraint": {"type": "coverage"}
    })
}

fn scenario_payload_b() -> serde_json::Value {
    // Identical key-value pairs, different declaration order at every level.
    json!({
        "constraint": {"type": "coverage"},
        "alignment": {"capabilityNodeId": "c1", "type": "primary"},
        "evidence": {"verified": true, "marks": [15.12, 15.34]},
        "horizon": "H1",
        "programId": "p1"
    })
}

fn scenario_payload_c() -> serde_json::Value {
    // Same pairs as A, but evidence.marks reordered — semantically different.
    json!({
        "programId": "p1",
        "horizon": "H1",
        "evidence": {"marks": [15.34, 15.12], "verified": true},
        "alignment": {"type": "primary", "capabilityNodeId": "c1"},
        "constraint": {"type": "coverage"}
    })
}

#[test]
fn test_scenario_canonical_text() {
    let expected = concat!(
        r#"{"alignment":{"capabilityNodeId":"c1","type":"primary"},"#,
        r#""constraint":{"type":"coverage"},"#,
        r#""evidence":{"marks":[15.12,15.34],"verified":true},"#,
        r#""horizon":"H1","programId":"p1"}"#,
    );
    assert_eq!(stable_stringify(&scenario_payload_a()).unwrap(), expected);
    assert_eq!(stable_stringify(&scenario_payload_b()).unwrap(), expected);
}

#[test]
fn test_scenario_key_order_hashes_equal() {
    let a = inputs_hash(&scenario_payload_a()).unwrap();
    let b = inputs_hash(&scenario_payload_b()).unwrap();
    assert_eq!(a, b);
    // printf <canonical text of A> | sha256sum
    assert_eq!(
        a,
        "f45391cc3861a48dfe5e4671ec81ece7a9fd4d0319efdeb1a6fb9ce8ae23b3bf"
    );
}

#[test]
fn test_scenario_mark_order_hashes_differ() {
    let a = inputs_hash(&scenario_payload_a()).unwrap();
    let c = inputs_hash(&scenario_payload_c()).unwrap();
    assert_ne!(a, c);
}

#[test]
fn test_scenario_idempotent() {
    let first = inputs_hash(&scenario_payload_a()).unwrap();
    let second = inputs_hash(&scenario_payload_a()).unwrap();
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Typed vs dynamic construction
// ---------------------------------------------------------------------------

#[test]
fn test_typed_struct_matches_value_payload() {
    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Bundle {
        program_id: &'static str,
        horizon: &'static str,
    }

    let typed = CanonicalBytes::new(&Bundle {
        program_id: "p1",
        horizon: "H1",
    })
    .unwrap();
    let dynamic = json!({"horizon": "H1", "programId": "p1"});

    assert_eq!(sha256_hex(&typed), inputs_hash(&dynamic).unwrap());
}

// ---------------------------------------------------------------------------
// Arbitrary-depth canonicalization
// ---------------------------------------------------------------------------

#[test]
fn test_nested_insertion_order_irrelevant_at_depth() {
    let a = json!({"a": {"b": {"c": [1, 2, {"d": 1, "c": 2}]}}});
    let b = json!({"a": {"b": {"c": [1, 2, {"c": 2, "d": 1}]}}});
    assert_eq!(inputs_hash(&a).unwrap(), inputs_hash(&b).unwrap());
    assert_eq!(
        stable_stringify(&a).unwrap(),
        r#"{"a":{"b":{"c":[1,2,{"c":2,"d":1}]}}}"#
    );
}
