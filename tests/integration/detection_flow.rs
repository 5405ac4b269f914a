//! End-to-end detection flow
//!
//! Assembles the real orchestrator and prober over a static identifier
//! source and a stub transport, and verifies the observable properties of
//! the whole subsystem: zero-network negatives, single-probe batches, and
//! both byte orders of the time_low signal.

use crate::common::{StubResponse, StubTransport};
use cloud_ident::detection::Ec2Detector;
use cloud_ident::inventory::StaticSource;
use cloud_ident::probe::ConfirmationProber;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

fn detector(
    identifiers: Vec<&str>,
    responses: Vec<StubResponse>,
) -> (Ec2Detector<StaticSource, Arc<StubTransport>>, Arc<StubTransport>) {
    let transport = Arc::new(StubTransport::new(responses));
    let source = StaticSource::new(identifiers.into_iter().map(String::from).collect());
    let detector = Ec2Detector::new(source, ConfirmationProber::new(Arc::clone(&transport)));
    (detector, transport)
}

fn deadline() -> Instant {
    Instant::now() + Duration::from_secs(30)
}

#[tokio::test]
async fn ec2_uuid_with_confirming_endpoint_detects() {
    let (detector, transport) = detector(
        vec!["ec2f8a35-4ba5-0cbf-63f6-34c0e9e7a2fd"],
        vec![StubResponse::Status(200)],
    );

    assert!(detector.detect(deadline()).await);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn uppercase_literal_prefix_detects() {
    let (detector, transport) = detector(
        vec!["EC2F8A35-4BA5-0CBF-63F6-34C0E9E7A2FD"],
        vec![StubResponse::Status(200)],
    );

    assert!(detector.detect(deadline()).await);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn little_endian_uuid_detects_after_byte_swap() {
    // 45 e1 2a ec read little-endian renders as ec2ae145
    let (detector, transport) = detector(
        vec!["45e12aec-dcd1-b213-94ed-01de9ccd6d0b"],
        vec![StubResponse::Status(200)],
    );

    assert!(detector.detect(deadline()).await);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn non_ec2_uuid_never_touches_network() {
    // reversed time_low is 34128a4d, no prefix in either byte order
    let (detector, transport) = detector(
        vec!["4d8a1234-0042-3510-8054-c04f32343632"],
        vec![StubResponse::Status(200)],
    );

    assert!(!detector.detect(deadline()).await);
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn empty_identifier_batch_resolves_false_without_network() {
    let (detector, transport) = detector(vec![], vec![StubResponse::Status(200)]);

    assert!(!detector.detect(deadline()).await);
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn confirmation_failure_downgrades_heuristic_match() {
    let (detector, transport) = detector(
        vec!["ec2f8a35-4ba5-0cbf-63f6-34c0e9e7a2fd"],
        vec![StubResponse::Status(404)],
    );

    assert!(!detector.detect(deadline()).await);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn matching_batch_probes_exactly_once() {
    // two EC2-ish identifiers still trigger a single confirmation
    let (detector, transport) = detector(
        vec![
            "ec2f8a35-4ba5-0cbf-63f6-34c0e9e7a2fd",
            "45e12aec-dcd1-b213-94ed-01de9ccd6d0b",
        ],
        vec![StubResponse::Status(200)],
    );

    assert!(detector.detect(deadline()).await);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn malformed_identifiers_do_not_abort_the_batch() {
    // parse failures resolve single identifiers to "no match"; a later
    // identifier can still match
    let (detector, transport) = detector(
        vec!["not-a-uuid", "", "45e12aec-dcd1-b213-94ed-01de9ccd6d0b"],
        vec![StubResponse::Status(200)],
    );

    assert!(detector.detect(deadline()).await);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn expired_deadline_degrades_match_to_negative() {
    let (detector, transport) = detector(
        vec!["ec2f8a35-4ba5-0cbf-63f6-34c0e9e7a2fd"],
        vec![StubResponse::Status(200)],
    );

    assert!(!detector.detect(Instant::now()).await);
    assert_eq!(transport.calls(), 0);
}
