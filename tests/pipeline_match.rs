use std::sync::Arc;

use hashhopper::config::SearchConfig;
use hashhopper::digest::Algorithm;
use hashhopper::pipeline::{self, stop::StopSignal};
use hashhopper::sink::{self, MatchSink, MemorySink};

const SHA512_OF_4_2: &str = "7df6418d1791a6fe80e726319f16f107534a663346f99e0d155e359a54f6c74391e2f3be19c995c3c903926d348bd86c339bd982e10f09aa776e4ff85d36387a";
const SHA3_512_OF_9: &str = "f219f3571fe6327ffddf3cc609c111b4c7eff2e39e405594e99979bea771df45358418482f8f184b01e2acc5869334a8cbba2b7789d1a70d310f73df2a7129d9";
const SHA512_OF_255: &str = "6700df6600b118ab0432715a7e8a68b0bf37cdf4adaf0fb9e2b3ebe04ad19c7032cbad55e932792af360bafaa09962e2e690652bc075b2dad0c30688ba2f31a3";

fn test_config(length: usize, target: &str, algorithms: Vec<Algorithm>) -> SearchConfig {
    let mut cfg = SearchConfig::new(length, target, algorithms);
    cfg.workers = 4;
    cfg.relay_capacity = 64;
    // keep the reporter quiet for the duration of a test run
    cfg.progress_interval_secs = 3600;
    cfg
}

#[test]
fn finds_single_sha512_preimage_in_two_byte_keyspace() {
    let cfg = test_config(2, SHA512_OF_4_2, vec![Algorithm::Sha512]);
    let match_sink = Arc::new(MemorySink::new());
    let stop = Arc::new(StopSignal::new());

    let stats = pipeline::run_search(&cfg, match_sink.clone(), stop.clone()).expect("pipeline");

    let records = match_sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].candidate, vec![4, 2]);
    assert_eq!(records[0].candidate_decimal, "4,2");
    assert_eq!(records[0].algorithm, "SHA-512");
    assert_eq!(records[0].digest_hex, SHA512_OF_4_2);

    assert_eq!(stats.matches_found, 1);
    assert!(stop.is_stopped());
}

#[test]
fn reports_the_matching_algorithm_among_several() {
    let cfg = test_config(1, SHA3_512_OF_9, Algorithm::ALL.to_vec());
    let match_sink = Arc::new(MemorySink::new());
    let stop = Arc::new(StopSignal::new());

    let stats = pipeline::run_search(&cfg, match_sink.clone(), stop).expect("pipeline");

    let records = match_sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].candidate, vec![9]);
    assert_eq!(records[0].algorithm, "SHA3-512");
    assert_eq!(stats.matches_found, 1);
}

#[test]
fn match_on_final_candidate_races_exhaustion_cleanly() {
    // [255] is the last candidate of the one-byte keyspace, so the match
    // and end-of-stream stop requests land at nearly the same instant
    let cfg = test_config(1, SHA512_OF_255, vec![Algorithm::Sha512]);
    let match_sink = Arc::new(MemorySink::new());
    let stop = Arc::new(StopSignal::new());

    let stats = pipeline::run_search(&cfg, match_sink.clone(), stop).expect("pipeline");

    let records = match_sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].candidate, vec![255]);
    assert_eq!(stats.matches_found, 1);
    assert_eq!(stats.candidates_generated, 256);
}

#[test]
fn writes_match_records_to_the_jsonl_sink() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = test_config(2, SHA512_OF_4_2, vec![Algorithm::Sha512]);
    let match_sink = Arc::new(sink::build_jsonl_sink(dir.path()).expect("sink"));
    let stop = Arc::new(StopSignal::new());

    let stats = pipeline::run_search(&cfg, match_sink.clone(), stop).expect("pipeline");
    match_sink.flush().expect("flush");
    assert_eq!(stats.matches_found, 1);

    let contents =
        std::fs::read_to_string(dir.path().join("matches.jsonl")).expect("matches file");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);
    let record: serde_json::Value = serde_json::from_str(lines[0]).expect("json");
    assert_eq!(record["algorithm"], "SHA-512");
    assert_eq!(record["candidate_decimal"], "4,2");
    assert_eq!(record["digest_hex"], SHA512_OF_4_2);
}
