// Copyright 2024-2025 Irreducible Inc.

mod common;

use anyhow::{ensure, Result};
use ark_bn254::Fr;
use common::{case_paths, FixtureCache, TestCase};
use gkr_core::{
	protocols::gkr::{self, GateRegistry, WireAssignment},
	transcript::{ArithmeticTranscript, MapHashOracle},
};

fn load_all() -> Result<Vec<TestCase<Fr>>> {
	let mut cache = FixtureCache::new(GateRegistry::default());
	case_paths()?
		.iter()
		.map(|path| cache.load(path))
		.collect()
}

fn check_outputs(case: &TestCase<Fr>) -> Result<WireAssignment<Fr>> {
	let assignment = WireAssignment::evaluate(&case.circuit, case.inputs.clone())?;
	let outputs = assignment.outputs(&case.circuit)?;
	ensure!(outputs.len() == case.outputs.len(), "{}: number of outputs", case.name);
	for (i, (seen, expected)) in outputs.iter().zip(&case.outputs).enumerate() {
		ensure!(*seen == expected.as_slice(), "{}: output {i} mismatch", case.name);
	}
	Ok(assignment)
}

#[test]
fn test_corpus_present() {
	let cases = load_all().unwrap();
	assert!(cases.len() >= 8);
	assert!(cases.iter().any(|case| case.name == "single_identity_gate"));
	assert!(cases.iter().any(|case| case.name == "single_mimc_gate"));
}

#[test]
fn test_prover_matches_vectors() {
	for case in load_all().unwrap() {
		let assignment = check_outputs(&case).unwrap();
		let proof = gkr::prove(&case.circuit, &assignment, case.transcript(0)).unwrap();
		assert_eq!(proof, case.proof, "{}: proof mismatch", case.name);
	}
}

#[test]
fn test_verifier_accepts_vectors() {
	for case in load_all().unwrap() {
		let in_out = case.in_out_assignment().unwrap();
		assert!(
			gkr::verify(&case.circuit, &in_out, &case.proof, case.transcript(0)),
			"{}: rejected with seed 0",
			case.name
		);
	}
}

#[test]
fn test_verifier_rejects_reseeded_vectors() {
	for case in load_all().unwrap() {
		let in_out = case.in_out_assignment().unwrap();
		assert!(
			!gkr::verify(&case.circuit, &in_out, &case.proof, case.transcript(1)),
			"{}: accepted with seed 1",
			case.name
		);
	}
}

#[test]
fn test_vector_proofs_survive_byte_encoding() {
	for case in load_all().unwrap() {
		let bytes = case.proof.to_bytes().unwrap();
		let decoded = gkr::Proof::<Fr>::from_bytes(&bytes).unwrap();
		assert_eq!(decoded, case.proof, "{}", case.name);

		let in_out = case.in_out_assignment().unwrap();
		assert!(gkr::verify(&case.circuit, &in_out, &decoded, case.transcript(0)));
	}
}

#[test]
fn test_vector_proofs_survive_json() {
	for case in load_all().unwrap() {
		let json = serde_json::to_string(&case.proof).unwrap();
		let decoded: gkr::Proof<Fr> = serde_json::from_str(&json).unwrap();
		assert_eq!(decoded, case.proof, "{}", case.name);
	}
}

#[test]
fn test_shared_hash_table_is_cached() {
	let mut cache = FixtureCache::<Fr>::new(GateRegistry::default());
	let data_dir = common::data_dir();
	let first = cache.hash(&data_dir.join("resources/hash.json")).unwrap();
	let second = cache
		.hash(&data_dir.join("resources/../resources/hash.json"))
		.unwrap();
	assert_eq!(first, second);
	assert!(!first.is_empty());
}

#[test]
fn test_hash_table_has_no_stale_entries() {
	let mut cache = FixtureCache::<Fr>::new(GateRegistry::default());
	let oracle = cache
		.hash(&common::data_dir().join("resources/hash.json"))
		.unwrap();

	for path in case_paths().unwrap() {
		let case = cache.load(&path).unwrap();
		let assignment = WireAssignment::evaluate(&case.circuit, case.inputs.clone()).unwrap();
		gkr::prove(&case.circuit, &assignment, case.transcript(0)).unwrap();

		let in_out = case.in_out_assignment().unwrap();
		assert!(gkr::verify(&case.circuit, &in_out, &case.proof, case.transcript(0)));
		assert!(!gkr::verify(&case.circuit, &in_out, &case.proof, case.transcript(1)));
	}

	assert_eq!(oracle.unused_entries(), Vec::<String>::new());
}

#[test]
fn test_seed_zero_transcript_starts_from_table() {
	let mut cache = FixtureCache::<Fr>::new(GateRegistry::default());
	let oracle: MapHashOracle<Fr> = cache
		.hash(&common::data_dir().join("resources/hash.json"))
		.unwrap();
	let case = cache
		.load(&common::data_dir().join("single_identity_gate.json"))
		.unwrap();
	assert_eq!(case.oracle, oracle);

	// the seed is absorbed onto an empty state, so the first challenge is the table entry of "0"
	let mut transcript = case.transcript(0);
	assert_eq!(
		transcript.next(&[]),
		gkr_core::transcript::HashOracle::hash(&oracle, &Fr::from(0u64), None)
	);
}
