// Copyright 2024-2025 Irreducible Inc.

//! Loading of the GKR test vectors under `tests/data`.
//!
//! A test case file names a circuit description and a hash table by paths relative to itself,
//! and carries the inputs, the expected outputs and the expected proof. Circuits and hash tables
//! are shared between cases, so [`FixtureCache`] parses each of them once.

use anyhow::{ensure, Context, Result};
use ark_ff::PrimeField;
use gkr_core::{
	field::Decimal,
	protocols::gkr::{Circuit, CircuitDescription, GateRegistry, Proof, WireAssignment},
	transcript::{ArithmeticTranscript, MapHashOracle, MapHashTranscript},
};
use serde::{de::DeserializeOwned, Deserialize};
use std::{
	collections::HashMap,
	fs,
	path::{Path, PathBuf},
};

pub fn data_dir() -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

/// Paths of all test case files, sorted by name.
pub fn case_paths() -> Result<Vec<PathBuf>> {
	let mut paths = fs::read_dir(data_dir())?
		.map(|entry| entry.map(|entry| entry.path()))
		.collect::<Result<Vec<_>, _>>()?
		.into_iter()
		.filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
		.collect::<Vec<_>>();
	paths.sort();
	Ok(paths)
}

#[derive(Deserialize)]
#[serde(bound = "")]
struct TestCaseInfo<F: PrimeField> {
	hash: PathBuf,
	circuit: PathBuf,
	input: Vec<Vec<Decimal<F>>>,
	output: Vec<Vec<Decimal<F>>>,
	proof: Proof<F>,
}

/// A parsed test case.
pub struct TestCase<F: PrimeField> {
	pub name: String,
	pub circuit: Circuit<F>,
	pub oracle: MapHashOracle<F>,
	pub inputs: Vec<Vec<F>>,
	pub outputs: Vec<Vec<F>>,
	pub proof: Proof<F>,
}

impl<F: PrimeField> TestCase<F> {
	/// A transcript over the case's hash table, seeded with `seed` as its first message.
	pub fn transcript(&self, seed: u64) -> MapHashTranscript<F> {
		let mut transcript = MapHashTranscript::new(self.oracle.clone());
		transcript.update(&[F::from(seed)]);
		transcript
	}

	pub fn in_out_assignment(&self) -> Result<WireAssignment<F>> {
		Ok(WireAssignment::from_in_out(
			&self.circuit,
			self.inputs.clone(),
			self.outputs.clone(),
		)?)
	}
}

/// Parsed circuits and hash tables, keyed by canonical path.
pub struct FixtureCache<F: PrimeField> {
	registry: GateRegistry<F>,
	circuits: HashMap<PathBuf, Circuit<F>>,
	hashes: HashMap<PathBuf, MapHashOracle<F>>,
}

impl<F: PrimeField> FixtureCache<F> {
	pub fn new(registry: GateRegistry<F>) -> Self {
		Self {
			registry,
			circuits: HashMap::new(),
			hashes: HashMap::new(),
		}
	}

	pub fn circuit(&mut self, path: &Path) -> Result<Circuit<F>> {
		let path = fs::canonicalize(path).with_context(|| format!("{}", path.display()))?;
		if let Some(circuit) = self.circuits.get(&path) {
			return Ok(circuit.clone());
		}
		let description: CircuitDescription = read_json(&path)?;
		let circuit = Circuit::from_description(&description, &self.registry)
			.with_context(|| format!("building circuit {}", path.display()))?;
		self.circuits.insert(path, circuit.clone());
		Ok(circuit)
	}

	pub fn hash(&mut self, path: &Path) -> Result<MapHashOracle<F>> {
		let path = fs::canonicalize(path).with_context(|| format!("{}", path.display()))?;
		if let Some(oracle) = self.hashes.get(&path) {
			return Ok(oracle.clone());
		}
		let oracle: MapHashOracle<F> = read_json(&path)?;
		self.hashes.insert(path, oracle.clone());
		Ok(oracle)
	}

	pub fn load(&mut self, path: &Path) -> Result<TestCase<F>> {
		let info: TestCaseInfo<F> = read_json(path)?;
		let dir = path.parent().context("test case path has no parent")?;
		let circuit = self.circuit(&dir.join(&info.circuit))?;
		let oracle = self.hash(&dir.join(&info.hash))?;

		let unwrap = |values: Vec<Vec<Decimal<F>>>| -> Vec<Vec<F>> {
			values
				.into_iter()
				.map(|row| row.into_iter().map(|Decimal(value)| value).collect())
				.collect()
		};
		let inputs = unwrap(info.input);
		let outputs = unwrap(info.output);
		ensure!(
			inputs.len() == circuit.n_inputs(),
			"{} input vectors for {} input wires",
			inputs.len(),
			circuit.n_inputs()
		);

		let name = path
			.file_stem()
			.map(|stem| stem.to_string_lossy().into_owned())
			.unwrap_or_default();
		Ok(TestCase {
			name,
			circuit,
			oracle,
			inputs,
			outputs,
			proof: info.proof,
		})
	}
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
	let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
	serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
