// Copyright 2024-2025 Irreducible Inc.

use super::{Error, FiatShamirTranscript, HashOracle};
use crate::field::{parse_decimal, to_decimal, Decimal};
use ark_ff::PrimeField;
use serde::{de, Deserialize, Deserializer};
use std::{
	collections::{BTreeMap, BTreeSet},
	sync::{Arc, Mutex, PoisonError},
};

type Key<F> = (F, Option<F>);

/// Lookup-table [`HashOracle`] replaying recorded hash values.
///
/// The table deserializes from a JSON object whose keys are `"m"` (a message hashed onto an empty
/// state) or `"m,s"` (message `m` chained onto state `s`), and whose values are field elements.
///
/// # Panics
///
/// Hashing a key absent from the table panics, naming the key.
///
/// Lookups are recorded so that [`Self::unused_entries`] can report stale table entries. Clones
/// share the record.
#[derive(Debug, Clone, Default)]
pub struct MapHashOracle<F: PrimeField> {
	table: BTreeMap<Key<F>, F>,
	used: Arc<Mutex<BTreeSet<Key<F>>>>,
}

impl<F: PrimeField> PartialEq for MapHashOracle<F> {
	fn eq(&self, other: &Self) -> bool {
		self.table == other.table
	}
}

impl<F: PrimeField> Eq for MapHashOracle<F> {}

impl<F: PrimeField> MapHashOracle<F> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, message: F, prev: Option<F>, value: F) {
		self.table.insert((message, prev), value);
	}

	pub fn len(&self) -> usize {
		self.table.len()
	}

	pub fn is_empty(&self) -> bool {
		self.table.is_empty()
	}

	/// Keys of the entries no lookup has hit so far, in table order.
	pub fn unused_entries(&self) -> Vec<String> {
		let used = self.used.lock().unwrap_or_else(PoisonError::into_inner);
		self.table
			.keys()
			.filter(|key| !used.contains(key))
			.map(|(message, prev)| format_key(message, prev.as_ref()))
			.collect()
	}

	pub fn from_entries<'a>(
		entries: impl IntoIterator<Item = (&'a str, F)>,
	) -> Result<Self, Error> {
		let mut oracle = Self::new();
		for (key, value) in entries {
			let (message, prev) = parse_key(key)?;
			oracle.insert(message, prev, value);
		}
		Ok(oracle)
	}
}

fn format_key<F: PrimeField>(message: &F, prev: Option<&F>) -> String {
	match prev {
		Some(prev) => format!("{},{}", to_decimal(message), to_decimal(prev)),
		None => to_decimal(message),
	}
}

fn parse_key<F: PrimeField>(key: &str) -> Result<Key<F>, Error> {
	let parse = |text: &str| {
		parse_decimal(text).map_err(|source| Error::InvalidKey {
			key: key.to_string(),
			source,
		})
	};

	let parts = key.split(',').collect::<Vec<_>>();
	match parts.as_slice() {
		[message] => Ok((parse(message)?, None)),
		[message, prev] => Ok((parse(message)?, Some(parse(prev)?))),
		_ => Err(Error::InvalidKeyArity {
			key: key.to_string(),
		}),
	}
}

impl<F: PrimeField> HashOracle<F> for MapHashOracle<F> {
	fn hash(&self, message: &F, prev: Option<&F>) -> F {
		let key = (*message, prev.copied());
		match self.table.get(&key) {
			Some(&value) => {
				self.used
					.lock()
					.unwrap_or_else(PoisonError::into_inner)
					.insert(key);
				value
			}
			None => panic!("no value available for input \"{}\"", format_key(message, prev)),
		}
	}
}

impl<'de, F: PrimeField> Deserialize<'de> for MapHashOracle<F> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = BTreeMap::<String, Decimal<F>>::deserialize(deserializer)?;
		Self::from_entries(raw.iter().map(|(key, &Decimal(value))| (key.as_str(), value)))
			.map_err(de::Error::custom)
	}
}

pub type MapHashTranscript<F> = FiatShamirTranscript<F, MapHashOracle<F>>;

#[cfg(test)]
mod tests {
	use super::*;
	use crate::transcript::ArithmeticTranscript;
	use ark_bn254::Fr;
	use ark_ff::Field;
	use assert_matches::assert_matches;

	fn oracle(json: &str) -> MapHashOracle<Fr> {
		serde_json::from_str(json).unwrap()
	}

	#[test]
	fn test_pair_lookup() {
		let oracle = oracle(r#"{"1,2": -4, "1": "3/2"}"#);
		assert_eq!(oracle.hash(&Fr::from(1u64), Some(&Fr::from(2u64))), -Fr::from(4u64));
		assert_eq!(
			oracle.hash(&Fr::from(1u64), None) * Fr::from(2u64),
			Fr::from(3u64)
		);
	}

	#[test]
	fn test_keys_are_field_elements() {
		// "-1" and the canonical form of p - 1 name the same key
		let oracle = oracle(r#"{"-1": 6}"#);
		assert_eq!(oracle.hash(&-Fr::ONE, None), Fr::from(6u64));
	}

	#[test]
	#[should_panic(expected = "no value available for input \"5,0\"")]
	fn test_missing_key_panics() {
		let oracle = oracle(r#"{"5": 1}"#);
		oracle.hash(&Fr::from(5u64), Some(&Fr::ZERO));
	}

	#[test]
	fn test_malformed_keys() {
		assert_matches!(
			MapHashOracle::<Fr>::from_entries([("1,2,3", Fr::ONE)]),
			Err(Error::InvalidKeyArity { .. })
		);
		assert_matches!(
			MapHashOracle::<Fr>::from_entries([("x", Fr::ONE)]),
			Err(Error::InvalidKey { .. })
		);
		assert!(serde_json::from_str::<MapHashOracle<Fr>>(r#"{"1,,": 1}"#).is_err());
	}

	#[test]
	fn test_unused_entries() {
		let table = oracle(r#"{"1": 2, "3,1": 4, "-1": 5}"#);
		let shared = table.clone();
		assert_eq!(table.unused_entries().len(), 3);

		shared.hash(&Fr::ONE, None);
		shared.hash(&Fr::ONE, None);
		let p_minus_one = to_decimal(&-Fr::ONE);
		assert_eq!(table.unused_entries(), vec!["3,1".to_string(), p_minus_one.clone()]);

		table.hash(&Fr::from(3u64), Some(&Fr::ONE));
		assert_eq!(shared.unused_entries(), vec![p_minus_one]);

		// a freshly parsed table starts with a clean record
		assert_eq!(oracle(r#"{"1": 2}"#).unused_entries(), vec!["1".to_string()]);
	}

	#[test]
	fn test_transcript_replays_table() {
		let oracle = oracle(r#"{"0": 10, "7,10": 20, "20": 30}"#);
		let mut transcript = MapHashTranscript::new(oracle);
		transcript.update(&[Fr::ZERO]);
		assert_eq!(transcript.next(&[Fr::from(7u64)]), Fr::from(20u64));
		assert_eq!(transcript.next(&[]), Fr::from(30u64));
	}
}
