// Copyright 2024-2025 Irreducible Inc.

//! Decimal text and byte encodings of prime field elements.
//!
//! Field elements travel through JSON as decimal strings. Parsing additionally accepts a leading
//! minus sign and a single `/` for rationals, so `"-4"` and `"3/5"` denote `p - 4` and
//! `3 * 5^{-1}`.

use ark_ff::PrimeField;
use bytes::{Buf, BufMut};
use gkr_utils::{bail, SerializationError};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, marker::PhantomData};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("empty field element literal")]
	Empty,
	#[error("invalid character {character:?} in field element literal {text:?}")]
	InvalidDigit { text: String, character: char },
	#[error("zero denominator in field element literal {0:?}")]
	ZeroDenominator(String),
}

/// Parse a field element from decimal integer or rational text.
pub fn parse_decimal<F: PrimeField>(text: &str) -> Result<F, Error> {
	let text = text.trim();
	match text.split_once('/') {
		Some((numerator, denominator)) => {
			let numerator = parse_signed::<F>(numerator, text)?;
			let denominator = parse_signed::<F>(denominator, text)?;
			match denominator.inverse() {
				Some(inverse) => Ok(numerator * inverse),
				None => bail!(Error::ZeroDenominator(text.to_string())),
			}
		}
		None => parse_signed(text, text),
	}
}

fn parse_signed<F: PrimeField>(part: &str, text: &str) -> Result<F, Error> {
	let part = part.trim();
	let (negative, digits) = match part.strip_prefix('-') {
		Some(digits) => (true, digits),
		None => (false, part),
	};
	if digits.is_empty() {
		bail!(Error::Empty);
	}

	// `from_str` rejects leading zeros
	let magnitude = match digits.trim_start_matches('0') {
		"" => F::ZERO,
		significant => F::from_str(significant).map_err(|_| Error::InvalidDigit {
			text: text.to_string(),
			character: significant
				.chars()
				.find(|character| !character.is_ascii_digit())
				.unwrap_or_default(),
		})?,
	};
	Ok(if negative { -magnitude } else { magnitude })
}

/// Canonical decimal representation in `0..p`.
pub fn to_decimal<F: PrimeField>(value: &F) -> String {
	value.into_bigint().to_string()
}

/// A field element that (de)serializes as decimal text.
///
/// Deserialization also accepts JSON integers, negative ones included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Decimal<F>(pub F);

impl<F: PrimeField> Serialize for Decimal<F> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&to_decimal(&self.0))
	}
}

impl<'de, F: PrimeField> Deserialize<'de> for Decimal<F> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_any(DecimalVisitor(PhantomData))
	}
}

struct DecimalVisitor<F>(PhantomData<F>);

impl<'de, F: PrimeField> de::Visitor<'de> for DecimalVisitor<F> {
	type Value = Decimal<F>;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("a field element as an integer or as decimal text")
	}

	fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
		Ok(Decimal(F::from(value)))
	}

	fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
		let magnitude = F::from(value.unsigned_abs());
		Ok(Decimal(if value < 0 { -magnitude } else { magnitude }))
	}

	fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
		parse_decimal(value).map(Decimal).map_err(E::custom)
	}
}

/// `#[serde(with = ...)]` adapter for `Vec<F>` stored as a list of decimal strings.
pub mod decimal_seq {
	use super::Decimal;
	use ark_ff::PrimeField;
	use serde::{Deserialize, Deserializer, Serializer};

	pub fn serialize<F: PrimeField, S: Serializer>(
		values: &[F],
		serializer: S,
	) -> Result<S::Ok, S::Error> {
		serializer.collect_seq(values.iter().map(|&value| Decimal(value)))
	}

	pub fn deserialize<'de, F: PrimeField, D: Deserializer<'de>>(
		deserializer: D,
	) -> Result<Vec<F>, D::Error> {
		let values = Vec::<Decimal<F>>::deserialize(deserializer)?;
		Ok(values.into_iter().map(|Decimal(value)| value).collect())
	}
}

/// Writes the canonical compressed encoding of each element, prefixed by the count.
pub fn serialize_elements<F: PrimeField>(
	values: &[F],
	mut write_buf: impl BufMut,
) -> Result<(), SerializationError> {
	gkr_utils::SerializeBytes::serialize(&values.len(), &mut write_buf)?;
	for value in values {
		let size = value.compressed_size();
		if write_buf.remaining_mut() < size {
			bail!(SerializationError::WriteBufferFull);
		}
		value
			.serialize_compressed((&mut write_buf).writer())
			.map_err(|err| SerializationError::InvalidEncoding(err.to_string()))?;
	}
	Ok(())
}

pub fn deserialize_elements<F: PrimeField>(
	mut read_buf: impl Buf,
) -> Result<Vec<F>, SerializationError> {
	let len: usize = gkr_utils::DeserializeBytes::deserialize(&mut read_buf)?;
	let size = F::ZERO.compressed_size();
	if read_buf.remaining() < len.saturating_mul(size) {
		bail!(SerializationError::NotEnoughBytes);
	}
	(0..len)
		.map(|_| {
			F::deserialize_compressed((&mut read_buf).reader())
				.map_err(|err| SerializationError::InvalidEncoding(err.to_string()))
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use ark_bn254::Fr;
	use ark_ff::{Field, UniformRand};
	use assert_matches::assert_matches;
	use rand::{rngs::StdRng, SeedableRng};

	#[test]
	fn test_parse_integers() {
		assert_eq!(parse_decimal::<Fr>("123").unwrap(), Fr::from(123u64));
		assert_eq!(parse_decimal::<Fr>(" 0 ").unwrap(), Fr::ZERO);
		assert_eq!(parse_decimal::<Fr>("-4").unwrap(), -Fr::from(4u64));
	}

	#[test]
	fn test_parse_rationals() {
		let three_fifths = parse_decimal::<Fr>("3/5").unwrap();
		assert_eq!(three_fifths * Fr::from(5u64), Fr::from(3u64));

		let minus_seven_halves = parse_decimal::<Fr>("-7/2").unwrap();
		assert_eq!(minus_seven_halves + minus_seven_halves, -Fr::from(7u64));
	}

	#[test]
	fn test_parse_errors() {
		assert_matches!(parse_decimal::<Fr>(""), Err(Error::Empty));
		assert_matches!(parse_decimal::<Fr>("-"), Err(Error::Empty));
		assert_matches!(
			parse_decimal::<Fr>("12a"),
			Err(Error::InvalidDigit { character: 'a', .. })
		);
		assert_matches!(parse_decimal::<Fr>("1/0"), Err(Error::ZeroDenominator(_)));
	}

	#[test]
	fn test_to_decimal() {
		assert_eq!(to_decimal(&Fr::ZERO), "0");
		assert_eq!(to_decimal(&Fr::from(1234567890123u64)), "1234567890123");
		assert_eq!(
			to_decimal(&-Fr::ONE),
			"21888242871839275222246405745257275088548364400416034343698204186575808495616"
		);
	}

	#[test]
	fn test_parse_leading_zeros() {
		assert_eq!(parse_decimal::<Fr>("007").unwrap(), Fr::from(7u64));
		assert_eq!(parse_decimal::<Fr>("-000").unwrap(), Fr::ZERO);
		assert_eq!(parse_decimal::<Fr>("10/04").unwrap(), parse_decimal::<Fr>("5/2").unwrap());
	}

	#[test]
	fn test_decimal_matches_bigint_display() {
		let mut rng = StdRng::seed_from_u64(0);
		let values = [Fr::ZERO, Fr::ONE, -Fr::ONE, Fr::rand(&mut rng), Fr::rand(&mut rng)];
		for value in values {
			let text = to_decimal(&value);
			assert_eq!(text, value.into_bigint().to_string());
			assert_eq!(parse_decimal::<Fr>(&text).unwrap(), value);
		}
	}

	#[test]
	fn test_decimal_text_is_canonical() {
		let value = parse_decimal::<Fr>("-7/2").unwrap();
		assert_eq!(parse_decimal::<Fr>(&to_decimal(&value)).unwrap(), value);
	}

	#[test]
	fn test_element_bytes_truncated() {
		let values = vec![Fr::from(3u64), -Fr::ONE];
		let mut buf = Vec::new();
		serialize_elements(&values, &mut buf).unwrap();
		assert_eq!(deserialize_elements::<Fr>(buf.as_slice()).unwrap(), values);

		buf.pop();
		assert_matches!(
			deserialize_elements::<Fr>(buf.as_slice()),
			Err(SerializationError::NotEnoughBytes)
		);
	}
}
