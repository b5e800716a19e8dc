// Copyright 2024-2025 Irreducible Inc.

use bytes::{Buf, BufMut};

#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
	#[error("Write buffer is full")]
	WriteBufferFull,
	#[error("Not enough data in read buffer to deserialize")]
	NotEnoughBytes,
	#[error("Length {0} does not fit the u32 length prefix")]
	LengthOverflow(usize),
	#[error("Invalid encoding: {0}")]
	InvalidEncoding(String),
}

/// Represents type that can be serialized to a byte buffer.
pub trait SerializeBytes {
	fn serialize(&self, write_buf: impl BufMut) -> Result<(), Error>;
}

/// Represents type that can be deserialized from a byte buffer.
pub trait DeserializeBytes {
	fn deserialize(read_buf: impl Buf) -> Result<Self, Error>
	where
		Self: Sized;
}

impl SerializeBytes for u32 {
	fn serialize(&self, mut write_buf: impl BufMut) -> Result<(), Error> {
		if write_buf.remaining_mut() < 4 {
			return Err(Error::WriteBufferFull);
		}
		write_buf.put_u32_le(*self);
		Ok(())
	}
}

impl DeserializeBytes for u32 {
	fn deserialize(mut read_buf: impl Buf) -> Result<Self, Error> {
		if read_buf.remaining() < 4 {
			return Err(Error::NotEnoughBytes);
		}
		Ok(read_buf.get_u32_le())
	}
}

/// Lengths travel as little-endian u32.
impl SerializeBytes for usize {
	fn serialize(&self, write_buf: impl BufMut) -> Result<(), Error> {
		let len = u32::try_from(*self).map_err(|_| Error::LengthOverflow(*self))?;
		len.serialize(write_buf)
	}
}

impl DeserializeBytes for usize {
	fn deserialize(read_buf: impl Buf) -> Result<Self, Error> {
		Ok(u32::deserialize(read_buf)? as usize)
	}
}

impl<T: SerializeBytes> SerializeBytes for Vec<T> {
	fn serialize(&self, mut write_buf: impl BufMut) -> Result<(), Error> {
		self.len().serialize(&mut write_buf)?;
		for item in self {
			item.serialize(&mut write_buf)?;
		}
		Ok(())
	}
}

impl<T: DeserializeBytes> DeserializeBytes for Vec<T> {
	fn deserialize(mut read_buf: impl Buf) -> Result<Self, Error> {
		let len = usize::deserialize(&mut read_buf)?;
		// Every encoded item takes at least one byte, so a longer length is certainly corrupt.
		if len > read_buf.remaining() {
			return Err(Error::NotEnoughBytes);
		}
		(0..len).map(|_| T::deserialize(&mut read_buf)).collect()
	}
}
