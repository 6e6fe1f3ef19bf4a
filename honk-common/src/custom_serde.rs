//! Custom de/serialization logic used to move protocol elements to/from the
//! byte representation shared by the proof stream and the transcript

use alloc::vec::Vec;
use ark_ec::AffineRepr;
use ark_ff::{BigInt, BigInteger, MontConfig, PrimeField, Zero};

use crate::{
    constants::{NUM_BYTES_FELT, NUM_BYTES_U64, NUM_U64S_FELT},
    types::{G1Affine, G1BaseField, MontFp256},
};

/// An error that occurs during de/serialization
#[derive(Debug)]
pub enum SerdeError {
    /// A sequence of deserialized elements is not the expected length
    InvalidLength,
    /// An error in the conversion of a byte string into a field element
    ScalarConversion,
}

// -------------------------------
// | BYTE SERDE TRAIT DEFINITION |
// -------------------------------

/// A trait for serializing types into byte arrays
pub trait BytesSerializable {
    /// Serializes a type into a vector of bytes,
    /// for use in the proof stream or the transcript
    fn serialize_to_bytes(&self) -> Vec<u8>;
}

/// A trait for deserializing types from byte arrays
pub trait BytesDeserializable {
    /// The number of bytes expected to be deserialized
    const SER_LEN: usize;

    /// Deserializes a type from a slice of bytes,
    /// read from the proof stream
    fn deserialize_from_bytes(bytes: &[u8]) -> Result<Self, SerdeError>
    where
        Self: Sized;
}

// -------------------------
// | TRAIT IMPLEMENTATIONS |
// -------------------------

impl BytesSerializable for u64 {
    fn serialize_to_bytes(&self) -> Vec<u8> {
        self.to_be_bytes().to_vec()
    }
}

impl BytesDeserializable for u64 {
    const SER_LEN: usize = NUM_BYTES_U64;

    fn deserialize_from_bytes(bytes: &[u8]) -> Result<Self, SerdeError> {
        Ok(u64::from_be_bytes(
            bytes.try_into().map_err(|_| SerdeError::InvalidLength)?,
        ))
    }
}

impl<P: MontConfig<NUM_U64S_FELT>> BytesSerializable for MontFp256<P> {
    /// Serializes a field element into a big-endian byte array
    fn serialize_to_bytes(&self) -> Vec<u8> {
        self.into_bigint().to_bytes_be()
    }
}

impl<P: MontConfig<NUM_U64S_FELT>> BytesDeserializable for MontFp256<P> {
    const SER_LEN: usize = NUM_BYTES_FELT;

    fn deserialize_from_bytes(bytes: &[u8]) -> Result<Self, SerdeError> {
        // Field elements are serialized as big-endian, so we need to reverse here
        // for `bigint_from_le_bytes`
        let mut bytes = bytes.to_vec();
        bytes.reverse();
        let bigint = bigint_from_le_bytes(&bytes)?;
        Self::from_bigint(bigint).ok_or(SerdeError::ScalarConversion)
    }
}

impl BytesSerializable for G1Affine {
    /// Serializes a G1 point into a big-endian byte array of its coordinates,
    /// with the point at infinity represented as two zero coordinates
    fn serialize_to_bytes(&self) -> Vec<u8> {
        let zero = G1BaseField::zero();
        let (x, y) = self.xy().unwrap_or((&zero, &zero));
        let mut bytes = Vec::with_capacity(NUM_BYTES_FELT * 2);
        bytes.extend(x.serialize_to_bytes());
        bytes.extend(y.serialize_to_bytes());
        bytes
    }
}

impl BytesDeserializable for G1Affine {
    const SER_LEN: usize = NUM_BYTES_FELT * 2;

    fn deserialize_from_bytes(bytes: &[u8]) -> Result<Self, SerdeError> {
        let mut cursor = 0;
        let x = deserialize_cursor(bytes, &mut cursor)?;
        let y = deserialize_cursor(bytes, &mut cursor)?;

        Ok(G1Affine {
            x,
            y,
            infinity: x.is_zero() && y.is_zero(),
        })
    }
}

// -----------
// | HELPERS |
// -----------

/// Deserializes a type from a slice of bytes starting at the cursor position,
/// and increments the cursor by the number of bytes deserialized.
fn deserialize_cursor<D: BytesDeserializable>(
    bytes: &[u8],
    cursor: &mut usize,
) -> Result<D, SerdeError> {
    let elem = D::deserialize_from_bytes(&bytes[*cursor..*cursor + D::SER_LEN])?;
    *cursor += D::SER_LEN;
    Ok(elem)
}

/// Converts a little-endian byte array into a [`BigInt`]
pub fn bigint_from_le_bytes(bytes: &[u8]) -> Result<BigInt<NUM_U64S_FELT>, SerdeError> {
    if bytes.len() > NUM_BYTES_FELT {
        return Err(SerdeError::InvalidLength);
    }

    // This will right-pad the bytes with zero-bytes if the length is less
    // than a full field element
    let mut bytes_to_convert = [0_u8; NUM_BYTES_FELT];
    bytes_to_convert[..bytes.len()].copy_from_slice(bytes);

    let mut u64s = [0u64; NUM_U64S_FELT];
    for i in 0..NUM_U64S_FELT {
        u64s[i] = u64::from_le_bytes(
            bytes_to_convert[i * NUM_BYTES_U64..(i + 1) * NUM_BYTES_U64]
                .try_into()
                // Unwrapping here is safe because we index by the exact number of bytes
                // in a u64
                .unwrap(),
        );
    }
    Ok(BigInt::<NUM_U64S_FELT>(u64s))
}

#[cfg(test)]
mod tests {
    use ark_std::UniformRand;
    use rand::thread_rng;

    use crate::types::{G1Affine, ScalarField};

    use super::{BytesDeserializable, BytesSerializable};

    #[test]
    fn test_g1_byte_serde() {
        let mut rng = thread_rng();
        let a = G1Affine::rand(&mut rng);
        let res = a.serialize_to_bytes();
        let a_prime = G1Affine::deserialize_from_bytes(&res).unwrap();
        assert_eq!(a, a_prime)
    }

    #[test]
    fn test_g1_infinity_serde() {
        let a = G1Affine::identity();
        let res = a.serialize_to_bytes();
        assert!(res.iter().all(|b| *b == 0));

        let a_prime = G1Affine::deserialize_from_bytes(&res).unwrap();
        assert_eq!(a, a_prime)
    }

    #[test]
    fn test_scalar_byte_serde() {
        let mut rng = thread_rng();
        let a = ScalarField::rand(&mut rng);
        let res = a.serialize_to_bytes();
        let a_prime = ScalarField::deserialize_from_bytes(&res).unwrap();
        assert_eq!(a, a_prime)
    }
}
