/*
 * Responsibility
 * - Public id <-> internal id conversion (encode/decode)
 * - Records are addressed by opaque strings on the wire; the sqids scheme
 *   stays contained here so extractors and handlers never see it
 */
use sqids::Sqids;
use std::{error::Error, fmt};

#[derive(Debug)]
pub enum IdCodecError {
    /// The codec could not be built or an id could not be encoded.
    Codec(sqids::Error),
    /// Internal ids are non-negative by construction; refuse anything else.
    NegativeId(i64),
    /// The public id did not decode to exactly one number.
    Malformed,
    /// The decoded number does not fit in an i64.
    OutOfRange,
}

impl fmt::Display for IdCodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdCodecError::Codec(e) => write!(f, "id codec error: {}", e),
            IdCodecError::NegativeId(id) => write!(f, "id must be non-negative, got {}", id),
            IdCodecError::Malformed => write!(f, "invalid public id format"),
            IdCodecError::OutOfRange => write!(f, "decoded id is out of range"),
        }
    }
}

impl Error for IdCodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            IdCodecError::Codec(e) => Some(e),
            _ => None,
        }
    }
}

impl From<sqids::Error> for IdCodecError {
    fn from(e: sqids::Error) -> Self {
        IdCodecError::Codec(e)
    }
}

#[derive(Clone, Debug)]
pub struct IdCodec {
    sqids: Sqids,
}

impl IdCodec {
    pub fn new(min_length: u8, alphabet: &str) -> Result<Self, IdCodecError> {
        let sqids = Sqids::builder()
            .min_length(min_length)
            .alphabet(alphabet.chars().collect())
            .build()?;

        Ok(Self { sqids })
    }

    pub fn encode(&self, id: i64) -> Result<String, IdCodecError> {
        if id < 0 {
            return Err(IdCodecError::NegativeId(id));
        }
        Ok(self.sqids.encode(&[id as u64])?)
    }

    pub fn decode(&self, public_id: &str) -> Result<i64, IdCodecError> {
        let nums = self.sqids.decode(public_id);
        match nums.as_slice() {
            [n] => i64::try_from(*n).map_err(|_| IdCodecError::OutOfRange),
            _ => Err(IdCodecError::Malformed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> IdCodec {
        IdCodec::new(10, "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789").unwrap()
    }

    #[test]
    fn encodes_and_decodes_round_trip() {
        let codec = codec();
        for id in [0, 1, 42, 9_999_999] {
            let public = codec.encode(id).unwrap();
            assert!(public.len() >= 10);
            assert_eq!(codec.decode(&public).unwrap(), id);
        }
    }

    #[test]
    fn rejects_negative_ids() {
        assert!(matches!(
            codec().encode(-1),
            Err(IdCodecError::NegativeId(-1))
        ));
    }

    #[test]
    fn rejects_garbage_public_ids() {
        // Characters outside the alphabet decode to nothing.
        assert!(matches!(
            codec().decode("!!not-an-id!!"),
            Err(IdCodecError::Malformed)
        ));
        assert!(matches!(codec().decode(""), Err(IdCodecError::Malformed)));
    }
}
