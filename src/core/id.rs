use std::fmt;

use crate::randomize_bytes;

pub const ID_BYTES: usize = 16;

/// Opaque surrogate key for a record held by a contact store.
///
/// Ids are generated when a record enters the in-memory sequence and live
/// as long as the store instance; they never reach the backing file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id([u8; ID_BYTES]);

impl Id {
    pub fn random() -> Self {
        let mut bytes = [0u8; ID_BYTES];
        randomize_bytes(&mut bytes);
        Id(bytes)
    }

    pub fn to_base58(&self) -> String {
        bs58::encode(self.0)
            .with_alphabet(bs58::Alphabet::DEFAULT)
            .into_string()
    }

    pub fn to_abbr_str(&self) -> String {
        let bs58 = self.to_base58();
        if bs58.len() <= 8 {
            return bs58;
        }
        format!("{}...{}", &bs58[..4], &bs58[bs58.len() - 4..])
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}
