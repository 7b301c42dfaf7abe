//! SHA-256 fingerprint of the catalog fields the navigation tree reads.

use std::fmt;

use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    pub fn builder() -> FingerprintBuilder {
        FingerprintBuilder(Sha256::new())
    }

    /// First 12 hex digits, for log lines
    pub fn short(&self) -> String {
        self.0[..6].iter().map(|byte| format!("{byte:02x}")).collect()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("sha256:")?;
        self.0.iter().try_for_each(|byte| write!(f, "{byte:02x}"))
    }
}

/// Fields are length-prefixed, so `["ab", "c"]` and `["a", "bc"]` differ.
pub struct FingerprintBuilder(Sha256);

impl FingerprintBuilder {
    pub fn field(&mut self, value: &str) -> &mut Self {
        self.0.update((value.len() as u64).to_le_bytes());
        self.0.update(value.as_bytes());
        self
    }

    /// An absent level hashes differently from any present name.
    pub fn optional(&mut self, value: Option<&str>) -> &mut Self {
        match value {
            Some(name) => self.field("+").field(name),
            None => self.field("-"),
        }
    }

    pub fn finish(self) -> Fingerprint {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&self.0.finalize());
        Fingerprint(bytes)
    }
}
