//! Style identity fingerprints.
//!
//! Every style-bearing object in the chart model can produce a hash code: a
//! deterministic fingerprint over its observable state. Writers compare hash
//! codes to decide whether an object needs its own entry in the output
//! package or can reuse one that was already emitted.
//!
//! Fingerprints are lowercase hex SHA-256 digests. They identify styles and
//! carry no integrity guarantee.

use sha2::{Digest, Sha256};
use std::fmt::Write;

/// Delimiter appended after every fingerprint part.
const PART_SEPARATOR: u8 = 0x1F;

/// Objects that take part in style de-duplication.
///
/// The hash index is an externally assigned slot. Its value is only
/// meaningful while a writer is registering objects; nothing inside the
/// model reads it.
pub trait ComparableObject {
    /// Deterministic fingerprint of the object's observable state.
    fn hash_code(&self) -> String;

    /// Slot assigned by the last registry that saw this object.
    fn hash_index(&self) -> Option<usize>;

    /// Assign the registry slot.
    fn set_hash_index(&mut self, index: Option<usize>);
}

/// Incremental builder for hash codes.
///
/// # Examples
///
/// ```rust
/// use slidechart::common::Fingerprint;
///
/// let a = Fingerprint::new().part("Title").float(0.5).finish();
/// let b = Fingerprint::new().part("Title").float(0.5).finish();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 64);
/// ```
#[derive(Clone, Default)]
pub struct Fingerprint {
    hasher: Sha256,
}

impl Fingerprint {
    /// Start an empty fingerprint.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a string part.
    #[inline]
    pub fn part(mut self, value: &str) -> Self {
        self.hasher.update(value.as_bytes());
        self.hasher.update([PART_SEPARATOR]);
        self
    }

    /// Append an optional string part. `None` and `Some("")` differ.
    #[inline]
    pub fn opt_part(self, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.part("1").part(value),
            None => self.part("0"),
        }
    }

    /// Append an integer part in decimal form.
    #[inline]
    pub fn int<I: itoa::Integer>(self, value: I) -> Self {
        let mut buffer = itoa::Buffer::new();
        let text = buffer.format(value);
        self.part(text)
    }

    /// Append a float part in shortest round-trip form.
    #[inline]
    pub fn float(self, value: f64) -> Self {
        let mut buffer = ryu::Buffer::new();
        let text = buffer.format(value);
        self.part(text)
    }

    /// Append a boolean part.
    #[inline]
    pub fn flag(self, value: bool) -> Self {
        self.part(if value { "1" } else { "0" })
    }

    /// Finish and render the fingerprint as lowercase hex.
    pub fn finish(self) -> String {
        let digest = self.hasher.finalize();
        let mut out = String::with_capacity(digest.len() * 2);
        for byte in digest.iter() {
            let _ = write!(out, "{:02x}", byte);
        }
        out
    }
}
