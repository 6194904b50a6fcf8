//! Result codes: short opaque identifiers for stored results.
//!
//! A [`ResultCode`] is eight characters drawn from [`CODE_ALPHABET`]. The
//! alphabet leaves out characters that are easy to misread (`0`, `O`, `1`,
//! `I`). Codes are stored inline in a `heapless::String`, so they never
//! allocate.
//!
//! Uniqueness is probabilistic: 32⁸ ≈ 1.1 × 10¹² codes. Collision handling
//! belongs to the caller that owns the store (see
//! [`ResultService`](crate::service::ResultService)).

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use heapless::String as InlineString;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::CodeError;

/// Number of characters in a result code.
pub const CODE_LEN: usize = 8;

/// Characters a result code may contain.
pub const CODE_ALPHABET: &[u8; 32] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZ";

/// A validated result code.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct ResultCode(InlineString<CODE_LEN>);

impl ResultCode {
    /// Parse user-supplied text into a code.
    ///
    /// Surrounding whitespace is ignored and lowercase letters are accepted, so
    /// a code typed as `" k7m2q9xz "` finds `K7M2Q9XZ`.
    pub fn parse(input: &str) -> Result<Self, CodeError> {
        let trimmed = input.trim();
        let found = trimmed.chars().count();
        if found != CODE_LEN {
            return Err(CodeError::Length {
                expected: CODE_LEN,
                found,
            });
        }

        let mut code = InlineString::new();
        for ch in trimmed.chars() {
            let upper = ch.to_ascii_uppercase();
            if !upper.is_ascii() || !CODE_ALPHABET.contains(&(upper as u8)) {
                return Err(CodeError::Character(ch));
            }
            code.push(upper).map_err(|_| CodeError::Length {
                expected: CODE_LEN,
                found,
            })?;
        }
        Ok(Self(code))
    }

    /// The code as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResultCode({})", self.as_str())
    }
}

impl FromStr for ResultCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ResultCode {
    type Error = CodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ResultCode> for String {
    fn from(code: ResultCode) -> Self {
        String::from(code.as_str())
    }
}

impl AsRef<str> for ResultCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

// ─── Generation ──────────────────────────────────────────────────────────────

/// Source of fresh result codes.
pub trait CodeGenerator {
    /// Produce the next code. Implementations need not guarantee uniqueness.
    fn next_code(&mut self) -> ResultCode;
}

impl<G: CodeGenerator + ?Sized> CodeGenerator for &mut G {
    fn next_code(&mut self) -> ResultCode {
        (**self).next_code()
    }
}

/// Draws each character uniformly from [`CODE_ALPHABET`].
#[derive(Clone, Debug)]
pub struct AlphabetCodeGenerator<R> {
    rng: R,
}

impl<R: Rng> AlphabetCodeGenerator<R> {
    /// Wrap an RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl AlphabetCodeGenerator<SmallRng> {
    /// Deterministic generator, for tests and reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system.
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_os_rng())
    }
}

impl<R: Rng> CodeGenerator for AlphabetCodeGenerator<R> {
    fn next_code(&mut self) -> ResultCode {
        let mut code = InlineString::new();
        for _ in 0..CODE_LEN {
            let idx = self.rng.random_range(0..CODE_ALPHABET.len());
            // Capacity is exactly CODE_LEN.
            let _ = code.push(char::from(CODE_ALPHABET[idx]));
        }
        ResultCode(code)
    }
}
