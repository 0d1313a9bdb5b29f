//! Onboarding verification code
//!
//! Format: `DDM` + 4 digits + `-` + 4 digits + `BR`, e.g. `DDM0421-9310BR`.
//! Codes are never stored; the applicant copies one into the motto of their
//! external profile and the gate compares it on confirmation.

use std::fmt;

use rand::Rng;
use serde::Serialize;

const PREFIX: &str = "DDM";
const SEPARATOR: char = '-';
const SUFFIX: &str = "BR";
const GROUP_LEN: usize = 4;

/// A one-time verification code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OnboardingCode(String);

impl OnboardingCode {
    /// Total length of a well-formed code
    pub const LEN: usize = PREFIX.len() + GROUP_LEN + 1 + GROUP_LEN + SUFFIX.len();

    /// Generate a fresh random code
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let first: u16 = rng.gen_range(0..10_000);
        let second: u16 = rng.gen_range(0..10_000);
        Self(format!("{PREFIX}{first:04}{SEPARATOR}{second:04}{SUFFIX}"))
    }

    /// Check that `s` follows the code template
    pub fn is_well_formed(s: &str) -> bool {
        if s.len() != Self::LEN || !s.is_ascii() {
            return false;
        }
        let Some(rest) = s.strip_prefix(PREFIX) else {
            return false;
        };
        let Some(rest) = rest.strip_suffix(SUFFIX) else {
            return false;
        };
        let (first, second) = rest.split_at(GROUP_LEN);
        let Some(second) = second.strip_prefix(SEPARATOR) else {
            return false;
        };
        first.bytes().all(|b| b.is_ascii_digit()) && second.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for OnboardingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
