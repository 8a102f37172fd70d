use crm_core::{Error, Result};

use rand::RngCore;
use std::{fmt, str::FromStr};

const SCHEME: &str = "blake3";

/// Work factor of new hashes. Each round is one keyed BLAKE3 pass, so this
/// makes a guess cost about this many hashes.
pub const DEFAULT_ROUNDS: u32 = 200_000;

/// A salted, stretched one-way password hash.
///
/// Stored as `blake3$<rounds>$<salt>$<hash>` with salt and hash hex encoded.
/// The round count is kept with the hash so it can be raised later without
/// invalidating stored passwords. There is no way to recover the password;
/// use [`PasswordHash::verify`].
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash {
    rounds: u32,
    salt: [u8; blake3::KEY_LEN],
    hash: blake3::Hash,
}

impl PasswordHash {
    /// Hashes `password` with a fresh random salt and [`DEFAULT_ROUNDS`].
    pub fn new(password: &str) -> PasswordHash {
        PasswordHash::with_rounds(password, DEFAULT_ROUNDS)
    }

    /// Hashes `password` with a fresh random salt. `rounds` is raised to at
    /// least one.
    pub fn with_rounds(password: &str, rounds: u32) -> PasswordHash {
        let mut salt = [0; blake3::KEY_LEN];
        rand::thread_rng().fill_bytes(&mut salt);

        let rounds = rounds.max(1);

        PasswordHash {
            hash: stretch(&salt, rounds, password),
            rounds,
            salt,
        }
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Returns `true` if `password` is the one this hash was created from.
    pub fn verify(&self, password: &str) -> bool {
        // `blake3::Hash` compares in constant time
        stretch(&self.salt, self.rounds, password) == self.hash
    }
}

/// Chains `rounds` keyed passes, feeding the password into each one.
fn stretch(salt: &[u8; blake3::KEY_LEN], rounds: u32, password: &str) -> blake3::Hash {
    let mut hash = blake3::keyed_hash(salt, password.as_bytes());

    for _ in 1..rounds {
        hash = blake3::Hasher::new_keyed(salt)
            .update(hash.as_bytes())
            .update(password.as_bytes())
            .finalize();
    }

    hash
}

impl fmt::Display for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let salt = blake3::Hash::from_bytes(self.salt);
        write!(
            f,
            "{SCHEME}${}${}${}",
            self.rounds,
            salt.to_hex(),
            self.hash.to_hex()
        )
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

impl FromStr for PasswordHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::validation_invalid("password hash", reason);

        let mut parts = s.split('$');
        let (Some(scheme), Some(rounds), Some(salt), Some(hash), None) = (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) else {
            return Err(invalid("expected `scheme$rounds$salt$hash`"));
        };

        if scheme != SCHEME {
            return Err(invalid(&format!("unsupported scheme `{scheme}`")));
        }

        let rounds = match rounds.parse::<u32>() {
            Ok(rounds) if rounds > 0 => rounds,
            _ => return Err(invalid(&format!("invalid round count `{rounds}`"))),
        };

        let salt = blake3::Hash::from_hex(salt).map_err(|e| invalid(&e.to_string()))?;
        let hash = blake3::Hash::from_hex(hash).map_err(|e| invalid(&e.to_string()))?;

        Ok(PasswordHash {
            rounds,
            salt: *salt.as_bytes(),
            hash,
        })
    }
}

impl<'de> serde::Deserialize<'de> for PasswordHash {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
