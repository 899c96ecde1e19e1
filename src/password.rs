use sha2::{Digest, Sha512};

/// Turns a plaintext password into the representation sent to the remote API
pub trait PasswordHasher {
  /// Name of the hash format, sent alongside the hashed password
  fn hash_function(&self) -> &str;

  /// Hashes `plaintext`
  fn hash(&self, plaintext: &str) -> String;
}

/// Hex encoded SHA-512 digest of the password
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha512Hasher;

impl PasswordHasher for Sha512Hasher {
  fn hash_function(&self) -> &str {
    "SHA-512"
  }

  fn hash(&self, plaintext: &str) -> String {
    hex::encode(Sha512::digest(plaintext.as_bytes()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn verify_sha512() {
    assert_eq!(
      Sha512Hasher.hash("abc"),
      "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
       2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
    );
    assert_eq!(Sha512Hasher.hash_function(), "SHA-512");
  }
}
