//! `stockbook-auth` — operator credential hashing and verification.
//!
//! Passwords are stored as salted Argon2id hashes in PHC string format,
//! never as plaintext. The store seeds and verifies operators exclusively
//! through these functions.

pub mod credentials;

pub use credentials::{CredentialError, hash_password, verify_password};
