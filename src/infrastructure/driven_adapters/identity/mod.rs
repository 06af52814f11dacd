//! Identity Verifier Adapters

mod jwks;

pub use jwks::JwksIdentityVerifier;
