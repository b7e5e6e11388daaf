//! # Secure Type Aliases
//!
//! Secret-holding types built on [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! The wrapped data is zeroized on drop and only reachable through an
//! explicit `.expose_secret()` call.

use secure_gate::dynamic_alias;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────

// Raw symmetric key bytes. Length varies with the algorithm and key size
// (8 for DES, 16/24/32 for AES), so this stays a dynamic secret.
dynamic_alias!(pub KeyMaterial, Vec<u8>);
