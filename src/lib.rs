//! bytemap: a single-threaded hash map keyed by raw byte sequences, with
//! chained buckets and an optional per-value disposer callback.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a generic byte-keyed table usable where key material is just
//!   "some bytes and a length" — binary records, packed structs, strings
//!   with or without terminators — without a typed-key seam.
//! - Layers:
//!   - fnv: the fixed byte-wise FNV-1a hash. Hashing is not injectable;
//!     every map instance hashes the same way.
//!   - ByteMap<V>: bucket array of chain heads over a slotmap arena of
//!     entries. Keys are copied into owned storage on insert; values move
//!     in and leave exactly once, through the disposer if one is
//!     registered.
//!
//! Constraints
//! - Single-threaded: `!Send`/`!Sync` by design (no atomics, and the
//!   resize path rewrites links with no synchronization).
//! - Keys are owned copies: after `insert` returns, the map never reads
//!   caller memory again. Equality is length-then-bytes; a prefix of a
//!   stored key is a different key.
//! - Chains are acyclic: entries are only ever prepended, and resize
//!   rehomes entries by relinking arena keys, never by moving entries.
//! - Growth only: capacity doubles when the load factor reaches 3/4 and
//!   is never reduced, not even by `clear`.
//! - Reentrancy: the disposer is the only user code the map runs; it is
//!   invoked under a debug-only guard, so reentering the map from a
//!   disposer panics in debug builds.
//!
//! Notes and non-goals
//! - No iteration or enumeration API.
//! - No custom hashers or comparators; the byte-wise strategy is the
//!   whole point of the type.
//! - No capacity introspection beyond `len`/`is_empty`.
//! - No persistence and no concurrent-access story; wrap externally if
//!   the map must be shared.
//! - `remove` reports success, it does not return the value: a removed
//!   value belongs to the disposer when one is registered, and keeping
//!   one uniform signature for both modes avoids a second contract.

mod byte_map;
mod byte_map_proptest;
mod fnv;
mod reentrancy;

// Public surface
pub use byte_map::{ByteMap, InsertError};
