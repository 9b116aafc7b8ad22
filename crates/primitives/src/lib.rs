//! # nodectl primitives
//!
//! Validated value types handed from the console to the node executor:
//! - `Hash256`: 32-byte block/transaction digest, parsed from 64 hex characters
//! - `AccountAddress`: Base58Check account address tagged with its `Network`
//!
//! ## Example
//!
//! ```rust
//! use nodectl_primitives::{AccountAddress, AddressVersions, Hash256, Network};
//!
//! let digest = Hash256::parse(&"ab".repeat(32)).unwrap();
//! assert_eq!(digest.to_hex_string(), "ab".repeat(32));
//!
//! let versions = AddressVersions::default();
//! let encoded = AccountAddress::new(Network::Test, [7u8; 20]).encode(&versions);
//! let decoded = AccountAddress::decode(&encoded, Network::Test, &versions).unwrap();
//! assert!(decoded.network().is_test());
//! ```

pub mod address;
pub mod constants;
pub mod error;
pub mod hash256;

pub use address::{AccountAddress, AddressVersions, Network};
pub use constants::*;
pub use error::{PrimitiveError, PrimitiveResult};
pub use hash256::Hash256;
