//! Account addresses: a key hash tagged with the network it belongs to.
//!
//! The textual form is Base58Check: `version || key_hash || checksum`, where the
//! checksum is the first four bytes of a double SHA-256 over the version and key
//! hash. The version byte selects the network.

use crate::constants::{
    ADDRESS_PAYLOAD_SIZE, CHECKSUM_SIZE, KEY_HASH_SIZE, MAIN_ADDRESS_VERSION, TEST_ADDRESS_VERSION,
};
use crate::error::{PrimitiveError, PrimitiveResult};
use sha2::{Digest, Sha256};
use std::fmt;
use tracing::trace;

/// Network an address is valid on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Main,
    Test,
}

impl Network {
    #[inline]
    #[must_use]
    pub const fn is_test(self) -> bool {
        matches!(self, Network::Test)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Main => f.write_str("mainnet"),
            Network::Test => f.write_str("testnet"),
        }
    }
}

/// Version bytes distinguishing main and test network addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressVersions {
    pub main: u8,
    pub test: u8,
}

impl Default for AddressVersions {
    fn default() -> Self {
        Self {
            main: MAIN_ADDRESS_VERSION,
            test: TEST_ADDRESS_VERSION,
        }
    }
}

impl AddressVersions {
    #[inline]
    #[must_use]
    pub const fn version(&self, network: Network) -> u8 {
        match network {
            Network::Main => self.main,
            Network::Test => self.test,
        }
    }
}

/// A validated account address.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountAddress {
    network: Network,
    key_hash: [u8; KEY_HASH_SIZE],
}

impl AccountAddress {
    #[must_use]
    pub const fn new(network: Network, key_hash: [u8; KEY_HASH_SIZE]) -> Self {
        Self { network, key_hash }
    }

    #[inline]
    #[must_use]
    pub const fn network(&self) -> Network {
        self.network
    }

    #[inline]
    #[must_use]
    pub const fn key_hash(&self) -> &[u8; KEY_HASH_SIZE] {
        &self.key_hash
    }

    /// Encodes the address using the version byte of its network.
    #[must_use]
    pub fn encode(&self, versions: &AddressVersions) -> String {
        let mut data = Vec::with_capacity(ADDRESS_PAYLOAD_SIZE);
        data.push(versions.version(self.network));
        data.extend_from_slice(&self.key_hash);
        let checksum = checksum(&data);
        data.extend_from_slice(&checksum);
        bs58::encode(data).into_string()
    }

    /// Decodes an address, accepting only the version byte of `network`.
    ///
    /// # Errors
    ///
    /// Returns `PrimitiveError` if the string is not valid Base58, has the wrong
    /// decoded length, carries another network's version byte, or fails the
    /// checksum.
    pub fn decode(
        address: &str,
        network: Network,
        versions: &AddressVersions,
    ) -> PrimitiveResult<Self> {
        let decoded = bs58::decode(address)
            .into_vec()
            .map_err(|e| PrimitiveError::InvalidBase58(e.to_string()))?;

        if decoded.len() != ADDRESS_PAYLOAD_SIZE {
            return Err(PrimitiveError::InvalidLength {
                expected: ADDRESS_PAYLOAD_SIZE,
                actual: decoded.len(),
            });
        }

        let expected = versions.version(network);
        if decoded[0] != expected {
            trace!(
                %network,
                expected,
                actual = decoded[0],
                "address version does not match network"
            );
            return Err(PrimitiveError::VersionMismatch {
                expected,
                actual: decoded[0],
            });
        }

        let (data, check) = decoded.split_at(1 + KEY_HASH_SIZE);
        if check != checksum(data) {
            return Err(PrimitiveError::InvalidChecksum);
        }

        let mut key_hash = [0u8; KEY_HASH_SIZE];
        key_hash.copy_from_slice(&data[1..]);
        Ok(Self { network, key_hash })
    }
}

impl fmt::Debug for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AccountAddress({}, {})",
            self.network,
            hex::encode(self.key_hash)
        )
    }
}

fn checksum(data: &[u8]) -> [u8; CHECKSUM_SIZE] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut out = [0u8; CHECKSUM_SIZE];
    out.copy_from_slice(&second[..CHECKSUM_SIZE]);
    out
}
