//! Sizes and version bytes shared by the primitive types.

/// Length of a block or transaction digest in bytes.
pub const HASH_SIZE: usize = 32;

/// Length of the key hash carried by an account address.
pub const KEY_HASH_SIZE: usize = 20;

/// Length of the Base58Check checksum suffix.
pub const CHECKSUM_SIZE: usize = 4;

/// Decoded address payload: version byte, key hash, checksum.
pub const ADDRESS_PAYLOAD_SIZE: usize = 1 + KEY_HASH_SIZE + CHECKSUM_SIZE;

/// Address version byte used on the main network.
pub const MAIN_ADDRESS_VERSION: u8 = 0x35;

/// Address version byte used on the test network.
pub const TEST_ADDRESS_VERSION: u8 = 0x6f;
