use solana_address::Address;

pub mod fixed_text;
pub mod product;
pub mod store;
pub mod supplier;
pub mod supplier_product;
pub mod transmutable;
pub mod verifier_credential;

pub const U32_SIZE: usize = core::mem::size_of::<u32>();
pub const U64_SIZE: usize = core::mem::size_of::<u64>();
pub const I64_SIZE: usize = core::mem::size_of::<i64>();

pub type LeU64 = [u8; U64_SIZE];
pub type LeI64 = [u8; I64_SIZE];

pub const SYSTEM_PROGRAM_ID: Address = Address::new_from_array([0u8; 32]);

/// Capacity in bytes of a store's name.
pub const MAX_STORE_NAME_LEN: usize = 32;
/// Capacity in bytes of a store's location.
pub const MAX_LOCATION_LEN: usize = 32;
/// Capacity in bytes of a product's name.
pub const MAX_PRODUCT_NAME_LEN: usize = 32;
/// Capacity in bytes of a product's description.
pub const MAX_DESCRIPTION_LEN: usize = 128;
/// Capacity in bytes of a supplier's name.
pub const MAX_SUPPLIER_NAME_LEN: usize = 64;
/// Capacity in bytes of a supplier's certification.
pub const MAX_CERTIFICATION_LEN: usize = 128;
/// Capacity in bytes of a supplier's description.
pub const MAX_SUPPLIER_DESCRIPTION_LEN: usize = 64;
/// Capacity in bytes of a verifier's organization.
pub const MAX_ORGANIZATION_LEN: usize = 64;
