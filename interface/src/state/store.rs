use core::mem::offset_of;

use solana_address::Address;
use static_assertions::const_assert_eq;

use crate::{
    error::{
        RetailError,
        RetailResult,
    },
    state::{
        fixed_text::FixedText,
        transmutable::{
            read_discriminant,
            Transmutable,
        },
        LeU64,
        MAX_LOCATION_LEN,
        MAX_STORE_NAME_LEN,
    },
};

pub const STORE_SIZE: usize = 120;
pub const STORE_ACCOUNT_DISCRIMINANT: u64 = u64::from_le_bytes(*b"rc_store");

#[repr(C)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Store {
    /// The u64 store account discriminant as LE bytes.
    discriminant: LeU64,
    /// The authority permitted to mutate the store and its products.
    pub owner: Address,
    pub name: FixedText<MAX_STORE_NAME_LEN>,
    pub location: FixedText<MAX_LOCATION_LEN>,
    /// The u64 number of products created under this store as LE bytes.
    total_products: LeU64,
    /// Set at creation. Nothing reads or clears it yet.
    is_active: u8,
    // Although not necessary, add extra padding to make the size a multiple of 8.
    _padding: [u8; 5],
}

// Safety:
//
// - Stable layout with `#[repr(C)]` and only byte array fields.
// - `size_of` and `align_of` are checked below.
// - Invalid bit patterns are rejected in `validate_bit_patterns`.
unsafe impl Transmutable for Store {
    const LEN: usize = STORE_SIZE;

    fn validate_bit_patterns(bytes: &[u8]) -> RetailResult {
        if read_discriminant(bytes)? != STORE_ACCOUNT_DISCRIMINANT {
            return Err(RetailError::InvalidAccountDiscriminant);
        }
        FixedText::<MAX_STORE_NAME_LEN>::validate(
            &bytes[NAME_OFFSET..NAME_OFFSET + FixedText::<MAX_STORE_NAME_LEN>::LEN],
        )?;
        FixedText::<MAX_LOCATION_LEN>::validate(
            &bytes[LOCATION_OFFSET..LOCATION_OFFSET + FixedText::<MAX_LOCATION_LEN>::LEN],
        )?;
        if bytes[IS_ACTIVE_OFFSET] > 1 {
            return Err(RetailError::InvalidBitPattern);
        }
        Ok(())
    }
}

const NAME_OFFSET: usize = offset_of!(Store, name);
const LOCATION_OFFSET: usize = offset_of!(Store, location);
const IS_ACTIVE_OFFSET: usize = offset_of!(Store, is_active);

const_assert_eq!(STORE_SIZE, size_of::<Store>());
const_assert_eq!(align_of::<Store>(), 1);

impl Store {
    /// Builds a freshly created store: no products and active.
    pub fn init(owner: &Address, name: &str, location: &str) -> Result<Self, RetailError> {
        Ok(Store {
            discriminant: STORE_ACCOUNT_DISCRIMINANT.to_le_bytes(),
            owner: *owner,
            name: FixedText::new(name)?,
            location: FixedText::new(location)?,
            total_products: [0; 8],
            is_active: 1,
            _padding: [0; 5],
        })
    }

    #[inline(always)]
    pub fn discriminant(&self) -> u64 {
        u64::from_le_bytes(self.discriminant)
    }

    #[inline(always)]
    pub fn total_products(&self) -> u64 {
        u64::from_le_bytes(self.total_products)
    }

    #[inline(always)]
    pub fn try_increment_total_products(&mut self) -> RetailResult {
        let incremented = self
            .total_products()
            .checked_add(1)
            .ok_or(RetailError::ArithmeticOverflow)?;
        self.total_products = incremented.to_le_bytes();
        Ok(())
    }

    #[inline(always)]
    pub fn is_active(&self) -> bool {
        self.is_active == 1
    }
}

#[cfg(test)]
mod tests {
    use solana_address::Address;

    use super::*;
    use crate::state::transmutable::load;

    fn test_store() -> Store {
        Store::init(
            &Address::new_from_array([3u8; 32]),
            "Test Store",
            "Test Location",
        )
        .unwrap()
    }

    #[test]
    fn new_store_is_active_with_no_products() {
        let store = test_store();
        assert_eq!(store.discriminant(), STORE_ACCOUNT_DISCRIMINANT);
        assert_eq!(store.name, "Test Store");
        assert_eq!(store.location, "Test Location");
        assert_eq!(store.total_products(), 0);
        assert!(store.is_active());
    }

    #[test]
    fn store_bytes_load_back() {
        let store = test_store();
        let loaded = load::<Store>(store.as_bytes()).unwrap();
        assert_eq!(loaded, &store);
    }

    #[test]
    fn overlong_labels_are_rejected() {
        let owner = Address::new_from_array([3u8; 32]);
        let long_bytes = [b'x'; MAX_STORE_NAME_LEN + 1];
        let long = core::str::from_utf8(&long_bytes).unwrap();
        assert_eq!(
            Store::init(&owner, long, "here"),
            Err(RetailError::FieldTooLong)
        );
        assert_eq!(
            Store::init(&owner, "name", long),
            Err(RetailError::FieldTooLong)
        );
    }

    #[test]
    fn counter_increments_and_refuses_to_wrap() {
        let mut store = test_store();
        store.try_increment_total_products().unwrap();
        store.try_increment_total_products().unwrap();
        assert_eq!(store.total_products(), 2);

        store.total_products = u64::MAX.to_le_bytes();
        assert_eq!(
            store.try_increment_total_products(),
            Err(RetailError::ArithmeticOverflow)
        );
        assert_eq!(store.total_products(), u64::MAX);
    }

    #[test]
    fn invalid_bytes_fail_to_load() {
        let store = test_store();

        let mut bytes = [0u8; STORE_SIZE];
        bytes.copy_from_slice(store.as_bytes());
        bytes[IS_ACTIVE_OFFSET] = 2;
        assert_eq!(
            load::<Store>(&bytes),
            Err(RetailError::InvalidBitPattern)
        );

        bytes.copy_from_slice(store.as_bytes());
        bytes[0] ^= 0xff;
        assert_eq!(
            load::<Store>(&bytes),
            Err(RetailError::InvalidAccountDiscriminant)
        );

        assert_eq!(
            load::<Store>(&bytes[..STORE_SIZE - 1]),
            Err(RetailError::MismatchedDataLengths)
        );
    }
}
