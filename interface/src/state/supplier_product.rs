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
        LeI64,
        LeU64,
        MAX_DESCRIPTION_LEN,
        MAX_PRODUCT_NAME_LEN,
    },
};

pub const SUPPLIER_PRODUCT_SIZE: usize = 232;
pub const SUPPLIER_PRODUCT_ACCOUNT_DISCRIMINANT: u64 = u64::from_le_bytes(*b"rc_catlg");

/// A catalog entry a supplier offers to stores.
#[repr(C)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupplierProduct {
    /// The u64 catalog entry discriminant as LE bytes.
    discriminant: LeU64,
    /// The address of the listing supplier record.
    pub supplier: Address,
    pub name: FixedText<MAX_PRODUCT_NAME_LEN>,
    pub description: FixedText<MAX_DESCRIPTION_LEN>,
    /// The u64 unit price in the smallest currency unit as LE bytes.
    price: LeU64,
    /// The u64 number of units on offer as LE bytes.
    available_quantity: LeU64,
    /// The i64 unix timestamp of the listing as LE bytes.
    created_at: LeI64,
    // Although not necessary, add extra padding to make the size a multiple of 8.
    _padding: [u8; 6],
}

// Safety:
//
// - Stable layout with `#[repr(C)]` and only byte array fields.
// - `size_of` and `align_of` are checked below.
// - Invalid bit patterns are rejected in `validate_bit_patterns`.
unsafe impl Transmutable for SupplierProduct {
    const LEN: usize = SUPPLIER_PRODUCT_SIZE;

    fn validate_bit_patterns(bytes: &[u8]) -> RetailResult {
        if read_discriminant(bytes)? != SUPPLIER_PRODUCT_ACCOUNT_DISCRIMINANT {
            return Err(RetailError::InvalidAccountDiscriminant);
        }
        FixedText::<MAX_PRODUCT_NAME_LEN>::validate(
            &bytes[NAME_OFFSET..NAME_OFFSET + FixedText::<MAX_PRODUCT_NAME_LEN>::LEN],
        )?;
        FixedText::<MAX_DESCRIPTION_LEN>::validate(
            &bytes[DESCRIPTION_OFFSET..DESCRIPTION_OFFSET + FixedText::<MAX_DESCRIPTION_LEN>::LEN],
        )
    }
}

const NAME_OFFSET: usize = offset_of!(SupplierProduct, name);
const DESCRIPTION_OFFSET: usize = offset_of!(SupplierProduct, description);

const_assert_eq!(SUPPLIER_PRODUCT_SIZE, size_of::<SupplierProduct>());
const_assert_eq!(align_of::<SupplierProduct>(), 1);

impl SupplierProduct {
    pub fn init(
        supplier: &Address,
        name: &str,
        description: &str,
        price: u64,
        available_quantity: u64,
        created_at: i64,
    ) -> Result<Self, RetailError> {
        Ok(SupplierProduct {
            discriminant: SUPPLIER_PRODUCT_ACCOUNT_DISCRIMINANT.to_le_bytes(),
            supplier: *supplier,
            name: FixedText::new(name)?,
            description: FixedText::new(description)?,
            price: price.to_le_bytes(),
            available_quantity: available_quantity.to_le_bytes(),
            created_at: created_at.to_le_bytes(),
            _padding: [0; 6],
        })
    }

    #[inline(always)]
    pub fn discriminant(&self) -> u64 {
        u64::from_le_bytes(self.discriminant)
    }

    #[inline(always)]
    pub fn price(&self) -> u64 {
        u64::from_le_bytes(self.price)
    }

    #[inline(always)]
    pub fn available_quantity(&self) -> u64 {
        u64::from_le_bytes(self.available_quantity)
    }

    #[inline(always)]
    pub fn created_at(&self) -> i64 {
        i64::from_le_bytes(self.created_at)
    }
}
