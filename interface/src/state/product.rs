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

pub const PRODUCT_SIZE: usize = 232;
pub const PRODUCT_ACCOUNT_DISCRIMINANT: u64 = u64::from_le_bytes(*b"rc_prodt");

#[repr(C)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Product {
    /// The u64 product account discriminant as LE bytes.
    discriminant: LeU64,
    /// The address of the owning store record.
    pub store: Address,
    pub name: FixedText<MAX_PRODUCT_NAME_LEN>,
    pub description: FixedText<MAX_DESCRIPTION_LEN>,
    /// The u64 price in the smallest currency unit as LE bytes.
    price: LeU64,
    /// The u64 unit count as LE bytes.
    quantity: LeU64,
    /// The i64 unix timestamp of the product's creation as LE bytes.
    created_at: LeI64,
    // Although not necessary, add extra padding to make the size a multiple of 8.
    _padding: [u8; 6],
}

// Safety:
//
// - Stable layout with `#[repr(C)]` and only byte array fields.
// - `size_of` and `align_of` are checked below.
// - Invalid bit patterns are rejected in `validate_bit_patterns`.
unsafe impl Transmutable for Product {
    const LEN: usize = PRODUCT_SIZE;

    fn validate_bit_patterns(bytes: &[u8]) -> RetailResult {
        if read_discriminant(bytes)? != PRODUCT_ACCOUNT_DISCRIMINANT {
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

const NAME_OFFSET: usize = offset_of!(Product, name);
const DESCRIPTION_OFFSET: usize = offset_of!(Product, description);

const_assert_eq!(PRODUCT_SIZE, size_of::<Product>());
const_assert_eq!(align_of::<Product>(), 1);

impl Product {
    pub fn init(
        store: &Address,
        name: &str,
        description: &str,
        price: u64,
        quantity: u64,
        created_at: i64,
    ) -> Result<Self, RetailError> {
        Ok(Product {
            discriminant: PRODUCT_ACCOUNT_DISCRIMINANT.to_le_bytes(),
            store: *store,
            name: FixedText::new(name)?,
            description: FixedText::new(description)?,
            price: price.to_le_bytes(),
            quantity: quantity.to_le_bytes(),
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
    pub fn set_price(&mut self, price: u64) {
        self.price = price.to_le_bytes();
    }

    #[inline(always)]
    pub fn quantity(&self) -> u64 {
        u64::from_le_bytes(self.quantity)
    }

    #[inline(always)]
    pub fn set_quantity(&mut self, quantity: u64) {
        self.quantity = quantity.to_le_bytes();
    }

    #[inline(always)]
    pub fn created_at(&self) -> i64 {
        i64::from_le_bytes(self.created_at)
    }

    /// Overwrites whichever of price and quantity are passed. Nothing else changes.
    #[inline(always)]
    pub fn apply_update(&mut self, price: Option<u64>, quantity: Option<u64>) {
        if let Some(price) = price {
            self.set_price(price);
        }
        if let Some(quantity) = quantity {
            self.set_quantity(quantity);
        }
    }
}
