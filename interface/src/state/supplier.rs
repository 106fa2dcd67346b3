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
        MAX_CERTIFICATION_LEN,
        MAX_SUPPLIER_DESCRIPTION_LEN,
        MAX_SUPPLIER_NAME_LEN,
    },
};

pub const SUPPLIER_SIZE: usize = 320;
pub const SUPPLIER_ACCOUNT_DISCRIMINANT: u64 = u64::from_le_bytes(*b"rc_suppl");

/// The highest rating a supplier record can hold.
pub const MAX_RATING: u8 = 5;

#[repr(C)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Supplier {
    /// The u64 supplier account discriminant as LE bytes.
    discriminant: LeU64,
    /// The authority permitted to edit the supplier and list catalog entries.
    pub authority: Address,
    pub name: FixedText<MAX_SUPPLIER_NAME_LEN>,
    pub certification: FixedText<MAX_CERTIFICATION_LEN>,
    pub description: FixedText<MAX_SUPPLIER_DESCRIPTION_LEN>,
    /// The u64 number of catalog entries listed by this supplier as LE bytes.
    products_supplied: LeU64,
    /// Set by a verifier. Catalog entries can only be listed once set.
    is_verified: u8,
    /// Zero at registration. Nothing writes it yet.
    rating: u8,
    /// The i64 unix timestamp of the supplier's registration as LE bytes.
    created_at: LeI64,
    // Although not necessary, add extra padding to make the size a multiple of 8.
    _padding: [u8; 3],
}

// Safety:
//
// - Stable layout with `#[repr(C)]` and only byte array fields.
// - `size_of` and `align_of` are checked below.
// - Invalid bit patterns are rejected in `validate_bit_patterns`.
unsafe impl Transmutable for Supplier {
    const LEN: usize = SUPPLIER_SIZE;

    fn validate_bit_patterns(bytes: &[u8]) -> RetailResult {
        if read_discriminant(bytes)? != SUPPLIER_ACCOUNT_DISCRIMINANT {
            return Err(RetailError::InvalidAccountDiscriminant);
        }
        FixedText::<MAX_SUPPLIER_NAME_LEN>::validate(
            &bytes[NAME_OFFSET..NAME_OFFSET + FixedText::<MAX_SUPPLIER_NAME_LEN>::LEN],
        )?;
        FixedText::<MAX_CERTIFICATION_LEN>::validate(
            &bytes[CERTIFICATION_OFFSET
                ..CERTIFICATION_OFFSET + FixedText::<MAX_CERTIFICATION_LEN>::LEN],
        )?;
        FixedText::<MAX_SUPPLIER_DESCRIPTION_LEN>::validate(
            &bytes[DESCRIPTION_OFFSET
                ..DESCRIPTION_OFFSET + FixedText::<MAX_SUPPLIER_DESCRIPTION_LEN>::LEN],
        )?;
        if bytes[IS_VERIFIED_OFFSET] > 1 || bytes[RATING_OFFSET] > MAX_RATING {
            return Err(RetailError::InvalidBitPattern);
        }
        Ok(())
    }
}

const NAME_OFFSET: usize = offset_of!(Supplier, name);
const CERTIFICATION_OFFSET: usize = offset_of!(Supplier, certification);
const DESCRIPTION_OFFSET: usize = offset_of!(Supplier, description);
const IS_VERIFIED_OFFSET: usize = offset_of!(Supplier, is_verified);
const RATING_OFFSET: usize = offset_of!(Supplier, rating);

const_assert_eq!(SUPPLIER_SIZE, size_of::<Supplier>());
const_assert_eq!(align_of::<Supplier>(), 1);

impl Supplier {
    /// Builds a freshly registered supplier: unverified, unrated, with an empty catalog.
    pub fn init(
        authority: &Address,
        name: &str,
        certification: &str,
        description: &str,
        created_at: i64,
    ) -> Result<Self, RetailError> {
        Ok(Supplier {
            discriminant: SUPPLIER_ACCOUNT_DISCRIMINANT.to_le_bytes(),
            authority: *authority,
            name: FixedText::new(name)?,
            certification: FixedText::new(certification)?,
            description: FixedText::new(description)?,
            products_supplied: [0; 8],
            is_verified: 0,
            rating: 0,
            created_at: created_at.to_le_bytes(),
            _padding: [0; 3],
        })
    }

    #[inline(always)]
    pub fn discriminant(&self) -> u64 {
        u64::from_le_bytes(self.discriminant)
    }

    #[inline(always)]
    pub fn products_supplied(&self) -> u64 {
        u64::from_le_bytes(self.products_supplied)
    }

    #[inline(always)]
    pub fn try_increment_products_supplied(&mut self) -> RetailResult {
        let incremented = self
            .products_supplied()
            .checked_add(1)
            .ok_or(RetailError::ArithmeticOverflow)?;
        self.products_supplied = incremented.to_le_bytes();
        Ok(())
    }

    #[inline(always)]
    pub fn is_verified(&self) -> bool {
        self.is_verified == 1
    }

    #[inline(always)]
    pub fn mark_verified(&mut self) {
        self.is_verified = 1;
    }

    #[inline(always)]
    pub fn rating(&self) -> u8 {
        self.rating
    }

    #[inline(always)]
    pub fn created_at(&self) -> i64 {
        i64::from_le_bytes(self.created_at)
    }

    /// Overwrites whichever of certification and description are passed.
    ///
    /// Both values are checked before either is written, so an overlong value leaves the record
    /// untouched.
    pub fn apply_update(
        &mut self,
        certification: Option<&str>,
        description: Option<&str>,
    ) -> RetailResult {
        let certification: Option<FixedText<MAX_CERTIFICATION_LEN>> =
            certification.map(FixedText::new).transpose()?;
        let description: Option<FixedText<MAX_SUPPLIER_DESCRIPTION_LEN>> =
            description.map(FixedText::new).transpose()?;
        if let Some(certification) = certification {
            self.certification = certification;
        }
        if let Some(description) = description {
            self.description = description;
        }
        Ok(())
    }
}
