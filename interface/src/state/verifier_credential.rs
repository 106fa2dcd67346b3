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
        MAX_ORGANIZATION_LEN,
    },
};

pub const VERIFIER_CREDENTIAL_SIZE: usize = 112;
pub const VERIFIER_CREDENTIAL_DISCRIMINANT: u64 = u64::from_le_bytes(*b"rc_verif");

/// Grants its authority the right to mark suppliers as verified.
#[repr(C)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifierCredential {
    /// The u64 credential discriminant as LE bytes.
    discriminant: LeU64,
    /// The signer allowed to verify suppliers with this credential.
    pub authority: Address,
    is_verifier: u8,
    /// Free-form level reported by the verifier. Nothing interprets it.
    pub verification_level: u8,
    pub organization: FixedText<MAX_ORGANIZATION_LEN>,
    // Although not necessary, add extra padding to make the size a multiple of 8.
    _padding: [u8; 5],
}

// Safety:
//
// - Stable layout with `#[repr(C)]` and only byte array fields.
// - `size_of` and `align_of` are checked below.
// - Invalid bit patterns are rejected in `validate_bit_patterns`.
unsafe impl Transmutable for VerifierCredential {
    const LEN: usize = VERIFIER_CREDENTIAL_SIZE;

    fn validate_bit_patterns(bytes: &[u8]) -> RetailResult {
        if read_discriminant(bytes)? != VERIFIER_CREDENTIAL_DISCRIMINANT {
            return Err(RetailError::InvalidAccountDiscriminant);
        }
        if bytes[IS_VERIFIER_OFFSET] > 1 {
            return Err(RetailError::InvalidBitPattern);
        }
        FixedText::<MAX_ORGANIZATION_LEN>::validate(
            &bytes[ORGANIZATION_OFFSET..ORGANIZATION_OFFSET + FixedText::<MAX_ORGANIZATION_LEN>::LEN],
        )
    }
}

const IS_VERIFIER_OFFSET: usize = offset_of!(VerifierCredential, is_verifier);
const ORGANIZATION_OFFSET: usize = offset_of!(VerifierCredential, organization);

const_assert_eq!(VERIFIER_CREDENTIAL_SIZE, size_of::<VerifierCredential>());
const_assert_eq!(align_of::<VerifierCredential>(), 1);

impl VerifierCredential {
    /// Builds an active credential for `authority`.
    pub fn init(
        authority: &Address,
        verification_level: u8,
        organization: &str,
    ) -> Result<Self, RetailError> {
        Ok(VerifierCredential {
            discriminant: VERIFIER_CREDENTIAL_DISCRIMINANT.to_le_bytes(),
            authority: *authority,
            is_verifier: 1,
            verification_level,
            organization: FixedText::new(organization)?,
            _padding: [0; 5],
        })
    }

    #[inline(always)]
    pub fn discriminant(&self) -> u64 {
        u64::from_le_bytes(self.discriminant)
    }

    #[inline(always)]
    pub fn is_verifier(&self) -> bool {
        self.is_verifier == 1
    }

    /// Whether `caller` may verify suppliers with this credential.
    #[inline(always)]
    pub fn grants(&self, caller: &Address) -> bool {
        self.is_verifier() && &self.authority == caller
    }
}
