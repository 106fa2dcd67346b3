// Derived from `pinocchio-token-interface` – commit 75116550519a9ee3fdfa6c819aca91e383fffa39, Apache-2.0.
// Modifications by DASMAC, 2025. See: https://github.com/solana-program/token

use crate::error::{
    RetailError,
    RetailResult,
};

/// Marker trait for a zero-copy view of bytes as `&Self` via an unchecked cast
/// (e.g., `&*(bytes.as_ptr() as *const Self)`).
///
/// # Safety
/// **Implementor guarantees:**
/// - Use a stable layout (`#[repr(C)]` or `#[repr(transparent)]`) with no padding between fields.
/// - `size_of::<Self> == LEN`
/// - `align_of::<Self> == 1`
/// - Any `LEN` bytes that pass [`Transmutable::validate_bit_patterns`] form a valid `Self`.
pub unsafe trait Transmutable: Sized {
    /// The cumulative size in bytes of all fields in the struct.
    const LEN: usize;

    /// Checks the bytes for invalid bit patterns; e.g., a `bool` byte that isn't 0 or 1.
    ///
    /// Callers pass exactly `LEN` bytes.
    fn validate_bit_patterns(bytes: &[u8]) -> RetailResult;

    /// Returns the raw bytes of `Self`.
    #[inline(always)]
    fn as_bytes(&self) -> &[u8] {
        // Safety: The implementor guarantees a padding-free layout of exactly `LEN` bytes.
        unsafe { core::slice::from_raw_parts(self as *const Self as *const u8, Self::LEN) }
    }
}

/// Returns a reference to a `T: Transmutable` from the given bytes after checking the byte length
/// and the bit patterns.
#[inline(always)]
pub fn load<T: Transmutable>(bytes: &[u8]) -> Result<&T, RetailError> {
    if bytes.len() != T::LEN {
        return Err(RetailError::MismatchedDataLengths);
    }
    T::validate_bit_patterns(bytes)?;
    // Safety: The length and bit patterns were just checked and `T` has an alignment of 1.
    Ok(unsafe { &*(bytes.as_ptr() as *const T) })
}

/// Returns a mutable reference to a `T: Transmutable` from the given bytes after checking the
/// byte length and the bit patterns.
#[inline(always)]
pub fn load_mut<T: Transmutable>(bytes: &mut [u8]) -> Result<&mut T, RetailError> {
    if bytes.len() != T::LEN {
        return Err(RetailError::MismatchedDataLengths);
    }
    T::validate_bit_patterns(bytes)?;
    // Safety: The length and bit patterns were just checked and `T` has an alignment of 1.
    Ok(unsafe { &mut *(bytes.as_mut_ptr() as *mut T) })
}

/// Reads a little-endian u64 discriminant from the first 8 bytes.
#[inline(always)]
pub(crate) fn read_discriminant(bytes: &[u8]) -> Result<u64, RetailError> {
    bytes
        .get(..8)
        .and_then(|b| <[u8; 8]>::try_from(b).ok())
        .map(u64::from_le_bytes)
        .ok_or(RetailError::InsufficientByteLength)
}
