use core::fmt;

use crate::error::{
    RetailError,
    RetailResult,
};

/// A fixed-capacity UTF-8 text field: one length byte followed by `N` bytes.
///
/// Bytes past the length are always zero. Text longer than `N` bytes is rejected rather than
/// truncated.
#[repr(C)]
#[derive(Clone, PartialEq, Eq)]
pub struct FixedText<const N: usize> {
    len: u8,
    bytes: [u8; N],
}

impl<const N: usize> FixedText<N> {
    /// The size in bytes of the field in a record.
    pub const LEN: usize = 1 + N;

    const CAPACITY_FITS_IN_LEN_BYTE: () = assert!(N <= u8::MAX as usize);

    pub fn new(text: &str) -> Result<Self, RetailError> {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_FITS_IN_LEN_BYTE;

        if text.len() > N {
            return Err(RetailError::FieldTooLong);
        }

        let mut bytes = [0u8; N];
        bytes[..text.len()].copy_from_slice(text.as_bytes());
        Ok(Self {
            len: text.len() as u8,
            bytes,
        })
    }

    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        (self.len as usize).min(N)
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The stored text. Records are validated when loaded, so this is never lossy for loaded or
    /// constructed values.
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.bytes[..self.len()]).unwrap_or_default()
    }

    /// Validates the `1 + N` raw bytes of a stored field.
    pub fn validate(field: &[u8]) -> RetailResult {
        let [len, text @ ..] = field else {
            return Err(RetailError::InsufficientByteLength);
        };
        let len = *len as usize;
        if text.len() != N || len > N {
            return Err(RetailError::InvalidBitPattern);
        }
        let (used, unused) = text.split_at(len);
        if core::str::from_utf8(used).is_err() || unused.iter().any(|b| *b != 0) {
            return Err(RetailError::InvalidBitPattern);
        }
        Ok(())
    }
}

impl<const N: usize> PartialEq<str> for FixedText<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> PartialEq<&str> for FixedText<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<const N: usize> fmt::Debug for FixedText<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}
