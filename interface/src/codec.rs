//! Cursor-style readers and writers for instruction arguments.
//!
//! Arguments are laid out the same way Borsh lays them out, so off-chain callers can encode them
//! with either this module or Borsh:
//! - text: a u32 LE byte length followed by the UTF-8 bytes
//! - u64: 8 LE bytes
//! - optional u64: a `0` byte, or a `1` byte followed by 8 LE bytes
//! - optional text: a `0` byte, or a `1` byte followed by the text encoding

use crate::{
    error::{
        RetailError,
        RetailResult,
    },
    state::{
        U32_SIZE,
        U64_SIZE,
    },
};

const OPTION_NONE: u8 = 0;
const OPTION_SOME: u8 = 1;

/// Consumes instruction argument bytes front to back.
pub struct ArgCursor<'a> {
    data: &'a [u8],
}

impl<'a> ArgCursor<'a> {
    #[inline(always)]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    #[inline(always)]
    fn take(&mut self, len: usize) -> Result<&'a [u8], RetailError> {
        if self.data.len() < len {
            return Err(RetailError::InsufficientByteLength);
        }
        let (head, tail) = self.data.split_at(len);
        self.data = tail;
        Ok(head)
    }

    #[inline(always)]
    pub fn read_u8(&mut self) -> Result<u8, RetailError> {
        Ok(self.take(1)?[0])
    }

    #[inline(always)]
    pub fn read_u32(&mut self) -> Result<u32, RetailError> {
        let bytes = self.take(U32_SIZE)?;
        <[u8; U32_SIZE]>::try_from(bytes)
            .map(u32::from_le_bytes)
            .map_err(|_| RetailError::InsufficientByteLength)
    }

    #[inline(always)]
    pub fn read_u64(&mut self) -> Result<u64, RetailError> {
        let bytes = self.take(U64_SIZE)?;
        <[u8; U64_SIZE]>::try_from(bytes)
            .map(u64::from_le_bytes)
            .map_err(|_| RetailError::InsufficientByteLength)
    }

    pub fn read_option_u64(&mut self) -> Result<Option<u64>, RetailError> {
        match self.read_u8()? {
            OPTION_NONE => Ok(None),
            OPTION_SOME => self.read_u64().map(Some),
            _ => Err(RetailError::InvalidInstructionData),
        }
    }

    /// Reads a length-prefixed UTF-8 string without copying it.
    ///
    /// The length is not checked against any record capacity here; that happens when the text
    /// is stored.
    pub fn read_text(&mut self) -> Result<&'a str, RetailError> {
        let len = self.read_u32()? as usize;
        let bytes = self.take(len)?;
        core::str::from_utf8(bytes).map_err(|_| RetailError::InvalidText)
    }

    pub fn read_option_text(&mut self) -> Result<Option<&'a str>, RetailError> {
        match self.read_u8()? {
            OPTION_NONE => Ok(None),
            OPTION_SOME => self.read_text().map(Some),
            _ => Err(RetailError::InvalidInstructionData),
        }
    }

    /// Fails if any bytes remain unread.
    #[inline(always)]
    pub fn finish(self) -> RetailResult {
        if !self.data.is_empty() {
            return Err(RetailError::InvalidInstructionData);
        }
        Ok(())
    }
}

/// Writes instruction argument bytes front to back into a caller-provided buffer.
pub struct ArgWriter<'a> {
    dst: &'a mut [u8],
    pos: usize,
}

impl<'a> ArgWriter<'a> {
    #[inline(always)]
    pub fn new(dst: &'a mut [u8]) -> Self {
        Self { dst, pos: 0 }
    }

    fn write_bytes(&mut self, src: &[u8]) -> RetailResult {
        let end = self.pos + src.len();
        self.dst
            .get_mut(self.pos..end)
            .ok_or(RetailError::InsufficientByteLength)?
            .copy_from_slice(src);
        self.pos = end;
        Ok(())
    }

    #[inline(always)]
    pub fn write_u8(&mut self, value: u8) -> RetailResult {
        self.write_bytes(&[value])
    }

    #[inline(always)]
    pub fn write_u64(&mut self, value: u64) -> RetailResult {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_option_u64(&mut self, value: Option<u64>) -> RetailResult {
        match value {
            Some(v) => {
                self.write_u8(OPTION_SOME)?;
                self.write_u64(v)
            }
            None => self.write_u8(OPTION_NONE),
        }
    }

    pub fn write_text(&mut self, text: &str) -> RetailResult {
        let len = u32::try_from(text.len()).map_err(|_| RetailError::FieldTooLong)?;
        self.write_bytes(&len.to_le_bytes())?;
        self.write_bytes(text.as_bytes())
    }

    pub fn write_option_text(&mut self, text: Option<&str>) -> RetailResult {
        match text {
            Some(text) => {
                self.write_u8(OPTION_SOME)?;
                self.write_text(text)
            }
            None => self.write_u8(OPTION_NONE),
        }
    }

    /// Returns the number of bytes written.
    #[inline(always)]
    pub fn finish(self) -> usize {
        self.pos
    }
}

/// The encoded size of a text argument.
#[inline(always)]
pub const fn text_len(text: &str) -> usize {
    U32_SIZE + text.len()
}

/// The encoded size of an optional u64 argument.
#[inline(always)]
pub const fn option_u64_len(value: Option<u64>) -> usize {
    match value {
        Some(_) => 1 + U64_SIZE,
        None => 1,
    }
}

/// The encoded size of an optional text argument.
#[inline(always)]
pub const fn option_text_len(text: Option<&str>) -> usize {
    match text {
        Some(text) => 1 + text_len(text),
        None => 1,
    }
}
