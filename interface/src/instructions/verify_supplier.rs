use crate::{
    codec::{
        ArgCursor,
        ArgWriter,
    },
    error::RetailError,
    instructions::InstructionTag,
};

/// Marks a supplier as verified. Verifying an already verified supplier is a no-op.
///
/// ### Accounts
///  0. `[SIGNER]` Verifier authority
///  1. `[READ]` Verifier credential account
///  2. `[WRITE]` Supplier account
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifySupplierInstructionData;

impl VerifySupplierInstructionData {
    pub const TAGGED_LEN: usize = 1;

    /// Unpacks the instruction data that follows the tag byte. There are no arguments.
    pub fn unpack(data: &[u8]) -> Result<Self, RetailError> {
        ArgCursor::new(data).finish()?;
        Ok(Self)
    }

    #[inline(always)]
    pub fn tagged_len(&self) -> usize {
        Self::TAGGED_LEN
    }

    pub fn pack_tagged(&self, dst: &mut [u8]) -> Result<usize, RetailError> {
        let mut writer = ArgWriter::new(dst);
        writer.write_u8(InstructionTag::VerifySupplier as u8)?;
        Ok(writer.finish())
    }
}
