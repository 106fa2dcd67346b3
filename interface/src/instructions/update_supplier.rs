use crate::{
    codec::{
        option_text_len,
        ArgCursor,
        ArgWriter,
    },
    error::RetailError,
    instructions::InstructionTag,
};

/// Overwrites a supplier's certification and/or description. An absent value leaves the field
/// unchanged.
///
/// ### Accounts
///  0. `[SIGNER]` Supplier authority
///  1. `[WRITE]` Supplier account
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateSupplierInstructionData<'a> {
    pub certification: Option<&'a str>,
    pub description: Option<&'a str>,
}

impl<'a> UpdateSupplierInstructionData<'a> {
    /// Unpacks the instruction data that follows the tag byte.
    pub fn unpack(data: &'a [u8]) -> Result<Self, RetailError> {
        let mut cursor = ArgCursor::new(data);
        let certification = cursor.read_option_text()?;
        let description = cursor.read_option_text()?;
        cursor.finish()?;
        Ok(Self {
            certification,
            description,
        })
    }

    /// The packed length including the tag byte.
    #[inline(always)]
    pub fn tagged_len(&self) -> usize {
        1 + option_text_len(self.certification) + option_text_len(self.description)
    }

    /// Packs the tag byte and arguments into `dst`, returning the number of bytes written.
    pub fn pack_tagged(&self, dst: &mut [u8]) -> Result<usize, RetailError> {
        let mut writer = ArgWriter::new(dst);
        writer.write_u8(InstructionTag::UpdateSupplier as u8)?;
        writer.write_option_text(self.certification)?;
        writer.write_option_text(self.description)?;
        Ok(writer.finish())
    }
}
