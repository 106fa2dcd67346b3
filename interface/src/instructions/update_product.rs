use crate::{
    codec::{
        option_u64_len,
        ArgCursor,
        ArgWriter,
    },
    error::RetailError,
    instructions::InstructionTag,
};

/// Overwrites a product's price and/or quantity. An absent value leaves the field unchanged.
///
/// ### Accounts
///  0. `[SIGNER]` Owner of the store
///  1. `[READ]` Store account
///  2. `[WRITE]` Product account
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateProductInstructionData {
    pub price: Option<u64>,
    pub quantity: Option<u64>,
}

impl UpdateProductInstructionData {
    /// The largest possible packed length including the tag byte.
    pub const MAX_TAGGED_LEN: usize = 1 + 2 * option_u64_len(Some(0));

    /// Unpacks the instruction data that follows the tag byte.
    pub fn unpack(data: &[u8]) -> Result<Self, RetailError> {
        let mut cursor = ArgCursor::new(data);
        let price = cursor.read_option_u64()?;
        let quantity = cursor.read_option_u64()?;
        cursor.finish()?;
        Ok(Self { price, quantity })
    }

    /// The packed length including the tag byte.
    #[inline(always)]
    pub fn tagged_len(&self) -> usize {
        1 + option_u64_len(self.price) + option_u64_len(self.quantity)
    }

    /// Packs the tag byte and arguments into `dst`, returning the number of bytes written.
    pub fn pack_tagged(&self, dst: &mut [u8]) -> Result<usize, RetailError> {
        let mut writer = ArgWriter::new(dst);
        writer.write_u8(InstructionTag::UpdateProduct as u8)?;
        writer.write_option_u64(self.price)?;
        writer.write_option_u64(self.quantity)?;
        Ok(writer.finish())
    }
}
