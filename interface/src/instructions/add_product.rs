use crate::{
    codec::{
        text_len,
        ArgCursor,
        ArgWriter,
    },
    error::RetailError,
    instructions::InstructionTag,
    state::U64_SIZE,
};

/// Creates a product record under a store and bumps the store's product counter.
///
/// ### Accounts
///  0. `[WRITE, SIGNER]` Owner of the store, also the payer for the product account
///  1. `[WRITE]` Store account
///  2. `[WRITE, SIGNER]` Product account, a fresh keypair
///  3. `[READ]` System program
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddProductInstructionData<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price: u64,
    pub quantity: u64,
}

impl<'a> AddProductInstructionData<'a> {
    /// Unpacks the instruction data that follows the tag byte.
    pub fn unpack(data: &'a [u8]) -> Result<Self, RetailError> {
        let mut cursor = ArgCursor::new(data);
        let name = cursor.read_text()?;
        let description = cursor.read_text()?;
        let price = cursor.read_u64()?;
        let quantity = cursor.read_u64()?;
        cursor.finish()?;
        Ok(Self {
            name,
            description,
            price,
            quantity,
        })
    }

    /// The packed length including the tag byte.
    #[inline(always)]
    pub fn tagged_len(&self) -> usize {
        1 + text_len(self.name) + text_len(self.description) + 2 * U64_SIZE
    }

    /// Packs the tag byte and arguments into `dst`, returning the number of bytes written.
    pub fn pack_tagged(&self, dst: &mut [u8]) -> Result<usize, RetailError> {
        let mut writer = ArgWriter::new(dst);
        writer.write_u8(InstructionTag::AddProduct as u8)?;
        writer.write_text(self.name)?;
        writer.write_text(self.description)?;
        writer.write_u64(self.price)?;
        writer.write_u64(self.quantity)?;
        Ok(writer.finish())
    }
}
