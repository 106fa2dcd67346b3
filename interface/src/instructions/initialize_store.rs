use crate::{
    codec::{
        text_len,
        ArgCursor,
        ArgWriter,
    },
    error::RetailError,
    instructions::InstructionTag,
};

/// Creates a store record owned by the signing owner.
///
/// ### Accounts
///  0. `[WRITE, SIGNER]` Owner, also the payer for the store account
///  1. `[WRITE, SIGNER]` Store account, a fresh keypair
///  2. `[READ]` System program
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitializeStoreInstructionData<'a> {
    pub name: &'a str,
    pub location: &'a str,
}

impl<'a> InitializeStoreInstructionData<'a> {
    /// Unpacks the instruction data that follows the tag byte.
    pub fn unpack(data: &'a [u8]) -> Result<Self, RetailError> {
        let mut cursor = ArgCursor::new(data);
        let name = cursor.read_text()?;
        let location = cursor.read_text()?;
        cursor.finish()?;
        Ok(Self { name, location })
    }

    /// The packed length including the tag byte.
    #[inline(always)]
    pub fn tagged_len(&self) -> usize {
        1 + text_len(self.name) + text_len(self.location)
    }

    /// Packs the tag byte and arguments into `dst`, returning the number of bytes written.
    pub fn pack_tagged(&self, dst: &mut [u8]) -> Result<usize, RetailError> {
        let mut writer = ArgWriter::new(dst);
        writer.write_u8(InstructionTag::InitializeStore as u8)?;
        writer.write_text(self.name)?;
        writer.write_text(self.location)?;
        Ok(writer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_then_unpack_untagged() {
        let data = InitializeStoreInstructionData {
            name: "Test Store",
            location: "Test Location",
        };
        let mut buf = [0u8; 64];
        let len = data.pack_tagged(&mut buf).unwrap();
        assert_eq!(len, data.tagged_len());
        assert_eq!(buf[0], InstructionTag::InitializeStore as u8);
        assert_eq!(
            InitializeStoreInstructionData::unpack(&buf[1..len]).unwrap(),
            data
        );
    }

    #[test]
    fn missing_location_is_rejected() {
        let mut buf = [0u8; 64];
        let data = InitializeStoreInstructionData {
            name: "Test Store",
            location: "",
        };
        let len = data.pack_tagged(&mut buf).unwrap();
        // Drop the location's length prefix.
        assert_eq!(
            InitializeStoreInstructionData::unpack(&buf[1..len - 4]),
            Err(RetailError::InsufficientByteLength)
        );
    }
}
