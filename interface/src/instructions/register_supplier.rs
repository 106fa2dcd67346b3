use crate::{
    codec::{
        text_len,
        ArgCursor,
        ArgWriter,
    },
    error::RetailError,
    instructions::InstructionTag,
};

/// Creates an unverified supplier record controlled by the signing authority.
///
/// ### Accounts
///  0. `[WRITE, SIGNER]` Supplier authority, also the payer for the supplier account
///  1. `[WRITE, SIGNER]` Supplier account, a fresh keypair
///  2. `[READ]` System program
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterSupplierInstructionData<'a> {
    pub name: &'a str,
    pub certification: &'a str,
    pub description: &'a str,
}

impl<'a> RegisterSupplierInstructionData<'a> {
    /// Unpacks the instruction data that follows the tag byte.
    pub fn unpack(data: &'a [u8]) -> Result<Self, RetailError> {
        let mut cursor = ArgCursor::new(data);
        let name = cursor.read_text()?;
        let certification = cursor.read_text()?;
        let description = cursor.read_text()?;
        cursor.finish()?;
        Ok(Self {
            name,
            certification,
            description,
        })
    }

    /// The packed length including the tag byte.
    #[inline(always)]
    pub fn tagged_len(&self) -> usize {
        1 + text_len(self.name) + text_len(self.certification) + text_len(self.description)
    }

    /// Packs the tag byte and arguments into `dst`, returning the number of bytes written.
    pub fn pack_tagged(&self, dst: &mut [u8]) -> Result<usize, RetailError> {
        let mut writer = ArgWriter::new(dst);
        writer.write_u8(InstructionTag::RegisterSupplier as u8)?;
        writer.write_text(self.name)?;
        writer.write_text(self.certification)?;
        writer.write_text(self.description)?;
        Ok(writer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_texts_in_order() {
        let data = RegisterSupplierInstructionData {
            name: "Acme Farms",
            certification: "Organic",
            description: "",
        };
        let mut buf = [0u8; 64];
        let len = data.pack_tagged(&mut buf).unwrap();
        assert_eq!(len, data.tagged_len());
        assert_eq!(buf[0], InstructionTag::RegisterSupplier as u8);
        assert_eq!(&buf[len - 4..len], &0u32.to_le_bytes());
        assert_eq!(
            RegisterSupplierInstructionData::unpack(&buf[1..len]).unwrap(),
            data
        );
    }
}
