use crate::{
    codec::{
        text_len,
        ArgCursor,
        ArgWriter,
    },
    error::RetailError,
    instructions::InstructionTag,
};

/// Creates a verifier credential for the signing authority.
///
/// ### Accounts
///  0. `[WRITE, SIGNER]` Verifier authority, also the payer for the credential account
///  1. `[WRITE, SIGNER]` Credential account, a fresh keypair
///  2. `[READ]` System program
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterVerifierInstructionData<'a> {
    pub verification_level: u8,
    pub organization: &'a str,
}

impl<'a> RegisterVerifierInstructionData<'a> {
    /// Unpacks the instruction data that follows the tag byte.
    pub fn unpack(data: &'a [u8]) -> Result<Self, RetailError> {
        let mut cursor = ArgCursor::new(data);
        let verification_level = cursor.read_u8()?;
        let organization = cursor.read_text()?;
        cursor.finish()?;
        Ok(Self {
            verification_level,
            organization,
        })
    }

    /// The packed length including the tag byte.
    #[inline(always)]
    pub fn tagged_len(&self) -> usize {
        1 + 1 + text_len(self.organization)
    }

    /// Packs the tag byte and arguments into `dst`, returning the number of bytes written.
    pub fn pack_tagged(&self, dst: &mut [u8]) -> Result<usize, RetailError> {
        let mut writer = ArgWriter::new(dst);
        writer.write_u8(InstructionTag::RegisterVerifier as u8)?;
        writer.write_u8(self.verification_level)?;
        writer.write_text(self.organization)?;
        Ok(writer.finish())
    }
}
