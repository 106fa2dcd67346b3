use solana_program_error::ProgramError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum RetailError {
    InvalidInstructionTag,
    InvalidInstructionData,
    InvalidText,
    InsufficientByteLength,
    InvalidAccountDiscriminant,
    InvalidBitPattern,
    NotEnoughAccountKeys,
    IncorrectSystemProgram,
    MismatchedDataLengths,
    ArithmeticOverflow,
    Unauthorized,
    AlreadyInitialized,
    StoreNotFound,
    ProductStoreMismatch,
    FieldTooLong,
    StorageFull,
    SupplierNotFound,
    VerificationRequired,
    UnauthorizedVerifier,
}

impl From<RetailError> for ProgramError {
    #[inline(always)]
    fn from(e: RetailError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl From<RetailError> for &'static str {
    fn from(value: RetailError) -> Self {
        match value {
            RetailError::InvalidInstructionTag => "Invalid instruction tag",
            RetailError::InvalidInstructionData => "Malformed instruction data",
            RetailError::InvalidText => "Text argument is not valid UTF-8",
            RetailError::InsufficientByteLength => "Not enough bytes passed",
            RetailError::InvalidAccountDiscriminant => "Invalid account discriminant",
            RetailError::InvalidBitPattern => "Record bytes hold an invalid bit pattern",
            RetailError::NotEnoughAccountKeys => "Not enough account keys passed",
            RetailError::IncorrectSystemProgram => "Incorrect system program account",
            RetailError::MismatchedDataLengths => "Record length doesn't match account data",
            RetailError::ArithmeticOverflow => "Arithmetic overflow",
            RetailError::Unauthorized => "Caller is not the record's authority or didn't sign",
            RetailError::AlreadyInitialized => "Account already holds a record",
            RetailError::StoreNotFound => "Store record not found",
            RetailError::ProductStoreMismatch => "Product record missing or not owned by the store",
            RetailError::FieldTooLong => "Text field exceeds its fixed capacity",
            RetailError::StorageFull => "Not enough funds or space to allocate the record",
            RetailError::SupplierNotFound => "Supplier record not found",
            RetailError::VerificationRequired => "Supplier must be verified first",
            RetailError::UnauthorizedVerifier => "Caller holds no verifier credential",
        }
    }
}

#[cfg(not(target_os = "solana"))]
impl core::fmt::Display for RetailError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let message: &'static str = (*self).into();
        f.write_str(message)
    }
}

pub type RetailResult = Result<(), RetailError>;
