use pinocchio::{
    account::AccountView,
    Address,
    ProgramResult,
};
use retailchain_interface::{
    error::RetailError,
    instructions::InstructionTag,
};

pub mod add_product;
pub mod add_supplier_product;
pub mod initialize_store;
pub mod register_supplier;
pub mod register_verifier;
pub mod update_product;
pub mod update_supplier;
pub mod verify_supplier;

pub use {
    add_product::process_add_product,
    add_supplier_product::process_add_supplier_product,
    initialize_store::process_initialize_store,
    register_supplier::process_register_supplier,
    register_verifier::process_register_verifier,
    update_product::process_update_product,
    update_supplier::process_update_supplier,
    verify_supplier::process_verify_supplier,
};

#[inline(always)]
pub fn process_instruction(
    _program_id: &Address,
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let [tag, remaining @ ..] = instruction_data else {
        return Err(RetailError::InvalidInstructionTag.into());
    };

    match InstructionTag::try_from(*tag)? {
        InstructionTag::InitializeStore => process_initialize_store(accounts, remaining),
        InstructionTag::AddProduct => process_add_product(accounts, remaining),
        InstructionTag::UpdateProduct => process_update_product(accounts, remaining),
        InstructionTag::RegisterSupplier => process_register_supplier(accounts, remaining),
        InstructionTag::UpdateSupplier => process_update_supplier(accounts, remaining),
        InstructionTag::RegisterVerifier => process_register_verifier(accounts, remaining),
        InstructionTag::VerifySupplier => process_verify_supplier(accounts, remaining),
        InstructionTag::AddSupplierProduct => process_add_supplier_product(accounts, remaining),
    }
}

#[cfg(test)]
mod tests {
    use pinocchio::error::ProgramError;
    use retailchain_interface::{
        error::RetailError,
        instructions::update_product::UpdateProductInstructionData,
        program,
    };

    use super::process_instruction;

    #[test]
    fn empty_or_unknown_tags_are_rejected() {
        assert_eq!(
            process_instruction(&program::ID, &[], &[]),
            Err(ProgramError::from(RetailError::InvalidInstructionTag))
        );
        assert_eq!(
            process_instruction(&program::ID, &[], &[8]),
            Err(ProgramError::from(RetailError::InvalidInstructionTag))
        );
    }

    #[test]
    fn malformed_data_is_rejected_before_accounts_are_read() {
        // `InitializeStore` with a name length prefix but no name bytes.
        assert_eq!(
            process_instruction(&program::ID, &[], &[0, 4, 0, 0, 0]),
            Err(ProgramError::from(RetailError::InsufficientByteLength))
        );
        // `UpdateProduct` with an option flag that is neither 0 nor 1.
        assert_eq!(
            process_instruction(&program::ID, &[], &[2, 2]),
            Err(ProgramError::from(RetailError::InvalidInstructionData))
        );
    }

    #[test]
    fn well_formed_data_still_needs_accounts() {
        let update = UpdateProductInstructionData {
            price: Some(150),
            quantity: None,
        };
        let mut data = [0u8; UpdateProductInstructionData::MAX_TAGGED_LEN];
        let len = update.pack_tagged(&mut data).unwrap();
        assert_eq!(
            process_instruction(&program::ID, &[], &data[..len]),
            Err(ProgramError::from(RetailError::NotEnoughAccountKeys))
        );
    }
}
