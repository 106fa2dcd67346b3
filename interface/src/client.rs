//! Off-chain instruction builders. Each builder produces the account metas and packed instruction
//! data in the order the program expects.

use solana_address::Address;
use solana_instruction::{
    AccountMeta,
    Instruction,
};
use std::vec;
use std::vec::Vec;

use crate::{
    error::RetailError,
    instructions::{
        add_product::AddProductInstructionData,
        add_supplier_product::AddSupplierProductInstructionData,
        initialize_store::InitializeStoreInstructionData,
        register_supplier::RegisterSupplierInstructionData,
        register_verifier::RegisterVerifierInstructionData,
        update_product::UpdateProductInstructionData,
        update_supplier::UpdateSupplierInstructionData,
        verify_supplier::VerifySupplierInstructionData,
    },
    program,
    state::SYSTEM_PROGRAM_ID,
};

/// See [`InitializeStoreInstructionData`].
pub struct InitializeStore<'a> {
    /// The store's owner and the payer for the store account.
    pub owner: &'a Address,
    /// The fresh store account. Must also sign the transaction.
    pub store: &'a Address,
    pub name: &'a str,
    pub location: &'a str,
}

impl InitializeStore<'_> {
    pub fn create_account_metas(&self) -> [AccountMeta; 3] {
        [
            AccountMeta::new(*self.owner, true),
            AccountMeta::new(*self.store, true),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ]
    }

    pub fn pack_instruction_data(&self) -> Result<Vec<u8>, RetailError> {
        let data = InitializeStoreInstructionData {
            name: self.name,
            location: self.location,
        };
        let mut bytes = vec![0u8; data.tagged_len()];
        data.pack_tagged(&mut bytes)?;
        Ok(bytes)
    }

    pub fn instruction(&self) -> Result<Instruction, RetailError> {
        Ok(Instruction {
            program_id: program::ID,
            accounts: self.create_account_metas().to_vec(),
            data: self.pack_instruction_data()?,
        })
    }
}

/// See [`AddProductInstructionData`].
pub struct AddProduct<'a> {
    /// The store's owner and the payer for the product account.
    pub owner: &'a Address,
    pub store: &'a Address,
    /// The fresh product account. Must also sign the transaction.
    pub product: &'a Address,
    pub name: &'a str,
    pub description: &'a str,
    pub price: u64,
    pub quantity: u64,
}

impl AddProduct<'_> {
    pub fn create_account_metas(&self) -> [AccountMeta; 4] {
        [
            AccountMeta::new(*self.owner, true),
            AccountMeta::new(*self.store, false),
            AccountMeta::new(*self.product, true),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ]
    }

    pub fn pack_instruction_data(&self) -> Result<Vec<u8>, RetailError> {
        let data = AddProductInstructionData {
            name: self.name,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
        };
        let mut bytes = vec![0u8; data.tagged_len()];
        data.pack_tagged(&mut bytes)?;
        Ok(bytes)
    }

    pub fn instruction(&self) -> Result<Instruction, RetailError> {
        Ok(Instruction {
            program_id: program::ID,
            accounts: self.create_account_metas().to_vec(),
            data: self.pack_instruction_data()?,
        })
    }
}

/// See [`UpdateProductInstructionData`].
pub struct UpdateProduct<'a> {
    pub owner: &'a Address,
    pub store: &'a Address,
    pub product: &'a Address,
    pub price: Option<u64>,
    pub quantity: Option<u64>,
}

impl UpdateProduct<'_> {
    pub fn create_account_metas(&self) -> [AccountMeta; 3] {
        [
            AccountMeta::new_readonly(*self.owner, true),
            AccountMeta::new_readonly(*self.store, false),
            AccountMeta::new(*self.product, false),
        ]
    }

    pub fn pack_instruction_data(&self) -> Result<Vec<u8>, RetailError> {
        let data = UpdateProductInstructionData {
            price: self.price,
            quantity: self.quantity,
        };
        let mut bytes = vec![0u8; data.tagged_len()];
        data.pack_tagged(&mut bytes)?;
        Ok(bytes)
    }

    pub fn instruction(&self) -> Result<Instruction, RetailError> {
        Ok(Instruction {
            program_id: program::ID,
            accounts: self.create_account_metas().to_vec(),
            data: self.pack_instruction_data()?,
        })
    }
}

/// See [`RegisterSupplierInstructionData`].
pub struct RegisterSupplier<'a> {
    /// The supplier's authority and the payer for the supplier account.
    pub authority: &'a Address,
    /// The fresh supplier account. Must also sign the transaction.
    pub supplier: &'a Address,
    pub name: &'a str,
    pub certification: &'a str,
    pub description: &'a str,
}

impl RegisterSupplier<'_> {
    pub fn create_account_metas(&self) -> [AccountMeta; 3] {
        [
            AccountMeta::new(*self.authority, true),
            AccountMeta::new(*self.supplier, true),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ]
    }

    pub fn pack_instruction_data(&self) -> Result<Vec<u8>, RetailError> {
        let data = RegisterSupplierInstructionData {
            name: self.name,
            certification: self.certification,
            description: self.description,
        };
        let mut bytes = vec![0u8; data.tagged_len()];
        data.pack_tagged(&mut bytes)?;
        Ok(bytes)
    }

    pub fn instruction(&self) -> Result<Instruction, RetailError> {
        Ok(Instruction {
            program_id: program::ID,
            accounts: self.create_account_metas().to_vec(),
            data: self.pack_instruction_data()?,
        })
    }
}

/// See [`UpdateSupplierInstructionData`].
pub struct UpdateSupplier<'a> {
    pub authority: &'a Address,
    pub supplier: &'a Address,
    pub certification: Option<&'a str>,
    pub description: Option<&'a str>,
}

impl UpdateSupplier<'_> {
    pub fn create_account_metas(&self) -> [AccountMeta; 2] {
        [
            AccountMeta::new_readonly(*self.authority, true),
            AccountMeta::new(*self.supplier, false),
        ]
    }

    pub fn pack_instruction_data(&self) -> Result<Vec<u8>, RetailError> {
        let data = UpdateSupplierInstructionData {
            certification: self.certification,
            description: self.description,
        };
        let mut bytes = vec![0u8; data.tagged_len()];
        data.pack_tagged(&mut bytes)?;
        Ok(bytes)
    }

    pub fn instruction(&self) -> Result<Instruction, RetailError> {
        Ok(Instruction {
            program_id: program::ID,
            accounts: self.create_account_metas().to_vec(),
            data: self.pack_instruction_data()?,
        })
    }
}

/// See [`RegisterVerifierInstructionData`].
pub struct RegisterVerifier<'a> {
    /// The verifier and the payer for the credential account.
    pub authority: &'a Address,
    /// The fresh credential account. Must also sign the transaction.
    pub credential: &'a Address,
    pub verification_level: u8,
    pub organization: &'a str,
}

impl RegisterVerifier<'_> {
    pub fn create_account_metas(&self) -> [AccountMeta; 3] {
        [
            AccountMeta::new(*self.authority, true),
            AccountMeta::new(*self.credential, true),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ]
    }

    pub fn pack_instruction_data(&self) -> Result<Vec<u8>, RetailError> {
        let data = RegisterVerifierInstructionData {
            verification_level: self.verification_level,
            organization: self.organization,
        };
        let mut bytes = vec![0u8; data.tagged_len()];
        data.pack_tagged(&mut bytes)?;
        Ok(bytes)
    }

    pub fn instruction(&self) -> Result<Instruction, RetailError> {
        Ok(Instruction {
            program_id: program::ID,
            accounts: self.create_account_metas().to_vec(),
            data: self.pack_instruction_data()?,
        })
    }
}

/// See [`VerifySupplierInstructionData`].
pub struct VerifySupplier<'a> {
    pub verifier: &'a Address,
    pub credential: &'a Address,
    pub supplier: &'a Address,
}

impl VerifySupplier<'_> {
    pub fn create_account_metas(&self) -> [AccountMeta; 3] {
        [
            AccountMeta::new_readonly(*self.verifier, true),
            AccountMeta::new_readonly(*self.credential, false),
            AccountMeta::new(*self.supplier, false),
        ]
    }

    pub fn pack_instruction_data(&self) -> Result<Vec<u8>, RetailError> {
        let data = VerifySupplierInstructionData;
        let mut bytes = vec![0u8; data.tagged_len()];
        data.pack_tagged(&mut bytes)?;
        Ok(bytes)
    }

    pub fn instruction(&self) -> Result<Instruction, RetailError> {
        Ok(Instruction {
            program_id: program::ID,
            accounts: self.create_account_metas().to_vec(),
            data: self.pack_instruction_data()?,
        })
    }
}

/// See [`AddSupplierProductInstructionData`].
pub struct AddSupplierProduct<'a> {
    /// The supplier's authority and the payer for the catalog entry account.
    pub authority: &'a Address,
    pub supplier: &'a Address,
    /// The fresh catalog entry account. Must also sign the transaction.
    pub supplier_product: &'a Address,
    pub name: &'a str,
    pub description: &'a str,
    pub price: u64,
    pub available_quantity: u64,
}

impl AddSupplierProduct<'_> {
    pub fn create_account_metas(&self) -> [AccountMeta; 4] {
        [
            AccountMeta::new(*self.authority, true),
            AccountMeta::new(*self.supplier, false),
            AccountMeta::new(*self.supplier_product, true),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ]
    }

    pub fn pack_instruction_data(&self) -> Result<Vec<u8>, RetailError> {
        let data = AddSupplierProductInstructionData {
            name: self.name,
            description: self.description,
            price: self.price,
            available_quantity: self.available_quantity,
        };
        let mut bytes = vec![0u8; data.tagged_len()];
        data.pack_tagged(&mut bytes)?;
        Ok(bytes)
    }

    pub fn instruction(&self) -> Result<Instruction, RetailError> {
        Ok(Instruction {
            program_id: program::ID,
            accounts: self.create_account_metas().to_vec(),
            data: self.pack_instruction_data()?,
        })
    }
}
