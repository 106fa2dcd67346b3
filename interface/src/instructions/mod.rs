use crate::error::RetailError;

pub mod add_product;
pub mod add_supplier_product;
pub mod initialize_store;
pub mod register_supplier;
pub mod register_verifier;
pub mod update_product;
pub mod update_supplier;
pub mod verify_supplier;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(test, derive(strum_macros::FromRepr, strum_macros::EnumIter))]
pub enum InstructionTag {
    InitializeStore,
    AddProduct,
    UpdateProduct,
    RegisterSupplier,
    UpdateSupplier,
    RegisterVerifier,
    VerifySupplier,
    AddSupplierProduct,
}

impl TryFrom<u8> for InstructionTag {
    type Error = RetailError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            // SAFETY: A valid enum variant is guaranteed with the match pattern.
            // All variants are checked in the exhaustive instruction tag test.
            0..8 => Ok(unsafe { core::mem::transmute::<u8, Self>(value) }),
            _ => Err(RetailError::InvalidInstructionTag),
        }
    }
}
