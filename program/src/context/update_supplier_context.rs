//! See [`UpdateSupplierContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use retailchain_interface::error::RetailError;

#[derive(Clone)]
pub struct UpdateSupplierContext<'a> {
    pub authority: &'a AccountView,
    pub supplier_account: &'a AccountView,
}

impl<'a> UpdateSupplierContext<'a> {
    pub fn load(accounts: &'a [AccountView]) -> Result<UpdateSupplierContext<'a>, ProgramError> {
        let [authority, supplier_account, ..] = accounts else {
            return Err(RetailError::NotEnoughAccountKeys.into());
        };

        Ok(Self {
            authority,
            supplier_account,
        })
    }
}
