//! See [`VerifySupplierContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use retailchain_interface::error::RetailError;

/// The account context for marking a supplier as verified. The credential is only read.
#[derive(Clone)]
pub struct VerifySupplierContext<'a> {
    pub verifier: &'a AccountView,
    pub credential_account: &'a AccountView,
    pub supplier_account: &'a AccountView,
}

impl<'a> VerifySupplierContext<'a> {
    pub fn load(accounts: &'a [AccountView]) -> Result<VerifySupplierContext<'a>, ProgramError> {
        let [verifier, credential_account, supplier_account, ..] = accounts else {
            return Err(RetailError::NotEnoughAccountKeys.into());
        };

        Ok(Self {
            verifier,
            credential_account,
            supplier_account,
        })
    }
}
