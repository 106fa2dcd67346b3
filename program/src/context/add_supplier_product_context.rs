//! See [`AddSupplierProductContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use retailchain_interface::error::RetailError;

use crate::validation::system_program_view::SystemProgramView;

/// The account context for listing a catalog entry under a supplier.
#[derive(Clone)]
pub struct AddSupplierProductContext<'a> {
    pub authority: &'a AccountView,
    pub supplier_account: &'a AccountView,
    pub supplier_product_account: &'a AccountView,
    pub system_program: SystemProgramView<'a>,
}

impl<'a> AddSupplierProductContext<'a> {
    pub fn load(
        accounts: &'a [AccountView],
    ) -> Result<AddSupplierProductContext<'a>, ProgramError> {
        let [authority, supplier_account, supplier_product_account, system_program, ..] = accounts
        else {
            return Err(RetailError::NotEnoughAccountKeys.into());
        };

        let system_program = SystemProgramView::new(system_program)?;

        Ok(Self {
            authority,
            supplier_account,
            supplier_product_account,
            system_program,
        })
    }
}
