//! See [`RegisterSupplierContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use retailchain_interface::error::RetailError;

use crate::validation::system_program_view::SystemProgramView;

/// The account context for registering a supplier.
#[derive(Clone)]
pub struct RegisterSupplierContext<'a> {
    pub authority: &'a AccountView,
    pub supplier_account: &'a AccountView,
    pub system_program: SystemProgramView<'a>,
}

impl<'a> RegisterSupplierContext<'a> {
    pub fn load(accounts: &'a [AccountView]) -> Result<RegisterSupplierContext<'a>, ProgramError> {
        let [authority, supplier_account, system_program, ..] = accounts else {
            return Err(RetailError::NotEnoughAccountKeys.into());
        };

        let system_program = SystemProgramView::new(system_program)?;

        Ok(Self {
            authority,
            supplier_account,
            system_program,
        })
    }
}
