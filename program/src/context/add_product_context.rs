//! See [`AddProductContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use retailchain_interface::error::RetailError;

use crate::validation::system_program_view::SystemProgramView;

/// The account context for adding a product to a store.
#[derive(Clone)]
pub struct AddProductContext<'a> {
    pub owner: &'a AccountView,
    pub store_account: &'a AccountView,
    pub product_account: &'a AccountView,
    pub system_program: SystemProgramView<'a>,
}

impl<'a> AddProductContext<'a> {
    pub fn load(accounts: &'a [AccountView]) -> Result<AddProductContext<'a>, ProgramError> {
        let [owner, store_account, product_account, system_program, ..] = accounts else {
            return Err(RetailError::NotEnoughAccountKeys.into());
        };

        let system_program = SystemProgramView::new(system_program)?;

        Ok(Self {
            owner,
            store_account,
            product_account,
            system_program,
        })
    }
}
