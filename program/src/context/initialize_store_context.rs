//! See [`InitializeStoreContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use retailchain_interface::error::RetailError;

use crate::validation::system_program_view::SystemProgramView;

/// The account context for creating a store. The store account must be empty; that's checked
/// against the ledger when the store is written, not here.
#[derive(Clone)]
pub struct InitializeStoreContext<'a> {
    pub owner: &'a AccountView,
    pub store_account: &'a AccountView,
    pub system_program: SystemProgramView<'a>,
}

impl<'a> InitializeStoreContext<'a> {
    pub fn load(accounts: &'a [AccountView]) -> Result<InitializeStoreContext<'a>, ProgramError> {
        let [owner, store_account, system_program, ..] = accounts else {
            return Err(RetailError::NotEnoughAccountKeys.into());
        };

        let system_program = SystemProgramView::new(system_program)?;

        Ok(Self {
            owner,
            store_account,
            system_program,
        })
    }
}
