//! See [`RegisterVerifierContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use retailchain_interface::error::RetailError;

use crate::validation::system_program_view::SystemProgramView;

/// The account context for creating a verifier credential.
#[derive(Clone)]
pub struct RegisterVerifierContext<'a> {
    pub authority: &'a AccountView,
    pub credential_account: &'a AccountView,
    pub system_program: SystemProgramView<'a>,
}

impl<'a> RegisterVerifierContext<'a> {
    pub fn load(accounts: &'a [AccountView]) -> Result<RegisterVerifierContext<'a>, ProgramError> {
        let [authority, credential_account, system_program, ..] = accounts else {
            return Err(RetailError::NotEnoughAccountKeys.into());
        };

        let system_program = SystemProgramView::new(system_program)?;

        Ok(Self {
            authority,
            credential_account,
            system_program,
        })
    }
}
