use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use retailchain_interface::{
    error::RetailError,
    state::SYSTEM_PROGRAM_ID,
};

#[derive(Clone)]
pub struct SystemProgramView<'a> {
    pub account: &'a AccountView,
}

impl<'a> SystemProgramView<'a> {
    #[inline(always)]
    pub fn new(account: &'a AccountView) -> Result<SystemProgramView<'a>, ProgramError> {
        if account.address() != &SYSTEM_PROGRAM_ID {
            return Err(RetailError::IncorrectSystemProgram.into());
        }
        Ok(SystemProgramView { account })
    }
}
