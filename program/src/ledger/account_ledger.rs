//! See [`AccountLedger`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
    sysvars::{
        rent::Rent,
        Sysvar,
    },
    Address,
    ProgramResult,
};
use retailchain_interface::{
    error::RetailError,
    program,
};

use crate::ledger::RecordLedger;

/// A [`RecordLedger`] over the accounts passed to the current instruction.
///
/// A slot is the address of one of those accounts. Records live in the data of accounts owned by
/// this program, and new records are allocated with a system program `CreateAccount` CPI funded
/// by `payer`.
pub struct AccountLedger<'a> {
    payer: &'a AccountView,
    accounts: &'a [AccountView],
    /// Read from the rent sysvar on the first allocation when unset.
    rent: Option<&'a Rent>,
}

impl<'a> AccountLedger<'a> {
    #[inline(always)]
    pub fn new(payer: &'a AccountView, accounts: &'a [AccountView]) -> Self {
        Self {
            payer,
            accounts,
            rent: None,
        }
    }

    /// A ledger that prices allocations with `rent` instead of the rent sysvar.
    #[inline(always)]
    pub fn with_rent(payer: &'a AccountView, accounts: &'a [AccountView], rent: &'a Rent) -> Self {
        Self {
            payer,
            accounts,
            rent: Some(rent),
        }
    }

    #[inline(always)]
    fn find(&self, slot: &Address) -> Result<&'a AccountView, ProgramError> {
        self.accounts
            .iter()
            .find(|account| account.address() == slot)
            .ok_or(RetailError::NotEnoughAccountKeys.into())
    }
}

#[inline(always)]
fn owned_by_program(account: &AccountView) -> bool {
    account.owned_by(&program::ID)
}

impl RecordLedger for AccountLedger<'_> {
    fn read<R>(
        &self,
        slot: &Address,
        f: impl FnOnce(&[u8]) -> R,
    ) -> Result<Option<R>, ProgramError> {
        let account = self.find(slot)?;
        // Data in an account owned by another program is never one of this program's records.
        if account.data_len() == 0 || !owned_by_program(account) {
            return Ok(None);
        }
        let data = account.try_borrow()?;
        Ok(Some(f(&data)))
    }

    fn allocate(&mut self, slot: &Address, space: usize) -> ProgramResult {
        let account = self.find(slot)?;
        if account.data_len() != 0 {
            return Err(RetailError::AlreadyInitialized.into());
        }

        let lamports = match self.rent {
            Some(rent) => rent.try_minimum_balance(space)?,
            None => Rent::get()?.try_minimum_balance(space)?,
        };
        if self.payer.lamports() < lamports {
            return Err(RetailError::StorageFull.into());
        }

        pinocchio_system::instructions::CreateAccount {
            from: self.payer,
            to: account,
            lamports,
            space: space as u64,
            owner: &program::ID,
        }
        .invoke()
    }

    fn write(&mut self, slot: &Address, record: &[u8]) -> ProgramResult {
        let account = self.find(slot)?;
        if !owned_by_program(account) {
            return Err(ProgramError::IllegalOwner);
        }

        let mut data = account.try_borrow_mut()?;
        if data.len() != record.len() {
            return Err(RetailError::MismatchedDataLengths.into());
        }
        data.copy_from_slice(record);
        Ok(())
    }

    #[inline(always)]
    fn caller_signed(&self, identity: &Address) -> bool {
        self.find(identity)
            .is_ok_and(|account| account.is_signer())
    }
}
