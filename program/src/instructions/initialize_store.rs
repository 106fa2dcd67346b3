use pinocchio::{
    account::AccountView,
    ProgramResult,
};
use retailchain_interface::instructions::initialize_store::InitializeStoreInstructionData;

use crate::{
    context::initialize_store_context::InitializeStoreContext,
    debug,
    ledger::account_ledger::AccountLedger,
    shared::store_operations::initialize_store,
};

/// Handler logic for creating a store account owned by the signing owner.
#[inline(never)]
pub fn process_initialize_store(accounts: &[AccountView], instruction_data: &[u8]) -> ProgramResult {
    let args = InitializeStoreInstructionData::unpack(instruction_data)?;
    let ctx = InitializeStoreContext::load(accounts)?;

    let mut ledger = AccountLedger::new(ctx.owner, accounts);
    initialize_store(
        &mut ledger,
        ctx.owner.address(),
        ctx.store_account.address(),
        args.name,
        args.location,
    )?;

    debug!("initialized store: {}", args.name);
    Ok(())
}
