use pinocchio::{
    account::AccountView,
    ProgramResult,
};
use retailchain_interface::instructions::register_verifier::RegisterVerifierInstructionData;

use crate::{
    context::register_verifier_context::RegisterVerifierContext,
    debug,
    ledger::account_ledger::AccountLedger,
    shared::supplier_operations::register_verifier,
};

/// Handler logic for creating a verifier credential for the signing authority.
#[inline(never)]
pub fn process_register_verifier(
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let args = RegisterVerifierInstructionData::unpack(instruction_data)?;
    let ctx = RegisterVerifierContext::load(accounts)?;

    let mut ledger = AccountLedger::new(ctx.authority, accounts);
    register_verifier(
        &mut ledger,
        ctx.authority.address(),
        ctx.credential_account.address(),
        &args,
    )?;

    debug!("registered verifier: {}", args.organization);
    Ok(())
}
