use pinocchio::{
    account::AccountView,
    ProgramResult,
};
use retailchain_interface::instructions::verify_supplier::VerifySupplierInstructionData;

use crate::{
    context::verify_supplier_context::VerifySupplierContext,
    debug,
    ledger::account_ledger::AccountLedger,
    shared::supplier_operations::verify_supplier,
};

#[inline(never)]
pub fn process_verify_supplier(accounts: &[AccountView], instruction_data: &[u8]) -> ProgramResult {
    VerifySupplierInstructionData::unpack(instruction_data)?;
    let ctx = VerifySupplierContext::load(accounts)?;

    let mut ledger = AccountLedger::new(ctx.verifier, accounts);
    verify_supplier(
        &mut ledger,
        ctx.verifier.address(),
        ctx.credential_account.address(),
        ctx.supplier_account.address(),
    )?;

    debug!("verified supplier");
    Ok(())
}
