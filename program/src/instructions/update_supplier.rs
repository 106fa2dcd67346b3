use pinocchio::{
    account::AccountView,
    ProgramResult,
};
use retailchain_interface::instructions::update_supplier::UpdateSupplierInstructionData;

use crate::{
    context::update_supplier_context::UpdateSupplierContext,
    debug,
    ledger::account_ledger::AccountLedger,
    shared::supplier_operations::update_supplier,
};

#[inline(never)]
pub fn process_update_supplier(accounts: &[AccountView], instruction_data: &[u8]) -> ProgramResult {
    let args = UpdateSupplierInstructionData::unpack(instruction_data)?;
    let ctx = UpdateSupplierContext::load(accounts)?;

    let mut ledger = AccountLedger::new(ctx.authority, accounts);
    update_supplier(
        &mut ledger,
        ctx.authority.address(),
        ctx.supplier_account.address(),
        &args,
    )?;

    debug!("updated supplier");
    Ok(())
}
