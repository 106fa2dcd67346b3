use pinocchio::{
    account::AccountView,
    sysvars::{
        clock::Clock,
        Sysvar,
    },
    ProgramResult,
};
use retailchain_interface::instructions::register_supplier::RegisterSupplierInstructionData;

use crate::{
    context::register_supplier_context::RegisterSupplierContext,
    debug,
    ledger::account_ledger::AccountLedger,
    shared::supplier_operations::register_supplier,
};

/// Handler logic for creating an unverified supplier account controlled by the signing authority.
#[inline(never)]
pub fn process_register_supplier(
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let args = RegisterSupplierInstructionData::unpack(instruction_data)?;
    let ctx = RegisterSupplierContext::load(accounts)?;
    let created_at = Clock::get()?.unix_timestamp;

    let mut ledger = AccountLedger::new(ctx.authority, accounts);
    register_supplier(
        &mut ledger,
        ctx.authority.address(),
        ctx.supplier_account.address(),
        &args,
        created_at,
    )?;

    debug!("registered supplier: {}", args.name);
    Ok(())
}
