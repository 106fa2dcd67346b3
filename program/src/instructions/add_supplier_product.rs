use pinocchio::{
    account::AccountView,
    sysvars::{
        clock::Clock,
        Sysvar,
    },
    ProgramResult,
};
use retailchain_interface::instructions::add_supplier_product::AddSupplierProductInstructionData;

use crate::{
    context::add_supplier_product_context::AddSupplierProductContext,
    debug,
    ledger::account_ledger::AccountLedger,
    shared::supplier_operations::add_supplier_product,
};

/// Handler logic for listing a catalog entry under a verified supplier.
#[inline(never)]
pub fn process_add_supplier_product(
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let args = AddSupplierProductInstructionData::unpack(instruction_data)?;
    let ctx = AddSupplierProductContext::load(accounts)?;
    let created_at = Clock::get()?.unix_timestamp;

    let mut ledger = AccountLedger::new(ctx.authority, accounts);
    add_supplier_product(
        &mut ledger,
        ctx.authority.address(),
        ctx.supplier_account.address(),
        ctx.supplier_product_account.address(),
        &args,
        created_at,
    )?;

    debug!("listed supplier product: {}", args.name);
    Ok(())
}
