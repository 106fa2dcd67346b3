use pinocchio::{
    account::AccountView,
    sysvars::{
        clock::Clock,
        Sysvar,
    },
    ProgramResult,
};
use retailchain_interface::instructions::add_product::AddProductInstructionData;

use crate::{
    context::add_product_context::AddProductContext,
    debug,
    ledger::account_ledger::AccountLedger,
    shared::product_operations::add_product,
};

/// Handler logic for creating a product account under a store and bumping the store's product
/// count. The product's creation time is read from the clock sysvar.
#[inline(never)]
pub fn process_add_product(accounts: &[AccountView], instruction_data: &[u8]) -> ProgramResult {
    let args = AddProductInstructionData::unpack(instruction_data)?;
    let ctx = AddProductContext::load(accounts)?;
    let created_at = Clock::get()?.unix_timestamp;

    let mut ledger = AccountLedger::new(ctx.owner, accounts);
    add_product(
        &mut ledger,
        ctx.owner.address(),
        ctx.store_account.address(),
        ctx.product_account.address(),
        &args,
        created_at,
    )?;

    debug!("added product: {}", args.name);
    Ok(())
}
