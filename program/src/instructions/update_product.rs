use pinocchio::{
    account::AccountView,
    ProgramResult,
};
use retailchain_interface::instructions::update_product::UpdateProductInstructionData;

use crate::{
    context::update_product_context::UpdateProductContext,
    debug,
    ledger::account_ledger::AccountLedger,
    shared::product_operations::update_product,
};

#[inline(never)]
pub fn process_update_product(accounts: &[AccountView], instruction_data: &[u8]) -> ProgramResult {
    let args = UpdateProductInstructionData::unpack(instruction_data)?;
    let ctx = UpdateProductContext::load(accounts)?;

    let mut ledger = AccountLedger::new(ctx.owner, accounts);
    update_product(
        &mut ledger,
        ctx.owner.address(),
        ctx.store_account.address(),
        ctx.product_account.address(),
        &args,
    )?;

    debug!("updated product");
    Ok(())
}
