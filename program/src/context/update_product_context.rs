//! See [`UpdateProductContext`].

use pinocchio::{
    account::AccountView,
    error::ProgramError,
};
use retailchain_interface::error::RetailError;

/// The account context for updating a product's price and quantity. No accounts are created, so
/// no system program is passed.
#[derive(Clone)]
pub struct UpdateProductContext<'a> {
    pub owner: &'a AccountView,
    pub store_account: &'a AccountView,
    pub product_account: &'a AccountView,
}

impl<'a> UpdateProductContext<'a> {
    pub fn load(accounts: &'a [AccountView]) -> Result<UpdateProductContext<'a>, ProgramError> {
        let [owner, store_account, product_account, ..] = accounts else {
            return Err(RetailError::NotEnoughAccountKeys.into());
        };

        Ok(Self {
            owner,
            store_account,
            product_account,
        })
    }
}
