use pinocchio::{
    error::ProgramError,
    Address,
    ProgramResult,
};
use retailchain_interface::{
    authority::authorize,
    error::RetailError,
    state::{
        store::Store,
        transmutable::{
            load,
            Transmutable,
        },
    },
};

use crate::ledger::RecordLedger;

/// Creates an active store with no products at `store_slot`, owned by `owner`.
///
/// Every check runs before the slot is allocated, so a failure leaves the ledger untouched.
pub fn initialize_store<L: RecordLedger>(
    ledger: &mut L,
    owner: &Address,
    store_slot: &Address,
    name: &str,
    location: &str,
) -> ProgramResult {
    let store = Store::init(owner, name, location)?;

    if !ledger.caller_signed(owner) {
        return Err(RetailError::Unauthorized.into());
    }
    if ledger.read(store_slot, |_| ())?.is_some() {
        return Err(RetailError::AlreadyInitialized.into());
    }

    ledger.allocate(store_slot, Store::LEN)?;
    ledger.write(store_slot, store.as_bytes())
}

/// Returns a copy of the store record at `store_slot`.
///
/// An empty slot and one holding anything other than a valid store both fail with
/// `StoreNotFound`.
pub fn load_store<L: RecordLedger>(ledger: &L, store_slot: &Address) -> Result<Store, ProgramError> {
    ledger
        .read(store_slot, |bytes| load::<Store>(bytes).ok().cloned())?
        .flatten()
        .ok_or(RetailError::StoreNotFound.into())
}

/// Checks that `caller` is the store's owner and signed the request.
#[inline(always)]
pub fn authorize_owner<L: RecordLedger>(
    ledger: &L,
    store: &Store,
    caller: &Address,
) -> ProgramResult {
    if authorize(&store.owner, caller) && ledger.caller_signed(caller) {
        Ok(())
    } else {
        Err(RetailError::Unauthorized.into())
    }
}
