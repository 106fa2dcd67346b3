//! The capability check shared by every store and product mutation.

use solana_address::Address;

/// Returns whether `caller` holds the mutation rights recorded as `stored_owner`.
///
/// This is a pure identity comparison. Whether `caller` actually signed the request is checked
/// separately by the ledger the operation runs against.
#[inline(always)]
pub fn authorize(stored_owner: &Address, caller: &Address) -> bool {
    stored_owner == caller
}
