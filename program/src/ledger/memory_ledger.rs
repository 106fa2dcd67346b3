//! See [`MemoryLedger`].

use pinocchio::{
    error::ProgramError,
    Address,
    ProgramResult,
};
use retailchain_interface::{
    error::RetailError,
    state::{
        product::PRODUCT_SIZE,
        store::STORE_SIZE,
        supplier::SUPPLIER_SIZE,
        supplier_product::SUPPLIER_PRODUCT_SIZE,
        verifier_credential::VERIFIER_CREDENTIAL_SIZE,
    },
};

use crate::ledger::RecordLedger;

/// The number of records a [`MemoryLedger`] can hold.
pub const MEMORY_LEDGER_SLOTS: usize = 32;

/// The number of identities that can be marked as signers at once.
pub const MAX_SIGNERS: usize = 4;

/// The largest record a [`MemoryLedger`] slot can hold.
pub const MAX_RECORD_LEN: usize = max_len(&[
    STORE_SIZE,
    PRODUCT_SIZE,
    SUPPLIER_SIZE,
    SUPPLIER_PRODUCT_SIZE,
    VERIFIER_CREDENTIAL_SIZE,
]);

const fn max_len(sizes: &[usize]) -> usize {
    let mut max = 0;
    let mut i = 0;
    while i < sizes.len() {
        if sizes[i] > max {
            max = sizes[i];
        }
        i += 1;
    }
    max
}

#[derive(Clone, Copy)]
struct MemorySlot {
    address: Address,
    len: usize,
    data: [u8; MAX_RECORD_LEN],
}

impl MemorySlot {
    #[inline(always)]
    fn bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }
}

/// A fixed-capacity [`RecordLedger`] held entirely in memory.
///
/// It needs no allocator, so the store and product operations can be exercised off-chain with
/// the same code paths the program runs. `space_budget` stands in for the payer's funds: an
/// allocation that would exceed it fails with `StorageFull`.
#[derive(Clone)]
pub struct MemoryLedger {
    slots: [Option<MemorySlot>; MEMORY_LEDGER_SLOTS],
    signers: [Option<Address>; MAX_SIGNERS],
    space_budget: usize,
    space_used: usize,
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryLedger {
    /// An empty ledger whose only limit is its slot count.
    pub fn new() -> Self {
        Self::with_space_budget(usize::MAX)
    }

    pub fn with_space_budget(space_budget: usize) -> Self {
        Self {
            slots: [None; MEMORY_LEDGER_SLOTS],
            signers: [None; MAX_SIGNERS],
            space_budget,
            space_used: 0,
        }
    }

    /// Replaces the set of identities that signed the current request. Identities past
    /// [`MAX_SIGNERS`] are ignored.
    pub fn set_signers(&mut self, signers: &[Address]) {
        self.signers = [None; MAX_SIGNERS];
        self.signers
            .iter_mut()
            .zip(signers)
            .for_each(|(slot, signer)| *slot = Some(*signer));
    }

    /// Returns the raw record bytes at `slot`, if any.
    pub fn record(&self, slot: &Address) -> Option<&[u8]> {
        self.find(slot).map(MemorySlot::bytes)
    }

    /// The number of allocated records.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs `op` against the ledger and restores the prior contents if it fails, so a failed
    /// request leaves no trace.
    pub fn transact<R>(
        &mut self,
        op: impl FnOnce(&mut Self) -> Result<R, ProgramError>,
    ) -> Result<R, ProgramError> {
        let snapshot = self.clone();
        let res = op(self);
        if res.is_err() {
            *self = snapshot;
        }
        res
    }

    #[inline(always)]
    fn find(&self, slot: &Address) -> Option<&MemorySlot> {
        self.slots.iter().flatten().find(|s| &s.address == slot)
    }

    #[inline(always)]
    fn find_mut(&mut self, slot: &Address) -> Option<&mut MemorySlot> {
        self.slots.iter_mut().flatten().find(|s| &s.address == slot)
    }
}

impl RecordLedger for MemoryLedger {
    fn read<R>(
        &self,
        slot: &Address,
        f: impl FnOnce(&[u8]) -> R,
    ) -> Result<Option<R>, ProgramError> {
        Ok(self.find(slot).map(|s| f(s.bytes())))
    }

    fn allocate(&mut self, slot: &Address, space: usize) -> ProgramResult {
        if self.find(slot).is_some() {
            return Err(RetailError::AlreadyInitialized.into());
        }
        if space > MAX_RECORD_LEN {
            return Err(RetailError::StorageFull.into());
        }
        let space_used = self
            .space_used
            .checked_add(space)
            .filter(|used| *used <= self.space_budget)
            .ok_or(RetailError::StorageFull)?;
        let free = self
            .slots
            .iter_mut()
            .find(|s| s.is_none())
            .ok_or(RetailError::StorageFull)?;

        *free = Some(MemorySlot {
            address: *slot,
            len: space,
            data: [0; MAX_RECORD_LEN],
        });
        self.space_used = space_used;
        Ok(())
    }

    fn write(&mut self, slot: &Address, record: &[u8]) -> ProgramResult {
        let allocated = self
            .find_mut(slot)
            .ok_or(ProgramError::UninitializedAccount)?;
        if allocated.len != record.len() {
            return Err(RetailError::MismatchedDataLengths.into());
        }
        allocated.data[..record.len()].copy_from_slice(record);
        Ok(())
    }

    #[inline(always)]
    fn caller_signed(&self, identity: &Address) -> bool {
        self.signers.iter().flatten().any(|s| s == identity)
    }
}
