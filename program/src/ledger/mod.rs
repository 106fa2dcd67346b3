//! The record-storage seam that the store and product operations run against.
//!
//! Operations never touch accounts directly. They read, allocate, and write records through a
//! [`RecordLedger`], which lets the same validation logic run on-chain over the instruction's
//! accounts ([`account_ledger::AccountLedger`]) and off-chain over an in-memory ledger
//! ([`memory_ledger::MemoryLedger`]).

use pinocchio::{
    error::ProgramError,
    Address,
    ProgramResult,
};

pub mod account_ledger;
pub mod memory_ledger;

pub trait RecordLedger {
    /// Calls `f` with the record bytes stored at `slot`.
    ///
    /// Returns `Ok(None)` when the slot holds no record of this program.
    fn read<R>(
        &self,
        slot: &Address,
        f: impl FnOnce(&[u8]) -> R,
    ) -> Result<Option<R>, ProgramError>;

    /// Allocates `space` zeroed bytes at an empty `slot`.
    ///
    /// Fails with `AlreadyInitialized` if the slot already holds data and with `StorageFull` if
    /// the space can't be funded.
    fn allocate(&mut self, slot: &Address, space: usize) -> ProgramResult;

    /// Overwrites the record at an allocated `slot`. The record must match the allocated size.
    fn write(&mut self, slot: &Address, record: &[u8]) -> ProgramResult;

    /// Returns whether `identity` signed the request.
    fn caller_signed(&self, identity: &Address) -> bool;
}
