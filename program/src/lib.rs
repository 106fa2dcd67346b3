//! The `retailchain` program: stores and the products they own, kept as program-owned accounts.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod context;
mod debug;
mod instructions;
pub mod ledger;
pub mod shared;
mod validation;

#[cfg(not(feature = "no-entrypoint"))]
mod entrypoint;

pub use instructions::process_instruction;
pub use retailchain_interface::program::ID;
