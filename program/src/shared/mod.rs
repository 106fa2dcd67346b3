//! Store, product, and supplier logic shared by the instruction processors, written against a
//! [`RecordLedger`](crate::ledger::RecordLedger) so it runs the same on-chain and off.

pub mod product_operations;
pub mod store_operations;
pub mod supplier_operations;
