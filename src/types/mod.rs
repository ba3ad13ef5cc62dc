//! Data types exchanged with the ledger service.

pub mod balance;
pub mod outcome;
pub mod subaccount;
