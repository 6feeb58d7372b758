//! Business logic services for the Stock Ledger Platform

pub mod dispatch;
pub mod partner;
pub mod stock;
pub mod transaction;

pub use dispatch::DispatchService;
pub use partner::PartnerService;
pub use stock::StockService;
pub use transaction::TransactionService;
