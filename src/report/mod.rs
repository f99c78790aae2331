pub mod order_report;

pub use order_report::*;
