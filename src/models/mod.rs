pub mod fund;

pub use fund::{Fund, FundRecord};
