pub mod error;
pub mod rounding;

pub use error::{Result, TaxError};
pub use rounding::{round_money, MONEY_SCALE};
