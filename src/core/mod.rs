pub mod endpoint;
pub mod resolver;
pub mod snapshot;

pub use crate::domain::date::DateSpec;
pub use crate::domain::model::{CurrencyCode, CurrencyList, ExchangeRateDocument};
pub use crate::domain::ports::JsonSource;
pub use crate::utils::error::Result;
