pub mod error;
pub mod order;
pub mod status;

pub use error::{OrderError, Result};
pub use order::Order;
pub use status::OrderStatus;
