mod constants;
mod gateway_helpers;
mod record_helpers;
mod transport_helpers;

pub mod prelude;

pub use constants::*;
pub use gateway_helpers::*;
pub use record_helpers::*;
pub use transport_helpers::*;
