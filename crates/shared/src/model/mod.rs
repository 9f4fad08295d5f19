pub mod card;
pub mod format;

pub use self::card::{CardPrefix, CardRecord, CardType, ExpiryMode};
pub use self::format::OutputFormat;
