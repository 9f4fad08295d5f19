mod expiry;
mod gracefull;
mod logs;
mod luhn;
mod mark;
mod metrics;
mod random_card_number;

pub use self::expiry::{EXPIRY_YEAR_MAX, EXPIRY_YEAR_MIN, normalize_expiry, random_expiry};
pub use self::gracefull::shutdown_signal;
pub use self::logs::Logger;
pub use self::luhn::{is_luhn_valid, luhn_check_digit};
pub use self::mark::mask_card_number;
pub use self::metrics::{MetricLabels, Method, Metrics, Status};
pub use self::random_card_number::{random_card_number, random_cvv};
