mod myconfig;

pub use self::myconfig::{Config, DEFAULT_MAX_BATCH_SIZE, GeneratorConfig};
