pub mod generator;
pub mod serializer;

pub use self::generator::CardGeneratorService;
pub use self::serializer::{CSV_HEADER, CardSerializerService};
