pub mod generator;
pub mod serializer;

pub use self::generator::{CardGeneratorServiceTrait, DynCardGeneratorService};
pub use self::serializer::{CardSerializerServiceTrait, DynCardSerializerService};
