pub mod card;

pub use self::card::GenerationRequest;
