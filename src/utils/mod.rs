pub mod payload;

pub use payload::OptionalJson;
