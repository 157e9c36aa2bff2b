mod builder;

pub use builder::BuilderError;
