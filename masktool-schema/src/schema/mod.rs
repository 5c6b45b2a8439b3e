mod record;
pub use record::*;

mod record_builder;
pub use record_builder::*;
