pub type HashMap<K, V> = std::collections::HashMap<K, V, ahash::RandomState>;

mod error;
pub use error::*;

mod field_type;
pub use field_type::*;

mod value;
pub use value::Value;

mod schema;
pub use schema::*;

mod schema_registry;
pub use schema_registry::*;
