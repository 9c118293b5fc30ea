pub mod frozen_map;
pub mod mapping;
pub mod value;

pub use frozen_map::FrozenMap;
pub use mapping::Mapping;
pub use value::{PlainMap, Value};
