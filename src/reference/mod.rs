//! Reference spaces: coordinate systems, mappings between them, and the
//! coordinate maps which tie an image's array indices to world space.

pub mod affine;
pub mod coordinate_map;
pub mod coordinate_system;
pub mod mapping;

pub use self::affine::Affine;
pub use self::coordinate_map::CoordinateMap;
pub use self::coordinate_system::CoordinateSystem;
pub use self::mapping::{FunctionMapping, Mapping};
