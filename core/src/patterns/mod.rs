pub mod assemble;
pub mod model;
pub mod normalize;
pub mod note;
pub mod pattern_id;
