pub mod encode_path;
pub mod normalize;
