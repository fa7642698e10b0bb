pub mod file_id;
pub mod layers;
