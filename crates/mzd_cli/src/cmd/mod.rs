pub mod info;
pub mod json;
