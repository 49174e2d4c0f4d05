pub mod fields;
pub mod mapper;
