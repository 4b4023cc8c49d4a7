pub mod mapper;
pub mod model;
