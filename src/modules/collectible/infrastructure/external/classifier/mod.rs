pub mod dto;
pub mod mapper;
