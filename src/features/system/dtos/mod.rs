pub mod system_dto;

pub use system_dto::{EndpointsResponseDto, HelloResponseDto};
