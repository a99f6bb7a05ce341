pub mod state_dto;

pub use state_dto::{CreateStateDto, DeleteStateDto, StatesResponseDto, UpdateStateDto};
