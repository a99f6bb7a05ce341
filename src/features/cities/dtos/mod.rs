pub mod city_dto;

pub use city_dto::{
    CitiesResponseDto, CreateCityDto, DeleteCityDto, SortQuery, UpdateCityDto,
};
