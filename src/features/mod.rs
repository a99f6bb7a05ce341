pub mod cities;
pub mod countries;
pub mod states;
pub mod system;
