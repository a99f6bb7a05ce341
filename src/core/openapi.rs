use utoipa::{Modify, OpenApi};

use crate::features::cities::{dtos as cities_dtos, handlers as cities_handlers, models as cities_models};
use crate::features::countries::{
    dtos as countries_dtos, handlers as countries_handlers, models as countries_models,
};
use crate::features::states::{
    dtos as states_dtos, handlers as states_handlers, models as states_models,
};
use crate::features::system::{dtos as system_dtos, handlers as system_handlers};
use crate::shared::types::{
    CountsResponse, CreatedResponse, ErrorResponse, HealthResponse, MessageResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Cities
        cities_handlers::read_cities,
        cities_handlers::create_city,
        cities_handlers::get_city,
        cities_handlers::update_city,
        cities_handlers::delete_city,
        cities_handlers::delete_city_by_key,
        // States
        states_handlers::read_states,
        states_handlers::create_state,
        states_handlers::get_state,
        states_handlers::update_state,
        states_handlers::delete_state,
        states_handlers::delete_state_by_key,
        // Countries
        countries_handlers::read_countries,
        countries_handlers::create_country,
        countries_handlers::get_country,
        // System
        system_handlers::health,
        system_handlers::counts,
        system_handlers::hello,
        system_handlers::endpoints,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            MessageResponse,
            CreatedResponse,
            HealthResponse,
            CountsResponse,
            // Cities
            cities_models::City,
            cities_dtos::CreateCityDto,
            cities_dtos::UpdateCityDto,
            cities_dtos::DeleteCityDto,
            cities_dtos::CitiesResponseDto,
            // States
            states_models::State,
            states_dtos::CreateStateDto,
            states_dtos::UpdateStateDto,
            states_dtos::DeleteStateDto,
            states_dtos::StatesResponseDto,
            // Countries
            countries_models::Country,
            countries_dtos::CreateCountryDto,
            countries_dtos::CountriesResponseDto,
            // System
            system_dtos::HelloResponseDto,
            system_dtos::EndpointsResponseDto,
        )
    ),
    tags(
        (name = "cities", description = "City documents backed by the store"),
        (name = "states", description = "State documents with a unique (code, country_code) pair"),
        (name = "countries", description = "In-memory country registry"),
        (name = "system", description = "Health, counts, and live endpoint documentation"),
    ),
    info(
        title = "GeoData API",
        version = "0.1.0",
        description = "CRUD backend exposing cities, states, and countries",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
