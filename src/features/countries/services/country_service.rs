use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::error::{AppError, Result};
use crate::features::countries::dtos::CreateCountryDto;
use crate::features::countries::models::Country;

/// In-memory country registry, seeded with a few records.
///
/// No store backs this service: everything except the seed data is lost
/// on restart. Ids are numeric strings handed out sequentially unless the
/// caller supplies one.
pub struct CountryService {
    countries: RwLock<BTreeMap<String, Country>>,
    next_id: AtomicU64,
}

impl Default for CountryService {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryService {
    pub fn new() -> Self {
        let seed: BTreeMap<String, Country> = [
            ("1", "United States", "Washington, D.C."),
            ("2", "Canada", "Ottawa"),
            ("3", "Mexico", "Mexico City"),
        ]
        .into_iter()
        .map(|(id, name, capital)| {
            (
                id.to_string(),
                Country {
                    name: name.to_string(),
                    capital: capital.to_string(),
                },
            )
        })
        .collect();
        let next_id = seed.len() as u64 + 1;

        Self {
            countries: RwLock::new(seed),
            next_id: AtomicU64::new(next_id),
        }
    }

    fn read_guard(&self) -> Result<RwLockReadGuard<'_, BTreeMap<String, Country>>> {
        self.countries
            .read()
            .map_err(|_| AppError::Internal("country map lock poisoned".to_string()))
    }

    fn write_guard(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<String, Country>>> {
        self.countries
            .write()
            .map_err(|_| AppError::Internal("country map lock poisoned".to_string()))
    }

    /// Add a country and return its id. A caller-supplied id that is
    /// already taken fails with `DuplicateKey`.
    pub fn create(&self, dto: CreateCountryDto) -> Result<String> {
        for (field, value) in [("name", &dto.name), ("capital", &dto.capital)] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!(
                    "Bad value for {field}: {value:?}"
                )));
            }
        }
        let mut countries = self.write_guard()?;
        let id = match dto.id.filter(|id| !id.trim().is_empty()) {
            Some(id) => {
                if countries.contains_key(&id) {
                    return Err(AppError::DuplicateKey(format!("country id={id}")));
                }
                id
            }
            None => loop {
                let candidate = self.next_id.fetch_add(1, Ordering::SeqCst).to_string();
                // Skip ids a caller claimed explicitly.
                if !countries.contains_key(&candidate) {
                    break candidate;
                }
            },
        };
        countries.insert(
            id.clone(),
            Country {
                name: dto.name,
                capital: dto.capital,
            },
        );
        tracing::info!("Country created: id={}", id);
        Ok(id)
    }

    pub fn get_by_id(&self, id: &str) -> Result<Country> {
        self.read_guard()?
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("No such country: {id}")))
    }

    /// The whole id -> country mapping.
    pub fn read(&self) -> Result<BTreeMap<String, Country>> {
        Ok(self.read_guard()?.clone())
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.read_guard()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str, capital: &str, id: Option<&str>) -> CreateCountryDto {
        CreateCountryDto {
            name: name.to_string(),
            capital: capital.to_string(),
            id: id.map(str::to_string),
        }
    }

    #[test]
    fn seeded_countries_are_present() {
        let svc = CountryService::new();
        assert_eq!(svc.count().unwrap(), 3);
        assert_eq!(svc.get_by_id("2").unwrap().name, "Canada");
    }

    #[test]
    fn create_then_get_roundtrip() {
        let svc = CountryService::new();
        let id = svc.create(country("France", "Paris", None)).unwrap();

        let found = svc.get_by_id(&id).unwrap();
        assert_eq!(
            found,
            Country {
                name: "France".to_string(),
                capital: "Paris".to_string(),
            }
        );
    }

    #[test]
    fn unknown_id_is_not_found() {
        let svc = CountryService::new();
        let err = svc.get_by_id("nonexistent").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn sequential_ids_continue_after_the_seed() {
        let svc = CountryService::new();
        let first = svc.create(country("France", "Paris", None)).unwrap();
        let second = svc.create(country("Japan", "Tokyo", None)).unwrap();
        assert_eq!(first, "4");
        assert_eq!(second, "5");
    }

    #[test]
    fn explicit_id_is_honored_and_protected() {
        let svc = CountryService::new();
        let id = svc.create(country("France", "Paris", Some("fr"))).unwrap();
        assert_eq!(id, "fr");

        let err = svc
            .create(country("Fake France", "Nice", Some("fr")))
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateKey(_)));
    }

    #[test]
    fn generated_ids_skip_claimed_ones() {
        let svc = CountryService::new();
        svc.create(country("France", "Paris", Some("4"))).unwrap();
        let generated = svc.create(country("Japan", "Tokyo", None)).unwrap();
        assert_eq!(generated, "5");
    }

    #[test]
    fn blank_fields_are_rejected() {
        let svc = CountryService::new();
        assert!(matches!(
            svc.create(country("", "Paris", None)).unwrap_err(),
            AppError::Validation(_)
        ));
        assert!(matches!(
            svc.create(country("France", "  ", None)).unwrap_err(),
            AppError::Validation(_)
        ));
    }
}
