use crate::domain::offer::Location;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct City {
    pub name: &'static str,
    pub location: Location,
}

const fn city(name: &'static str, latitude: f64, longitude: f64) -> City {
    City {
        name,
        location: Location {
            latitude,
            longitude,
            zoom: 12,
        },
    }
}

pub const CITIES: &[City] = &[
    city("Paris", 48.85661, 2.351499),
    city("Cologne", 50.938361, 6.959974),
    city("Brussels", 50.846557, 4.351697),
    city("Amsterdam", 52.37454, 4.897976),
    city("Hamburg", 53.550341, 10.000654),
    city("Dusseldorf", 51.225402, 6.776314),
];

pub fn default_city() -> City {
    CITIES[0]
}

/// Unknown names fall back to the default city.
pub fn city_by_name(name: &str) -> City {
    CITIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .copied()
        .unwrap_or_else(default_city)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_city_case_insensitively() {
        assert_eq!(city_by_name("amsterdam").name, "Amsterdam");
    }

    #[test]
    fn unknown_city_falls_back_to_paris() {
        assert_eq!(city_by_name("Atlantis"), default_city());
        assert_eq!(default_city().name, "Paris");
    }
}
