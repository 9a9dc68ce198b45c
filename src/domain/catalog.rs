use crate::domain::offer::Offer;
use crate::errors::CatalogError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUILTIN_SEED: &str = include_str!("../../seed/offers.json");

/// Outcome of looking an offer up by id. A miss is an ordinary result.
#[derive(Debug, Clone, Copy)]
pub enum Lookup<'a> {
    Found(&'a Offer),
    NotFound,
}

impl<'a> Lookup<'a> {
    pub fn offer(self) -> Option<&'a Offer> {
        match self {
            Lookup::Found(offer) => Some(offer),
            Lookup::NotFound => None,
        }
    }
}

/// First offer whose id equals `id`, in iteration order.
pub fn find_offer<'a>(id: &str, offers: &'a [Offer]) -> Lookup<'a> {
    match offers.iter().find(|offer| offer.id == id) {
        Some(offer) => Lookup::Found(offer),
        None => Lookup::NotFound,
    }
}

/// Immutable, pre-loaded collection of offers.
#[derive(Debug, Clone)]
pub struct Catalog {
    offers: Vec<Offer>,
}

impl Catalog {
    pub fn new(offers: Vec<Offer>) -> Self {
        Self { offers }
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_SEED)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let offers: Vec<Offer> = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for offer in &offers {
            validate(offer)?;
            if !seen.insert(offer.id.as_str()) {
                tracing::warn!(id = %offer.id, "duplicate offer id in seed data; first one wins");
            }
        }

        tracing::debug!(count = offers.len(), "catalog loaded");
        Ok(Self::new(offers))
    }

    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    pub fn lookup(&self, id: &str) -> Lookup<'_> {
        find_offer(id, &self.offers)
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}

fn validate(offer: &Offer) -> Result<(), CatalogError> {
    if let Some(rating) = offer.rating {
        if !(0.0..=5.0).contains(&rating) {
            return Err(CatalogError::RatingOutOfRange {
                id: offer.id.clone(),
                rating,
            });
        }
    }

    let loc = offer.location;
    if !loc.latitude.is_finite() || !loc.longitude.is_finite() {
        return Err(CatalogError::BadLocation {
            id: offer.id.clone(),
        });
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::fixtures::offer;
    use super::*;

    #[test]
    fn finds_offer_by_id() {
        let offers = vec![offer("1", "Loft"), offer("2", "Studio")];

        let found = find_offer("2", &offers).offer().map(|o| o.title.as_str());

        assert_eq!(found, Some("Studio"));
    }

    #[test]
    fn missing_id_is_not_found() {
        let offers = vec![offer("1", "Loft")];

        assert!(matches!(find_offer("404", &offers), Lookup::NotFound));
        assert!(matches!(find_offer("", &[]), Lookup::NotFound));
    }

    #[test]
    fn duplicate_ids_resolve_to_first_match() {
        let offers = vec![offer("1", "First"), offer("1", "Second")];

        let found = find_offer("1", &offers).offer().unwrap();

        assert_eq!(found.title, "First");
    }

    #[test]
    fn builtin_seed_loads() {
        let catalog = Catalog::builtin().unwrap();

        assert!(!catalog.is_empty());
        assert!(matches!(catalog.lookup("1"), Lookup::Found(_)));
    }

    #[test]
    fn rejects_rating_above_five() {
        let json = r#"[{
            "id": "1", "title": "Loft", "description": "", "rating": 6,
            "bedrooms": 1, "guests": 2, "price": 90,
            "owner": { "name": "A", "avatar": "a.jpg" },
            "city": "Paris",
            "location": { "latitude": 48.8, "longitude": 2.3, "zoom": 16 }
        }]"#;

        let err = Catalog::from_json(json).unwrap_err();

        assert!(matches!(err, CatalogError::RatingOutOfRange { .. }));
    }

    #[test]
    fn rejects_negative_price() {
        let json = r#"[{
            "id": "1", "title": "Loft", "description": "",
            "bedrooms": 1, "guests": 2, "price": -5,
            "owner": { "name": "A", "avatar": "a.jpg" },
            "city": "Paris",
            "location": { "latitude": 48.8, "longitude": 2.3, "zoom": 16 }
        }]"#;

        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::Parse(_))
        ));
    }
}
