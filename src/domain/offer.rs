use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// offer
//  ├── id, title, description
//  ├── isPremium, rating?, type?
//  ├── bedrooms, guests, price
//  ├── options[]            amenity labels, source order
//  ├── photos[]             { src, title }
//  ├── owner                { name, avatar, isPro }
//  ├── reviews[]
//  ├── city                 city name
//  └── location             { latitude, longitude, zoom }

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub is_premium: bool,
    pub rating: Option<f64>,
    #[serde(rename = "type")]
    pub kind: Option<OfferKind>,
    pub bedrooms: u32,
    pub guests: u32,
    pub price: u32,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub photos: Vec<Photo>,
    pub owner: Owner,
    #[serde(default)]
    pub reviews: Vec<Review>,
    pub city: String,
    pub location: Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferKind {
    Apartment,
    Room,
    House,
    Hotel,
}

impl OfferKind {
    pub fn label(self) -> &'static str {
        match self {
            OfferKind::Apartment => "Apartment",
            OfferKind::Room => "Private Room",
            OfferKind::House => "House",
            OfferKind::Hotel => "Hotel",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    pub src: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub name: String,
    pub avatar: String,
    #[serde(default)]
    pub is_pro: bool,
}

/// Only counted by the offer page itself; the reviews list renders the rest.
#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    pub id: String,
    pub user: ReviewUser,
    pub rating: f64,
    pub comment: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewUser {
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}
