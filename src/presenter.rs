// src/presenter.rs
//
// Turns a lookup result into a view model where every field already has a value,
// so the templates never branch on a missing offer.

use crate::domain::offer::Review;
use crate::domain::{city_by_name, default_city, Catalog, City, Lookup, Offer};

pub const PAGE_TITLE_PREFIX: &str = "6 cities - ";
/// What the page heading shows in place of a title when the offer is missing.
pub const MISSING_TITLE: &str = "undefined";
/// Bar width used when an offer has no rating.
// FIXME: a rating of 0 renders 0% but a missing rating renders 20%; 0% is likely intended.
pub const UNRATED_WIDTH: f64 = 20.0;
/// Feature label used when the offer has no type.
pub const DEFAULT_KIND_LABEL: &str = "Private Room";

#[derive(Debug, Clone, PartialEq)]
pub struct OfferVm {
    pub page_title: String,
    pub name: String,
    pub is_premium: bool,
    pub rating_width: f64,
    pub rating_label: String,
    pub kind_label: &'static str,
    pub bedrooms: String,
    pub guests: String,
    pub price: String,
    pub amenities: Vec<String>,
    pub photos: Vec<PhotoVm>,
    pub host: HostVm,
    pub description_paragraphs: Vec<String>,
    pub review_count: usize,
    pub reviews: Vec<ReviewVm>,
    pub map: MapVm,
    pub nearby: Vec<PlaceCardVm>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhotoVm {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HostVm {
    pub name: String,
    pub avatar: String,
    pub is_pro: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewVm {
    pub name: String,
    pub avatar: String,
    pub rating_width: f64,
    pub comment: String,
    pub datetime: String,
    pub date_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapVm {
    pub city: City,
    pub points: Vec<MapPoint>,
    pub selected_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct MapPoint {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceCardVm {
    pub id: String,
    pub title: String,
    pub price: u32,
    pub rating_width: f64,
    pub kind_label: &'static str,
    pub image: String,
    pub is_premium: bool,
}

pub fn present(lookup: Lookup<'_>, catalog: &Catalog) -> OfferVm {
    match lookup {
        Lookup::Found(offer) => OfferVm::from_offer(offer, catalog),
        Lookup::NotFound => OfferVm::not_found(catalog),
    }
}

impl OfferVm {
    pub fn from_offer(offer: &Offer, catalog: &Catalog) -> Self {
        Self {
            page_title: format!("{PAGE_TITLE_PREFIX}{}", offer.title),
            name: offer.title.clone(),
            is_premium: offer.is_premium,
            rating_width: rating_width(offer.rating),
            rating_label: offer.rating.map(format_number).unwrap_or_default(),
            kind_label: kind_label(offer),
            bedrooms: offer.bedrooms.to_string(),
            guests: offer.guests.to_string(),
            price: offer.price.to_string(),
            amenities: offer.options.clone(),
            photos: offer
                .photos
                .iter()
                .map(|photo| PhotoVm {
                    src: photo.src.clone(),
                    alt: photo.title.clone(),
                })
                .collect(),
            host: HostVm {
                name: offer.owner.name.clone(),
                avatar: offer.owner.avatar.clone(),
                is_pro: offer.owner.is_pro,
            },
            // TODO: confirm the repeated paragraph is intended before collapsing it to one.
            description_paragraphs: vec![offer.description.clone(), offer.description.clone()],
            review_count: offer.reviews.len(),
            reviews: offer.reviews.iter().map(ReviewVm::from_review).collect(),
            map: MapVm::for_city(city_by_name(&offer.city), Some(offer.id.as_str()), catalog),
            nearby: nearby_cards(catalog),
        }
    }

    /// Degraded page for an id the catalog does not know.
    pub fn not_found(catalog: &Catalog) -> Self {
        tracing::debug!("presenting degraded offer page");

        Self {
            page_title: format!("{PAGE_TITLE_PREFIX}{MISSING_TITLE}"),
            name: String::new(),
            is_premium: false,
            rating_width: rating_width(None),
            rating_label: String::new(),
            kind_label: DEFAULT_KIND_LABEL,
            bedrooms: String::new(),
            guests: String::new(),
            price: String::new(),
            amenities: Vec::new(),
            photos: Vec::new(),
            host: HostVm::default(),
            description_paragraphs: vec![String::new(), String::new()],
            review_count: 0,
            reviews: Vec::new(),
            map: MapVm::for_city(default_city(), None, catalog),
            nearby: nearby_cards(catalog),
        }
    }
}

impl ReviewVm {
    fn from_review(review: &Review) -> Self {
        Self {
            name: review.user.name.clone(),
            avatar: review.user.avatar.clone(),
            rating_width: rating_width(Some(review.rating)),
            comment: review.comment.clone(),
            datetime: review.date.format("%Y-%m-%d").to_string(),
            date_label: review.date.format("%B %Y").to_string(),
        }
    }
}

impl MapVm {
    fn for_city(city: City, selected_id: Option<&str>, catalog: &Catalog) -> Self {
        let points = catalog
            .offers()
            .iter()
            .filter(|offer| city_by_name(&offer.city) == city)
            .map(|offer| MapPoint {
                id: offer.id.clone(),
                latitude: offer.location.latitude,
                longitude: offer.location.longitude,
            })
            .collect();

        Self {
            city,
            points,
            selected_id: selected_id.map(str::to_string),
        }
    }
}

impl PlaceCardVm {
    pub fn from_offer(offer: &Offer) -> Self {
        Self {
            id: offer.id.clone(),
            title: offer.title.clone(),
            price: offer.price,
            rating_width: rating_width(offer.rating),
            kind_label: kind_label(offer),
            image: offer
                .photos
                .first()
                .map(|photo| photo.src.clone())
                .unwrap_or_default(),
            is_premium: offer.is_premium,
        }
    }
}

fn nearby_cards(catalog: &Catalog) -> Vec<PlaceCardVm> {
    catalog.offers().iter().map(PlaceCardVm::from_offer).collect()
}

fn kind_label(offer: &Offer) -> &'static str {
    offer.kind.map(|kind| kind.label()).unwrap_or(DEFAULT_KIND_LABEL)
}

/// Star bar fill in percent.
pub fn rating_width(rating: Option<f64>) -> f64 {
    match rating {
        Some(rating) => rating * 20.0,
        None => UNRATED_WIDTH,
    }
}

/// Formats without a trailing `.0` and without float noise (`4.7 * 20`).
pub fn format_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number(value))
}
