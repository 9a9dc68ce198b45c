pub mod error;
pub mod header;
pub mod map;
pub mod place_card;
pub mod reviews;

pub use error::error_page;
pub use header::header;
pub use map::map_region;
pub use place_card::{near_places_list, place_card};
pub use reviews::{review_form, reviews_list};
