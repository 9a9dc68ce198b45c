pub mod catalog;
pub mod city;
pub mod offer;

pub use catalog::{Catalog, Lookup};
pub use city::{city_by_name, default_city, City};
pub use offer::Offer;
