pub mod index;
pub mod offer;

pub use index::main_page;
pub use offer::offer_page;
