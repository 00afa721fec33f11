//! Product-card catalog logic.
//!
//! [`selection`] holds the pure resolver functions that map a product's
//! option/variant/image data plus a chosen color to the matching variant and
//! image; [`card`] holds the per-card selection state and the display values
//! derived from it.

pub mod card;
pub mod selection;

pub use card::ProductCard;
