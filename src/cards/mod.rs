//! Card system: definitions, aspects, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Opaque string identifier
//! - `CardType`: Leader, Base, or a main-deck type
//! - `Aspect`: The closed set of gameplay colors
//! - `Card`: Static card data
//! - `CardCatalog`: Lookup, search, and pagination
//!
//! ## Neutral Cards
//!
//! Cards with an empty aspect list are neutral and fit any deck.

pub mod aspect;
pub mod definition;
pub mod registry;
pub mod sample;

pub use aspect::{Aspect, AspectCount, ASPECT_COUNT, NEUTRAL_COLOR};
pub use definition::{Card, CardId, CardType};
pub use registry::{CardCatalog, CardQuery, Page, PageMeta, DEFAULT_PAGE_LIMIT};
pub use sample::sample_cards;
