//! View Module
//!
//! Pure derivations from store state plus view-local state. Nothing here
//! mutates the store directly; fetches go through the [`Catalog`].
//!
//! [`Catalog`]: crate::store::Catalog

mod borders;
mod detail;
mod filter;
mod landing;
mod list;
mod ranking;
mod reveal;
mod summary;

pub use borders::{partition_borders, BorderResolution, BorderResolver};
pub use detail::{
    derive_detail, BorderEntry, BorderSection, CountryDetail, DetailPage, NOT_FOUND_MESSAGE,
};
pub use filter::{CountryFilter, REGIONS};
pub use landing::{derive_landing, LandingPage, RankedCountry};
pub use list::{ListPage, ListView};
pub use ranking::{by_population, most_populated, rank_by_population, MOST_POPULATED_COUNT};
pub use reveal::{Reveal, INCREMENT_COUNT, INITIAL_COUNT};
pub use summary::CountrySummary;
