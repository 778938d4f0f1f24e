//! Population ranking.

use std::cmp::Ordering;

use crate::models::Country;

/// Number of slides in the landing page's most-populated carousel.
pub const MOST_POPULATED_COUNT: usize = 20;

/// Descending population, ties broken by ascending code.
pub fn by_population(a: &Country, b: &Country) -> Ordering {
    b.population
        .cmp(&a.population)
        .then_with(|| a.cca3.cmp(&b.cca3))
}

/// Sorts a copy of `countries` by [`by_population`].
pub fn rank_by_population<'a, I>(countries: I) -> Vec<&'a Country>
where
    I: IntoIterator<Item = &'a Country>,
{
    let mut ranked: Vec<&Country> = countries.into_iter().collect();
    ranked.sort_by(|a, b| by_population(a, b));
    ranked
}

/// The `limit` most populated countries.
pub fn most_populated(countries: &[Country], limit: usize) -> Vec<&Country> {
    let mut ranked = rank_by_population(countries);
    ranked.truncate(limit);
    ranked
}
