use crate::locations::City;

/// Internal-linking candidates for a city page.
///
/// Up to `ceil(limit / 2)` other cities of the same state in input order,
/// then cities from other states sharing an industry, largest first.
pub fn related_locations<'a>(city: &City, all: &'a [City], limit: usize) -> Vec<&'a City> {
    let same_state: Vec<&City> = all
        .iter()
        .filter(|other| other.state_slug == city.state_slug && other.slug != city.slug)
        .take(limit.div_ceil(2))
        .collect();

    let mut similar_industry: Vec<&City> = all
        .iter()
        .filter(|other| other.state_slug != city.state_slug && other.shares_industry_with(city))
        .collect();
    // stable sort keeps input order among equal counts
    similar_industry.sort_by(|a, b| b.business_count.cmp(&a.business_count));

    let remaining = limit.saturating_sub(same_state.len());
    same_state
        .into_iter()
        .chain(similar_industry.into_iter().take(remaining))
        .collect()
}
