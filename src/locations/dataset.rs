use std::collections::HashSet;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tracing::info;

use crate::locations::types::{City, State};

/// Read-only set of states and their cities.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationDataset {
    #[serde(default)]
    states: Vec<State>,
    #[serde(default)]
    cities: Vec<City>,
}

impl LocationDataset {
    pub fn new(states: Vec<State>, cities: Vec<City>) -> Result<Self> {
        let dataset = Self { states, cities };
        dataset.validate()?;
        Ok(dataset)
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("cannot read location dataset {}", path.display()))?;
        let dataset = Self::parse(&content)?;
        info!(
            states = dataset.states.len(),
            cities = dataset.cities.len(),
            "location dataset loaded"
        );
        Ok(dataset)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let dataset: Self = serde_yaml::from_str(content).context("invalid location dataset")?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Unique slugs and no orphan cities; all issues are reported at once.
    fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        let mut state_slugs = HashSet::new();
        for state in &self.states {
            if !state_slugs.insert(state.slug.as_str()) {
                errors.push(format!("duplicate state slug '{}'", state.slug));
            }
        }

        let mut city_keys = HashSet::new();
        for city in &self.cities {
            if !state_slugs.contains(city.state_slug.as_str()) {
                errors.push(format!(
                    "city '{}' references unknown state '{}'",
                    city.slug, city.state_slug
                ));
            }
            if !city_keys.insert((city.state_slug.as_str(), city.slug.as_str())) {
                errors.push(format!(
                    "duplicate city slug '{}' in state '{}'",
                    city.slug, city.state_slug
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("location dataset is not valid: {}", errors.join("; ")))
        }
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn state(&self, state_slug: &str) -> Option<&State> {
        self.states.iter().find(|state| state.slug == state_slug)
    }

    pub fn city(&self, state_slug: &str, city_slug: &str) -> Option<&City> {
        self.cities
            .iter()
            .find(|city| city.state_slug == state_slug && city.slug == city_slug)
    }

    pub fn cities_for_state<'a>(&'a self, state_slug: &'a str) -> impl Iterator<Item = &'a City> + 'a {
        self.cities.iter().filter(move |city| city.state_slug == state_slug)
    }

    /// City together with its state, the pair every copy generator needs.
    pub fn locate(&self, state_slug: &str, city_slug: &str) -> Option<(&City, &State)> {
        let state = self.state(state_slug)?;
        let city = self.city(state_slug, city_slug)?;
        Some((city, state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations::types::CompetitorDensity;

    const DATASET: &str = r#"
states:
  - name: Texas
    slug: texas
    abbreviation: TX
    marketing_spend_index: 1.05
    business_count: 3000000
  - name: Ohio
    slug: ohio
    abbreviation: OH
    marketing_spend_index: 0.92
cities:
  - name: Austin
    slug: austin
    state_slug: texas
    top_industries: [Technology, Entertainment]
    business_count: 185000
    growth_rate: 0.042
    competitor_density: high
    social_media_stats:
      linkedin_penetration: 0.71
      instagram_penetration: 0.64
      facebook_penetration: 0.58
  - name: Columbus
    slug: columbus
    state_slug: ohio
    top_industries: [Finance]
    business_count: 98000
    growth_rate: 0.021
    competitor_density: medium
    social_media_stats:
      linkedin_penetration: 0.55
      instagram_penetration: 0.49
      facebook_penetration: 0.62
"#;

    #[test]
    fn parses_and_looks_up_locations() {
        let dataset = LocationDataset::parse(DATASET).unwrap();

        assert_eq!(dataset.states().len(), 2);
        assert_eq!(dataset.state("ohio").unwrap().business_count, 0);

        let (city, state) = dataset.locate("texas", "austin").unwrap();
        assert_eq!(city.competitor_density, CompetitorDensity::High);
        assert_eq!(city.primary_industry(), Some("Technology"));
        assert_eq!(state.abbreviation, "TX");

        assert!(dataset.locate("ohio", "austin").is_none());
        assert_eq!(dataset.cities_for_state("ohio").count(), 1);
    }

    #[test]
    fn new_validates_like_parse() {
        use crate::tests::common::{city, state};

        let dataset = LocationDataset::new(
            vec![state("texas", 1.0)],
            vec![city("austin", "texas"), city("dallas", "texas")],
        )
        .unwrap();
        assert_eq!(dataset.cities_for_state("texas").count(), 2);

        let err = LocationDataset::new(vec![state("texas", 1.0)], vec![city("akron", "ohio")])
            .unwrap_err()
            .to_string();
        assert!(err.contains("unknown state 'ohio'"));
    }

    #[test]
    fn reports_orphans_and_duplicates_together() {
        let broken = r#"
states:
  - { name: Ohio, slug: ohio, abbreviation: OH, marketing_spend_index: 1.0 }
  - { name: Ohio, slug: ohio, abbreviation: OH, marketing_spend_index: 1.0 }
cities:
  - name: Nowhere
    slug: nowhere
    state_slug: atlantis
    business_count: 1
    growth_rate: 0.0
    competitor_density: low
    social_media_stats: { linkedin_penetration: 0.1, instagram_penetration: 0.1, facebook_penetration: 0.1 }
"#;
        let err = LocationDataset::parse(broken).unwrap_err().to_string();
        assert!(err.contains("duplicate state slug 'ohio'"));
        assert!(err.contains("unknown state 'atlantis'"));
    }
}
