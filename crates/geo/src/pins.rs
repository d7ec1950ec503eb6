//! Map pin aggregation.
//!
//! Active businesses sharing a category, neighborhood and exact address
//! location collapse into one pin carrying a count.

use crate::{Business, City, Coordinate};
use serde::Serialize;
use std::collections::HashMap;

/// Upper bound on the number of pins returned.
pub const MAX_PINS: usize = 100;

/// One marker on the directory map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPin {
    /// 1-based position in the result list
    pub id: usize,
    pub category: String,
    pub neighborhood: String,
    pub lat: f64,
    pub lng: f64,
    pub count: usize,
}

/// Optional narrowing of the businesses that produce pins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PinFilter {
    pub category: Option<String>,
    pub city: Option<City>,
}

impl PinFilter {
    fn matches(&self, business: &Business) -> bool {
        if !business.is_active {
            return false;
        }
        if let Some(category) = &self.category {
            if &business.category != category {
                return false;
            }
        }
        match self.city {
            Some(city) => business.city() == Some(city),
            None => true,
        }
    }
}

#[derive(Hash, PartialEq, Eq)]
struct PinKey<'a> {
    category: &'a str,
    neighborhood: &'a str,
    lat_bits: u64,
    lng_bits: u64,
}

struct Group {
    category: String,
    neighborhood: String,
    lat_sum: f64,
    lng_sum: f64,
    count: usize,
}

/// Groups businesses into map pins, in first-seen order.
///
/// Businesses without an address location produce no pin.
pub fn aggregate_pins(businesses: &[Business], filter: &PinFilter) -> Vec<MapPin> {
    let mut index: HashMap<PinKey<'_>, usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();
    let mut skipped = 0usize;

    for business in businesses.iter().filter(|b| filter.matches(b)) {
        let Some(address) = business.address.as_ref() else {
            skipped += 1;
            continue;
        };
        let Some(coord) = address.coordinates.map(Coordinate::from) else {
            skipped += 1;
            continue;
        };

        let key = PinKey {
            category: &business.category,
            neighborhood: &address.neighborhood,
            lat_bits: coord.latitude.to_bits(),
            lng_bits: coord.longitude.to_bits(),
        };

        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(Group {
                category: business.category.clone(),
                neighborhood: address.neighborhood.clone(),
                lat_sum: 0.0,
                lng_sum: 0.0,
                count: 0,
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.lat_sum += coord.latitude;
        group.lng_sum += coord.longitude;
        group.count += 1;
    }

    if skipped > 0 {
        tracing::debug!(skipped, "Businesses without address coordinates produce no pin");
    }

    groups
        .into_iter()
        .take(MAX_PINS)
        .enumerate()
        .map(|(i, g)| MapPin {
            id: i + 1,
            category: g.category,
            neighborhood: g.neighborhood,
            lat: g.lat_sum / g.count as f64,
            lng: g.lng_sum / g.count as f64,
            count: g.count,
        })
        .collect()
}
