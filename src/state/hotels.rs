//! Client-side filtering of the hotel directory.
//!
//! DESIGN
//! ======
//! The directory is fetched once; search, state, and city narrow it locally.
//! Everything here is pure so the page only wires signals to it.

#[cfg(test)]
#[path = "hotels_test.rs"]
mod hotels_test;

use std::collections::BTreeSet;

use crate::net::types::Hotel;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HotelFilter {
    /// Case-insensitive substring of the hotel name.
    pub query: String,
    /// Exact state; empty means any.
    pub state: String,
    /// Exact city; empty means any.
    pub city: String,
}

impl HotelFilter {
    pub fn is_active(&self) -> bool {
        !(self.query.is_empty() && self.state.is_empty() && self.city.is_empty())
    }

    /// Choosing a state invalidates the city selection.
    pub fn select_state(&mut self, state: impl Into<String>) {
        self.state = state.into();
        self.city.clear();
    }

    pub fn matches(&self, hotel: &Hotel) -> bool {
        let query = self.query.trim().to_lowercase();
        (query.is_empty() || hotel.hotel_name.to_lowercase().contains(&query))
            && (self.state.is_empty() || hotel.state == self.state)
            && (self.city.is_empty() || hotel.city == self.city)
    }

    pub fn apply<'a>(&self, hotels: &'a [Hotel]) -> Vec<&'a Hotel> {
        hotels.iter().filter(|h| self.matches(h)).collect()
    }
}

/// Sorted, de-duplicated non-blank states.
pub fn distinct_states(hotels: &[Hotel]) -> Vec<String> {
    distinct(hotels.iter().map(|h| h.state.as_str()))
}

/// Sorted, de-duplicated non-blank cities across the whole directory.
pub fn distinct_cities(hotels: &[Hotel]) -> Vec<String> {
    distinct(hotels.iter().map(|h| h.city.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// `"1 hotel found"` / `"N hotels found"`.
pub fn result_label(count: usize) -> String {
    if count == 1 { "1 hotel found".to_owned() } else { format!("{count} hotels found") }
}

/// The first `limit` hotels, for the home page preview.
pub fn preview(hotels: Vec<Hotel>, limit: usize) -> Vec<Hotel> {
    hotels.into_iter().take(limit).collect()
}

/// Drop a deleted hotel from a loaded list. Returns whether it was present.
pub fn remove_hotel(hotels: &mut Vec<Hotel>, id: &str) -> bool {
    let before = hotels.len();
    hotels.retain(|h| h.id != id);
    hotels.len() != before
}
