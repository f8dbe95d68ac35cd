//! Hotel list state and viewer search filters.
//!
//! DESIGN
//! ======
//! Filtering happens client-side over the already-loaded list: the backend
//! list is small and the viewer expects keystroke-latency narrowing. The
//! filter core is pure; pages apply it inside a memo.

#[cfg(test)]
#[path = "hotels_test.rs"]
mod hotels_test;

use crate::net::types::{Hotel, HotelCreate, HotelUpdate};

/// Shared hotel list state for dashboards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HotelsState {
    pub items: Vec<Hotel>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Viewer search criteria.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchFilters {
    /// Free-text term matched against name, city, country, and address.
    pub term: String,
    pub city: String,
    pub country: String,
    pub show_filters: bool,
}

impl SearchFilters {
    /// Case-insensitive match of this filter set against one hotel.
    pub fn matches(&self, hotel: &Hotel) -> bool {
        let term = self.term.to_lowercase();
        let matches_term = term.is_empty()
            || hotel.name.to_lowercase().contains(&term)
            || hotel.city.to_lowercase().contains(&term)
            || hotel.country.to_lowercase().contains(&term)
            || hotel.address.to_lowercase().contains(&term);
        let matches_city =
            self.city.is_empty() || hotel.city.to_lowercase().contains(&self.city.to_lowercase());
        let matches_country = self.country.is_empty()
            || hotel.country.to_lowercase().contains(&self.country.to_lowercase());
        matches_term && matches_city && matches_country
    }
}

/// Hotels passing the filters, in list order.
pub fn filter_hotels(hotels: &[Hotel], filters: &SearchFilters) -> Vec<Hotel> {
    hotels.iter().filter(|h| filters.matches(h)).cloned().collect()
}

/// Distinct cities in first-seen order, for the city dropdown.
pub fn distinct_cities(hotels: &[Hotel]) -> Vec<String> {
    let mut cities = Vec::new();
    for hotel in hotels {
        if !cities.contains(&hotel.city) {
            cities.push(hotel.city.clone());
        }
    }
    cities
}

/// Distinct countries in first-seen order, for the country dropdown.
pub fn distinct_countries(hotels: &[Hotel]) -> Vec<String> {
    let mut countries = Vec::new();
    for hotel in hotels {
        if !countries.contains(&hotel.country) {
            countries.push(hotel.country.clone());
        }
    }
    countries
}

/// Editable fields for the super-admin create/edit hotel dialog.
///
/// Numeric fields stay as raw input strings until payload construction so
/// partial typing never panics or snaps to a different value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HotelForm {
    pub name: String,
    pub tax_number: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub working_hours_start: String,
    pub working_hours_end: String,
    pub has_gym: bool,
    pub has_spa: bool,
    pub has_wifi: bool,
    pub has_parking: bool,
    pub swimming_pools_count: String,
    pub max_reservations_capacity: String,
}

impl HotelForm {
    /// Prefill the form from an existing hotel for editing.
    pub fn from_hotel(hotel: &Hotel) -> Self {
        Self {
            name: hotel.name.clone(),
            tax_number: hotel.tax_number.clone(),
            contact_email: hotel.contact_email.clone(),
            contact_phone: hotel.contact_phone.clone(),
            address: hotel.address.clone(),
            city: hotel.city.clone(),
            country: hotel.country.clone(),
            working_hours_start: hotel.working_hours_start.clone(),
            working_hours_end: hotel.working_hours_end.clone(),
            has_gym: hotel.has_gym,
            has_spa: hotel.has_spa,
            has_wifi: hotel.has_wifi,
            has_parking: hotel.has_parking,
            swimming_pools_count: hotel.swimming_pools_count.to_string(),
            max_reservations_capacity: hotel.max_reservations_capacity.to_string(),
        }
    }

    fn parse_count(raw: &str, field: &str) -> Result<u32, String> {
        if raw.trim().is_empty() {
            return Ok(0);
        }
        raw.trim().parse().map_err(|_| format!("{field} must be a whole number"))
    }

    /// Full creation payload; `Err` carries a user-facing message.
    pub fn create_payload(&self) -> Result<HotelCreate, String> {
        for (value, label) in [
            (&self.name, "Name"),
            (&self.tax_number, "Tax number"),
            (&self.contact_email, "Contact email"),
            (&self.city, "City"),
            (&self.country, "Country"),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{label} is required"));
            }
        }
        Ok(HotelCreate {
            name: self.name.trim().to_owned(),
            tax_number: self.tax_number.trim().to_owned(),
            contact_email: self.contact_email.trim().to_owned(),
            contact_phone: self.contact_phone.trim().to_owned(),
            address: self.address.trim().to_owned(),
            city: self.city.trim().to_owned(),
            country: self.country.trim().to_owned(),
            working_hours_start: self.working_hours_start.clone(),
            working_hours_end: self.working_hours_end.clone(),
            gallery: Vec::new(),
            has_gym: self.has_gym,
            has_spa: self.has_spa,
            has_wifi: self.has_wifi,
            has_parking: self.has_parking,
            swimming_pools_count: Self::parse_count(&self.swimming_pools_count, "Pools")?,
            max_reservations_capacity: Self::parse_count(
                &self.max_reservations_capacity,
                "Capacity",
            )?,
            is_active: true,
        })
    }

    /// Partial update payload covering the PUT-editable fields. Activation
    /// is toggled through its own action, never from this form.
    pub fn update_payload(&self) -> Result<HotelUpdate, String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_owned());
        }
        Ok(HotelUpdate {
            name: Some(self.name.trim().to_owned()),
            contact_email: Some(self.contact_email.trim().to_owned()),
            contact_phone: Some(self.contact_phone.trim().to_owned()),
            address: Some(self.address.trim().to_owned()),
            city: Some(self.city.trim().to_owned()),
            country: Some(self.country.trim().to_owned()),
            working_hours_start: Some(self.working_hours_start.clone()),
            working_hours_end: Some(self.working_hours_end.clone()),
            is_active: None,
        })
    }
}
