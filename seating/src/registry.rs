//! The restaurant registry.

use std::collections::HashMap;

use crate::error::{Error, Operation, Result};
use crate::hours::{Day, StopOverrides};
use crate::Restaurant;

/// Registered restaurants keyed by ID.
///
/// # Examples
///
/// ```
/// use seating::{Registry, Restaurant};
///
/// let mut registry = Registry::new();
/// registry.register(Restaurant::builder("R1", "555-0100").build());
/// assert!(registry.get("R1").is_some());
///
/// registry.remove("R1").unwrap();
/// assert!(registry.remove("R1").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    restaurants: HashMap<String, Restaurant>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a restaurant.
    ///
    /// All temporary stops are cleared. Returns the entry that was replaced.
    pub fn register(&mut self, mut restaurant: Restaurant) -> Option<Restaurant> {
        restaurant.clear_stops();
        let replaced = self
            .restaurants
            .insert(restaurant.id().to_string(), restaurant);
        if let Some(ref previous) = replaced {
            log::debug!("replaced restaurant {}", previous.id());
        }
        replaced
    }

    /// Removes a restaurant. Reservations referencing it are left in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchRestaurant`] if the ID is not registered.
    pub fn remove(&mut self, id: &str) -> Result<Restaurant> {
        self.restaurants
            .remove(id)
            .ok_or_else(|| Error::NoSuchRestaurant { id: id.to_string() })
    }

    /// Sets the temporary stop range for `date`.
    ///
    /// The date must not be before `today` and must fall within the
    /// restaurant's booking window. Only days 1 through 7 have stop slots.
    ///
    /// # Errors
    ///
    /// Returns an error if the restaurant is unknown, the date is in the
    /// past, outside the booking window, or has no stop slot.
    pub fn set_temporary_stop(
        &mut self,
        id: &str,
        date: Day,
        range: &str,
        today: Day,
    ) -> Result<()> {
        let restaurant = self
            .restaurants
            .get_mut(id)
            .ok_or_else(|| Error::NoSuchRestaurant { id: id.to_string() })?;

        if date < today {
            return Err(Error::PastStopDate { date, today });
        }

        let window = restaurant.window();
        if !window.admits(date, today) {
            return Err(Error::OutsideBookingWindow {
                operation: Operation::Stop,
                offset: date.saturating_sub(today),
                min: window.min,
                max: window.max,
            });
        }

        if !StopOverrides::has_slot(date) {
            return Err(Error::StopSlotUnavailable { date });
        }

        restaurant.stops_mut().set(date, range);
        log::debug!("restaurant {id} stopped reservations on day {date} for {range}");
        Ok(())
    }

    /// Looks up a restaurant by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.get(id)
    }

    /// Returns `true` if the ID is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.restaurants.contains_key(id)
    }

    /// Number of registered restaurants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    /// Returns `true` if no restaurant is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}
