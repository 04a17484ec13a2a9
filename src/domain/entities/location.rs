//! Venue location embedded in a camp.

/// Physical venue of a camp.
///
/// A value object: it has no identity of its own and is stored and deleted
/// together with its owning [`crate::domain::entities::Camp`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub venue_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city_town: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl Location {
    /// Returns true when no location field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_location_is_empty() {
        assert!(Location::default().is_empty());
    }

    #[test]
    fn test_location_with_city_is_not_empty() {
        let location = Location {
            city_town: Some("Atlanta".to_string()),
            ..Location::default()
        };

        assert!(!location.is_empty());
    }
}
