//! Postal address block (ADR property, RFC 6350 §6.3.1).

use super::field::{present, text_setters};

/// One postal address of the contact.
///
/// All components are optional. `street` may contain line breaks for a
/// second address line; they stay inside the single ADR value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBlock {
    /// Free-form delivery label (LABEL property or parameter).
    pub label: Option<String>,
    /// Post office box.
    pub po_box: Option<String>,
    /// Extended address (e.g., apartment or suite number).
    pub extended: Option<String>,
    /// Street address.
    pub street: Option<String>,
    /// Locality (city).
    pub city: Option<String>,
    /// Region (state or province).
    pub state_province: Option<String>,
    /// Postal code. Numeric input is stored as its decimal text.
    pub postal_code: Option<String>,
    /// Country name.
    pub country_region: Option<String>,
}

impl AddressBlock {
    /// Creates an empty address.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    text_setters! {
        /// Sets the delivery label.
        set_label => label;
        /// Sets the post office box.
        set_po_box => po_box;
        /// Sets the extended address.
        set_extended => extended;
        /// Sets the street; embedded line breaks are kept.
        set_street => street;
        /// Sets the city.
        set_city => city;
        /// Sets the state or province.
        set_state_province => state_province;
        /// Sets the postal code.
        set_postal_code => postal_code;
        /// Sets the country or region.
        set_country_region => country_region;
    }

    /// Returns the seven ADR components in RFC order: post office box,
    /// extended, street, locality, region, postal code, country.
    #[must_use]
    pub fn components(&self) -> [Option<&str>; 7] {
        [
            present(self.po_box.as_ref()),
            present(self.extended.as_ref()),
            present(self.street.as_ref()),
            present(self.city.as_ref()),
            present(self.state_province.as_ref()),
            present(self.postal_code.as_ref()),
            present(self.country_region.as_ref()),
        ]
    }

    /// Returns the label when set and not blank.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        present(self.label.as_ref())
    }

    /// Returns whether any ADR component is set.
    #[must_use]
    pub fn has_components(&self) -> bool {
        self.components().iter().any(Option::is_some)
    }

    /// Returns whether neither components nor label are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.has_components() && self.label().is_none()
    }
}
