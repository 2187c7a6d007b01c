//! Customers

use std::fmt;

use serde::{Deserialize, Serialize};

/// Customer record captured in the first step of the sales form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    /// National identification or tax number
    pub identification: String,

    /// Full name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Contact phone
    pub phone: String,

    /// Street address
    pub address: String,

    /// Optional delivery reference (landmark, directions)
    pub reference: String,

    /// Country name, as listed in the location table
    pub country: String,

    /// State name within `country`
    pub state: String,

    /// City name within `state`
    pub city: String,
}

/// Editable customer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerField {
    /// Identification
    Identification,
    /// Name
    Name,
    /// Email
    Email,
    /// Phone
    Phone,
    /// Address
    Address,
    /// Reference
    Reference,
    /// Country; clears state and city
    Country,
    /// State; clears city
    State,
    /// City
    City,
}

impl CustomerField {
    /// All customer fields, in form order.
    pub const ALL: [CustomerField; 9] = [
        Self::Identification,
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Address,
        Self::Reference,
        Self::Country,
        Self::State,
        Self::City,
    ];
}

impl fmt::Display for CustomerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::validation::Field::from(*self).fmt(f)
    }
}

impl Customer {
    /// Set a single field.
    ///
    /// Location fields cascade: a new country clears state and city, a new state
    /// clears city. Values are not checked against the location table.
    pub fn set(&mut self, field: CustomerField, value: impl Into<String>) {
        let value = value.into();

        match field {
            CustomerField::Identification => self.identification = value,
            CustomerField::Name => self.name = value,
            CustomerField::Email => self.email = value,
            CustomerField::Phone => self.phone = value,
            CustomerField::Address => self.address = value,
            CustomerField::Reference => self.reference = value,
            CustomerField::Country => {
                self.country = value;
                self.state.clear();
                self.city.clear();
            }
            CustomerField::State => {
                self.state = value;
                self.city.clear();
            }
            CustomerField::City => self.city = value,
        }
    }

    /// Read a single field.
    pub fn get(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::Identification => &self.identification,
            CustomerField::Name => &self.name,
            CustomerField::Email => &self.email,
            CustomerField::Phone => &self.phone,
            CustomerField::Address => &self.address,
            CustomerField::Reference => &self.reference,
            CustomerField::Country => &self.country,
            CustomerField::State => &self.state,
            CustomerField::City => &self.city,
        }
    }
}
