//! Customer details captured at checkout.

use serde::{Deserialize, Serialize};

use crate::validation::{ValidationErrors, is_well_formed_email};

/// Customer Info
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Contact email
    pub email: String,

    /// Street address
    pub address: String,

    /// City
    pub city: String,

    /// Postal or ZIP code
    pub postal_code: String,
}

impl CustomerInfo {
    /// Checks every field is present and the email is well formed.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.require("first_name", &self.first_name, "First name is required");
        errors.require("last_name", &self.last_name, "Last name is required");

        if !is_well_formed_email(self.email.trim()) {
            errors.push("email", "Invalid email address");
        }

        errors.require("address", &self.address, "Address is required");
        errors.require("city", &self.city, "City is required");
        errors.require("postal_code", &self.postal_code, "Postal code is required");

        errors.into_result()
    }

    /// Name recorded on the order.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}


#[cfg(test)]
mod tests {
    use super::{fixtures::ada, *};

    #[test]
    fn complete_customer_is_valid() {
        assert!(ada().validate().is_ok());
    }

    #[test]
    fn reports_every_missing_field() {
        let customer = CustomerInfo::default();

        let errors = customer.validate().err().unwrap_or_default();

        assert_eq!(errors.len(), 6, "expected one error per field, got {errors}");
    }

    #[test]
    fn rejects_malformed_email() {
        let customer = CustomerInfo {
            email: "not-an-email".to_string(),
            ..ada()
        };

        let errors = customer.validate().err().unwrap_or_default();

        assert!(errors.contains("email"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn full_name_joins_trimmed_parts() {
        let customer = CustomerInfo {
            first_name: " Ada ".to_string(),
            ..ada()
        };

        assert_eq!(customer.full_name(), "Ada Lovelace");
    }
}
