//! Checkout form types.

use crate::error::CheckoutError;
use serde::{Deserialize, Serialize};

/// How the customer chose to pay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "method", rename_all = "camelCase")]
pub enum PaymentMethod {
    /// Card details as typed. Nothing is charged.
    CreditCard {
        number: String,
        expiry: String,
        cvc: String,
    },
    /// Redirect-style payment; needs no extra fields.
    PayPal,
}

impl PaymentMethod {
    /// Card payment with the given details.
    pub fn card(
        number: impl Into<String>,
        expiry: impl Into<String>,
        cvc: impl Into<String>,
    ) -> Self {
        PaymentMethod::CreditCard {
            number: number.into(),
            expiry: expiry.into(),
            cvc: cvc.into(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard { .. } => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
        }
    }

    /// Last four digits of the card number, if paying by card.
    pub fn card_last4(&self) -> Option<&str> {
        match self {
            PaymentMethod::CreditCard { number, .. } => {
                let digits = number.trim();
                let start = digits.char_indices().rev().nth(3).map_or(0, |(i, _)| i);
                Some(&digits[start..])
            }
            PaymentMethod::PayPal => None,
        }
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::CreditCard {
            number: String::new(),
            expiry: String::new(),
            cvc: String::new(),
        }
    }
}

/// Contact, shipping and payment details entered at checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Street address.
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub payment: PaymentMethod,
}

impl CheckoutForm {
    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    /// Format the shipping address as a single line.
    pub fn one_line_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address.trim(),
            self.city.trim(),
            self.state.trim(),
            self.zip_code.trim()
        )
    }

    /// Names of blank contact or shipping fields, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("zipCode", &self.zip_code),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Check that the form can be submitted.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CheckoutError::MissingFields(missing));
        }

        if let PaymentMethod::CreditCard { number, expiry, cvc } = &self.payment {
            if [number, expiry, cvc].iter().any(|v| v.trim().is_empty()) {
                return Err(CheckoutError::MissingCardDetails);
            }
        }

        Ok(())
    }
}
