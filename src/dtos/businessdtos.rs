use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::businessmodel::{Business, BusinessType};

fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| {
        Regex::new(r"(?i)^\+?[0-9 ()\-./]*[0-9][0-9 ()\-./]*(\s*(x|ext\.?)\s*[0-9]+)?$")
            .expect("phone regex is valid")
    })
}

// Empty means "not provided"
fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.trim().is_empty() || phone_regex().is_match(phone.trim()) {
        return Ok(());
    }

    let mut error = ValidationError::new("invalid_phone");
    error.message = Some("Phone number is invalid".into());
    Err(error)
}

/// Blank optional form fields are stored as NULL.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct RegisterBusinessDto {
    #[validate(length(min = 2, max = 100, message = "Business name must be between 2 and 100 characters"))]
    pub business_name: String,

    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email is invalid")
    )]
    pub email: String,

    pub business_type: BusinessType,

    #[validate(
        length(max = 20, message = "Phone number must not exceed 20 characters"),
        custom = "validate_phone"
    )]
    pub phone: Option<String>,

    #[validate(length(max = 200, message = "Address must not exceed 200 characters"))]
    pub address: Option<String>,

    #[validate(
        length(min = 1, message = "Password is required"),
        length(min = 8, message = "Password must be at least 8 characters"),
        length(max = 64, message = "Password must not be more than 64 characters")
    )]
    pub password: String,

    #[validate(
        length(min = 1, message = "Confirm Password is required"),
        must_match(other = "password", message = "passwords do not match")
    )]
    #[serde(rename = "passwordConfirm")]
    pub password_confirm: String,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct LoginBusinessDto {
    #[validate(length(min = 1, message = "Email is required"), email(message = "Email is invalid"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Validate, Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdateDto {
    #[validate(length(min = 2, max = 100, message = "Business name must be between 2 and 100 characters"))]
    pub business_name: String,

    pub business_type: BusinessType,

    #[validate(
        length(max = 20, message = "Phone number must not exceed 20 characters"),
        custom = "validate_phone"
    )]
    pub phone: Option<String>,

    #[validate(length(max = 200, message = "Address must not exceed 200 characters"))]
    pub address: Option<String>,
}

#[derive(Validate, Debug, Default, Clone, Serialize, Deserialize)]
pub struct PasswordChangeDto {
    #[validate(length(min = 1, message = "Current password is required."))]
    pub current_password: String,

    #[validate(
        length(min = 1, message = "New password is required."),
        length(min = 8, message = "New password must be at least 8 characters"),
        length(max = 64, message = "New password must not be more than 64 characters")
    )]
    pub new_password: String,

    #[validate(
        length(min = 1, message = "New password confirm is required."),
        must_match(other = "new_password", message = "new passwords do not match")
    )]
    pub confirm_password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FilterBusinessDto {
    pub id: String,
    pub business_name: String,
    pub email: String,
    pub business_type: Option<String>,
    pub business_type_label: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl FilterBusinessDto {
    pub fn filter_business(business: &Business) -> Self {
        FilterBusinessDto {
            id: business.id.to_string(),
            business_name: business.business_name.to_owned(),
            email: business.email.to_owned(),
            business_type: business.business_type.map(|t| t.to_str().to_string()),
            business_type_label: business.business_type.map(|t| t.label().to_string()),
            phone: business.phone.clone(),
            address: business.address.clone(),
            created_at: business.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BusinessData {
    pub business: FilterBusinessDto,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BusinessResponseDto {
    pub status: String,
    pub data: BusinessData,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BusinessLoginResponseDto {
    pub status: String,
    pub token: String,
}

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub status: &'static str,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> RegisterBusinessDto {
        RegisterBusinessDto {
            business_name: "Bright Smiles".to_string(),
            email: "owner@brightsmiles.test".to_string(),
            business_type: BusinessType::Clinic,
            phone: Some("+1 555-010-2030".to_string()),
            address: None,
            password: "supersecret".to_string(),
            password_confirm: "supersecret".to_string(),
        }
    }

    #[test]
    fn valid_registration_passes() {
        assert!(registration().validate().is_ok());
    }

    #[test]
    fn registration_rules() {
        let mut dto = registration();
        dto.password = "short".to_string();
        dto.password_confirm = "short".to_string();
        assert!(dto.validate().is_err());

        let mut dto = registration();
        dto.password_confirm = "different".to_string();
        assert!(dto.validate().is_err());

        let mut dto = registration();
        dto.business_name = "A".to_string();
        assert!(dto.validate().is_err());

        let mut dto = registration();
        dto.email = "not-an-email".to_string();
        assert!(dto.validate().is_err());

        let mut dto = registration();
        dto.phone = Some("call me maybe".to_string());
        assert!(dto.validate().is_err());

        let mut dto = registration();
        dto.address = Some("x".repeat(201));
        assert!(dto.validate().is_err());
    }

    #[test]
    fn password_longer_than_hash_limit_is_rejected() {
        let mut dto = registration();
        dto.password = "a".repeat(65);
        dto.password_confirm = "a".repeat(65);
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));

        let mut dto = registration();
        dto.password = "a".repeat(64);
        dto.password_confirm = "a".repeat(64);
        assert!(dto.validate().is_ok());

        let change = PasswordChangeDto {
            current_password: "oldpassword".to_string(),
            new_password: "b".repeat(65),
            confirm_password: "b".repeat(65),
        };
        assert!(change.validate().is_err());
    }

    #[test]
    fn phone_accepts_extensions_and_punctuation() {
        for phone in ["555-1234 x2", "+44 (20) 7946.0958", "555 0100 ext. 12", "5550100"] {
            let mut dto = registration();
            dto.phone = Some(phone.to_string());
            assert!(dto.validate().is_ok(), "{} should be accepted", phone);
        }

        for phone in ["call me maybe", "---", "555-1234 x"] {
            let mut dto = registration();
            dto.phone = Some(phone.to_string());
            assert!(dto.validate().is_err(), "{} should be rejected", phone);
        }
    }

    #[test]
    fn blank_phone_counts_as_absent() {
        let mut dto = registration();
        dto.phone = Some(String::new());
        assert!(dto.validate().is_ok());
        assert_eq!(normalize_optional(Some("   ".to_string())), None);
        assert_eq!(
            normalize_optional(Some(" 12 Main St ".to_string())),
            Some("12 Main St".to_string())
        );
    }

    #[test]
    fn business_type_uses_form_values() {
        let dto: RegisterBusinessDto = serde_json::from_value(serde_json::json!({
            "business_name": "Corner Shop",
            "email": "shop@example.com",
            "business_type": "retail",
            "password": "password123",
            "passwordConfirm": "password123"
        }))
        .unwrap();
        assert_eq!(dto.business_type, BusinessType::Retail);
        assert_eq!(dto.phone, None);

        let unknown = serde_json::from_value::<RegisterBusinessDto>(serde_json::json!({
            "business_name": "Corner Shop",
            "email": "shop@example.com",
            "business_type": "spaceport",
            "password": "password123",
            "passwordConfirm": "password123"
        }));
        assert!(unknown.is_err());
    }

    #[test]
    fn password_change_rules() {
        let dto = PasswordChangeDto {
            current_password: "oldpassword".to_string(),
            new_password: "newpassword".to_string(),
            confirm_password: "newpassword".to_string(),
        };
        assert!(dto.validate().is_ok());

        let mismatch = PasswordChangeDto {
            confirm_password: "newpasswordx".to_string(),
            ..dto.clone()
        };
        assert!(mismatch.validate().is_err());

        let short = PasswordChangeDto {
            new_password: "tiny".to_string(),
            confirm_password: "tiny".to_string(),
            ..dto
        };
        assert!(short.validate().is_err());
    }
}
