use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::contacts::models::Contact;

/// Contact form submission; every field is trimmed and required
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateContactDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 255, message = "Email must be 255 characters or less")
    )]
    pub email: String,

    #[validate(length(min = 1, max = 500, message = "Subject must be 1-500 characters"))]
    pub subject: String,

    #[validate(length(min = 1, max = 5000, message = "Message must be 1-5000 characters"))]
    pub message: String,
}

impl CreateContactDto {
    /// Trim every field, then validate the trimmed values
    pub fn normalized(self) -> Result<Self> {
        let dto = Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        };

        if dto.name.is_empty()
            || dto.email.is_empty()
            || dto.subject.is_empty()
            || dto.message.is_empty()
        {
            return Err(AppError::Validation(
                "All fields are required and cannot be empty".to_string(),
            ));
        }

        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(dto)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactResponseDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Contact> for ContactResponseDto {
    fn from(c: Contact) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            subject: c.subject,
            message: c.message,
            is_read: c.is_read,
            created_at: c.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> CreateContactDto {
        CreateContactDto {
            name: "  Siti Aminah ".to_string(),
            email: " siti@example.com ".to_string(),
            subject: "Pengurusan KTP".to_string(),
            message: "Mohon informasi jam layanan kantor desa.".to_string(),
        }
    }

    #[test]
    fn test_fields_are_trimmed() {
        let normalized = dto().normalized().unwrap();
        assert_eq!(normalized.name, "Siti Aminah");
        assert_eq!(normalized.email, "siti@example.com");
    }

    #[test]
    fn test_whitespace_only_field_is_rejected() {
        let mut input = dto();
        input.subject = "   ".to_string();
        assert!(matches!(input.normalized(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let mut input = dto();
        input.email = "not-an-email".to_string();
        assert!(input.normalized().is_err());
    }

    #[test]
    fn test_length_limits() {
        let mut input = dto();
        input.subject = "s".repeat(501);
        assert!(input.normalized().is_err());

        let mut input = dto();
        input.message = "m".repeat(5000);
        assert!(input.normalized().is_ok());

        let mut input = dto();
        input.message = "m".repeat(5001);
        assert!(input.normalized().is_err());
    }
}
