use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type UserId = u64;

/// One row of the user table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub website: String,
}

impl UserRecord {
    pub fn from_draft(id: UserId, draft: UserDraft) -> Self {
        let UserDraft {
            first_name,
            last_name,
            email,
            phone,
            company,
            website,
        } = draft;
        Self {
            id,
            first_name,
            last_name,
            email,
            phone,
            company,
            website,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.full_name().to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
    }

    pub fn field(&self, field: UserField) -> &str {
        match field {
            UserField::FirstName => &self.first_name,
            UserField::LastName => &self.last_name,
            UserField::Email => &self.email,
            UserField::Phone => &self.phone,
            UserField::Company => &self.company,
            UserField::Website => &self.website,
        }
    }

    pub fn field_mut(&mut self, field: UserField) -> &mut String {
        match field {
            UserField::FirstName => &mut self.first_name,
            UserField::LastName => &mut self.last_name,
            UserField::Email => &mut self.email,
            UserField::Phone => &mut self.phone,
            UserField::Company => &mut self.company,
            UserField::Website => &mut self.website,
        }
    }

    pub fn validate(&self) -> Result<(), UserValidationError> {
        validate_required(&self.first_name, &self.last_name, &self.email)
    }
}

/// Unsaved contents of the add-user form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub website: String,
}

impl UserDraft {
    pub fn field(&self, field: UserField) -> &str {
        match field {
            UserField::FirstName => &self.first_name,
            UserField::LastName => &self.last_name,
            UserField::Email => &self.email,
            UserField::Phone => &self.phone,
            UserField::Company => &self.company,
            UserField::Website => &self.website,
        }
    }

    pub fn field_mut(&mut self, field: UserField) -> &mut String {
        match field {
            UserField::FirstName => &mut self.first_name,
            UserField::LastName => &mut self.last_name,
            UserField::Email => &mut self.email,
            UserField::Phone => &mut self.phone,
            UserField::Company => &mut self.company,
            UserField::Website => &mut self.website,
        }
    }

    pub fn validate(&self) -> Result<(), UserValidationError> {
        validate_required(&self.first_name, &self.last_name, &self.email)
    }
}

/// Editable columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserField {
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    Website,
}

impl UserField {
    pub const ALL: [Self; 6] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Company,
        Self::Website,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Company => "Company",
            Self::Website => "Website",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UserValidationError {
    #[error("First name, last name, and email are required.")]
    MissingRequiredFields,
}

fn validate_required(
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Result<(), UserValidationError> {
    if [first_name, last_name, email]
        .iter()
        .any(|value| value.trim().is_empty())
    {
        return Err(UserValidationError::MissingRequiredFields);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(first: &str, last: &str, email: &str) -> UserDraft {
        UserDraft {
            first_name: first.to_owned(),
            last_name: last.to_owned(),
            email: email.to_owned(),
            ..UserDraft::default()
        }
    }

    #[test]
    fn test_validation_requires_name_and_email() {
        assert_eq!(draft("Ada", "Lovelace", "ada@example.com").validate(), Ok(()));
        assert_eq!(
            draft("", "Lovelace", "ada@example.com").validate(),
            Err(UserValidationError::MissingRequiredFields)
        );
        assert_eq!(
            draft("Ada", "   ", "ada@example.com").validate(),
            Err(UserValidationError::MissingRequiredFields)
        );
        assert_eq!(
            draft("Ada", "Lovelace", "").validate(),
            Err(UserValidationError::MissingRequiredFields)
        );
    }

    #[test]
    fn test_validation_message() {
        assert_eq!(
            UserValidationError::MissingRequiredFields.to_string(),
            "First name, last name, and email are required."
        );
    }

    #[test]
    fn test_matches_full_name_and_email() {
        let record = UserRecord::from_draft(1, draft("Leanne", "Graham", "Sincere@april.biz"));

        assert!(record.matches("leanne graham"));
        assert!(record.matches("e g"));
        assert!(record.matches("sincere@"));
        assert!(record.matches(""));
        assert!(!record.matches("ervin"));
    }

    #[test]
    fn test_from_draft_keeps_values_untrimmed() {
        let record = UserRecord::from_draft(7, draft(" Ada ", "Lovelace", "ada@example.com"));
        assert_eq!(record.id, 7);
        assert_eq!(record.first_name, " Ada ");
    }

    #[test]
    fn test_field_accessors_cover_every_column() {
        let mut record = UserRecord::default();
        for (index, field) in UserField::ALL.into_iter().enumerate() {
            *record.field_mut(field) = index.to_string();
        }
        assert_eq!(record.first_name, "0");
        assert_eq!(record.website, "5");
        assert_eq!(record.field(UserField::Company), "4");
    }
}
