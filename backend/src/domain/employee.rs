//! Employee record model.
//!
//! An [`Employee`] is the stored record; [`EmployeeDetails`] carries the
//! fields a client may set on create and replace on update. Validation
//! happens once, when details are built, so adapters can trust every value
//! they receive.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum stored length (in characters) of names and email addresses.
pub const FIELD_MAX_CHARS: usize = 255;

/// Validation failures for a single name value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PersonNameError {
    #[error("must not be empty")]
    Empty,
    #[error("must be at most {max} characters")]
    TooLong { max: usize },
}

/// Validation failures for an email value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmailAddressError {
    #[error("must not be blank")]
    Blank,
    #[error("must be at most {max} characters")]
    TooLong { max: usize },
}

/// Validation errors returned when building [`EmployeeDetails`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmployeeValidationError {
    #[error("firstName {0}")]
    FirstName(PersonNameError),
    #[error("lastName {0}")]
    LastName(PersonNameError),
    #[error("email {0}")]
    Email(EmailAddressError),
}

impl EmployeeValidationError {
    /// JSON field name the error refers to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::FirstName(_) => "firstName",
            Self::LastName(_) => "lastName",
            Self::Email(_) => "email",
        }
    }
}

/// Store-assigned employee identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for EmployeeId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// First or last name. Non-empty once trimmed; stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Validate and construct a name.
    pub fn new(value: impl Into<String>) -> Result<Self, PersonNameError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(PersonNameError::Empty);
        }
        if value.chars().count() > FIELD_MAX_CHARS {
            return Err(PersonNameError::TooLong {
                max: FIELD_MAX_CHARS,
            });
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PersonName> for String {
    fn from(value: PersonName) -> Self {
        value.0
    }
}

/// Email address used for the uniqueness rule. Matching is exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an email address.
    pub fn new(value: impl Into<String>) -> Result<Self, EmailAddressError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(EmailAddressError::Blank);
        }
        if value.chars().count() > FIELD_MAX_CHARS {
            return Err(EmailAddressError::TooLong {
                max: FIELD_MAX_CHARS,
            });
        }
        Ok(Self(value))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

/// Client-editable employee fields: a create candidate or an update payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDetails {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: Option<EmailAddress>,
}

impl EmployeeDetails {
    /// Build details from raw strings, validating every field.
    ///
    /// # Examples
    /// ```
    /// use employee_records::domain::EmployeeDetails;
    ///
    /// let details =
    ///     EmployeeDetails::try_from_parts("salla", "mallesh", Some("salla@gmail.com"))
    ///         .expect("valid details");
    /// assert_eq!(details.first_name.as_ref(), "salla");
    /// ```
    pub fn try_from_parts(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: Option<impl Into<String>>,
    ) -> Result<Self, EmployeeValidationError> {
        let first_name = PersonName::new(first_name).map_err(EmployeeValidationError::FirstName)?;
        let last_name = PersonName::new(last_name).map_err(EmployeeValidationError::LastName)?;
        let email = email
            .map(EmailAddress::new)
            .transpose()
            .map_err(EmployeeValidationError::Email)?;
        Ok(Self {
            first_name,
            last_name,
            email,
        })
    }
}

/// Stored employee record.
///
/// ## Invariants
/// - `id` is assigned by the store and never changes.
/// - No two stored employees share a non-null `email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "EmployeeDto", into = "EmployeeDto")]
pub struct Employee {
    #[schema(value_type = i64, example = 1)]
    id: EmployeeId,
    #[schema(value_type = String, example = "salla")]
    first_name: PersonName,
    #[schema(value_type = String, example = "mallesh")]
    last_name: PersonName,
    #[schema(value_type = Option<String>, example = "salla@gmail.com")]
    email: Option<EmailAddress>,
}

impl Employee {
    /// Combine a store-assigned id with validated details.
    #[must_use]
    pub fn new(id: EmployeeId, details: EmployeeDetails) -> Self {
        let EmployeeDetails {
            first_name,
            last_name,
            email,
        } = details;
        Self {
            id,
            first_name,
            last_name,
            email,
        }
    }

    /// Replace `firstName`, `lastName` and `email`, keeping the id.
    ///
    /// # Examples
    /// ```
    /// use employee_records::domain::{Employee, EmployeeDetails, EmployeeId};
    ///
    /// let stored = Employee::new(
    ///     EmployeeId::new(1),
    ///     EmployeeDetails::try_from_parts("salla", "mallesh", Some("salla@gmail.com"))
    ///         .expect("valid details"),
    /// );
    /// let changes = EmployeeDetails::try_from_parts("shiva", "Gudeti", Some("shiva@gmail.com"))
    ///     .expect("valid details");
    /// let merged = stored.apply_changes(changes);
    /// assert_eq!(merged.id().get(), 1);
    /// assert_eq!(merged.first_name().as_ref(), "shiva");
    /// ```
    #[must_use]
    pub fn apply_changes(self, changes: EmployeeDetails) -> Self {
        Self::new(self.id, changes)
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    /// First name.
    #[must_use]
    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    /// Last name.
    #[must_use]
    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    /// Optional unique email.
    #[must_use]
    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    /// Editable fields of this record.
    #[must_use]
    pub fn details(&self) -> EmployeeDetails {
        EmployeeDetails {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmployeeDto {
    id: i64,
    first_name: String,
    last_name: String,
    email: Option<String>,
}

impl From<Employee> for EmployeeDto {
    fn from(value: Employee) -> Self {
        let Employee {
            id,
            first_name,
            last_name,
            email,
        } = value;
        Self {
            id: id.get(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.map(String::from),
        }
    }
}

impl TryFrom<EmployeeDto> for Employee {
    type Error = EmployeeValidationError;

    fn try_from(value: EmployeeDto) -> Result<Self, Self::Error> {
        let details = EmployeeDetails::try_from_parts(value.first_name, value.last_name, value.email)?;
        Ok(Self::new(EmployeeId::new(value.id), details))
    }
}
