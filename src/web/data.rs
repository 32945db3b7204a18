use serde::Deserialize;

// ###################################
// ->   STRUCTS
// ###################################
/// Deserializable Signup
/// A signup request as it arrives on the wire. Both fields are optional so
/// that an absent or `null` field surfaces as a validation failure instead of
/// a deserialization failure.
#[derive(Deserialize, Debug)]
pub struct DeserSignup {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Validated Signup
/// A signup with both fields present and non-empty.
#[derive(Debug, Clone)]
pub struct ValidSignup {
    pub name: SignupName,
    pub email: SignupEmail,
}

/// Validated Signup Name
#[derive(Debug, Clone)]
pub struct SignupName(String);

/// Validated Signup Email
#[derive(Debug, Clone)]
pub struct SignupEmail(String);

// ###################################
// ->   IMPLS
// ###################################
impl TryFrom<DeserSignup> for ValidSignup {
    type Error = DataParsingError;

    fn try_from(deser_signup: DeserSignup) -> Result<Self, Self::Error> {
        Ok(ValidSignup {
            name: SignupName::parse(deser_signup.name)?,
            email: SignupEmail::parse(deser_signup.email)?,
        })
    }
}

impl AsRef<str> for SignupName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SignupName {
    /// Presence is the only requirement: no length cap, no character filter,
    /// whitespace-only names pass.
    pub fn parse(value: Option<String>) -> Result<Self, DataParsingError> {
        match value {
            Some(name) if !name.is_empty() => Ok(SignupName(name)),
            _ => Err(DataParsingError::NameMissing),
        }
    }
}

impl AsRef<str> for SignupEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SignupEmail {
    /// Presence is the only requirement: the address format is not validated.
    pub fn parse(value: Option<String>) -> Result<Self, DataParsingError> {
        match value {
            Some(email) if !email.is_empty() => Ok(SignupEmail(email)),
            _ => Err(DataParsingError::EmailMissing),
        }
    }
}

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug)]
pub enum DataParsingError {
    NameMissing,
    EmailMissing,
}
// Error Boilerplate
impl core::fmt::Display for DataParsingError {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for DataParsingError {}
