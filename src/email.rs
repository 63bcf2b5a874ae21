use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::validator::{check_email, Rejection};

/// A trimmed email address that passed validation
#[derive(PartialEq, Debug, Clone, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Validate and wrap an address
    pub fn parse(email: impl Into<String>) -> Result<Email, Rejection> {
        let email: String = email.into();
        check_email(&email)
    }

    /// Only for strings that already went through the validator
    pub(crate) fn from_validated(email: String) -> Self {
        Self(email)
    }

    /// Everything before the first "@"
    pub fn local_part(&self) -> &str {
        self.split().0
    }

    /// Everything after the first "@"
    pub fn domain(&self) -> &str {
        self.split().1
    }

    /// Dot-separated labels of the domain
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.domain().split('.')
    }

    pub fn top_level_domain(&self) -> &str {
        self.domain().rsplit('.').next().unwrap_or_default()
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    fn split(&self) -> (&str, &str) {
        self.0.split_once('@').unwrap_or((self.0.as_str(), ""))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Email {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        check_email(s)
    }
}

impl TryFrom<String> for Email {
    type Error = Rejection;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::parse(value)
    }
}

impl Serialize for Email {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Email {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Email::parse(raw).map_err(serde::de::Error::custom)
    }
}
