//! Dating profile domain types

use serde::{Deserialize, Serialize};

/// Whether a profile represents one person or a couple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    Single,
    Couple,
}

impl ProfileKind {
    /// Short label used in card badges
    pub fn label(&self) -> &'static str {
        match self {
            ProfileKind::Single => "Single",
            ProfileKind::Couple => "Couple",
        }
    }
}

/// A dating profile from the seed list.
///
/// Profiles are immutable for the lifetime of the session; every id is
/// unique within the seed list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub location: String,
    /// Asset references, first entry is the primary photo
    pub photos: Vec<String>,
    pub bio: String,
    pub interests: Vec<String>,
    pub verified: bool,
    pub premium: bool,
    pub kind: ProfileKind,
}

impl Profile {
    /// The primary photo reference, if the profile has any photos
    pub fn primary_photo(&self) -> Option<&str> {
        self.photos.first().map(String::as_str)
    }

    /// Card title in the form "Name, Age"
    pub fn headline(&self) -> String {
        format!("{}, {}", self.name, self.age)
    }
}
