//! Static seed data standing in for a backend.
//!
//! Profiles and the message history are created once at startup and never
//! mutated. Swapping this module for a real data source is the intended
//! seam for a networked build.

use chrono::{Duration, Utc};

use crate::chat::ChatMessage;
use crate::profile::{Profile, ProfileKind};

/// Id the client uses for the signed-in user when attributing messages
pub const CURRENT_USER_ID: &str = "current-user";

/// Display name for the signed-in user
pub const CURRENT_USER_NAME: &str = "You";

/// The discovery deck, in presentation order
pub fn seed_profiles() -> Vec<Profile> {
    vec![
        Profile {
            id: "1".to_string(),
            name: "Alexandra".to_string(),
            age: 28,
            location: "Manhattan, NY".to_string(),
            photos: vec!["female_profile_01.png".to_string()],
            bio: "Wine enthusiast, yoga instructor, and adventure seeker. Looking for \
                  genuine connections with like-minded individuals who appreciate the \
                  finer things in life."
                .to_string(),
            interests: vec![
                "Wine Tasting".to_string(),
                "Yoga".to_string(),
                "Travel".to_string(),
                "Fine Dining".to_string(),
                "Art".to_string(),
                "Dancing".to_string(),
                "Hiking".to_string(),
                "Photography".to_string(),
            ],
            verified: true,
            premium: true,
            kind: ProfileKind::Single,
        },
        Profile {
            id: "2".to_string(),
            name: "Marcus & Sarah".to_string(),
            age: 32,
            location: "Brooklyn, NY".to_string(),
            photos: vec!["couple_profile_01.png".to_string()],
            bio: "Adventurous couple seeking new experiences and meaningful connections. \
                  We love exploring the city's nightlife and cultural scene together."
                .to_string(),
            interests: vec![
                "Dancing".to_string(),
                "Travel".to_string(),
                "Fine Dining".to_string(),
                "Music".to_string(),
                "Art Galleries".to_string(),
                "Wine".to_string(),
            ],
            verified: true,
            premium: false,
            kind: ProfileKind::Couple,
        },
        Profile {
            id: "3".to_string(),
            name: "James".to_string(),
            age: 35,
            location: "Chelsea, NY".to_string(),
            photos: vec!["male_profile_01.png".to_string()],
            bio: "Entrepreneur with a passion for life and meaningful connections. \
                  Looking for someone who shares my love for adventure and sophisticated \
                  experiences."
                .to_string(),
            interests: vec![
                "Business".to_string(),
                "Fitness".to_string(),
                "Wine".to_string(),
                "Travel".to_string(),
                "Fine Arts".to_string(),
                "Jazz".to_string(),
            ],
            verified: false,
            premium: true,
            kind: ProfileKind::Single,
        },
    ]
}

/// The static message history shown in every chat overlay
pub fn seed_conversation() -> Vec<ChatMessage> {
    let now = Utc::now();
    vec![
        ChatMessage::text(
            "1",
            "Hey! Thanks for the match. I love your profile \u{1F60A}",
            now - Duration::minutes(5),
            "1",
            "Alexandra",
        ),
        ChatMessage::text(
            "2",
            "Hi Alexandra! Thank you, yours is amazing too. That wine tasting photo \
             looks incredible!",
            now - Duration::minutes(4),
            CURRENT_USER_ID,
            CURRENT_USER_NAME,
        ),
    ]
}

/// Guarded lookup by profile id. Callers must handle the not-found case
/// before touching any visibility state.
pub fn profile_by_id<'a>(profiles: &'a [Profile], id: &str) -> Option<&'a Profile> {
    profiles.iter().find(|p| p.id == id)
}
