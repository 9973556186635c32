//! Application state (Model in TEA pattern)

use spice_core::{profile_by_id, seed_conversation, seed_profiles, ChatMessage, Profile};
use tracing::debug;

use crate::config::Settings;
use crate::forms::{LoginForm, SignupForm};
use crate::swipe::SwipeState;

/// Current top-level view. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Marketing/landing screen with sign-in and sign-up entry points
    #[default]
    Landing,

    /// Sign-in form
    Login,

    /// Registration form
    Signup,

    /// The signed-in app: tab content, bottom navigation, overlays
    Main,
}

/// Bottom navigation tab.
///
/// Only the content tabs (Discover, Matches, Profile) are ever stored as
/// the active tab. Messages and Premium are actions: activating them opens
/// an overlay and leaves the active tab untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Discover,
    Matches,
    Messages,
    Profile,
    Premium,
}

impl Tab {
    /// All tabs in bottom-bar order
    pub const ALL: [Tab; 5] = [
        Tab::Discover,
        Tab::Matches,
        Tab::Messages,
        Tab::Profile,
        Tab::Premium,
    ];

    /// Label shown in the bottom bar
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Discover => "Discover",
            Tab::Matches => "Matches",
            Tab::Messages => "Messages",
            Tab::Profile => "Profile",
            Tab::Premium => "Premium",
        }
    }

    /// Content tabs render in place; the others trigger an overlay
    pub fn is_content(&self) -> bool {
        matches!(self, Tab::Discover | Tab::Matches | Tab::Profile)
    }
}

/// Focused button on the landing screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeroButton {
    #[default]
    SignIn,
    SignUp,
}

impl HeroButton {
    pub fn toggled(self) -> Self {
        match self {
            HeroButton::SignIn => HeroButton::SignUp,
            HeroButton::SignUp => HeroButton::SignIn,
        }
    }
}

/// State of the chat overlay.
///
/// Carrying the partner id here (instead of a free-floating selection
/// field) makes a chat without a partner unrepresentable, and closing the
/// overlay drops the selection with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatState {
    /// Id of the matched profile this conversation is with
    pub profile_id: String,
    /// Draft text in the input line
    pub draft: String,
}

impl ChatState {
    pub fn new(profile_id: impl Into<String>) -> Self {
        Self {
            profile_id: profile_id.into(),
            draft: String::new(),
        }
    }
}

/// A scheduled login transition that has not fired yet.
///
/// The sequence number makes completions idempotent: a timer that
/// outlives its login attempt (user navigated away, or submitted again)
/// delivers a stale `seq` and is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLogin {
    pub seq: u64,
    pub email: String,
}

/// Application state - single source of truth for navigation.
///
/// Mutated exclusively by the reducer in [`crate::handler::update`];
/// views receive it immutably.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Active top-level view
    pub view: View,

    /// Active content tab inside the main view
    pub tab: Tab,

    /// Match celebration modal, holding the matched profile's id
    pub match_modal: Option<String>,

    /// Premium upsell modal visibility
    pub premium_modal: bool,

    /// Cursor into the premium plan list, reset when the modal opens
    pub premium_cursor: usize,

    /// Chat overlay; replaces the tab content while open
    pub chat: Option<ChatState>,

    /// In-flight simulated login, if any
    pub pending_login: Option<PendingLogin>,

    /// Focused button on the landing screen
    pub hero_focus: HeroButton,

    /// Sign-in form state
    pub login_form: LoginForm,

    /// Registration form state
    pub signup_form: SignupForm,

    /// Position in the discovery deck
    pub swipe: SwipeState,

    /// The discovery deck (seed data, immutable for the session)
    pub profiles: Vec<Profile>,

    /// The message history shown in every chat (seed data, read-only)
    pub conversation: Vec<ChatMessage>,

    /// Loaded settings
    pub settings: Settings,

    /// Set once the user asked to quit
    pub quitting: bool,

    /// Sequence counter for login attempts
    login_seq: u64,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            view: View::default(),
            tab: Tab::default(),
            match_modal: None,
            premium_modal: false,
            premium_cursor: 0,
            chat: None,
            pending_login: None,
            hero_focus: HeroButton::default(),
            login_form: LoginForm::default(),
            signup_form: SignupForm::default(),
            swipe: SwipeState::default(),
            profiles: seed_profiles(),
            conversation: seed_conversation(),
            settings,
            quitting: false,
            login_seq: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    /// Guarded profile lookup
    pub fn profile(&self, id: &str) -> Option<&Profile> {
        profile_by_id(&self.profiles, id)
    }

    /// Id of the first seed profile, the hardcoded chat target of the
    /// Messages tab action
    pub fn first_profile_id(&self) -> Option<&str> {
        self.profiles.first().map(|p| p.id.as_str())
    }

    /// Profile shown in the match modal, if the modal is open
    pub fn matched_profile(&self) -> Option<&Profile> {
        self.match_modal.as_deref().and_then(|id| self.profile(id))
    }

    /// Profile the open chat is with, if the chat overlay is open
    pub fn chat_partner(&self) -> Option<&Profile> {
        self.chat.as_ref().and_then(|c| self.profile(&c.profile_id))
    }

    /// Badge count for the Matches tab
    pub fn match_count(&self) -> usize {
        self.profiles.len()
    }

    /// Badge count for the Messages tab: messages not sent by us
    pub fn unread_message_count(&self) -> usize {
        let me = self.settings.current_user_id.as_str();
        self.conversation.iter().filter(|m| !m.is_from(me)).count()
    }

    /// Allocate a sequence number for a new login attempt
    pub fn next_login_seq(&mut self) -> u64 {
        self.login_seq += 1;
        self.login_seq
    }

    /// Drop any in-flight login so its timer fires into the void
    pub fn cancel_pending_login(&mut self) {
        if let Some(pending) = self.pending_login.take() {
            debug!(seq = pending.seq, "cancelled pending login");
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
