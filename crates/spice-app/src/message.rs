//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::premium::PremiumPlan;
use crate::state::Tab;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event emitted when event polling times out
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Top-Level Navigation
    // ─────────────────────────────────────────────────────────
    /// Show the sign-in view (hero Sign In, signup's sign-in link)
    ShowLogin,

    /// Show the registration view (hero Sign Up, login's create-account link)
    ShowSignup,

    /// Return to the landing view, cancelling any pending login
    ShowLanding,

    /// Toggle which hero button is focused
    HeroToggleFocus,

    // ─────────────────────────────────────────────────────────
    // Sign-In Form
    // ─────────────────────────────────────────────────────────
    /// Type a character into the focused login field
    LoginChar(char),
    /// Delete from the focused login field
    LoginBackspace,
    /// Move login focus forward
    LoginFocusNext,
    /// Move login focus backward
    LoginFocusPrev,
    /// Toggle password visibility
    LoginToggleShowPassword,
    /// Toggle the remember-me checkbox
    LoginToggleRemember,
    /// Submit the sign-in form
    SubmitLogin,
    /// The simulated login delay ran out
    LoginDelayElapsed { seq: u64 },
    /// Forgot-password link (stub, logs only)
    ForgotPassword,

    // ─────────────────────────────────────────────────────────
    // Registration Form
    // ─────────────────────────────────────────────────────────
    /// Type a character into the focused signup field
    SignupChar(char),
    /// Delete from the focused signup field
    SignupBackspace,
    /// Move signup focus forward
    SignupFocusNext,
    /// Move signup focus backward
    SignupFocusPrev,
    /// Submit the registration form
    SubmitSignup,

    // ─────────────────────────────────────────────────────────
    // Discovery Deck
    // ─────────────────────────────────────────────────────────
    /// Like the top card (right swipe)
    SwipeRight,
    /// Pass on the top card (left swipe)
    SwipeLeft,
    /// A like resolved to this profile id; open the match modal if the
    /// id exists, otherwise leave state untouched
    MatchProfile { profile_id: String },

    // ─────────────────────────────────────────────────────────
    // Tabs & Overlays
    // ─────────────────────────────────────────────────────────
    /// Bottom-bar tab activated
    SelectTab(Tab),
    /// Open the chat overlay with a profile, closing the match modal
    StartChat { profile_id: String },
    /// Dismiss the match modal (keep swiping)
    CloseMatchModal,
    /// Dismiss the premium modal
    ClosePremiumModal,
    /// Leave the chat overlay
    CloseChat,

    // ─────────────────────────────────────────────────────────
    // Chat
    // ─────────────────────────────────────────────────────────
    /// Type a character into the chat draft
    ChatChar(char),
    /// Delete from the chat draft
    ChatBackspace,
    /// Send the chat draft (validated and logged; the history is
    /// read-only in this build)
    SendChatMessage,

    // ─────────────────────────────────────────────────────────
    // Premium Modal
    // ─────────────────────────────────────────────────────────
    /// Move the plan cursor up
    PremiumPrevPlan,
    /// Move the plan cursor down
    PremiumNextPlan,
    /// Subscribe to a plan (stub, logs and closes)
    SubscribePremium { plan: PremiumPlan },
}
