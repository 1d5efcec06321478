// Form validation, dashboard rendering and the clock every submission is
// stamped with. No storage here: callers hand in fields and get back
// normalized values or cards.

pub mod clock;
pub mod community;
pub mod render;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use community::{CommunityError, FeedAction, PostDraft, validate_comment, validate_post};
pub use render::{RenderOptions, RequestCard, escape_html, render_cards, render_html};
pub use validation::{
    EmailFeedback, FeedbackTone, FormProfile, Registration, RegistrationError, RegistrationForm,
    ValidatedQuote, ValidationError, email_feedback, is_valid_email, normalize_phone,
    validate_quote, validate_registration,
};
