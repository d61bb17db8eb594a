//! Session-scoped collaborators: who is signed in, what they may do, and what
//! they have put in their cart or feedback.

mod auth;
mod cart;
mod feedback;
mod gate;

pub use auth::{AuthProvider, IdentityChanged};
pub use cart::{CartSink, SessionCart};
pub use feedback::{ContactMessage, FeedbackBoard, FeedbackEntry};
pub use gate::{CartAccess, RoleGate};
