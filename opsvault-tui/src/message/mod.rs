//! Message definitions.
//!
//! Events translate into messages; the update layer consumes them. No
//! message carries references into the model, so dispatch stays trivially
//! borrow-safe.

mod app;
mod content;
mod login;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use login::LoginMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
