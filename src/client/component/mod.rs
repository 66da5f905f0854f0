pub mod alert;
pub mod header;
pub mod modal;
pub mod page;

pub use header::Header;
pub use modal::ConfirmationModal;
pub use page::{ErrorMessage, Page};
