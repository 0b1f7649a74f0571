//! Command implementations

pub mod check;
pub mod index;
pub mod list;
pub mod new;

pub use check::check_documents;
pub use index::update_index;
pub use list::list_documents;
pub use new::new_document;
