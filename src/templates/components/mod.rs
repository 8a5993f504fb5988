pub mod booking_table;
pub mod edit_form;
pub mod error;

pub use booking_table::booking_table;
pub use edit_form::edit_form;
pub use error::error_page;
