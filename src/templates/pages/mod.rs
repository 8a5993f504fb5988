pub mod bookings;

pub use bookings::bookings_page;
