pub mod bookings;
pub mod goals;
pub mod inquiries;
pub mod schedule;
pub mod teachers;
