pub mod booking;
pub mod goals;
pub mod health;
pub mod home;
pub mod inquiry;
pub mod profiles;
