pub mod booking;
pub mod forms;
pub mod goal;
pub mod inquiry;
pub mod teacher;
