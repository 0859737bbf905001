pub mod clock_type;
pub mod location;
pub mod session;
pub mod user;
