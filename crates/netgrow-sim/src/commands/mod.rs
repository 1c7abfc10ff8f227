pub mod grow;
pub mod version;
