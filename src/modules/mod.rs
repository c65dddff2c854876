pub mod attendance;
pub mod auth;
pub mod dashboard;
pub mod departments;
pub mod designations;
pub mod leave;
pub mod notices;
pub mod public;
pub mod settings;
pub mod shifts;
pub mod users;
