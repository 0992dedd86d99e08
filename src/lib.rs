pub mod commands;
pub mod coordinate;
pub mod location;
pub mod settings;
pub mod ship;
