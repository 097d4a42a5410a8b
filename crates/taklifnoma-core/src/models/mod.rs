pub mod config;
pub mod invitation;
pub mod patch;
pub mod rsvp;
pub mod template;
