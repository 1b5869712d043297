#[macro_use]
extern crate serde;

pub mod activities;
pub use activities::{ActivityCode, UnknownActivityCode};

mod info_message;
pub use info_message::InfoMessage;
