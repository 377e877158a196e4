pub mod certificate;
pub mod time;
