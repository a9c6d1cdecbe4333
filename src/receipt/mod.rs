pub mod composer;
pub mod pdf;
