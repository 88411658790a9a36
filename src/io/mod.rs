pub mod atomic;
pub mod source;
