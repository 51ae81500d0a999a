pub mod event;
pub mod interval;
pub mod request;
