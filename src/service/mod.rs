pub mod demo_data;
pub mod extraction;
pub mod scheduling_service;
pub mod slot_finder;
