pub mod api;
pub mod storage;
pub mod notifier;

pub mod cart_service;
pub mod catalog_service;
