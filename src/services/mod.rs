pub mod cart_service;
pub mod page_service;

pub use cart_service::*;
pub use page_service::*;
