pub mod cart_viewmodel;
pub mod update_task;

pub use cart_viewmodel::{CartUpdateHandler, HandlerState};
pub use update_task::{CancelHandle, UpdateTask};
