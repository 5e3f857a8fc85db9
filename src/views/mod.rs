pub mod cart_buttons;

pub use cart_buttons::bind;
