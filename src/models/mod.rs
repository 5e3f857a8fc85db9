pub mod cart;

pub use cart::{CartAction, CartButton, UpdateOutcome, UpdateRequest};
