pub mod action;
pub use action::*;

pub mod cell;
pub use cell::*;

pub mod combos;
pub use combos::*;

pub mod range;
pub use range::*;
