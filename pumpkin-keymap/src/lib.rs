#![no_std]
pub mod combos;
pub mod dual_action;
pub mod hooks;
pub mod indicator;
pub mod intercept;
pub mod layer_lock;
pub mod layout;
pub mod report;
pub mod snapshot;

#[macro_use]
mod macros;
