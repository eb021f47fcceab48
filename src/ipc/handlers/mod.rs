pub mod core;
pub mod form;
pub mod roster;
