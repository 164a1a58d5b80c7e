pub mod layout;

pub use layout::{slot_y, PinSide, SymbolLayout, SymbolSlot};
