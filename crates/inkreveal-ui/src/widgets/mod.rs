pub mod scratch_card;
pub mod swatch;
