pub mod card;
pub mod navigation;
