pub mod example_card;
pub mod icon_list;
pub mod tag_list;
pub mod technology_icon;

pub use example_card::ExampleCard;
pub use icon_list::{IconLayout, IconList};
pub use tag_list::TagList;
pub use technology_icon::TechnologyIcon;
