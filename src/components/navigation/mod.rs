pub mod sidebar;
pub mod sidebar_item;
pub mod sidebar_section;

pub use sidebar::Sidebar;
pub use sidebar_item::SidebarItem;
pub use sidebar_section::SidebarSection;
