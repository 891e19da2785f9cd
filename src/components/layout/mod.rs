//! Layout Components

pub mod page_header;
pub mod sidebar;
