pub mod cards;
pub mod footer;
pub mod forms;
pub mod sections;
pub mod sidebar;
