pub mod container;
pub mod global_styles;
pub mod icons;
pub mod menu;
pub mod mode_toggle;
pub mod navigation;
