pub mod controls;
pub mod helpers;
pub mod menu_bar;
pub mod results;
pub mod status;
pub mod viewer;
