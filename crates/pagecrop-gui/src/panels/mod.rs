pub mod canvas;
pub mod crop_interaction;
pub mod menu_bar;
pub mod message;
pub mod status;
pub mod toolbar;
