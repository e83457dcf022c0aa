pub mod board_grid_ui;
pub mod card_ui;
pub mod deck_selector_ui;
pub mod image_set;
pub mod new_game_button_ui;
pub mod status_bar_ui;
pub mod toast_ui;
pub mod window;

pub use image_set::ImageSet;
