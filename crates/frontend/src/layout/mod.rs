pub mod private_layout;
pub mod public_layout;

pub use private_layout::{DRAWER_WIDTH_PX, PrivateLayout};
pub use public_layout::PublicLayout;
