pub mod use_nav_state;

pub use use_nav_state::{use_nav_state, NavigationState};
