pub mod play;
pub mod session;

pub use play::PlayMode;
pub use session::{SCROLL_WINDOW, Session, scroll_windows};
