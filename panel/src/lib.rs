pub mod button;
pub mod config;
pub mod device;
pub mod panel;
pub mod poller;
pub mod util;
pub mod view;

pub use button::Button;
pub use panel::Panel;
pub use view::{Control, Field, PanelView, ViewState};
