use panel::{Control, Field, PanelView, ViewState};
use speaker_client::SetupPage;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Renders the panel on stdout.
///
/// With `echo` set, every change is printed as it happens, one line per
/// field or control.
#[derive(Debug, Default)]
pub struct TerminalView {
	state: Mutex<ViewState>,
	echo: bool,
}

impl TerminalView {
	pub fn new(echo: bool) -> Self {
		Self {
			state: Default::default(),
			echo,
		}
	}

	pub fn render(&self) -> String {
		self.state().render()
	}

	fn state(&self) -> MutexGuard<'_, ViewState> {
		self.state.lock().unwrap_or_else(PoisonError::into_inner)
	}
}

impl PanelView for TerminalView {
	fn set_text(&self, field: Field, text: &str) {
		if self.state().set_text(field, text) && self.echo {
			println!("{:<14}{text}", field.id());
		}
	}

	fn set_visible(&self, control: Control, visible: bool) {
		if self.state().set_visible(control, visible) && self.echo {
			let state = if visible { "shown" } else { "hidden" };
			println!("{:<14}{state}", control.id());
		}
	}

	fn set_active(&self, control: Control, active: bool) {
		if self.state().set_active(control, active) && self.echo {
			let state = if active { "active" } else { "inactive" };
			println!("{:<14}{state}", control.id());
		}
	}

	fn navigate(&self, page: &SetupPage) {
		match page.text.as_str() {
			"" => println!("WiFi setup started at {}", page.url),
			text => println!("{text}"),
		}
	}
}
