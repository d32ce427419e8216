mod terminal;

use anyhow::Context;
use clap::{Parser, Subcommand};
use panel::{button::Commands, config::Config, util::SystemClock, Button, Panel};
use speaker::Language;
use speaker_client::Client;
use std::{
	fs::File,
	path::{Path, PathBuf},
};
use terminal::TerminalView;
use time::util::local_offset::Soundness;
use tokio::{io::BufReader, sync::watch};
use tracing_subscriber::EnvFilter;
use url::Url;

/// Control panel for the speaking clock.
#[derive(Parser)]
pub struct Arguments {
	/// YAML or JSON configuration file.
	#[clap(long, env = "PANEL_CONFIG_PATH")]
	config: Option<PathBuf>,

	/// Base URL of the speaker, overriding the configuration file.
	#[clap(long, env = "PANEL_DEVICE_URL")]
	device: Option<Url>,

	#[clap(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
	/// Poll the speaker and accept button commands on stdin (default).
	Watch,
	/// Start the WiFi setup access point.
	WifiStart,
	/// Delete the stored WiFi credentials.
	WifiClear,
	/// Set the speaker's clock from this machine's clock.
	RtcSet,
	/// Change the announcement language.
	Lang { lang: Language },
}

type TerminalPanel = Panel<Client, TerminalView, SystemClock>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.with_writer(std::io::stderr)
		.init();

	// SAFETY: We do not modify our own environment so this is OK.
	unsafe {
		time::util::local_offset::set_soundness(Soundness::Unsound);
	}

	let arguments = Arguments::parse();

	// Read the configuration file
	let config = match &arguments.config {
		Some(path) => load_config(path)?,
		None => Config::default(),
	};
	if let Some(name) = config.polling.zero_period() {
		anyhow::bail!("polling.{name} must be greater than zero");
	}

	let host = arguments
		.device
		.or_else(|| config.device.host.clone())
		.context("no device URL, pass --device or set device.host in the configuration")?;

	let mut builder = Client::builder(host)?;
	if let Some(timeout) = config.device.request_timeout() {
		builder = builder.timeout(timeout);
	}
	let client = builder.build()?;
	tracing::info!("controlling speaker at {}", client.host());

	let command = arguments.command.unwrap_or(Command::Watch);
	let echo = matches!(command, Command::Watch);
	let panel = Panel::bind(client, TerminalView::new(echo), SystemClock);

	match command {
		Command::Watch => return run_watch(panel, &config).await,
		Command::WifiStart => panel.press(Button::WifiStart).await,
		Command::WifiClear => panel.press(Button::WifiClear).await,
		Command::RtcSet => panel.press(Button::RtcSet).await,
		Command::Lang { lang } => panel.press(Button::Lang(lang)).await,
	}

	// Show the action's outcome alongside the device's current state.
	panel.refresh_all().await;
	print!("{}", panel.view().render());
	Ok(())
}

/// Polls the speaker until ctrl-c, pressing buttons read from stdin.
async fn run_watch(panel: TerminalPanel, config: &Config) -> anyhow::Result<()> {
	let (shutdown_tx, shutdown_rx) = watch::channel(false);
	let pollers = panel.start(&config.polling, shutdown_rx);

	let mut commands = Commands::new(BufReader::new(tokio::io::stdin()));
	let mut stdin_open = true;

	loop {
		tokio::select! {
			button = commands.next(), if stdin_open => {
				let Some(button) = button else {
					tracing::debug!("stdin closed, no more commands");
					stdin_open = false;
					continue;
				};
				let panel = panel.clone();
				tokio::spawn(async move { panel.press(button).await });
			}
			_ = tokio::signal::ctrl_c() => {
				tracing::debug!("received ctrl-c, closing");
				shutdown_tx.send(true)?;
				break
			},
		}
	}

	for poller in pollers {
		poller.await??;
	}

	Ok(())
}

fn load_config<T: AsRef<Path>>(path: T) -> anyhow::Result<Config> {
	let path = path.as_ref();
	let config_file =
		File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
	let config = match path.extension().and_then(|s| s.to_str()) {
		Some("yaml") | Some("yml") => serde_yaml::from_reader(config_file)?,
		Some("json") => serde_json::from_reader(config_file)?,
		None | Some(_) => anyhow::bail!("unknown config file extension: {}", path.display()),
	};
	Ok(config)
}
