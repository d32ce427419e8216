use crate::config::Overlap;
use std::{future::Future, time::Duration};
use tokio::{
	sync::watch,
	task::{JoinHandle, JoinSet},
	time::{interval, MissedTickBehavior},
};

/// Spawns a task that runs `refresh` immediately and then once per `period`
/// until `shutdown` changes.
///
/// Refreshes still running when the poller shuts down are aborted.
/// `period` must be non-zero.
pub fn spawn<F, Fut>(
	name: &'static str,
	period: Duration,
	overlap: Overlap,
	shutdown: watch::Receiver<bool>,
	refresh: F,
) -> JoinHandle<anyhow::Result<()>>
where
	F: Fn() -> Fut + Send + 'static,
	Fut: Future<Output = ()> + Send + 'static,
{
	tracing::info!("starting {name} poller every {period:?}, overlap {overlap:?}");
	tokio::spawn(run(name, period, overlap, shutdown, refresh))
}

async fn run<F, Fut>(
	name: &'static str,
	period: Duration,
	overlap: Overlap,
	mut shutdown: watch::Receiver<bool>,
	refresh: F,
) -> anyhow::Result<()>
where
	F: Fn() -> Fut + Send + 'static,
	Fut: Future<Output = ()> + Send + 'static,
{
	let mut ticks = interval(period);
	ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
	let mut in_flight = JoinSet::new();

	loop {
		tokio::select! {
			_ = ticks.tick() => {
				match overlap {
					Overlap::Allow => {
						in_flight.spawn(refresh());
					}
					Overlap::Skip => {
						tokio::select! {
							_ = refresh() => {}
							_ = shutdown.changed() => break,
						}
					}
				}
			}
			Some(result) = in_flight.join_next() => {
				if let Err(error) = result {
					tracing::warn!("{name} refresh failed: {error}");
				}
			}
			_ = shutdown.changed() => break,
		}
	}

	tracing::info!("shutting down {name} poller");
	in_flight.shutdown().await;
	Ok(())
}
