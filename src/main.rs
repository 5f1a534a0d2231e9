//! Binary entrypoint: drives a cover-fit widget against the headless
//! simulated surface, playing a scripted set of container resizes.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use imagefill::config::{Options, Settings, WatchStrategy};
use imagefill::events::{ResourceReady, SurfaceEvent};
use imagefill::sim::{self, SimContainer, SimElement};
use imagefill::surface::{Container as _, Size};
use imagefill::tasks::{bridge, watcher};
use imagefill::widget::Widget;

#[derive(Debug, Parser)]
#[command(name = "imagefill", about = "cover-fit widget demo on a headless surface")]
struct Args {
    /// Path to YAML settings; defaults apply when omitted
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Initial container size
    #[arg(long, value_name = "WxH", default_value = "300x200")]
    container: String,

    /// Natural (intrinsic) image size
    #[arg(long, value_name = "WxH", default_value = "100x100")]
    image: String,

    /// Scripted container resize, repeatable
    #[arg(long = "resize", value_name = "WxH")]
    resizes: Vec<String>,

    /// Delay between scripted resizes
    #[arg(long, value_name = "DURATION", default_value = "100ms")]
    pace: String,

    /// How long to let the watcher settle after the script ends
    #[arg(long, value_name = "DURATION", default_value = "250ms")]
    settle: String,

    /// Fit once and never watch (overrides config)
    #[arg(long)]
    run_once: bool,

    /// Override the watcher throttle interval (e.g. "32ms")
    #[arg(long, value_name = "DURATION")]
    throttle: Option<String>,

    /// Override the watch strategy: poll | resize-event
    #[arg(long, value_name = "STRATEGY")]
    watch: Option<String>,
}

fn parse_size(spec: &str) -> Result<Size> {
    let Some((w, h)) = spec.split_once(['x', 'X']) else {
        bail!("expected WxH, got {spec:?}");
    };
    let width = w.trim().parse().with_context(|| format!("bad width in {spec:?}"))?;
    let height = h.trim().parse().with_context(|| format!("bad height in {spec:?}"))?;
    Ok(Size::new(width, height))
}

fn parse_watch(spec: &str) -> Result<WatchStrategy> {
    match spec {
        "poll" => Ok(WatchStrategy::Poll),
        "resize-event" => Ok(WatchStrategy::ResizeEvent),
        other => bail!("unknown watch strategy {other:?} (expected poll or resize-event)"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let pace = humantime::parse_duration(&args.pace).context("failed to parse --pace")?;
    let settle = humantime::parse_duration(&args.settle).context("failed to parse --settle")?;

    let base = match &args.config {
        Some(path) => Settings::from_yaml_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?
            .validated()
            .context("invalid settings")?,
        None => Settings::default(),
    };

    // CLI flags overlay the file-loaded settings, later layer winning.
    let overlay = Options {
        run_once: args.run_once.then_some(true),
        target: None,
        throttle: args
            .throttle
            .as_deref()
            .map(humantime::parse_duration)
            .transpose()
            .context("failed to parse --throttle")?,
        watch: args.watch.as_deref().map(parse_watch).transpose()?,
    };
    let settings = base.overlaid(&overlay);
    tracing::info!(?settings, "resolved settings");

    let container_size = parse_size(&args.container)?;
    let image_size = parse_size(&args.image)?;
    let steps = args
        .resizes
        .iter()
        .map(|s| parse_size(s))
        .collect::<Result<Vec<_>>>()?;

    let selector = settings.target.clone();
    let container = SimContainer::new(container_size.width, container_size.height)
        .with_child(SimElement::image(image_size));
    let widget = Widget::with_settings(container.clone(), settings)?;

    let (ready_tx, ready_rx) = oneshot::channel::<ResourceReady>();
    let (event_tx, event_rx) = crossbeam_channel::bounded::<SurfaceEvent>(16);
    let (bridged_tx, bridged_rx) = mpsc::channel::<SurfaceEvent>(16);

    let cancel = CancellationToken::new();
    let mut tasks = JoinSet::new();
    tasks.spawn({
        let cancel = cancel.clone();
        async move {
            watcher::run(widget, ready_rx, bridged_rx, cancel)
                .await
                .map(|_| ())
                .context("watcher task failed")
        }
    });
    let bridge_handle = bridge::run(event_rx, bridged_tx);

    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("ctrl-c received; initiating shutdown");
                cancel.cancel();
            }
        });
    }

    // The surface reports its image resource ready after a beat, like a
    // network fetch completing.
    tokio::time::sleep(Duration::from_millis(20)).await;
    let _ = ready_tx.send(ResourceReady);

    let script_len = steps.len() as u32;
    let driver = sim::drive(container.clone(), steps, pace, event_tx);

    tokio::time::sleep(pace * script_len + settle).await;
    cancel.cancel();

    while let Some(joined) = tasks.join_next().await {
        joined.context("task panicked")??;
    }
    driver.join().ok();
    bridge_handle.await.ok();

    match container.select(&selector).and_then(|target| target.frame()) {
        Some(frame) => tracing::info!(%frame, size = %container.rendered_size(), "final applied frame"),
        None => tracing::warn!("no frame was applied"),
    }
    Ok(())
}
