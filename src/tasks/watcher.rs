//! The widget's driving task: waits out the image-load gate, applies the
//! first fit, then keeps the fit current until cancelled.

use anyhow::Result;
use tokio::select;
use tokio::sync::mpsc::Receiver;
use tokio::sync::oneshot;
use tokio::time::{MissedTickBehavior, interval, sleep};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::WatchStrategy;
use crate::events::{ResourceReady, SurfaceEvent};
use crate::surface::Container;
use crate::widget::Widget;

/// Drive one widget for the life of the page.
///
/// `ready` is the single-shot load gate; `events` feeds the resize-event
/// strategy (unused and safe to close under the poll strategy). Runs until
/// `cancel` fires; an owner that never cancels gets the original
/// run-forever behavior. Returns the widget so the owner can inspect it
/// after shutdown.
pub async fn run<C: Container>(
    mut widget: Widget<C>,
    ready: oneshot::Receiver<ResourceReady>,
    events: Receiver<SurfaceEvent>,
    cancel: CancellationToken,
) -> Result<Widget<C>> {
    select! {
        _ = cancel.cancelled() => return Ok(widget),
        gate = ready => match gate {
            Ok(ResourceReady) => widget.resource_ready(),
            Err(_) => {
                // Notifier went away without firing: the resource never
                // resolved, so no fit ever runs.
                debug!("load gate dropped before firing; widget stays inert");
                return Ok(widget);
            }
        },
    }

    if widget.settings().run_once {
        debug!("run-once widget; not watching for size changes");
        return Ok(widget);
    }

    match widget.settings().watch {
        WatchStrategy::Poll => poll(&mut widget, cancel).await,
        WatchStrategy::ResizeEvent => debounce(&mut widget, events, cancel).await,
    }
    Ok(widget)
}

/// Poll strategy: re-measure every `throttle` tick, refit only on a diff.
async fn poll<C: Container>(widget: &mut Widget<C>, cancel: CancellationToken) {
    let mut ticker = interval(widget.settings().throttle);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        select! {
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => widget.recheck(),
        }
    }
}

/// Resize-event strategy: trailing-edge debounce. A burst of events is
/// absorbed until it quiets for `throttle`, then a single recheck runs.
async fn debounce<C: Container>(
    widget: &mut Widget<C>,
    mut events: Receiver<SurfaceEvent>,
    cancel: CancellationToken,
) {
    loop {
        select! {
            _ = cancel.cancelled() => break,
            event = events.recv() => match event {
                Some(SurfaceEvent::Resized) => {
                    loop {
                        select! {
                            _ = cancel.cancelled() => return,
                            _ = sleep(widget.settings().throttle) => break,
                            more = events.recv() => {
                                if more.is_none() {
                                    break;
                                }
                                // Another event inside the window restarts
                                // the quiet timer.
                            }
                        }
                    }
                    widget.recheck();
                }
                None => break,
            },
        }
    }
}
