//! Notifications exchanged between the embedding surface and the widget
//! tasks.

/// A change on the embedding surface the Change Watcher may care about.
#[derive(Debug, Clone, Copy)]
pub enum SurfaceEvent {
    /// The container (or the window around it) was resized. Carries no
    /// geometry: the watcher re-measures the container itself and only
    /// refits on an actual diff.
    Resized,
}

/// Single-shot image-load notification: every image inside the container
/// has finished loading or failed. Fired at most once per widget.
#[derive(Debug)]
pub struct ResourceReady;
