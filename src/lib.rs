//! Cover-fit widget: resize and center an image so it fully covers its
//! container, cropping overflow, and keep the fit current as the container
//! changes size.

pub mod config;
pub mod error;
pub mod events;
pub mod layout;
pub mod sim;
pub mod surface;
pub mod tasks {
    pub mod bridge;
    pub mod watcher;
}
pub mod widget;

pub use config::{Options, Settings, WatchStrategy};
pub use error::{Error, Result};
pub use surface::{Container, Dimension, Element, Frame, Placement, Size};
pub use widget::Widget;

/// Attach a cover-fit widget to `container` with `options` overlaid on the
/// default settings. The returned widget has prepared the surface but not
/// yet fitted; hand it to [`tasks::watcher::run`] together with the load
/// gate to bring it to life.
pub fn imagefill<C: Container>(container: C, options: &Options) -> Result<Widget<C>> {
    Widget::attach(container, [options])
}
