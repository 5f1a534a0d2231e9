//! Widget lifecycle: one container, one target, one resolved settings
//! record, and the last container size a fit was applied for.

use tracing::{debug, info, warn};

use crate::config::{Options, Settings};
use crate::error::{Error, Result};
use crate::layout::cover_placement;
use crate::surface::{Container, Element, Size};

/// Marker class carried by the target until its resource is ready.
pub const LOADING_CLASS: &str = "loading";

/// A cover-fit widget bound to exactly one container and one target.
///
/// Created on invocation, it lives as long as its owner keeps it (or the
/// task driving it) alive. The image aspect ratio is captured once, from
/// the target's natural dimensions, when the load gate fires.
pub struct Widget<C: Container> {
    container: C,
    target: C::Target,
    settings: Settings,
    last_size: Size,
    image_aspect: Option<f64>,
    fits_applied: u64,
}

impl<C: Container> Widget<C> {
    /// Attach to `container`, resolving `overlays` over the default
    /// settings. Prepares the surface for fitting: tags the target with
    /// the loading class and absolute positioning, clips and anchors the
    /// container. No fit happens until [`Widget::resource_ready`].
    pub fn attach<'a, I>(container: C, overlays: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Options>,
    {
        Self::with_settings(container, Settings::resolve(overlays))
    }

    pub fn with_settings(container: C, settings: Settings) -> Result<Self> {
        let target = container
            .select(&settings.target)
            .ok_or_else(|| Error::MissingTarget(settings.target.clone()))?;

        target.add_class(LOADING_CLASS);
        target.set_absolute();
        container.clip_and_anchor();

        let last_size = container.rendered_size();
        info!(selector = %settings.target, size = %last_size, "widget attached");

        Ok(Self {
            container,
            target,
            settings,
            last_size,
            image_aspect: None,
            fits_applied: 0,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Number of fit passes that actually wrote styles.
    pub fn fits_applied(&self) -> u64 {
        self.fits_applied
    }

    /// The load gate: the target's pixel data is available (or its load
    /// failed). Strips the loading marker, captures the natural aspect
    /// ratio, and performs the first fit. At most the first call has any
    /// effect.
    pub fn resource_ready(&mut self) {
        if self.image_aspect.is_some() {
            debug!("load gate already fired; ignoring repeat notification");
            return;
        }
        let natural = self.target.natural_size();
        self.target.remove_class(LOADING_CLASS);
        self.image_aspect = Some(natural.aspect());
        debug!(natural = %natural, "target resource ready");
        self.fit();
    }

    /// Measure the container and apply a cover fit unconditionally.
    /// Idempotent: unchanged geometry produces an identical frame.
    pub fn fit(&mut self) {
        let size = self.container.rendered_size();
        let Some(aspect) = self.image_aspect else {
            debug!("fit requested before load gate; skipping");
            return;
        };

        // Zero-dimension container or image would turn into non-finite
        // styles; record the measurement and write nothing.
        if size.is_degenerate() || !aspect.is_finite() || aspect <= 0.0 {
            warn!(size = %size, aspect, "degenerate geometry; skipping fit");
            self.last_size = size;
            return;
        }

        let frame = cover_placement(size, aspect).frame();
        self.target.apply_frame(&frame);
        self.last_size = size;
        self.fits_applied += 1;
        debug!(pass = self.fits_applied, %frame, "fit applied");
    }

    /// Re-measure and refit only if the container's dimensions actually
    /// changed since the last pass. The unchanged case writes no styles.
    pub fn recheck(&mut self) {
        let size = self.container.rendered_size();
        if size == self.last_size {
            return;
        }
        debug!(from = %self.last_size, to = %size, "container size changed");
        self.fit();
    }
}
