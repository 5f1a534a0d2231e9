//! Cover-fit math. Pure geometry, no surface access.

use crate::surface::{Placement, Size};

/// Compute the frame that makes an image of aspect ratio `image_aspect`
/// fully cover `container`, centered, preserving aspect ratio.
///
/// A container relatively taller than the image pins the image height and
/// centers the horizontal overflow; a relatively wider (or equal) container
/// pins the width and centers the vertical overflow. Offsets are truncated
/// toward zero before they become pixel styles.
pub fn cover_placement(container: Size, image_aspect: f64) -> Placement {
    let container_aspect = container.aspect();
    if container_aspect < image_aspect {
        // Scaled to the container height, the image is wider than the
        // container by `container.height * image_aspect - container.width`.
        let overflow = (container.height * image_aspect - container.width) / 2.0;
        Placement::FillHeight {
            height: container.height,
            left: -trunc_px(overflow),
        }
    } else {
        let overflow = (container.width / image_aspect - container.height) / 2.0;
        Placement::FillWidth {
            width: container.width,
            top: -trunc_px(overflow),
        }
    }
}

/// Truncate a pixel offset toward zero, matching how integer pixel styles
/// are produced from fractional measurements.
fn trunc_px(v: f64) -> i32 {
    v as i32
}
