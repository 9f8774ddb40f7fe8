//! Auto-fit: resize a container around its visible children

use log::debug;

use super::{LayoutHost, Padding};
use crate::geometry::Area;
use crate::tree::NodeId;

/// Resize `container` on its fit-enabled axes to bound its visible children
///
/// Hidden children are ignored; position-protected children still count.
/// Each enabled axis gets the bounding box of the children extended by
/// that axis' padding, a disabled axis keeps the current extent. When the
/// result differs from the current coordinates, the new area is committed
/// and both the container and its parent are notified. Otherwise nothing
/// happens.
pub fn refresh_autofit<H: LayoutHost + ?Sized>(host: &mut H, container: NodeId) {
    let config = host.layout_config(container);
    if !config.hfit && !config.vfit {
        return;
    }

    let pad = Padding::of(host.resolved_style(container));
    let ori = host.coords(container);

    let Some(bounds) = host
        .children(container)
        .into_iter()
        .filter(|&child| !host.is_hidden(child))
        .map(|child| host.coords(child))
        .reduce(|acc, area| acc.join(&area))
    else {
        return;
    };

    let mut new_area = ori;
    if config.hfit {
        new_area.x1 = bounds.x1 - pad.hpad;
        new_area.x2 = bounds.x2 + pad.hpad;
    }
    if config.vfit {
        new_area.y1 = bounds.y1 - pad.vpad;
        new_area.y2 = bounds.y2 + pad.vpad;
    }

    if host.antialias() {
        new_area = snap_for_antialias(new_area);
    }

    if new_area == ori {
        return;
    }

    debug!("Auto-fit {:?}: {:?} -> {:?}", container, ori, new_area);

    host.commit_coords(container, new_area);
    host.notify_coords_changed(container, ori);
    host.notify_parent(container);
}

/// Start on an even and end on an odd coordinate on both axes
fn snap_for_antialias(area: Area) -> Area {
    Area::new(area.x1 & !1, area.y1 & !1, area.x2 | 1, area.y2 | 1)
}
