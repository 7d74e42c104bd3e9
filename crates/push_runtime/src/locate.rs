//! Selection of the surface that should receive an activated notification.

use push_host::SurfaceSnapshot;
use thiserror::Error;

/// Locator-stage failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocatorError {
    /// The host could not enumerate the open surfaces.
    #[error("surface enumeration failed: {0}")]
    EnumerationFailed(String),
}

/// Selects the surface an activated notification should land in.
///
/// Policy: the first focused surface in host order wins; with no focused
/// surface the first enumerated surface is the stable fallback. `None` means
/// no surface is open and the caller must open a new one. The selection is
/// deterministic for a given snapshot, never an arbitrary pick.
pub fn locate(surfaces: &[SurfaceSnapshot]) -> Option<&SurfaceSnapshot> {
    surfaces
        .iter()
        .find(|surface| surface.focused)
        .or_else(|| surfaces.first())
}

#[cfg(test)]
mod tests {
    use push_host::SurfaceHandle;

    use super::*;

    fn snapshot(id: u64, focused: bool) -> SurfaceSnapshot {
        SurfaceSnapshot {
            handle: SurfaceHandle(id),
            focused,
            url: "/".to_string(),
        }
    }

    #[test]
    fn empty_snapshot_yields_none() {
        assert_eq!(locate(&[]), None);
    }

    #[test]
    fn focused_surface_wins_at_any_position() {
        for focused_index in 0..3 {
            let surfaces: Vec<_> = (0..3)
                .map(|i| snapshot(i, i == focused_index))
                .collect();
            let selected = locate(&surfaces).expect("selection");
            assert_eq!(selected.handle, SurfaceHandle(focused_index));
        }
    }

    #[test]
    fn unfocused_snapshot_falls_back_to_first() {
        let surfaces = vec![snapshot(1, false), snapshot(2, false)];
        assert_eq!(locate(&surfaces).expect("selection").handle, SurfaceHandle(1));
    }
}
