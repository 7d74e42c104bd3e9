//! Navigation of an activated notification into its target surface.

use push_host::{SurfaceHandle, SurfaceService};
use thiserror::Error;

/// Dispatch-stage failure. Never retried; a later activation retries
/// naturally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// The host refused to open a new surface (e.g. popup blocked).
    #[error("opening a new surface failed: {0}")]
    OpenFailed(String),
    /// Focusing or navigating an existing surface failed.
    #[error("navigating an existing surface failed: {0}")]
    NavigateFailed(String),
}

/// Where an activated notification should land.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    /// Existing surface to reuse; `None` opens a new surface.
    pub handle: Option<SurfaceHandle>,
    /// URL the surface should display.
    pub url: String,
}

/// Steers the target surface to `target.url`.
///
/// Reusing an existing surface is a two-step sequence: focus must complete
/// before navigation is issued, because navigating a backgrounded surface
/// silently no-ops on some hosts. Dispatching the same target twice is safe;
/// it refocuses and re-navigates to the same end state.
///
/// # Errors
///
/// [`DispatchError::OpenFailed`] when a new surface cannot be opened,
/// [`DispatchError::NavigateFailed`] when either step on an existing surface
/// fails.
pub async fn dispatch(
    surfaces: &dyn SurfaceService,
    target: &NavigationTarget,
) -> Result<(), DispatchError> {
    match target.handle {
        None => surfaces
            .open_surface(&target.url)
            .await
            .map_err(DispatchError::OpenFailed),
        Some(handle) => {
            surfaces
                .focus(handle)
                .await
                .map_err(DispatchError::NavigateFailed)?;
            surfaces
                .navigate(handle, &target.url)
                .await
                .map_err(DispatchError::NavigateFailed)
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use push_host::{MemorySurfaceService, SurfaceCall};

    use super::*;

    #[test]
    fn missing_handle_opens_a_new_surface() {
        let surfaces = MemorySurfaceService::default();
        let target = NavigationTarget {
            handle: None,
            url: "/chat/3".to_string(),
        };

        block_on(dispatch(&surfaces, &target)).expect("dispatch");

        assert_eq!(surfaces.calls(), vec![SurfaceCall::Open("/chat/3".to_string())]);
        let opened = surfaces.surfaces();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].focused);
        assert_eq!(opened[0].url, "/chat/3");
    }

    #[test]
    fn existing_handle_is_focused_before_navigation() {
        let surfaces = MemorySurfaceService::default();
        let handle = surfaces.add_surface(false, "/");
        let target = NavigationTarget {
            handle: Some(handle),
            url: "/chat/7".to_string(),
        };

        block_on(dispatch(&surfaces, &target)).expect("dispatch");

        assert_eq!(
            surfaces.calls(),
            vec![
                SurfaceCall::Focus(handle),
                SurfaceCall::Navigate(handle, "/chat/7".to_string()),
            ]
        );
        let state = surfaces.surfaces();
        assert!(state[0].focused);
        assert_eq!(state[0].url, "/chat/7");
    }

    #[test]
    fn dispatching_twice_is_idempotent() {
        let surfaces = MemorySurfaceService::default();
        let handle = surfaces.add_surface(false, "/");
        let target = NavigationTarget {
            handle: Some(handle),
            url: "/chat/7".to_string(),
        };

        block_on(dispatch(&surfaces, &target)).expect("first dispatch");
        let after_first = surfaces.surfaces();
        block_on(dispatch(&surfaces, &target)).expect("second dispatch");

        assert_eq!(surfaces.surfaces(), after_first);
    }

    #[test]
    fn blocked_open_maps_to_open_failed() {
        let surfaces = MemorySurfaceService::default();
        surfaces.fail_open(true);
        let target = NavigationTarget {
            handle: None,
            url: "/".to_string(),
        };

        let err = block_on(dispatch(&surfaces, &target)).expect_err("open must fail");
        assert!(matches!(err, DispatchError::OpenFailed(_)));
    }

    #[test]
    fn focus_failure_short_circuits_navigation() {
        let surfaces = MemorySurfaceService::default();
        let handle = surfaces.add_surface(false, "/");
        surfaces.fail_focus(true);
        let target = NavigationTarget {
            handle: Some(handle),
            url: "/chat/7".to_string(),
        };

        let err = block_on(dispatch(&surfaces, &target)).expect_err("focus must fail");
        assert!(matches!(err, DispatchError::NavigateFailed(_)));
        assert_eq!(
            surfaces.calls(),
            vec![SurfaceCall::Focus(handle)],
            "navigation is never issued after a failed focus"
        );
    }
}
