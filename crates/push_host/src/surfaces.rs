//! Surface (window/tab) host-service contracts and adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`SurfaceService`] async methods.
pub type SurfaceFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Opaque host-issued identifier for one open application surface.
///
/// Handles are only meaningful within the enumeration snapshot that produced
/// them; the host may invalidate them at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(pub u64);

/// Observed state of one surface at enumeration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceSnapshot {
    /// Handle the host issued for this surface.
    pub handle: SurfaceHandle,
    /// Whether the surface held input focus when enumerated.
    pub focused: bool,
    /// URL the surface was displaying when enumerated.
    pub url: String,
}

/// Host window-management service for enumerating and steering surfaces.
///
/// All failures are reported as strings; callers map them into their own
/// error taxonomy. Hosts may complete focus asynchronously, so callers that
/// depend on focus being applied must await [`SurfaceService::focus`] before
/// issuing follow-up operations.
pub trait SurfaceService {
    /// Enumerates the currently open surfaces in host order.
    fn enumerate(&self) -> SurfaceFuture<'_, Result<Vec<SurfaceSnapshot>, String>>;

    /// Requests input focus for `handle`.
    fn focus(&self, handle: SurfaceHandle) -> SurfaceFuture<'_, Result<(), String>>;

    /// Navigates the surface identified by `handle` to `url`.
    fn navigate<'a>(
        &'a self,
        handle: SurfaceHandle,
        url: &'a str,
    ) -> SurfaceFuture<'a, Result<(), String>>;

    /// Opens a new focused surface at `url`.
    fn open_surface<'a>(&'a self, url: &'a str) -> SurfaceFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op surface service for unsupported targets: an empty world where every
/// operation succeeds.
pub struct NoopSurfaceService;

impl SurfaceService for NoopSurfaceService {
    fn enumerate(&self) -> SurfaceFuture<'_, Result<Vec<SurfaceSnapshot>, String>> {
        Box::pin(async { Ok(Vec::new()) })
    }

    fn focus(&self, _handle: SurfaceHandle) -> SurfaceFuture<'_, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn navigate<'a>(
        &'a self,
        _handle: SurfaceHandle,
        _url: &'a str,
    ) -> SurfaceFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn open_surface<'a>(&'a self, _url: &'a str) -> SurfaceFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

/// One host call recorded by [`MemorySurfaceService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    /// The open-surface set was enumerated.
    Enumerate,
    /// Focus was requested for a surface.
    Focus(SurfaceHandle),
    /// A surface was navigated to a URL.
    Navigate(SurfaceHandle, String),
    /// A new surface was opened at a URL.
    Open(String),
}

#[derive(Debug, Default)]
struct MemorySurfaceWorld {
    surfaces: Vec<SurfaceSnapshot>,
    calls: Vec<SurfaceCall>,
    next_handle: u64,
    fail_enumerate: bool,
    fail_focus: bool,
    fail_navigate: bool,
    fail_open: bool,
}

impl MemorySurfaceWorld {
    fn apply_focus(&mut self, handle: SurfaceHandle) -> Result<(), String> {
        if !self.surfaces.iter().any(|s| s.handle == handle) {
            return Err(format!("unknown surface handle {}", handle.0));
        }
        for surface in &mut self.surfaces {
            surface.focused = surface.handle == handle;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory surface world used as a scriptable fake in runtime tests.
///
/// Tracks per-surface focus/URL state, records every host call in order, and
/// can be armed to fail individual operations for error-path coverage.
pub struct MemorySurfaceService {
    inner: Rc<RefCell<MemorySurfaceWorld>>,
}

impl MemorySurfaceService {
    /// Adds a surface to the world and returns its handle.
    pub fn add_surface(&self, focused: bool, url: impl Into<String>) -> SurfaceHandle {
        let mut world = self.inner.borrow_mut();
        world.next_handle += 1;
        let handle = SurfaceHandle(world.next_handle);
        world.surfaces.push(SurfaceSnapshot {
            handle,
            focused,
            url: url.into(),
        });
        handle
    }

    /// Returns the current surface states.
    pub fn surfaces(&self) -> Vec<SurfaceSnapshot> {
        self.inner.borrow().surfaces.clone()
    }

    /// Returns every host call recorded so far, in order.
    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.inner.borrow().calls.clone()
    }

    /// Arms or disarms enumeration failure.
    pub fn fail_enumerate(&self, fail: bool) {
        self.inner.borrow_mut().fail_enumerate = fail;
    }

    /// Arms or disarms focus failure.
    pub fn fail_focus(&self, fail: bool) {
        self.inner.borrow_mut().fail_focus = fail;
    }

    /// Arms or disarms navigation failure.
    pub fn fail_navigate(&self, fail: bool) {
        self.inner.borrow_mut().fail_navigate = fail;
    }

    /// Arms or disarms open-surface failure.
    pub fn fail_open(&self, fail: bool) {
        self.inner.borrow_mut().fail_open = fail;
    }
}

impl SurfaceService for MemorySurfaceService {
    fn enumerate(&self) -> SurfaceFuture<'_, Result<Vec<SurfaceSnapshot>, String>> {
        Box::pin(async move {
            let mut world = self.inner.borrow_mut();
            world.calls.push(SurfaceCall::Enumerate);
            if world.fail_enumerate {
                return Err("enumeration unavailable".to_string());
            }
            Ok(world.surfaces.clone())
        })
    }

    fn focus(&self, handle: SurfaceHandle) -> SurfaceFuture<'_, Result<(), String>> {
        Box::pin(async move {
            let mut world = self.inner.borrow_mut();
            world.calls.push(SurfaceCall::Focus(handle));
            if world.fail_focus {
                return Err("focus rejected".to_string());
            }
            world.apply_focus(handle)
        })
    }

    fn navigate<'a>(
        &'a self,
        handle: SurfaceHandle,
        url: &'a str,
    ) -> SurfaceFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let mut world = self.inner.borrow_mut();
            world
                .calls
                .push(SurfaceCall::Navigate(handle, url.to_string()));
            if world.fail_navigate {
                return Err("navigation rejected".to_string());
            }
            let Some(surface) = world.surfaces.iter_mut().find(|s| s.handle == handle) else {
                return Err(format!("unknown surface handle {}", handle.0));
            };
            surface.url = url.to_string();
            Ok(())
        })
    }

    fn open_surface<'a>(&'a self, url: &'a str) -> SurfaceFuture<'a, Result<(), String>> {
        Box::pin(async move {
            {
                let mut world = self.inner.borrow_mut();
                world.calls.push(SurfaceCall::Open(url.to_string()));
                if world.fail_open {
                    return Err("popup blocked".to_string());
                }
            }
            let handle = self.add_surface(false, url);
            self.inner.borrow_mut().apply_focus(handle)
        })
    }
}
