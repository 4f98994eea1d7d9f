//! Handing streams to the host
//!
//! [`render`] is the only place that mutates host state: it replaces the
//! named object and switches `auto_zoom` off for the duration of the load.
//! The switch is held by [`AutoZoomGuard`], which restores the previous value
//! when dropped, so a failed load never leaves the host with zooming disabled.

use std::ops::{Deref, DerefMut};

use sketch_geom::HostError;

use crate::{Cgo, CgoOp, CgoResult};

/// Host setting that re-centers the view when an object is loaded
pub const AUTO_ZOOM: &str = "auto_zoom";

/// Host capabilities needed to render a stream
pub trait CgoSink {
    /// A name starting with `prefix` not used by any host object
    ///
    /// With `always_number` the result always carries a numeric suffix
    /// (`cgo01`), otherwise `prefix` itself is returned when free.
    fn unused_name(&self, prefix: &str, always_number: bool) -> String;

    /// Delete an object; deleting a missing name is not an error
    fn delete_object(&mut self, name: &str) -> Result<(), HostError>;

    /// Set an integer view setting and return its previous value
    fn set_view_option(&mut self, name: &str, value: i32) -> Result<i32, HostError>;

    /// Load a stream as object `name` at `state` (1-based, 0 appends a state)
    fn load_cgo(&mut self, cgo: &Cgo, name: &str, state: usize) -> Result<(), HostError>;
}

/// Options for [`render`]
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Object name; generated from `prefix` when unset
    pub name: Option<String>,
    pub prefix: String,
    /// Transparency directive prepended to the stream
    pub alpha: f32,
    /// Target state (0 = next free state)
    pub state: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            name: None,
            prefix: "cgo".to_string(),
            alpha: 1.0,
            state: 0,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_state(mut self, state: usize) -> Self {
        self.state = state;
        self
    }

    fn resolve_name<K: CgoSink + ?Sized>(&self, sink: &K) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => sink.unused_name(&self.prefix, true),
        }
    }
}

/// Scoped `auto_zoom = 0` on a sink
///
/// Dereferences to the sink so loads can go through the guard.
pub struct AutoZoomGuard<'a, K: CgoSink + ?Sized> {
    sink: &'a mut K,
    previous: i32,
}

impl<'a, K: CgoSink + ?Sized> AutoZoomGuard<'a, K> {
    /// Disable `auto_zoom`, remembering the previous value
    pub fn new(sink: &'a mut K) -> CgoResult<Self> {
        let previous = sink.set_view_option(AUTO_ZOOM, 0)?;
        Ok(Self { sink, previous })
    }

    /// The value restored on drop
    pub fn previous(&self) -> i32 {
        self.previous
    }
}

impl<K: CgoSink + ?Sized> Deref for AutoZoomGuard<'_, K> {
    type Target = K;

    fn deref(&self) -> &K {
        self.sink
    }
}

impl<K: CgoSink + ?Sized> DerefMut for AutoZoomGuard<'_, K> {
    fn deref_mut(&mut self) -> &mut K {
        self.sink
    }
}

impl<K: CgoSink + ?Sized> Drop for AutoZoomGuard<'_, K> {
    fn drop(&mut self) {
        if let Err(e) = self.sink.set_view_option(AUTO_ZOOM, self.previous) {
            log::warn!("Failed to restore {} to {}: {}", AUTO_ZOOM, self.previous, e);
        }
    }
}

fn with_alpha(cgo: &Cgo, alpha: f32) -> Cgo {
    std::iter::once(CgoOp::Alpha(alpha))
        .chain(cgo.ops().iter().cloned())
        .collect()
}

fn load_frames<'c, K: CgoSink + ?Sized>(
    sink: &mut K,
    frames: impl IntoIterator<Item = (usize, &'c Cgo)>,
    options: &RenderOptions,
) -> CgoResult<String> {
    let name = options.resolve_name(&*sink);
    sink.delete_object(&name)?;

    let mut guard = AutoZoomGuard::new(sink)?;
    for (state, cgo) in frames {
        let stream = with_alpha(cgo, options.alpha);
        guard.load_cgo(&stream, &name, state)?;
        log::debug!("Loaded CGO '{}' state {} ({} ops)", name, state, stream.len());
    }

    Ok(name)
}

/// Load a stream into the host and return the object name
///
/// Prepends an `ALPHA` directive, replaces any object of the same name and
/// keeps `auto_zoom` disabled while loading.
pub fn render<K: CgoSink + ?Sized>(
    sink: &mut K,
    cgo: &Cgo,
    options: &RenderOptions,
) -> CgoResult<String> {
    load_frames(sink, [(options.state, cgo)], options)
}

/// Load one stream per state under a single object name
///
/// The object is replaced once and all states are loaded under one guard;
/// `options.state` is ignored in favour of the per-frame state.
pub fn render_states<K: CgoSink + ?Sized>(
    sink: &mut K,
    frames: &[(usize, Cgo)],
    options: &RenderOptions,
) -> CgoResult<String> {
    load_frames(sink, frames.iter().map(|(state, cgo)| (*state, cgo)), options)
}
