//! Rendering boundary between stores and whatever displays them.
//!
//! # Responsibility
//! - Turn an in-memory sequence into a `ListView` and its HTML markup.
//! - Hand markup to a swappable `RenderTarget`.
//!
//! # Invariants
//! - Rendering is a pure function of the sequence and display settings.
//! - User text is HTML-escaped before it reaches markup.

pub mod date;
pub mod list_view;

/// Display surface a store writes its rendered markup into.
pub trait RenderTarget {
    /// Replaces whatever the surface currently shows.
    fn replace_content(&mut self, markup: &str);
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn replace_content(&mut self, markup: &str) {
        (**self).replace_content(markup);
    }
}

/// Surface that keeps the last markup in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryRenderTarget {
    content: String,
    render_count: usize,
}

impl MemoryRenderTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of times the surface was replaced.
    pub fn render_count(&self) -> usize {
        self.render_count
    }
}

impl RenderTarget for MemoryRenderTarget {
    fn replace_content(&mut self, markup: &str) {
        self.content.clear();
        self.content.push_str(markup);
        self.render_count += 1;
    }
}
