//! Single-occupant content slot

use crate::geometry::Rect;

use super::PanelContent;

/// Holds at most one piece of content
///
/// Content assigned before the host view is realized is kept but not mounted;
/// `mount` places it once a region is known.
pub struct PanelSlot<T: ?Sized + PanelContent> {
    content: Option<Box<T>>,
    mounted: bool,
}

impl<T: ?Sized + PanelContent> Default for PanelSlot<T> {
    fn default() -> Self {
        Self {
            content: None,
            mounted: false,
        }
    }
}

impl<T: ?Sized + PanelContent> PanelSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot's content
    ///
    /// Previous content is detached and dropped before the new content is
    /// attached. When `region` is given the new content is laid out at once.
    pub fn attach(&mut self, mut content: Box<T>, region: Option<Rect>) {
        self.take();

        content.attached();
        self.content = Some(content);

        if let Some(region) = region {
            self.mount(region);
        }
    }

    /// Detach and return the current content, if any
    pub fn take(&mut self) -> Option<Box<T>> {
        let mut previous = self.content.take()?;
        previous.detached();
        self.mounted = false;
        Some(previous)
    }

    /// Place content into `region`; no-op for an empty slot
    pub fn mount(&mut self, region: Rect) {
        if let Some(content) = self.content.as_mut() {
            content.layout(region);
            self.mounted = true;
        }
    }

    /// Re-layout already mounted content
    pub fn relayout(&mut self, region: Rect) {
        if self.mounted {
            self.mount(region);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn get(&self) -> Option<&T> {
        self.content.as_deref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.content.as_deref_mut()
    }
}

impl<T: ?Sized + PanelContent> Drop for PanelSlot<T> {
    fn drop(&mut self) {
        self.take();
    }
}

impl<T: ?Sized + PanelContent> std::fmt::Debug for PanelSlot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelSlot")
            .field("occupied", &self.content.is_some())
            .field("mounted", &self.mounted)
            .finish()
    }
}
