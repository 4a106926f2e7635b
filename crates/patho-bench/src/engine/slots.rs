//! Reusable capture slot buffers.

use crate::pattern::CAPTURE_COUNT;

/// One byte buffer per capture group, allocated once and overwritten in
/// place on every successful match.
///
/// Groups are addressed 1-based, the way regex groups are numbered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureSlots {
    slots: [Vec<u8>; CAPTURE_COUNT],
}

impl CaptureSlots {
    /// Create empty slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots.
    #[must_use]
    pub const fn len(&self) -> usize {
        CAPTURE_COUNT
    }

    /// Always false; the slot count is fixed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        CAPTURE_COUNT == 0
    }

    /// Contents of group `group` (1-based).
    #[must_use]
    pub fn get(&self, group: usize) -> Option<&[u8]> {
        group
            .checked_sub(1)
            .and_then(|index| self.slots.get(index))
            .map(Vec::as_slice)
    }

    /// Overwrite group `group` (1-based) with `text`. Out-of-range groups are ignored.
    pub fn set(&mut self, group: usize, text: &[u8]) {
        if let Some(slot) = group.checked_sub(1).and_then(|index| self.slots.get_mut(index)) {
            slot.clear();
            slot.extend_from_slice(text);
        }
    }

    /// Empty every slot without releasing its allocation.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
    }

    /// Iterate over the slots in group order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.slots.iter().map(Vec::as_slice)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Vec<u8>> {
        self.slots.iter_mut()
    }
}
