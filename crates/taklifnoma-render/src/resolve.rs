//! Producing new config snapshots from presets and patches, and tracking
//! them for undo/redo.

use taklifnoma_core::models::config::{Colors, TemplateConfig};
use taklifnoma_core::models::patch::{ColorsPatch, TemplateConfigPatch};

/// Replace `colors` wholesale with the preset. Roles the preset leaves unset
/// take the built-in default, not the current value.
pub fn apply_preset(current: &TemplateConfig, preset: &ColorsPatch) -> TemplateConfig {
    let mut colors = Colors::default();
    preset.apply_to(&mut colors);
    TemplateConfig {
        colors,
        ..current.clone()
    }
}

/// Deep-merge `patch` into a copy of `current` and clamp the result.
pub fn merge_patch(current: &TemplateConfig, patch: &TemplateConfigPatch) -> TemplateConfig {
    let mut next = current.clone();
    patch.apply_to(&mut next);
    next.clamped()
}

/// Linear undo/redo history of config snapshots.
///
/// Never empty: the cursor always points at a valid snapshot.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<TemplateConfig>,
    cursor: usize,
    limit: Option<usize>,
}

impl History {
    pub fn new(initial: TemplateConfig) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
            limit: None,
        }
    }

    /// Keep at most `limit` snapshots, dropping the oldest first.
    pub fn with_limit(initial: TemplateConfig, limit: usize) -> Self {
        Self {
            limit: Some(limit.max(1)),
            ..Self::new(initial)
        }
    }

    pub fn current(&self) -> &TemplateConfig {
        &self.snapshots[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Discard any redo entries, append `next` and move onto it.
    pub fn push(&mut self, next: TemplateConfig) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor = self.snapshots.len() - 1;

        if let Some(limit) = self.limit {
            let overflow = self.snapshots.len().saturating_sub(limit);
            if overflow > 0 {
                self.snapshots.drain(..overflow);
                self.cursor -= overflow;
            }
        }
    }

    /// Merge `patch` into the current snapshot and push the result.
    pub fn apply(&mut self, patch: &TemplateConfigPatch) -> &TemplateConfig {
        let next = merge_patch(self.current(), patch);
        self.push(next);
        self.current()
    }

    /// Step back one snapshot. At the oldest snapshot this is a no-op.
    pub fn undo(&mut self) -> &TemplateConfig {
        if self.can_undo() {
            self.cursor -= 1;
        }
        self.current()
    }

    /// Step forward one snapshot. At the newest snapshot this is a no-op.
    pub fn redo(&mut self) -> &TemplateConfig {
        if self.can_redo() {
            self.cursor += 1;
        }
        self.current()
    }
}
