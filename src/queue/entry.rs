//! Queue entries: the coalesced unit of live-preview work.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A batch of page/block changes to apply to the live preview in one flush.
///
/// Entries arrive from the file watcher and are merged while pending:
/// keyed collections replace by natural key, the changed lists union, and
/// `fingerprint`/`native_blocks`/`tailwind_css` take the incoming value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueEntry {
    /// Opaque content-version tag, used to detect staleness downstream.
    #[serde(default)]
    pub fingerprint: String,
    #[serde(default)]
    pub pages: Vec<PageUpdate>,
    #[serde(default)]
    pub blocks: Vec<BlockUpdate>,
    #[serde(default, alias = "preloadBlocks")]
    pub preload_blocks: Vec<PreloadBlock>,
    #[serde(default, alias = "changedBlocks")]
    pub changed_blocks: Vec<String>,
    #[serde(default, alias = "changedPages")]
    pub changed_pages: Vec<String>,
    #[serde(default, alias = "blocksNative")]
    pub native_blocks: Option<Value>,
    #[serde(default, alias = "tailwindCss")]
    pub tailwind_css: Option<String>,
}

/// A page whose rendered markup changed, keyed by slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageUpdate {
    pub slug: String,
    #[serde(default)]
    pub markup: Value,
}

/// A block whose compiled assets changed, keyed by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockUpdate {
    pub name: String,
    #[serde(default)]
    pub assets: Value,
}

/// A block registration payload to preload into the editor, keyed by
/// block name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreloadBlock {
    #[serde(alias = "blockName")]
    pub block_name: String,
    #[serde(default)]
    pub payload: Value,
}

impl QueueEntry {
    /// Merges a newer entry into this one while both are pending.
    pub fn merge(&mut self, incoming: QueueEntry) {
        self.fingerprint = incoming.fingerprint;

        merge_keyed(&mut self.pages, incoming.pages, |p| p.slug.as_str());
        merge_keyed(&mut self.blocks, incoming.blocks, |b| b.name.as_str());
        merge_keyed(&mut self.preload_blocks, incoming.preload_blocks, |b| {
            b.block_name.as_str()
        });

        self.changed_blocks = std::mem::take(&mut self.changed_blocks)
            .into_iter()
            .chain(incoming.changed_blocks)
            .unique()
            .collect();
        self.changed_pages = std::mem::take(&mut self.changed_pages)
            .into_iter()
            .chain(incoming.changed_pages)
            .unique()
            .collect();

        if incoming.native_blocks.is_some() {
            self.native_blocks = incoming.native_blocks;
        }
        if incoming.tailwind_css.is_some() {
            self.tailwind_css = incoming.tailwind_css;
        }
    }
}

/// Replace-by-key merge: an incoming item supersedes the held item sharing
/// its natural key, otherwise it appends.
fn merge_keyed<T, F>(current: &mut Vec<T>, incoming: Vec<T>, key: F)
where
    F: Fn(&T) -> &str,
{
    for item in incoming {
        match current.iter_mut().find(|held| key(held) == key(&item)) {
            Some(held) => *held = item,
            None => current.push(item),
        }
    }
}
