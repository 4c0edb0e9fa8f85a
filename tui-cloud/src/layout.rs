use tracing::debug;

use crate::animate::{Animator, Placeholder};
use crate::config::{CloudConfig, Palette};
use crate::encode;
use crate::interact::{Interaction, PointerEvent};
use crate::item::{Keyword, LayoutPoint, RenderItem, Vec3};
use crate::normalize::Normalizer;
use crate::sphere;

/// What the renderer should draw this frame.
#[derive(Debug, Clone, Copy)]
pub enum Scene<'a> {
    /// No keywords yet.
    Idle(&'a Placeholder),
    Cloud {
        items: &'a [RenderItem],
        /// Group rotation about the vertical axis.
        rotation: f32,
    },
}

/// How often each cache has been rebuilt since construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutStats {
    pub position_builds: u64,
    pub encoding_builds: u64,
}

struct PositionCache {
    count: usize,
    points: Vec<Vec3>,
}

struct EncodingCache {
    keywords: Vec<Keyword>,
    normalizer: Normalizer,
}

/// Composes distribution, encoding, animation and hover into render items.
///
/// Positions are cached by count and reassigned slot by slot, so the same
/// words in a different order land on different points of the same set.
pub struct Cloud {
    config: CloudConfig,
    positions: Option<PositionCache>,
    encoding: Option<EncodingCache>,
    items: Vec<RenderItem>,
    interaction: Interaction,
    animator: Animator,
    placeholder: Placeholder,
    stats: LayoutStats,
}

impl Default for Cloud {
    fn default() -> Self {
        Self::new(CloudConfig::default())
    }
}

impl Cloud {
    pub fn new(config: CloudConfig) -> Self {
        Self {
            animator: Animator::new(&config),
            config,
            positions: None,
            encoding: None,
            items: Vec::new(),
            interaction: Interaction::default(),
            placeholder: Placeholder::default(),
            stats: LayoutStats::default(),
        }
    }

    pub fn config(&self) -> &CloudConfig {
        &self.config
    }

    pub fn stats(&self) -> LayoutStats {
        self.stats
    }

    pub fn items(&self) -> &[RenderItem] {
        &self.items
    }

    pub fn base_positions(&self) -> &[Vec3] {
        self.positions
            .as_ref()
            .map(|cache| cache.points.as_slice())
            .unwrap_or(&[])
    }

    pub fn rotation(&self) -> f32 {
        self.animator.rotation()
    }

    /// Rebuilds render items when `keywords` differs from the last build.
    /// An identical list is a no-op and keeps hover state.
    pub fn build(&mut self, keywords: &[Keyword]) -> &[RenderItem] {
        if let Some(cache) = &self.encoding {
            if cache.keywords == keywords {
                return &self.items;
            }
        }

        let n = keywords.len();
        self.ensure_positions(n);

        let normalizer = Normalizer::new(keywords.iter().map(|k| k.weight));
        self.stats.encoding_builds += 1;

        debug!(
            count = n,
            min = normalizer.min(),
            max = normalizer.max(),
            "rebuilding render items"
        );

        let points = self.base_positions();
        let items = keywords
            .iter()
            .enumerate()
            .map(|(i, k)| {
                let enc = encode::encode(normalizer.apply(k.weight), &self.config);
                let position = points.get(i).copied().unwrap_or(Vec3::ORIGIN);

                RenderItem {
                    word: k.word.clone(),
                    weight: k.weight,
                    size: enc.size,
                    color: enc.color,
                    base_position: LayoutPoint { position },
                    current_position: position,
                    highlighted: false,
                    hover_scale: self.config.hover_scale,
                }
            })
            .collect();

        self.items = items;
        self.interaction.reset(n);
        self.encoding = Some(EncodingCache {
            keywords: keywords.to_vec(),
            normalizer,
        });

        &self.items
    }

    fn ensure_positions(&mut self, n: usize) {
        if self.positions.as_ref().is_some_and(|cache| cache.count == n) {
            debug!(count = n, "reusing sphere positions");
            return;
        }

        debug!(count = n, radius = self.config.radius, "distributing sphere positions");

        self.positions = Some(PositionCache {
            count: n,
            points: sphere::distribute(n, self.config.radius),
        });
        self.stats.position_builds += 1;
    }

    /// Recolors the current items in place; layout, sizes and hover survive.
    pub fn set_palette(&mut self, palette: Palette) {
        if self.config.palette == palette {
            return;
        }

        self.config.palette = palette;

        if let Some(cache) = &self.encoding {
            for item in &mut self.items {
                item.color = encode::encode(cache.normalizer.apply(item.weight), &self.config).color;
            }

            self.stats.encoding_builds += 1;
        }
    }

    /// Advances one frame: `delta` drives the spin, `elapsed` the bob phase.
    pub fn tick(&mut self, delta: f32, elapsed: f32) {
        if self.items.is_empty() {
            self.placeholder.advance(delta);
            return;
        }

        self.animator.advance(delta);

        let positions = self
            .animator
            .tick(elapsed, self.base_positions(), self.items.len());
        apply_positions(&mut self.items, &positions);

        for (i, item) in self.items.iter_mut().enumerate() {
            item.highlighted = self.interaction.is_hovered(i);
        }
    }

    pub fn pointer_enter(&mut self, index: usize) {
        self.interaction.pointer_enter(index);
        self.sync_highlight(index);
    }

    pub fn pointer_leave(&mut self, index: usize) {
        self.interaction.pointer_leave(index);
        self.sync_highlight(index);
    }

    /// Feeds the item under the pointer (if any) and applies the resulting
    /// enter/leave transitions.
    pub fn pointer_move(&mut self, target: Option<usize>) -> Vec<PointerEvent> {
        let events = self.interaction.pointer_move(target);

        for event in &events {
            match *event {
                PointerEvent::Enter(i) | PointerEvent::Leave(i) => self.sync_highlight(i),
            }
        }

        events
    }

    fn sync_highlight(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.highlighted = self.interaction.is_hovered(index);
        }
    }

    pub fn scene(&self) -> Scene<'_> {
        if self.items.is_empty() {
            Scene::Idle(&self.placeholder)
        } else {
            Scene::Cloud {
                items: &self.items,
                rotation: self.animator.rotation(),
            }
        }
    }
}

/// Writes animated positions into items index by index. Items past the end
/// of `positions` (a set mid-transition) are parked at the origin.
pub fn apply_positions(items: &mut [RenderItem], positions: &[Vec3]) {
    for (i, item) in items.iter_mut().enumerate() {
        item.current_position = positions.get(i).copied().unwrap_or(Vec3::ORIGIN);
    }
}
