use crossterm::event::{KeyCode, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::{debug, info};
use tui_cloud::interact::PointerEvent;
use tui_cloud::{Cloud, CloudConfig, Keyword, Palette, project};

pub enum Action {
    Continue,
    Quit,
}

/// Harness state: the original keyword set, the order currently shown, and
/// the engine.
pub struct App {
    source: Vec<Keyword>,
    shown: Vec<Keyword>,
    pub cloud: Cloud,
    /// Where the cloud was last drawn, for hit-testing.
    pub cloud_area: Rect,
}

impl App {
    pub fn new(keywords: Vec<Keyword>, config: CloudConfig) -> Self {
        let mut cloud = Cloud::new(config);
        cloud.build(&keywords);

        Self {
            shown: keywords.clone(),
            source: keywords,
            cloud,
            cloud_area: Rect::default(),
        }
    }

    pub fn shown(&self) -> &[Keyword] {
        &self.shown
    }

    pub fn hovered(&self) -> Option<&Keyword> {
        let index = self.cloud.items().iter().position(|it| it.highlighted)?;
        self.shown.get(index)
    }

    pub fn on_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,

            KeyCode::Char('o') => {
                let step = 1.min(self.shown.len());
                self.shown.rotate_left(step);
            }
            KeyCode::Char('r') => self.shown.reverse(),
            KeyCode::Char('c') => self.shown.clear(),
            KeyCode::Char('l') => self.shown = self.source.clone(),

            KeyCode::Char('p') => {
                let next = if self.cloud.config().palette == Palette::HEATMAP {
                    Palette::LEGACY
                } else {
                    Palette::HEATMAP
                };

                info!(?next, "switching palette");
                self.cloud.set_palette(next);
                return Action::Continue;
            }

            _ => return Action::Continue,
        }

        self.cloud.build(&self.shown);
        Action::Continue
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
            return;
        }

        let target = project::pick(
            self.cloud.scene(),
            self.cloud.config(),
            self.cloud_area,
            mouse.column,
            mouse.row,
        );

        for event in self.cloud.pointer_move(target) {
            match event {
                PointerEvent::Enter(i) => debug!(index = i, "pointer enter"),
                PointerEvent::Leave(i) => debug!(index = i, "pointer leave"),
            }
        }
    }
}
