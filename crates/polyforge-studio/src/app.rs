use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use polyforge_engine::core::{App, AppControl, FrameCtx};
use polyforge_engine::paint::Rgba;
use polyforge_engine::render::{MeshRenderer, RenderError};
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::gallery::Scene;

/// Shared slot the app parks a fatal renderer error in for `main`.
pub type FailureSlot = Rc<RefCell<Option<RenderError>>>;

/// Steps through the gallery, one scene at a time.
pub struct GalleryApp {
    scenes: Vec<Scene>,
    current: usize,
    /// Auto-advance period; `None` holds the current scene.
    interval: Option<Duration>,
    shown_at: Duration,
    advance_requested: bool,
    title_stale: bool,
    renderer: Option<MeshRenderer>,
    failure: FailureSlot,
}

impl GalleryApp {
    pub fn new(
        scenes: Vec<Scene>,
        start: usize,
        interval: Option<Duration>,
        failure: FailureSlot,
    ) -> Self {
        Self {
            current: start.min(scenes.len().saturating_sub(1)),
            scenes,
            interval,
            shown_at: Duration::ZERO,
            advance_requested: false,
            title_stale: true,
            renderer: None,
            failure,
        }
    }

    fn advance(&mut self, now: Duration) {
        self.current = (self.current + 1) % self.scenes.len();
        self.shown_at = now;
        self.title_stale = true;
    }

    fn due(&self, now: Duration) -> bool {
        self.interval
            .is_some_and(|interval| now.saturating_sub(self.shown_at) >= interval)
    }
}

impl App for GalleryApp {
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let WindowEvent::KeyboardInput { event, .. } = event else {
            return AppControl::Continue;
        };
        if event.state != ElementState::Pressed || event.repeat {
            return AppControl::Continue;
        }

        match event.physical_key {
            PhysicalKey::Code(KeyCode::Escape) => AppControl::Exit,
            PhysicalKey::Code(KeyCode::Space) => {
                self.advance_requested = true;
                AppControl::Continue
            }
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.scenes.is_empty() {
            return AppControl::Exit;
        }

        let now = ctx.time.elapsed;
        if std::mem::take(&mut self.advance_requested) || self.due(now) {
            self.advance(now);
        }

        let scene = &self.scenes[self.current];
        if std::mem::take(&mut self.title_stale) {
            log::info!("scene {}: {}", scene.name, scene.caption);
            ctx.window.set_title(&format!("polyforge: {}", scene.caption));
        }

        let renderer = &mut self.renderer;
        let mut failed = None;

        let control = ctx.render(|rctx, target| {
            if renderer.is_none() {
                match MeshRenderer::new(rctx) {
                    Ok(r) => *renderer = Some(r),
                    Err(err) => {
                        failed = Some(err);
                        return;
                    }
                }
            }
            let Some(r) = renderer.as_mut() else { return };

            r.clear(rctx, target, Rgba::opaque_white());
            r.set_depth_test(scene.depth_test);
            for item in &scene.items {
                r.draw_mesh(rctx, target, &item.mesh, item.matrix());
            }
        });

        if let Some(err) = failed {
            log::error!("{err}");
            *self.failure.borrow_mut() = Some(err);
            return AppControl::Exit;
        }

        control
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::scenes;

    fn app(interval: Option<Duration>) -> GalleryApp {
        GalleryApp::new(scenes(), 0, interval, FailureSlot::default())
    }

    #[test]
    fn advances_after_interval() {
        let app = app(Some(Duration::from_secs(3)));
        assert!(!app.due(Duration::from_millis(2999)));
        assert!(app.due(Duration::from_secs(3)));
    }

    #[test]
    fn no_interval_holds_scene() {
        let app = app(None);
        assert!(!app.due(Duration::from_secs(3600)));
    }

    #[test]
    fn advance_wraps_to_first_scene() {
        let mut app = app(None);
        let count = app.scenes.len();
        for _ in 0..count {
            app.advance(Duration::ZERO);
        }
        assert_eq!(app.current, 0);
    }

    #[test]
    fn start_index_is_clamped() {
        let app = GalleryApp::new(scenes(), 999, None, FailureSlot::default());
        assert_eq!(app.current, app.scenes.len() - 1);
    }
}
