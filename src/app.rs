//! Application orchestration layer
//!
//! Wires the converter panel, the animated background and the terminal UI together
//! and drives them from one async event loop: input actions, finished clipboard reads
//! and the frame clock are multiplexed with `tokio::select!`.

pub mod page;
pub mod runtime;

pub use page::Page;

use crate::background::{BackgroundRenderer, FrameClock, TerminalSurface, Viewport};
use crate::config::AppConfig;
use crate::converter::{
    ClipboardReader, ConverterPanel, DirectorySaver, Messages, SystemClipboard, ToastQueue,
};
use crate::error::Result;
use crate::input::InputAction;
use crate::render::ui::{UIRenderer, ViewState};
use crate::render::{ActionDispatcher, Effect};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::MissedTickBehavior;

/// How long the input thread waits for a terminal event before checking for shutdown.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Application orchestrator - owns the page and coordinates the UI around it
pub struct Application {
    page: Page,
    ui_renderer: Box<dyn UIRenderer>,
    clock: FrameClock,
    frame_interval: Duration,
    dispatcher: ActionDispatcher,
}

impl Application {
    /// Build the page from configuration.
    ///
    /// `surface` is where the background presents its frames; the UI renderer is
    /// expected to read from the same surface.
    pub fn new(
        config: &AppConfig,
        ui_renderer: Box<dyn UIRenderer>,
        surface: TerminalSurface,
    ) -> Self {
        let clipboard: Arc<dyn ClipboardReader> = Arc::new(SystemClipboard::new());
        let download_dir = config.resolved_download_dir();
        log::info!("saving files to {}", download_dir.display());

        let panel = ConverterPanel::new(
            clipboard,
            Box::new(DirectorySaver::new(download_dir)),
            Messages::for_language(config.language),
            ToastQueue::new(config.toast_limit, config.toast_duration()),
        );

        let clock = FrameClock::new();
        let background = config.background.then(|| {
            BackgroundRenderer::new(
                Box::new(surface),
                Box::new(clock.clone()),
                config.cell_aspect,
            )
        });

        Self::with_page(
            Page::new(panel, background),
            ui_renderer,
            clock,
            config.frame_interval(),
        )
    }

    /// Assemble from ready-made parts. The background must be scheduled by `clock`.
    pub fn with_page(
        page: Page,
        ui_renderer: Box<dyn UIRenderer>,
        clock: FrameClock,
        frame_interval: Duration,
    ) -> Self {
        Self {
            page,
            ui_renderer,
            clock,
            frame_interval,
            dispatcher: ActionDispatcher::new(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Run the application until the user quits, reading input from the terminal
    pub async fn run(&mut self) -> Result<()> {
        self.ui_renderer.initialize()?;

        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let shutdown = Arc::new(AtomicBool::new(false));
        let input_thread =
            runtime::spawn_input_thread(input_tx, Arc::clone(&shutdown), INPUT_POLL_INTERVAL);

        let result = self.run_with_input(input_rx).await;

        // Teardown runs on every exit path
        shutdown.store(true, Ordering::SeqCst);
        self.page.unmount();
        let cleanup = self.ui_renderer.cleanup();
        if input_thread.join().is_err() {
            log::error!("input thread panicked");
        }

        result.and(cleanup)
    }

    /// Event loop over an arbitrary action source. Returns when the source closes or
    /// a quit action arrives; the background is left mounted for the caller to dispose.
    pub async fn run_with_input(
        &mut self,
        mut input_rx: UnboundedReceiver<InputAction>,
    ) -> Result<()> {
        let (width, height) = self.ui_renderer.get_terminal_size()?;
        let mut view_state = ViewState::new(width, height);
        self.page.mount(Viewport::new(width, height));

        let (clipboard_tx, mut clipboard_rx) = mpsc::unbounded_channel();
        let mut ticker = tokio::time::interval(self.frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.ui_renderer.render(&self.page, &view_state)?;

        loop {
            tokio::select! {
                action = input_rx.recv() => {
                    let Some(action) = action else {
                        log::debug!("input source closed");
                        break;
                    };
                    match self.dispatcher.process_action(action, &mut self.page, &mut view_state) {
                        Effect::Quit => break,
                        Effect::ReadClipboard => self.spawn_clipboard_read(&clipboard_tx),
                        Effect::None => {}
                    }
                }
                Some(result) = clipboard_rx.recv() => {
                    self.dispatcher.finish_clipboard(result, &mut self.page, &mut view_state);
                }
                _ = ticker.tick() => {
                    if let Some(id) = self.clock.take_due() {
                        self.page.deliver_frame(id);
                    }
                    self.page.panel.toasts_mut().prune(Instant::now());
                }
            }

            self.ui_renderer.render(&self.page, &view_state)?;
        }

        Ok(())
    }

    /// Read the clipboard off the event loop; the result comes back on `tx`
    fn spawn_clipboard_read(&self, tx: &UnboundedSender<Result<String>>) {
        let clipboard = self.page.panel.clipboard();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = clipboard.read_text().await;
            // The loop may already be gone
            let _ = tx.send(result);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::background::RendererState;
    use crate::converter::clipboard::tests::MockClipboard;
    use crate::converter::saver::tests::RecordingSaver;
    use crate::render::ui::MockUIRenderer;

    fn app(clipboard: MockClipboard, background: bool) -> (Application, TerminalSurface) {
        let panel = ConverterPanel::new(
            Arc::new(clipboard),
            Box::new(RecordingSaver::default()),
            Messages::english(),
            ToastQueue::default(),
        );
        let surface = TerminalSurface::new();
        let clock = FrameClock::new();
        let renderer = background.then(|| {
            BackgroundRenderer::new(Box::new(surface.clone()), Box::new(clock.clone()), 0.5)
        });
        let app = Application::with_page(
            Page::new(panel, renderer),
            Box::new(MockUIRenderer::new()),
            clock,
            Duration::from_millis(5),
        );
        (app, surface)
    }

    #[tokio::test]
    async fn test_actions_are_applied_until_quit() {
        let (mut app, _surface) = app(MockClipboard::with_text("clip"), false);
        let (tx, rx) = mpsc::unbounded_channel();
        for ch in "hey".chars() {
            tx.send(InputAction::InsertChar(ch)).unwrap();
        }
        tx.send(InputAction::Quit).unwrap();
        tx.send(InputAction::InsertChar('!')).unwrap();

        app.run_with_input(rx).await.unwrap();
        assert_eq!(app.page().panel.text(), "hey");
    }

    #[tokio::test]
    async fn test_closed_input_ends_the_loop() {
        let (mut app, _surface) = app(MockClipboard::with_text("clip"), false);
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(InputAction::InsertText("typed".to_string())).unwrap();
        drop(tx);

        app.run_with_input(rx).await.unwrap();
        assert_eq!(app.page().panel.text(), "typed");
    }

    #[tokio::test]
    async fn test_clipboard_read_completes_through_the_loop() {
        let (mut app, _surface) = app(MockClipboard::with_text("from clipboard"), false);
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(InputAction::PasteClipboard).unwrap();

        let feeder = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            let _ = tx.send(InputAction::Quit);
        });

        app.run_with_input(rx).await.unwrap();
        feeder.await.unwrap();
        assert_eq!(app.page().panel.text(), "from clipboard");
        assert_eq!(app.page().panel.toasts().latest().unwrap().title, "Pasted");
    }

    #[tokio::test]
    async fn test_background_animates_and_is_disposed() {
        let (mut app, surface) = app(MockClipboard::with_text("clip"), true);
        let (tx, rx) = mpsc::unbounded_channel();

        let feeder = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            let _ = tx.send(InputAction::Quit);
        });

        app.run_with_input(rx).await.unwrap();
        feeder.await.unwrap();

        assert_eq!(app.page().background_state(), Some(RendererState::Running));
        assert!(surface.present_count() > 0);

        assert!(app.page.unmount());
        assert!(!surface.is_attached());
        assert!(!app.clock.has_pending());

        // No frames after teardown
        let presented = surface.present_count();
        assert_eq!(app.clock.take_due(), None);
        assert_eq!(surface.present_count(), presented);
    }
}
