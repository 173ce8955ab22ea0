//! Async driver that feeds host input into a page and fires its timers on
//! time.

use std::time::Instant;

use pagedom::{Key, Modifiers, Page};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::sleep_until;

/// Something the host did to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageInput {
    ContentLoaded,
    Load,
    Click(String),
    Focus(String),
    Blur,
    SetValue { id: String, value: String },
    Submit(String),
    Key(Key, Modifiers),
    TouchStart(f32),
    TouchEnd(f32),
    Scroll(f32),
    Resize { width: f32, height: f32 },
    Error(String),
    Shutdown,
}

/// Owns a page and runs it against an input channel.
#[derive(Debug)]
pub struct Runtime {
    page: Page,
}

/// Sleep until a deadline, or wait forever if None.
/// This is used as a conditional branch in tokio::select!
async fn sleep_until_optional(deadline: Option<Instant>) {
    match deadline {
        Some(d) => sleep_until(tokio::time::Instant::from_std(d)).await,
        None => std::future::pending::<()>().await,
    }
}

fn clock() -> Instant {
    tokio::time::Instant::now().into_std()
}

impl Runtime {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn into_page(self) -> Page {
        self.page
    }

    /// Apply one input to the page. Returns false for [`PageInput::Shutdown`].
    pub fn apply(&mut self, input: PageInput) -> bool {
        let page = &mut self.page;
        match input {
            PageInput::ContentLoaded => {
                page.content_loaded();
            }
            PageInput::Load => {
                page.load();
            }
            PageInput::Click(id) => {
                page.click(&id);
            }
            PageInput::Focus(id) => {
                if !page.focus(&id) {
                    log::debug!("cannot focus {id}");
                }
            }
            PageInput::Blur => {
                page.blur();
            }
            PageInput::SetValue { id, value } => {
                page.set_value(&id, value);
            }
            PageInput::Submit(id) => {
                page.submit(&id);
            }
            PageInput::Key(key, modifiers) => {
                page.key_down(key, modifiers);
            }
            PageInput::TouchStart(y) => {
                page.touch_start(y);
            }
            PageInput::TouchEnd(y) => {
                page.touch_end(y);
            }
            PageInput::Scroll(y) => page.scroll_to(y),
            PageInput::Resize { width, height } => page.resize(width, height),
            PageInput::Error(message) => {
                page.report_error(message);
            }
            PageInput::Shutdown => return false,
        }
        true
    }

    /// Run until the channel closes or a `Shutdown` arrives, then hand the
    /// page back. Timers that come due in between fire at their deadline.
    pub async fn run(mut self, mut inputs: UnboundedReceiver<PageInput>) -> Page {
        log::info!("page runtime started");
        loop {
            self.page.advance_to(clock());
            let next_deadline = self.page.next_deadline();

            tokio::select! {
                biased;

                input = inputs.recv() => {
                    let Some(input) = input else {
                        log::debug!("input channel closed");
                        break;
                    };
                    // Timers due before this input run first.
                    self.page.advance_to(clock());
                    log::debug!("input: {input:?}");
                    if !self.apply(input) {
                        break;
                    }
                }

                _ = sleep_until_optional(next_deadline) => {
                    log::debug!("timer deadline reached");
                }
            }
        }
        log::info!("page runtime stopped ({} timers pending)", self.page.pending_timers());
        self.page
    }
}
