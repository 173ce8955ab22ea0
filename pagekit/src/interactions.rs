//! One-call installation of every page behavior.

use std::cell::RefCell;
use std::rc::Rc;

use pagedom::{EventKind, ListenerTarget, Page, Selector};

use crate::config::InteractionConfig;
use crate::error::PagekitError;
use crate::keybinds::Shortcuts;
use crate::perf::LoadMonitor;
use crate::reveal::RevealObserver;
use crate::swipe::SwipeDetector;
use crate::toast::{Toast, ToastLevel};
use crate::utils::DateFormat;
use crate::validation::FieldValidator;
use crate::{anchors, boundary, forms, keybinds, perf, reveal, ripple, styles, swipe};

/// Handles to the state behind installed behaviors.
#[derive(Debug)]
pub struct Interactions {
    config: InteractionConfig,
    validator: FieldValidator,
    date_format: DateFormat,
    reveal: Rc<RefCell<RevealObserver>>,
    swipe: Rc<RefCell<SwipeDetector>>,
    load: Option<LoadMonitor>,
    anchors: usize,
    ripple_buttons: usize,
    inputs: usize,
    forms: usize,
}

impl Interactions {
    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn validator(&self) -> FieldValidator {
        self.validator
    }

    /// Date patterns from the config, checked at install.
    pub fn date_format(&self) -> &DateFormat {
        &self.date_format
    }

    /// A toast using the configured duration and exit time.
    pub fn toast(&self, message: impl Into<String>, level: ToastLevel) -> Toast {
        Toast::new(message, level)
            .with_duration(self.config.toast_timeout())
            .with_exit(self.config.toast_exit())
    }

    pub fn reveal(&self) -> &Rc<RefCell<RevealObserver>> {
        &self.reveal
    }

    pub fn swipe(&self) -> &Rc<RefCell<SwipeDetector>> {
        &self.swipe
    }

    /// Load timing report, if the page has navigation timing and `load`
    /// has been handled.
    pub fn load_report(&self) -> Option<perf::LoadReport> {
        self.load.as_ref().and_then(|monitor| *monitor.borrow())
    }

    pub fn anchors(&self) -> usize {
        self.anchors
    }

    pub fn ripple_buttons(&self) -> usize {
        self.ripple_buttons
    }

    pub fn inputs(&self) -> usize {
        self.inputs
    }

    pub fn forms(&self) -> usize {
        self.forms
    }
}

/// Install every behavior on the page as it is now.
///
/// Elements added afterwards get no listeners, matching a script that runs
/// once when the document is ready.
pub fn install(page: &mut Page, config: InteractionConfig) -> Result<Interactions, PagekitError> {
    config.validate()?;
    let ripple_selector = Selector::parse(&config.ripple_selector)?;
    let reveal_selector = Selector::parse(&config.reveal_selector)?;
    let validator = FieldValidator::new(config.min_password_length);
    let date_format = DateFormat::new(&config.time_format, &config.date_format)?;

    styles::inject_styles(page);

    let anchors = anchors::install(page);
    let ripple_buttons = ripple::install(page, &ripple_selector);
    let inputs = forms::install_field_listeners(page, validator);
    let forms = forms::install_submit_handling(page, validator, config.block_invalid_submit);
    let reveal = reveal::install(
        page,
        &reveal_selector,
        RevealObserver::new(config.reveal_threshold, config.reveal_root_margin_bottom),
    );
    keybinds::install(page, Shortcuts::standard());
    let swipe = swipe::install(page, config.swipe_threshold);
    let load = perf::install(page, config.slow_load_limit());
    boundary::install(page, config.error_toast_timeout());

    log::info!(
        "interactions installed: {} form(s), {} input(s), {} button(s), {} anchor(s)",
        forms,
        inputs,
        ripple_buttons,
        anchors
    );

    Ok(Interactions {
        config,
        validator,
        date_format,
        reveal,
        swipe,
        load,
        anchors,
        ripple_buttons,
        inputs,
        forms,
    })
}

/// Handle filled in once `DOMContentLoaded` has installed the behaviors.
pub type PendingInteractions = Rc<RefCell<Option<Interactions>>>;

/// Defer [`install`] until the document is ready.
///
/// The config is validated up front so a bad config fails here rather than
/// inside the listener.
pub fn install_on_content_loaded(
    page: &mut Page,
    config: InteractionConfig,
) -> Result<PendingInteractions, PagekitError> {
    config.validate()?;
    let slot: PendingInteractions = Rc::new(RefCell::new(None));

    let installed = Rc::clone(&slot);
    page.on_event(ListenerTarget::Document, EventKind::DomContentLoaded, move |page, _| {
        if installed.borrow().is_some() {
            return;
        }
        match install(page, config.clone()) {
            Ok(interactions) => *installed.borrow_mut() = Some(interactions),
            Err(err) => log::error!("failed to install interactions: {err}"),
        }
    });

    Ok(slot)
}
