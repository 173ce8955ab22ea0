//! Slow page load reporting.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use pagedom::{EventKind, ListenerTarget, NavigationTiming, Page};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadReport {
    pub duration_ms: f64,
    pub slow: bool,
}

/// Compare the load event's duration against `limit`. Only a strictly
/// longer load counts as slow.
pub fn check_load_time(timing: &NavigationTiming, limit: Duration) -> LoadReport {
    let duration_ms = timing.load_duration_ms();
    LoadReport {
        duration_ms,
        slow: duration_ms > limit.as_secs_f64() * 1000.0,
    }
}

/// Report produced after the page's `load` event, once available.
pub type LoadMonitor = Rc<RefCell<Option<LoadReport>>>;

/// Check load timing right after `load` fires.
///
/// Pages without navigation timing get no listener and None is returned.
pub fn install(page: &mut Page, limit: Duration) -> Option<LoadMonitor> {
    page.performance()?;
    let monitor: LoadMonitor = Rc::new(RefCell::new(None));

    let report = Rc::clone(&monitor);
    page.on_event(ListenerTarget::Window, EventKind::Load, move |page, _| {
        let report = Rc::clone(&report);
        // Deferred so the load event's own end time is recorded first.
        page.set_timeout(Duration::ZERO, move |page| {
            let Some(timing) = page.performance() else {
                return;
            };
            let result = check_load_time(&timing, limit);
            if result.slow {
                log::warn!("Page load time is slow: {} ms", result.duration_ms);
            }
            *report.borrow_mut() = Some(result);
        });
    });

    Some(monitor)
}
