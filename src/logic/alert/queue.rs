//! Alert Queue
//!
//! Oldest alert first. Mutations take the inner lock so a queue handle can be
//! drained from another thread while predictions keep arriving.

use std::collections::VecDeque;
use std::fmt::Write as _;
use std::io::{self, Write};
use parking_lot::Mutex;

use crate::constants::DEFAULT_TIME_FORMAT;
use super::types::Alert;

pub struct AlertQueue {
    alerts: Mutex<VecDeque<Alert>>,
    time_format: String,
}

impl AlertQueue {
    pub fn new() -> Self {
        Self::with_time_format(DEFAULT_TIME_FORMAT)
    }

    /// Queue whose printed timestamps use a custom strftime format
    pub fn with_time_format(time_format: impl Into<String>) -> Self {
        Self {
            alerts: Mutex::new(VecDeque::new()),
            time_format: time_format.into(),
        }
    }

    /// Append an alert stamped with the current time
    pub fn add_alert(&self, name: &str) {
        self.push(Alert::new(name));
    }

    /// Append a pre-built alert
    pub fn push(&self, alert: Alert) {
        self.alerts.lock().push_back(alert);
    }

    /// Remove and return the oldest alert; None when empty
    pub fn pop_alert(&self) -> Option<Alert> {
        self.alerts.lock().pop_front()
    }

    pub fn empty(&self) -> bool {
        self.alerts.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.alerts.lock().len()
    }

    pub fn clear_queue(&self) {
        let mut alerts = self.alerts.lock();
        if !alerts.is_empty() {
            log::debug!("Discarding {} pending alerts", alerts.len());
        }
        alerts.clear();
    }

    /// Copy of the pending alerts, oldest first
    pub fn snapshot(&self) -> Vec<Alert> {
        self.alerts.lock().iter().cloned().collect()
    }

    // ========================================================================
    // PRINTING
    // ========================================================================

    /// `<local time> - Predicted failure of <name>.`
    pub fn format_alert(&self, alert: &Alert) -> String {
        let mut stamp = String::new();
        let formatted = match alert.local_time() {
            Some(t) => write!(stamp, "{}", t.format(&self.time_format)).is_ok(),
            None => false,
        };
        if !formatted {
            // Out-of-range time or unusable format string
            stamp = format!("{:.3}", alert.time);
        }

        format!("{} - Predicted failure of {}.", stamp, alert.name)
    }

    pub fn print_alert(&self, alert: &Alert) {
        println!("{}", self.format_alert(alert));
    }

    /// Write every pending alert, one per line, without consuming them
    pub fn write_alerts<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for alert in self.snapshot() {
            writeln!(out, "{}", self.format_alert(&alert))?;
        }
        Ok(())
    }

    pub fn print_alerts(&self) {
        let stdout = io::stdout();
        if let Err(e) = self.write_alerts(&mut stdout.lock()) {
            log::error!("Failed to print alerts: {}", e);
        }
    }
}

impl Default for AlertQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AlertQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertQueue")
            .field("pending", &self.len())
            .field("time_format", &self.time_format)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn output(queue: &AlertQueue) -> String {
        let mut buf = Vec::new();
        queue.write_alerts(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_fifo_order() {
        let queue = AlertQueue::new();
        queue.add_alert("a");
        queue.add_alert("b");
        queue.add_alert("a");

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop_alert().unwrap().name, "a");
        assert_eq!(queue.pop_alert().unwrap().name, "b");
        assert_eq!(queue.pop_alert().unwrap().name, "a");
        assert!(queue.empty());
    }

    #[test]
    fn test_pop_empty_returns_none() {
        let queue = AlertQueue::new();
        assert!(queue.empty());
        assert!(queue.pop_alert().is_none());
        assert!(queue.empty());
    }

    #[test]
    fn test_clear_queue() {
        let queue = AlertQueue::new();
        queue.clear_queue();
        assert!(queue.empty());

        for i in 0..5 {
            queue.add_alert(&format!("m{}", i));
        }
        queue.clear_queue();
        assert!(queue.empty());
        assert!(queue.pop_alert().is_none());
    }

    #[test]
    fn test_format_alert_line() {
        let queue = AlertQueue::with_time_format("%Y");
        let alert = Alert::at(1_497_398_400.0, "test02");
        let year = alert.local_time().unwrap().format("%Y").to_string();

        assert_eq!(
            queue.format_alert(&alert),
            format!("{} - Predicted failure of test02.", year)
        );
    }

    #[test]
    fn test_default_format_is_c_locale() {
        let queue = AlertQueue::new();
        let alert = Alert::at(1_497_398_400.0, "x");
        let expected = alert.local_time().unwrap().format("%c").to_string();

        assert_eq!(queue.format_alert(&alert), format!("{} - Predicted failure of x.", expected));
    }

    #[test]
    fn test_bad_format_falls_back_to_seconds() {
        let queue = AlertQueue::with_time_format("%Q");
        let alert = Alert::at(12.5, "x");
        assert_eq!(queue.format_alert(&alert), "12.500 - Predicted failure of x.");
    }

    #[test]
    fn test_printing_does_not_mutate() {
        let queue = AlertQueue::new();
        queue.push(Alert::at(100.0, "one"));
        queue.push(Alert::at(200.0, "two"));

        let first = output(&queue);
        let second = output(&queue);

        assert_eq!(first, second);
        assert_eq!(first.lines().count(), 2);
        assert!(first.lines().next().unwrap().ends_with(" - Predicted failure of one."));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_concurrent_adds_are_not_lost() {
        let queue = Arc::new(AlertQueue::new());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let queue = Arc::clone(&queue);
                thread::spawn(move || {
                    for i in 0..100 {
                        queue.add_alert(&format!("t{}-{}", t, i));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(queue.len(), 400);
        let mut drained = 0;
        while queue.pop_alert().is_some() {
            drained += 1;
        }
        assert_eq!(drained, 400);
        assert!(queue.empty());
    }
}
