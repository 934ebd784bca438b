// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, failed: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        self.set_status(format!("Loaded {} ({}/{})", label, self.done + self.failed, self.total));
    }
    fn item_failed(&mut self, label: &str, _reason: &str) {
        self.failed += 1;
        self.set_status(format!("Skipped {} ({}/{})", label, self.done + self.failed, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Fetch failed")); // never got to the tables
        } else if self.failed == 0 {
            self.set_status(format!("Ready ({}/{} sources)", self.done, self.total));
        } else {
            self.set_status(format!("Partial ({}/{} sources)", self.done, self.total));
        }
    }
}
