//! Shared sinks recording what a handled error printed and logged
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use errhandle::logging::{self, LogFn, PrintFn};
use errhandle::{Classification, HandlerConfig, LogRecord};

/// One recorded log call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logged {
    pub id: Classification,
    pub level: u8,
    pub detail: String,
}

/// Records every print and log call made through its sinks
#[derive(Debug, Clone, Default)]
pub struct Capture {
    printed: Arc<Mutex<Vec<String>>>,
    logged: Arc<Mutex<Vec<Logged>>>,
}

impl Capture {
    pub fn new() -> Self {
        logging::init_test();
        Self::default()
    }

    pub fn printer(&self) -> PrintFn {
        let printed = Arc::clone(&self.printed);
        logging::print_fn(move |message| {
            printed
                .lock()
                .expect("Mutex poisoned - test infrastructure failure")
                .push(message.to_owned());
        })
    }

    pub fn logger(&self) -> LogFn {
        let logged = Arc::clone(&self.logged);
        logging::log_fn(move |record: &LogRecord<'_>| {
            logged
                .lock()
                .expect("Mutex poisoned - test infrastructure failure")
                .push(Logged {
                    id: record.id,
                    level: record.level,
                    detail: record.detail.to_owned(),
                });
        })
    }

    /// Config routing every sink, fatal logger included, into this capture
    pub fn config(&self) -> HandlerConfig {
        HandlerConfig::default()
            .with_logger(self.logger())
            .with_fatal_logger(self.logger())
            .with_printer(self.printer())
    }

    pub fn printed(&self) -> Vec<String> {
        self.printed
            .lock()
            .expect("Mutex poisoned - test infrastructure failure")
            .clone()
    }

    pub fn logged(&self) -> Vec<Logged> {
        self.logged
            .lock()
            .expect("Mutex poisoned - test infrastructure failure")
            .clone()
    }
}
