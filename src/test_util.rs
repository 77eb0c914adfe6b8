use std::{cell::RefCell, error::Error, fmt};

use crate::{Level, Logger, Props, Record};

#[derive(Debug, Clone, Copy)]
pub(crate) struct Failed;

impl fmt::Display for Failed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("failed")
    }
}

impl Error for Failed {}

pub(crate) static FAILED: Failed = Failed;

/**
An owned copy of a record.
*/
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Recorded {
    pub level: Level,
    pub event_id: i32,
    pub error: Option<String>,
    pub template: String,
    pub args: Vec<String>,
    pub state: Vec<(String, String)>,
    pub msg: String,
}

#[derive(Default)]
pub(crate) struct Recorder {
    records: RefCell<Vec<Recorded>>,
}

impl Recorder {
    pub fn take(&self) -> Vec<Recorded> {
        self.records.take()
    }
}

impl Logger for Recorder {
    fn log(&self, record: &Record) {
        let mut state = Vec::new();
        let _ = record.state().for_each(|k, v| {
            state.push((k.to_owned(), v.to_string()));
            std::ops::ControlFlow::Continue(())
        });

        self.records.borrow_mut().push(Recorded {
            level: record.level(),
            event_id: record.event_id().id(),
            error: record.error().map(|err| err.to_string()),
            template: record.state().original_format().to_owned(),
            args: record
                .state()
                .args()
                .iter()
                .map(|arg| arg.to_string())
                .collect(),
            state,
            msg: record.msg().to_string(),
        });
    }
}
