use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::DriverError;
use crate::scraping::driver::{BrowserSession, Locator};

/// Records every call and serves a canned location table.
#[derive(Default)]
pub struct FakeSession {
    pub rows: Vec<Vec<String>>,
    /// Element that never shows up.
    pub missing: Option<Locator>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl FakeSession {
    pub fn with_rows(rows: &[&[&str]]) -> Self {
        FakeSession {
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
            ..Default::default()
        }
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl BrowserSession for FakeSession {
    type Element = Locator;

    async fn navigate(&self, url: &str) -> Result<(), DriverError> {
        self.record(format!("navigate {url}"));
        Ok(())
    }

    async fn wait_for(&self, locator: Locator, timeout: Duration) -> Result<Locator, DriverError> {
        self.record(format!("wait {locator} {}s", timeout.as_secs()));
        if self.missing == Some(locator) {
            return Err(DriverError::Timeout { locator, timeout });
        }
        Ok(locator)
    }

    async fn click(&self, element: &Locator) -> Result<(), DriverError> {
        self.record(format!("click {element}"));
        Ok(())
    }

    async fn type_text(&self, element: &Locator, text: &str) -> Result<(), DriverError> {
        self.record(format!("type {element} {text}"));
        Ok(())
    }

    async fn select_dropdown_option(&self, element: &Locator, value: &str) -> Result<(), DriverError> {
        self.record(format!("select {element} {value}"));
        Ok(())
    }

    async fn invoke_page_function(&self, name: &str) -> Result<(), DriverError> {
        self.record(format!("invoke {name}"));
        Ok(())
    }

    async fn read_table(&self, table: &Locator) -> Result<Vec<Vec<String>>, DriverError> {
        self.record(format!("read {table}"));
        Ok(self.rows.clone())
    }

    async fn terminate(self) -> Result<(), DriverError> {
        self.record("terminate".to_string());
        Ok(())
    }
}
