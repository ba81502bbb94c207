use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thirtyfour::prelude::*;
use tracing::{debug, info};

use crate::error::DriverError;
use crate::scraping::constants::*;

/// How an element is found on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator {
    Id(&'static str),
    Css(&'static str),
}

impl Locator {
    fn by(&self) -> By {
        match self {
            Locator::Id(id) => By::Id(*id),
            Locator::Css(css) => By::Css(*css),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Id(id) => write!(f, "#{id}"),
            Locator::Css(css) => f.write_str(css),
        }
    }
}

/// The browser capabilities the search flow needs, and nothing more.
///
/// Script text never leaves the implementation: the flow asks for named
/// actions such as [`BrowserSession::select_dropdown_option`].
#[async_trait]
pub trait BrowserSession: Send + Sync {
    type Element: Send + Sync;

    async fn navigate(&self, url: &str) -> Result<(), DriverError>;

    /// Polls until the element is present or `timeout` elapses.
    async fn wait_for(
        &self,
        locator: Locator,
        timeout: Duration,
    ) -> Result<Self::Element, DriverError>;

    async fn click(&self, element: &Self::Element) -> Result<(), DriverError>;

    async fn type_text(&self, element: &Self::Element, text: &str) -> Result<(), DriverError>;

    /// Sets a `<select>` value and fires its `change` event.
    async fn select_dropdown_option(
        &self,
        element: &Self::Element,
        value: &str,
    ) -> Result<(), DriverError>;

    /// Calls a global function defined by the page, with no arguments.
    async fn invoke_page_function(&self, name: &str) -> Result<(), DriverError>;

    /// Text of every `td` in every `tr` of a table, header row included.
    async fn read_table(&self, table: &Self::Element) -> Result<Vec<Vec<String>>, DriverError>;

    /// Ends the browser session.
    async fn terminate(self) -> Result<(), DriverError>;
}

/// A Chrome session driven through chromedriver.
pub struct ChromeSession {
    driver: WebDriver,
}

impl ChromeSession {
    pub async fn connect(webdriver_url: &str, headless: bool) -> Result<Self, DriverError> {
        let mut caps = DesiredCapabilities::chrome();
        if headless {
            caps.set_headless()?;
        }

        // needed when chrome runs inside a container
        caps.add_arg("--no-sandbox")?;
        caps.add_arg("--disable-dev-shm-usage")?;
        caps.add_arg("--disable-gpu")?;
        caps.add_arg("--disable-extensions")?;
        caps.add_arg("--disable-notifications")?;
        caps.add_arg("--no-first-run")?;
        caps.add_arg("--mute-audio")?;

        info!(webdriver_url, headless, "starting chrome session");
        let driver = WebDriver::new(webdriver_url, caps).await?;

        driver
            .set_window_rect(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT)
            .await?;

        Ok(ChromeSession { driver })
    }

    async fn run_script(&self, script: &str, args: Vec<Value>) -> Result<(), DriverError> {
        self.driver.execute(script, Arc::from(args)).await?;
        Ok(())
    }
}

#[async_trait]
impl BrowserSession for ChromeSession {
    type Element = WebElement;

    async fn navigate(&self, url: &str) -> Result<(), DriverError> {
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn wait_for(&self, locator: Locator, timeout: Duration) -> Result<WebElement, DriverError> {
        self.driver
            .query(locator.by())
            .wait(timeout, ELEMENT_POLL)
            .first()
            .await
            .map_err(|e| {
                debug!("element {} not found: {:?}", locator, e);
                DriverError::Timeout { locator, timeout }
            })
    }

    async fn click(&self, element: &WebElement) -> Result<(), DriverError> {
        element.click().await?;
        Ok(())
    }

    async fn type_text(&self, element: &WebElement, text: &str) -> Result<(), DriverError> {
        element.send_keys(text).await?;
        Ok(())
    }

    async fn select_dropdown_option(
        &self,
        element: &WebElement,
        value: &str,
    ) -> Result<(), DriverError> {
        let js = r#"
            arguments[0].value = arguments[1];
            arguments[0].dispatchEvent(new Event('change'));
        "#;
        let args = vec![element.to_json()?, Value::String(value.to_string())];
        self.run_script(js, args).await
    }

    async fn invoke_page_function(&self, name: &str) -> Result<(), DriverError> {
        let js = r#"window[arguments[0]]();"#;
        self.run_script(js, vec![Value::String(name.to_string())])
            .await
    }

    async fn read_table(&self, table: &WebElement) -> Result<Vec<Vec<String>>, DriverError> {
        let mut rows = Vec::new();
        for row in table.find_all(By::Css("tr")).await? {
            let mut cells = Vec::new();
            for cell in row.find_all(By::Css("td")).await? {
                cells.push(cell.text().await?);
            }
            rows.push(cells);
        }
        Ok(rows)
    }

    async fn terminate(self) -> Result<(), DriverError> {
        info!("Quitting Chrome session");
        self.driver.quit().await?;
        Ok(())
    }
}
