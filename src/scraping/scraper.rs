use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::DriverError;
use crate::models::location::LocationRecord;
use crate::models::state::State;
use crate::scraping::constants::*;
use crate::scraping::driver::{BrowserSession, Locator};
use crate::scraping::extract::extract_records;

/// Drives the "individual" booking flow up to the location search results.
pub struct BmvsScraper<S> {
    session: S,
    site_url: String,
    suburb: String,
    state: State,
}

impl<S: BrowserSession> BmvsScraper<S> {
    pub fn new(session: S, config: &Config) -> Self {
        BmvsScraper {
            session,
            site_url: config.site_url.to_string(),
            suburb: config.suburb.clone(),
            state: config.state,
        }
    }

    async fn wait_for(&self, locator: Locator) -> Result<S::Element, DriverError> {
        self.session.wait_for(locator, ELEMENT_WAIT).await
    }

    /// Fills in the location search and returns the raw result table rows.
    pub async fn search_locations(&self) -> Result<Vec<Vec<String>>, DriverError> {
        info!("opening {}", self.site_url);
        self.session.navigate(&self.site_url).await?;

        let individual = self.wait_for(Locator::Id(BUTTON_INDIVIDUAL_ID)).await?;
        self.session.click(&individual).await?;

        let suburb = self.wait_for(Locator::Id(SUBURB_INPUT_ID)).await?;
        self.session.type_text(&suburb, &self.suburb).await?;

        let state = self.wait_for(Locator::Id(STATE_DROPDOWN_ID)).await?;
        self.session
            .select_dropdown_option(&state, self.state.selector())
            .await?;

        info!(
            "searching near {} in {}",
            self.suburb,
            self.state.title()
        );
        self.session.invoke_page_function(SEARCH_FUNCTION).await?;

        let table = self.wait_for(Locator::Css(LOCATION_TABLE_SELECTOR)).await?;
        let rows = self.session.read_table(&table).await?;
        info!("location table has {} rows", rows.len());

        Ok(rows)
    }

    pub async fn scrape_locations(&self) -> Result<Vec<LocationRecord>> {
        let rows = self
            .search_locations()
            .await
            .context("location search failed")?;
        let records = extract_records(&rows).context("could not read location table")?;

        if let Ok(json) = serde_json::to_string(&records) {
            debug!("extracted locations: {}", json);
        }

        Ok(records)
    }

    pub async fn quit(self) -> Result<(), DriverError> {
        self.session.terminate().await
    }
}
