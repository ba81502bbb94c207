use anyhow::Result;
use tracing::{error, info};

use crate::config::Config;
use crate::handlers::rank::rank;
use crate::handlers::report::render_report;
use crate::models::location::LocationRecord;
use crate::scraping::driver::BrowserSession;
use crate::scraping::scraper::BmvsScraper;

/// Runs one search and returns the locations ranked by first available slot.
///
/// The session is terminated before returning, whether or not the search
/// succeeded.
pub async fn find_earliest_slots<S: BrowserSession>(
    session: S,
    config: &Config,
) -> Result<Vec<LocationRecord>> {
    let scraper = BmvsScraper::new(session, config);
    let scraped = scraper.scrape_locations().await;

    if let Err(e) = scraper.quit().await {
        error!("Failed to quit browser session: {:?}", e);
    }

    let ranked = rank(scraped?);
    info!(
        "{} locations, {} with a slot",
        ranked.len(),
        ranked.iter().filter(|r| r.first_available().is_some()).count()
    );
    Ok(ranked)
}

/// Searches and prints the report to stdout.
pub async fn run<S: BrowserSession>(session: S, config: &Config) -> Result<()> {
    let ranked = find_earliest_slots(session, config).await?;
    print!("{}", render_report(&ranked));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scraping::constants::LOCATION_TABLE_SELECTOR;
    use crate::scraping::driver::Locator;
    use crate::scraping::fake::FakeSession;
    use pretty_assertions::assert_eq;

    fn default_config() -> Config {
        Config::from_lookup(|_| None).unwrap()
    }

    #[tokio::test]
    async fn ranks_scraped_locations() {
        let session = FakeSession::with_rows(&[
            &["", "Location", "Distance", "Address", "First Available"],
            &["1", "A", "1 km", "", "No available slot"],
            &["2", "B", "2 km", "", "22/05/2025\n09:00 AM"],
            &["3", "C", "3 km", "", "21/05/2025\n05:00 PM"],
        ]);
        let calls = session.calls.clone();

        let ranked = find_earliest_slots(session, &default_config()).await.unwrap();

        let names: Vec<_> = ranked.iter().map(|r| r.location.as_str()).collect();
        assert_eq!(names, vec!["C", "B", "A"]);
        assert_eq!(calls.lock().unwrap().last().unwrap(), "terminate");
    }

    #[tokio::test]
    async fn terminates_session_after_timeout() {
        let session = FakeSession {
            missing: Some(Locator::Css(LOCATION_TABLE_SELECTOR)),
            ..Default::default()
        };
        let calls = session.calls.clone();

        let err = find_earliest_slots(session, &default_config())
            .await
            .unwrap_err();

        assert!(format!("{err:#}").contains("timed out after 10s"));
        assert_eq!(calls.lock().unwrap().last().unwrap(), "terminate");
    }

    #[tokio::test]
    async fn terminates_session_after_bad_table() {
        let session = FakeSession::with_rows(&[&["header"], &["1", "Short"]]);
        let calls = session.calls.clone();

        let err = find_earliest_slots(session, &default_config())
            .await
            .unwrap_err();

        assert!(format!("{err:#}").contains("could not read location table"));
        assert_eq!(calls.lock().unwrap().last().unwrap(), "terminate");
    }

    #[tokio::test]
    async fn run_prints_without_error() {
        let session = FakeSession::with_rows(&[&["", "Location", "Distance", "", "First"]]);
        run(session, &default_config()).await.unwrap();
    }
}
