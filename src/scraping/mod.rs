pub mod constants;
pub mod driver;
pub mod extract;
#[cfg(test)]
pub mod fake;
pub mod scraper;
