use std::time::Duration;

// thirtyfour (selenium) inputs
pub const BASE_URL: &str = "https://bmvs.onlineappointmentscheduling.net.au";
pub const WEBDRIVER_URL: &str = "http://localhost:9515";

pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 775;

// every "wait for element" uses the same timeout, no retries
pub const ELEMENT_WAIT: Duration = Duration::from_secs(10);
pub const ELEMENT_POLL: Duration = Duration::from_millis(250);

// HTML element selectors used in automation
pub const BUTTON_INDIVIDUAL_ID: &str = "ContentPlaceHolder1_btnInd";
pub const SUBURB_INPUT_ID: &str = "ContentPlaceHolder1_SelectLocation1_txtSuburb";
pub const STATE_DROPDOWN_ID: &str = "ContentPlaceHolder1_SelectLocation1_ddlState";

// global page function that runs the postcode search
pub const SEARCH_FUNCTION: &str = "SearchPostCode";

// HTML class selectors for scraping
pub const LOCATION_TABLE_SELECTOR: &str = ".tbl-location";

// fixed column positions in the location table
pub const LOCATION_COLUMN: usize = 1;
pub const DISTANCE_COLUMN: usize = 2;
pub const AVAILABILITY_COLUMN: usize = 4;

// text the site renders when a location has nothing bookable
pub const NO_SLOT_TEXT: &str = "No available slot";

// search defaults
pub const DEFAULT_SUBURB: &str = "2010";
pub const DEFAULT_STATE: &str = "NSW";
