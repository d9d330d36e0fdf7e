use regex::Regex;

pub const CLUBHOUSE_API_URL: &str = "https://api.clubhouse.io/api/v2";
pub const CONFIG_FILE: &str = ".clubhouse-cli-config.json";

pub const API_TOKEN_ENV: &str = "CLUBHOUSE_API_TOKEN";

// Labels matching this are sprints; the sprint fetcher drops everything else.
pub const SPRINT_NAME_PATTERN: &str = r"(?i)^sprint ending";

lazy_static::lazy_static! {
    pub static ref SPRINT_NAME_RE: Regex =
        Regex::new(SPRINT_NAME_PATTERN).expect("sprint name pattern must compile");
}
