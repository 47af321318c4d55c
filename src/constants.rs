pub const GITHUB_API_URL_DEFAULT: &str = "https://api.github.com";

pub const USER_AGENT: &str = "assignbot/0.1.0";
