/// Default base URL of the Thinkific public REST API
pub const DEFAULT_BASE_URL: &str = "https://api.thinkific.com/api/public/v1";
/// Default timeout in seconds for REST API requests
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
/// User agent string used in HTTP requests to identify this client to the Thinkific API
pub const USER_AGENT: &str = concat!("thinkific-client/", env!("CARGO_PKG_VERSION"));
/// Path of the enrollments resource, relative to the base URL
pub const ENROLLMENTS_PATH: &str = "enrollments";
/// Field used by `find_by` when none is given
pub const DEFAULT_QUERY_FIELD: &str = "user_id";
/// Header carrying the API key
pub const API_KEY_HEADER: &str = "X-Auth-API-Key";
/// Header carrying the school subdomain
pub const SUBDOMAIN_HEADER: &str = "X-Auth-Subdomain";
