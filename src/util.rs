/// Fixed base address all relative endpoints are resolved under.
pub const BASE_URL: &str = "https://highball.eu/dcc";

/// Join `base` and `endpoint` with exactly one `/` between them.
///
/// All leading slashes on `endpoint` collapse into the single joining
/// slash, so `"users"`, `"/users"` and `"///users"` produce the same
/// URL. Total over all string inputs: no validation, no escaping.
pub fn build_url(base: &str, endpoint: &str) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    url.push('/');
    url.push_str(endpoint.trim_start_matches('/'));
    url
}

/// Resolve `endpoint` against the fixed [`BASE_URL`].
pub fn api_url(endpoint: &str) -> String {
    build_url(BASE_URL, endpoint)
}
