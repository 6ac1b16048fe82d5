/// Redact secrets from a connection URL so it can be logged.
///
/// The password segment of the authority (everything between the first `:`
/// and the last `@`) and sensitive query parameters are replaced with `***`.
pub fn redact_url(url: &str) -> String {
    let mut redacted = url.to_string();

    // Without a scheme the authority starts at the beginning of the input.
    let authority_start = url.find("://").map_or(0, |scheme_end| scheme_end + 3);
    let after_scheme = &url[authority_start..];
    let query_start = after_scheme.find('?').unwrap_or(after_scheme.len());
    let before_query = &after_scheme[..query_start];

    if let Some(at_idx) = before_query.rfind('@') {
        let credentials = &before_query[..at_idx];
        if let Some(colon_idx) = credentials.find(':') {
            let password_start = authority_start + colon_idx + 1;
            let password_end = authority_start + at_idx;
            redacted.replace_range(password_start..password_end, "***");
        }
    }

    redact_query_params(&redacted)
}

fn redact_query_params(conn: &str) -> String {
    let Some(query_start) = conn.find('?') else {
        return conn.to_string();
    };

    let (base, query) = conn.split_at(query_start + 1);
    let params: Vec<String> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if is_sensitive_key(key) => format!("{key}=***"),
            _ => pair.to_string(),
        })
        .collect();

    format!("{base}{}", params.join("&"))
}

fn is_sensitive_key(key: &str) -> bool {
    matches!(
        key.to_lowercase().as_str(),
        "password" | "pass" | "token" | "api_key" | "apikey"
    )
}
