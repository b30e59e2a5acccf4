use crate::config::DEFAULT_TOKEN_ENV;

/// HTTP failures surface as "<what> failed: <status> - <body>".
fn http_status(msg: &str, code: u16) -> bool {
    msg.contains(&format!("failed: {code} "))
}

#[must_use]
pub fn get_suggestions(msg: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let msg_lower = msg.to_lowercase();

    if msg_lower.contains("permission denied (os error")
        || msg_lower.contains("read-only file system")
    {
        suggestions.push("Check that the data file and its folder are writable".to_string());
    }

    if msg_lower.contains("no space left on device") {
        suggestions.push("Free up some disk space and try again".to_string());
    }

    if msg_lower.contains("no access token") {
        suggestions.push(format!(
            "Export {DEFAULT_TOKEN_ENV} or set storage.token_command in config.toml"
        ));
    }

    if http_status(&msg_lower, 401) {
        suggestions.push("The access token expired or is invalid: refresh it".to_string());
    }

    if http_status(&msg_lower, 403) {
        suggestions
            .push("Share the spreadsheet with the account behind the access token".to_string());
    }

    if http_status(&msg_lower, 404)
        || (http_status(&msg_lower, 400) && msg_lower.contains("unable to parse range"))
    {
        suggestions
            .push("Check storage.spreadsheet_id and storage.sheet in config.toml".to_string());
    }

    if msg_lower.contains("error sending request") {
        suggestions.push("Check your network connection".to_string());
    }

    if msg_lower.contains("not on the current trip") {
        suggestions.push("Generate a fresh trip from the New Trip tab".to_string());
    }

    suggestions
}
