#![allow(dead_code)]

use serde_json::{json, Value};

/// A fully populated request environment, as an Apache + mod_php server
/// would expose it for `GET https://example.com/index.php/extra?q=1`.
pub fn sample_request() -> Vec<(&'static str, Value)> {
    vec![
        ("PHP_SELF", json!("/index.php/extra")),
        ("argv", json!(["q=1"])),
        ("argc", json!(1)),
        ("GATEWAY_INTERFACE", json!("CGI/1.1")),
        ("SERVER_ADDR", json!("10.0.0.2")),
        ("SERVER_NAME", json!("example.com")),
        ("SERVER_SOFTWARE", json!("Apache/2.4.58")),
        ("SERVER_PROTOCOL", json!("HTTP/1.1")),
        ("REQUEST_METHOD", json!("GET")),
        ("REQUEST_TIME", json!(1_700_000_000)),
        ("REQUEST_TIME_FLOAT", json!(1_700_000_000.25)),
        ("QUERY_STRING", json!("q=1")),
        ("DOCUMENT_ROOT", json!("/var/www/html")),
        ("HTTP_ACCEPT", json!("text/html")),
        ("HTTP_ACCEPT_CHARSET", json!("utf-8")),
        ("HTTP_ACCEPT_ENCODING", json!("gzip, br")),
        ("HTTP_ACCEPT_LANGUAGE", json!("en-US,en;q=0.9")),
        ("HTTP_CONNECTION", json!("keep-alive")),
        ("HTTP_HOST", json!("example.com")),
        ("HTTP_REFERER", json!("https://example.com/")),
        ("HTTP_USER_AGENT", json!("curl/8.5.0")),
        ("HTTPS", json!("on")),
        ("REMOTE_ADDR", json!("203.0.113.7")),
        ("REMOTE_HOST", json!("client.example.net")),
        ("REMOTE_PORT", json!("51234")),
        ("REMOTE_USER", json!("alice")),
        ("REDIRECT_REMOTE_USER", json!("alice")),
        ("SCRIPT_FILENAME", json!("/var/www/html/index.php")),
        ("SERVER_ADMIN", json!("webmaster@example.com")),
        ("SERVER_PORT", json!("443")),
        ("SERVER_SIGNATURE", json!("")),
        ("PATH_TRANSLATED", json!("/var/www/html/extra")),
        ("SCRIPT_NAME", json!("/index.php")),
        ("REQUEST_URI", json!("/index.php/extra?q=1")),
        ("PHP_AUTH_DIGEST", json!("username=\"alice\", realm=\"site\"")),
        ("PHP_AUTH_USER", json!("alice")),
        ("PHP_AUTH_PW", json!("s3cret")),
        ("AUTH_TYPE", json!("Basic")),
        ("PATH_INFO", json!("/extra")),
        ("ORIG_PATH_INFO", json!("/extra")),
    ]
}

/// Write `content` to a temporary file with the given extension.
pub fn temp_fixture(content: &str, ext: &str) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::Builder::new()
        .prefix("serverenv_fixture_")
        .suffix(&format!(".{ext}"))
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
