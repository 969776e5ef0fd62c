//! Basic authentication with an application password.

use base64::Engine;

/// Build the `Authorization` header value for a user and application password.
///
/// Returns `"Basic " + base64("username:app_password")`. Empty inputs are
/// accepted and still produce a well-formed header.
pub fn compute_auth_header(username: &str, app_password: &str) -> String {
    let credentials = format!("{username}:{app_password}");
    let encoded = base64::engine::general_purpose::STANDARD.encode(credentials.as_bytes());
    format!("Basic {encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(header: &str) -> String {
        let encoded = header.strip_prefix("Basic ").expect("missing Basic prefix");
        let raw = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .expect("invalid base64");
        String::from_utf8(raw).unwrap()
    }

    #[test]
    fn test_known_value() {
        assert_eq!(
            compute_auth_header("admin", "abcd efgh ijkl"),
            "Basic YWRtaW46YWJjZCBlZmdoIGlqa2w="
        );
    }

    #[test]
    fn test_decodes_back_to_credentials() {
        let cases = [
            ("editor", "xxxx yyyy zzzz"),
            ("", ""),
            ("user:with:colons", "p@ss"),
            ("ユーザー", "パスワード"),
        ];
        for (user, pass) in cases {
            let header = compute_auth_header(user, pass);
            assert!(header.starts_with("Basic "));
            assert_eq!(decode(&header), format!("{user}:{pass}"));
        }
    }

    #[test]
    fn test_header_is_ascii() {
        let header = compute_auth_header("ユーザー", "パスワード");
        assert!(header.is_ascii());
    }
}
