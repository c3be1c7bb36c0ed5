//! Redirect targets of the deploy controller.
//!
//! Every query value that ends up in a `Location` header goes through
//! [`encode`]: UTF-8, with everything except ASCII alphanumerics and
//! `-._~` percent-encoded.

use std::borrow::Cow;
use std::str::Utf8Error;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::application::Recovery;

pub const LOGIN_PATH: &str = "/cloudfoundry/login";
pub const DEPLOY_PATH: &str = "/cloudfoundry/deploy";
pub const APP_LOG_PATH: &str = "/cloudfoundry/app-log";
pub const FLUX_SIGN_IN_PATH: &str = "/singin/flux";

/// RFC 3986 unreserved characters stay literal.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes one query value.
pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Inverse of [`encode`].
pub fn decode(value: &str) -> Result<String, Utf8Error> {
    percent_decode_str(value).decode_utf8().map(Cow::into_owned)
}

/// Login page showing `message`.
pub fn login_with_error(message: &str) -> String {
    format!("{}?error={}", LOGIN_PATH, encode(message))
}

/// App-log page of a freshly pushed project.
pub fn app_log(space: &str, project: &str) -> String {
    format!(
        "{}?space={}&project={}",
        APP_LOG_PATH,
        encode(space),
        encode(project)
    )
}

/// Where a failed request sends the user.
pub fn recovery_location(recovery: &Recovery) -> String {
    match recovery {
        Recovery::Login => LOGIN_PATH.to_string(),
        Recovery::MessagingSignIn => FLUX_SIGN_IN_PATH.to_string(),
        Recovery::LoginWithMessage(message) => login_with_error(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn encodes_reserved_characters() {
        assert_eq!(encode("org1/space1"), "org1%2Fspace1");
        assert_eq!(encode("a b&c=d?"), "a%20b%26c%3Dd%3F");
        assert_eq!(encode("keep-._~"), "keep-._~");
    }

    #[test]
    fn encodes_utf8_bytewise() {
        assert_eq!(encode("é"), "%C3%A9");
    }

    #[test]
    fn app_log_location_encodes_both_values() {
        assert_eq!(
            app_log("org1/space1", "app1"),
            "/cloudfoundry/app-log?space=org1%2Fspace1&project=app1"
        );
    }

    #[test]
    fn recovery_locations() {
        assert_eq!(recovery_location(&Recovery::Login), "/cloudfoundry/login");
        assert_eq!(recovery_location(&Recovery::MessagingSignIn), "/singin/flux");
        assert_eq!(
            recovery_location(&Recovery::LoginWithMessage("Bad space: x/y".into())),
            "/cloudfoundry/login?error=Bad%20space%3A%20x%2Fy"
        );
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(message in any::<String>()) {
            prop_assert_eq!(decode(&encode(&message)).unwrap(), message);
        }

        #[test]
        fn encoded_values_never_contain_query_delimiters(message in any::<String>()) {
            let encoded = encode(&message);
            prop_assert!(!encoded.contains(|c: char| matches!(c, '&' | '=' | '?' | '#' | ' ' | '/')));
        }
    }
}
