use urlencoding::encode;

pub const DEFAULT_APP_REDIRECT_URI: &str = "muscutracker://auth/callback";

/// Build the deep link that hands an authorization code to the mobile app.
///
/// The code is appended as the `code` query parameter of `base`. Unless
/// `encode_code` is set it is forwarded exactly as received.
pub fn app_redirect_url(base: &str, code: &str, encode_code: bool) -> String {
    let separator = match base.contains('?') {
        true if base.ends_with('?') || base.ends_with('&') => "",
        true => "&",
        false => "?",
    };

    if encode_code {
        format!("{base}{separator}code={}", encode(code))
    } else {
        format!("{base}{separator}code={code}")
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn it_appends_the_code() {
        let url = app_redirect_url(DEFAULT_APP_REDIRECT_URI, "abc123", false);
        assert_eq!(url, "muscutracker://auth/callback?code=abc123");
    }

    #[test]
    fn it_forwards_the_code_verbatim_by_default() {
        let url = app_redirect_url(DEFAULT_APP_REDIRECT_URI, "a b&c=d", false);
        assert_eq!(url, "muscutracker://auth/callback?code=a b&c=d");
    }

    #[test]
    fn it_percent_encodes_when_asked() {
        let url = app_redirect_url(DEFAULT_APP_REDIRECT_URI, "a b&c=d", true);
        assert_eq!(url, "muscutracker://auth/callback?code=a%20b%26c%3Dd");
    }

    #[test]
    fn encoding_leaves_provider_codes_untouched() {
        let code = "3f1c9e0b7a5d4c2e8f6a1b0c9d8e7f6a5b4c3d2e";
        assert_eq!(
            app_redirect_url(DEFAULT_APP_REDIRECT_URI, code, true),
            app_redirect_url(DEFAULT_APP_REDIRECT_URI, code, false)
        );
    }

    #[test]
    fn it_extends_an_existing_query() {
        let url = app_redirect_url("muscutracker://auth/callback?provider=strava", "xyz", false);
        assert_eq!(url, "muscutracker://auth/callback?provider=strava&code=xyz");
    }

    #[test]
    fn it_does_not_double_separators() {
        assert_eq!(
            app_redirect_url("muscutracker://auth/callback?", "xyz", false),
            "muscutracker://auth/callback?code=xyz"
        );
        assert_eq!(
            app_redirect_url("muscutracker://auth/callback?a=1&", "xyz", false),
            "muscutracker://auth/callback?a=1&code=xyz"
        );
    }
}
