//! Tests for query-string request parameters

#[cfg(test)]
mod tests {
    use flowlines::io::configuration::{DEFAULT_AUTHOR, DEFAULT_SUBTITLE, DEFAULT_TITLE};
    use flowlines::io::params::{RequestParams, decode_component, parse_seed};

    // Tests a full URL with every field
    #[test]
    fn test_full_url() {
        let params = RequestParams::from_query(
            "https://example.com/api/og?seed=1234&title=Flow+Fields&subtitle=Evenly%20spaced&author=A%26B",
        );

        assert_eq!(params.seed, 1234);
        assert_eq!(params.title, "Flow Fields");
        assert_eq!(params.subtitle, "Evenly spaced");
        assert_eq!(params.author, "A&B");
    }

    // Tests missing and empty fields fall back to defaults
    #[test]
    fn test_defaults_for_missing_fields() {
        let params = RequestParams::from_query("?title=&unused=1");

        assert_eq!(params, RequestParams::default());
        assert_eq!(params.seed, 0);
        assert_eq!(params.title, DEFAULT_TITLE);
        assert_eq!(params.subtitle, DEFAULT_SUBTITLE);
        assert_eq!(params.author, DEFAULT_AUTHOR);
        assert_eq!(RequestParams::from_query(""), RequestParams::default());
    }

    // Tests invalid seed text defaults to zero
    #[test]
    fn test_seed_parsing() {
        assert_eq!(parse_seed("42"), 42);
        assert_eq!(parse_seed(" -9 "), -9);
        assert_eq!(parse_seed("42.0"), 42);
        assert_eq!(parse_seed("1e3"), 1000);
        assert_eq!(parse_seed("abc"), 0);
        assert_eq!(parse_seed("3.7"), 0);
        assert_eq!(parse_seed("NaN"), 0);
        assert_eq!(parse_seed(""), 0);
        assert_eq!(RequestParams::from_query("seed=banana").seed, 0);
    }

    // Tests repeated keys keep their first value and fragments are ignored
    #[test]
    fn test_first_value_wins() {
        let params = RequestParams::from_query("seed=5&seed=6&author=x#author=y");
        assert_eq!(params.seed, 5);
        assert_eq!(params.author, "x");
    }

    // Tests percent decoding of multibyte and malformed escapes
    #[test]
    fn test_decode_component() {
        assert_eq!(decode_component("caf%C3%A9"), "café");
        assert_eq!(decode_component("100%"), "100%");
        assert_eq!(decode_component("%zz+%41"), "%zz A");
    }
}
