//! CLI Tests
//!
//! Covers argument parsing, input validation, and the JSON output wrapper.

// =============================================================================
// CLI Argument Parsing Tests
// =============================================================================

mod cli_parsing {
    use clap::Parser;
    use reelcap::cli::{validate_title, Cli};

    #[test]
    fn test_basic_lookup_args() {
        let cli = Cli::parse_from(["reelcap", "Inception", "2010"]);
        assert_eq!(cli.title, "Inception");
        assert_eq!(cli.year, 2010);
        assert!(!cli.json);
    }

    #[test]
    fn test_title_with_spaces() {
        let cli = Cli::parse_from(["reelcap", "The Dark Knight", "2008"]);
        assert_eq!(cli.title, "The Dark Knight");
        assert_eq!(cli.year, 2008);
    }

    #[test]
    fn test_json_and_quiet_flags() {
        let cli = Cli::parse_from(["reelcap", "Inception", "2010", "-j", "-q"]);
        assert!(cli.json);
        assert!(cli.quiet);
    }

    #[test]
    fn test_year_must_be_numeric() {
        assert!(Cli::try_parse_from(["reelcap", "Inception", "abcd"]).is_err());
    }

    #[test]
    fn test_both_positionals_required() {
        assert!(Cli::try_parse_from(["reelcap"]).is_err());
        assert!(Cli::try_parse_from(["reelcap", "Inception"]).is_err());
    }

    #[test]
    fn test_blank_title_fails_validation() {
        // clap accepts an empty positional string; validation catches it
        let cli = Cli::parse_from(["reelcap", "", "2010"]);
        assert!(validate_title(&cli.title).is_err());
    }
}

// =============================================================================
// JSON Output Wrapper Tests
// =============================================================================

mod json_output {
    use reelcap::cli::{ExitCode, JsonOutput};
    use reelcap::models::LookupResult;

    #[test]
    fn test_success_wrapper_carries_result() {
        let result = LookupResult {
            title: Some("Inception".to_string()),
            year: Some("2010".to_string()),
            synopsis: None,
            reviews: vec!["Great".to_string()],
        };

        let wrapped = JsonOutput::success(result);
        let json = serde_json::to_value(&wrapped).unwrap();

        assert_eq!(json["data"]["title"], "Inception");
        assert!(json["data"]["synopsis"].is_null());
        assert_eq!(json["data"]["reviews"][0], "Great");
        // exit_code 0 is omitted from output
        assert!(json.get("exit_code").is_none());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_wrapper_carries_code_and_message() {
        let wrapped = JsonOutput::<()>::error_msg("no match found", ExitCode::NotFound);
        let json = serde_json::to_value(&wrapped).unwrap();

        assert_eq!(json["error"], "no match found");
        assert_eq!(json["exit_code"], 4);
        assert!(json.get("data").is_none());
    }
}
