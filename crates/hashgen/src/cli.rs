use clap::Parser;

/// Generate a random URL-safe token.
#[derive(Debug, Parser)]
#[clap(version, about)]
pub struct Cli {
    /// Number of random bytes to encode (defaults to 55).
    ///
    /// Kept as raw text so that non-numeric input is reported through the
    /// console logger rather than by the argument parser.
    #[clap(allow_hyphen_values = true)]
    pub byte_count: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_count_is_optional() {
        let cli = Cli::try_parse_from(["hashgen"]).unwrap();
        assert_eq!(cli.byte_count, None);
    }

    #[test]
    fn byte_count_is_kept_verbatim() {
        let cli = Cli::try_parse_from(["hashgen", "abc"]).unwrap();
        assert_eq!(cli.byte_count.as_deref(), Some("abc"));
        let cli = Cli::try_parse_from(["hashgen", "-1"]).unwrap();
        assert_eq!(cli.byte_count.as_deref(), Some("-1"));
    }

    #[test]
    fn extra_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["hashgen", "1", "2"]).is_err());
    }
}
