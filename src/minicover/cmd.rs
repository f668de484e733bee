const REDACTED: &str = "[REDACTED]";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Plain(String),
    /// Secret value; rendered forms never contain it
    Secret(String),
}

impl Token {
    fn value(&self) -> &str {
        match self {
            Self::Plain(v) | Self::Secret(v) => v,
        }
    }

    fn render(&self) -> String {
        match self {
            Self::Plain(v) if v.contains(char::is_whitespace) => format!("\"{v}\""),
            Self::Plain(v) => v.clone(),
            Self::Secret(_) => REDACTED.to_string(),
        }
    }
}

/// Represents one minicover invocation as an ordered token list
#[derive(Debug, Clone)]
pub struct ToolCmd {
    tokens: Vec<Token>,
}

impl ToolCmd {
    pub fn new(subcommand: impl Into<String>) -> Self {
        Self {
            tokens: vec![Token::Plain(subcommand.into())],
        }
    }

    /// Appends a bare token
    pub fn push(&mut self, token: impl Into<String>) -> &mut Self {
        self.tokens.push(Token::Plain(token.into()));
        self
    }

    /// Appends a `--flag value` pair
    pub fn push_pair(&mut self, flag: &str, value: impl Into<String>) -> &mut Self {
        self.push(flag);
        self.push(value)
    }

    /// Appends a `--flag value` pair whose value is redacted when rendered
    pub fn push_secret_pair(&mut self, flag: &str, value: impl Into<String>) -> &mut Self {
        self.push(flag);
        self.tokens.push(Token::Secret(value.into()));
        self
    }

    /// The subcommand token this invocation starts with
    pub fn subcommand(&self) -> &str {
        self.tokens.first().map(Token::value).unwrap_or_default()
    }

    /// Tokens in invocation order, unredacted, for process spawning
    pub fn args(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(Token::value)
    }

    /// Renders the invocation for logging; secrets are redacted and tokens
    /// containing whitespace are quoted
    pub fn assemble(&self) -> String {
        self.tokens
            .iter()
            .map(Token::render)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subcommand_is_first_token() {
        let mut cmd = ToolCmd::new("instrument");
        cmd.push_pair("--workdir", "../");
        assert_eq!(cmd.subcommand(), "instrument");
    }

    #[test]
    fn test_args_preserve_order() {
        let mut cmd = ToolCmd::new("reset");
        cmd.push_pair("--coverage-file", "coverage.json");
        let args: Vec<_> = cmd.args().collect();
        assert_eq!(args, vec!["reset", "--coverage-file", "coverage.json"]);
    }

    #[test]
    fn test_assemble_quotes_whitespace() {
        let mut cmd = ToolCmd::new("instrument");
        cmd.push_pair("--assemblies", "my tests/**/*.dll");
        assert_eq!(
            cmd.assemble(),
            "instrument --assemblies \"my tests/**/*.dll\""
        );
    }

    #[test]
    fn test_secret_redacted_in_assemble_but_not_in_args() {
        let mut cmd = ToolCmd::new("coverallsreport");
        cmd.push_secret_pair("--repo-token", "s3cr3t");

        assert_eq!(cmd.assemble(), "coverallsreport --repo-token [REDACTED]");
        let args: Vec<_> = cmd.args().collect();
        assert_eq!(args, vec!["coverallsreport", "--repo-token", "s3cr3t"]);
    }
}
