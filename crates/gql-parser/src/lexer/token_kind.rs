/// The closed set of tags a [`Token`](crate::Token) can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Whitespace,
    Comment,
    Bang,
    Dollar,
    Amp,
    Spread,
    Comma,
    Colon,
    Eq,
    At,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LCurly,
    RCurly,
    Pipe,
    Eof,
    Name,
    StringValue,
    Int,
    Float,
}

impl TokenKind {
    /// Whitespace, comments and commas are lexed but invisible to the
    /// grammar.
    pub(crate) fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::Comma
        )
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Comment => "COMMENT",
            TokenKind::Bang => "BANG",
            TokenKind::Dollar => "DOLLAR",
            TokenKind::Amp => "AMP",
            TokenKind::Spread => "SPREAD",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Eq => "EQ",
            TokenKind::At => "AT",
            TokenKind::LParen => "L_PAREN",
            TokenKind::RParen => "R_PAREN",
            TokenKind::LBracket => "L_BRACKET",
            TokenKind::RBracket => "R_BRACKET",
            TokenKind::LCurly => "L_CURLY",
            TokenKind::RCurly => "R_CURLY",
            TokenKind::Pipe => "PIPE",
            TokenKind::Eof => "EOF",
            TokenKind::Name => "NAME",
            TokenKind::StringValue => "STRING_VALUE",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
