//! Recursive-descent parser for the scene description format
//!
//!     One function per nonterminal, single-token lookahead (LL(1)). Each
//!     function consumes exactly the tokens its production covers and returns
//!     an owned subtree; the call stack is the only parser state.
//!
//! Recovery
//!
//!     Errors are recorded in the reporter, never thrown. Recovery happens at
//!     two levels:
//!
//!         - Declaration level: after a failed declaration the parser skips
//!           tokens until the next declaration keyword or end of input, so
//!           sibling declarations still parse (panic-mode recovery).
//!         - Block level: after a failed property the parser skips to the
//!           next ',' inside the block, or stops before '}' or a declaration
//!           keyword, so sibling properties still parse. A declaration
//!           keyword inside a block is taken as a missing '}' and closes the
//!           block rather than being swallowed.
//!
//!     Lexical errors are recorded exactly once, when the offending token is
//!     pulled from the lexer. The grammar functions treat error tokens as
//!     already reported: at a value position they become the Invalid
//!     placeholder without a second error.

use crate::scene::ast::diagnostics::ErrorReporter;
use crate::scene::ast::elements::{
    CameraDecl, Declaration, LightDecl, MaterialDecl, ObjectDecl, Property, SceneDecl, ShapeKind,
    TransformDecl, Value, ValueShape,
};
use crate::scene::ast::error::{SyntaxError, SyntaxErrorKind};
use crate::scene::ast::range::Range;
use crate::scene::lexing::Lexer;
use crate::scene::parsing::{grammar, ParseOutcome};
use crate::scene::token::{Token, TokenKind};

/// Recursive-descent parser over one source text.
///
/// A Parser is created per invocation, owns its lexer and reporter, and is
/// consumed by [Parser::parse]. No state survives the call.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    current: Token,
    reporter: ErrorReporter,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer::new(source);
        let mut reporter = ErrorReporter::new();
        let current = Self::pull(&mut lexer, &mut reporter);
        Self {
            lexer,
            current,
            reporter,
        }
    }

    /// Parse the whole source: `scene := declaration* EOF`
    pub fn parse(mut self) -> ParseOutcome {
        let mut declarations: Vec<Declaration> = Vec::new();

        while !self.at(TokenKind::Eof) {
            match self.parse_declaration() {
                Some(declaration) => declarations.push(declaration),
                None => self.synchronize(),
            }
        }

        let location = match (declarations.first(), declarations.last()) {
            (Some(first), Some(last)) => first.location().merge(last.location()),
            _ => Range::default(),
        };

        ParseOutcome {
            scene: SceneDecl::new(declarations).at(location),
            errors: self.reporter.into_errors(),
        }
    }

    // --- declarations -----------------------------------------------------

    fn parse_declaration(&mut self) -> Option<Declaration> {
        match self.current.kind {
            TokenKind::Camera => self.parse_camera().map(Declaration::Camera),
            TokenKind::Light => self.parse_light().map(Declaration::Light),
            TokenKind::Sphere => self.parse_object(ShapeKind::Sphere).map(Declaration::Object),
            TokenKind::Plane => self.parse_object(ShapeKind::Plane).map(Declaration::Object),
            TokenKind::Triangle => self
                .parse_object(ShapeKind::Triangle)
                .map(Declaration::Object),
            TokenKind::Material => self.parse_material().map(Declaration::Material),
            TokenKind::Transform => self.parse_transform().map(Declaration::Transform),
            // lexical errors were already reported when the token was pulled
            TokenKind::Error | TokenKind::MalformedNumber => None,
            TokenKind::Identifier => {
                self.error_at_current(
                    SyntaxErrorKind::Syntax,
                    format!("unknown declaration '{}'", self.current.lexeme),
                );
                None
            }
            _ => {
                self.error_at_current(
                    SyntaxErrorKind::Syntax,
                    format!("expected a declaration, found {}", self.current.kind),
                );
                None
            }
        }
    }

    fn parse_camera(&mut self) -> Option<CameraDecl> {
        let keyword = self.advance();
        let (properties, end) = self.parse_block()?;
        Some(CameraDecl::new(properties).at(keyword.location.merge(&end)))
    }

    fn parse_light(&mut self) -> Option<LightDecl> {
        let keyword = self.advance();
        let (properties, end) = self.parse_block()?;
        Some(LightDecl::new(properties).at(keyword.location.merge(&end)))
    }

    fn parse_object(&mut self, shape: ShapeKind) -> Option<ObjectDecl> {
        let keyword = self.advance();
        let name = self.parse_optional_name();
        let (properties, end) = self.parse_block()?;
        Some(ObjectDecl::new(shape, name, properties).at(keyword.location.merge(&end)))
    }

    fn parse_material(&mut self) -> Option<MaterialDecl> {
        let keyword = self.advance();
        if !self.at(TokenKind::Identifier) {
            self.error_at_current(
                SyntaxErrorKind::Syntax,
                format!("expected a material name, found {}", self.current.kind),
            );
            return None;
        }
        let name = self.advance();
        let (properties, end) = self.parse_block()?;
        Some(MaterialDecl::new(name.lexeme, properties).at(keyword.location.merge(&end)))
    }

    fn parse_transform(&mut self) -> Option<TransformDecl> {
        let keyword = self.advance();
        let name = self.parse_optional_name();
        let (properties, end) = self.parse_block()?;
        Some(TransformDecl::new(name, properties).at(keyword.location.merge(&end)))
    }

    fn parse_optional_name(&mut self) -> Option<String> {
        if self.at(TokenKind::Identifier) {
            Some(self.advance().lexeme)
        } else {
            None
        }
    }

    // --- property blocks --------------------------------------------------

    /// `"{" property* "}"`; returns the properties and the end of the block.
    ///
    /// Returns None only when the opening brace is missing. Errors inside the
    /// block recover locally and the block is still produced.
    fn parse_block(&mut self) -> Option<(Vec<Property>, Range)> {
        if !self.at(TokenKind::OpenBrace) {
            self.error_at_current(
                SyntaxErrorKind::Syntax,
                format!("expected '{{', found {}", self.current.kind),
            );
            return None;
        }
        self.advance();

        let mut properties = Vec::new();
        loop {
            match self.current.kind {
                TokenKind::CloseBrace => {
                    let close = self.advance();
                    return Some((properties, close.location));
                }
                TokenKind::Eof => {
                    self.error_at_current(
                        SyntaxErrorKind::Syntax,
                        "unterminated block, expected '}'",
                    );
                    return Some((properties, self.current.location.clone()));
                }
                kind if grammar::starts_declaration(kind) => {
                    // missing '}': close the block, let the caller parse the
                    // next declaration
                    self.error_at_current(
                        SyntaxErrorKind::Syntax,
                        "expected '}' before the next declaration",
                    );
                    return Some((properties, self.current.location.clone()));
                }
                TokenKind::Identifier => match self.parse_property() {
                    Some(property) => properties.push(property),
                    None => self.recover_in_block(),
                },
                TokenKind::Comma => {
                    self.error_at_current(
                        SyntaxErrorKind::Syntax,
                        "expected a property before ','",
                    );
                    self.advance();
                }
                TokenKind::Error | TokenKind::MalformedNumber => {
                    // already reported when pulled
                    self.advance();
                }
                _ => {
                    self.error_at_current(
                        SyntaxErrorKind::Syntax,
                        format!("expected a property, found {}", self.current.kind),
                    );
                    self.recover_in_block();
                }
            }
        }
    }

    /// `property := identifier "=" value ","?`
    fn parse_property(&mut self) -> Option<Property> {
        let name = self.advance();

        if !self.at(TokenKind::Equals) {
            self.error_at_current(
                SyntaxErrorKind::Syntax,
                format!("expected '=' after property name '{}'", name.lexeme),
            );
            return None;
        }
        self.advance();

        let (value, value_end) = self.parse_value()?;

        // lenient grammar: one optional comma after each property
        if self.at(TokenKind::Comma) {
            self.advance();
        }

        let value = self.check_shape(&name, value);
        let location = name.location.merge(&value_end);
        Some(Property::new(name.lexeme, value).at(location))
    }

    /// `value := number | vector3 | string | identifier`
    fn parse_value(&mut self) -> Option<(Value, Range)> {
        match self.current.kind {
            TokenKind::Number => {
                let token = self.advance();
                let value = self.number_value(&token);
                Some((Value::Number(value), token.location))
            }
            TokenKind::OpenParen => self.parse_vector3(),
            TokenKind::StringLit => {
                let token = self.advance();
                // the lexeme keeps its quotes; the value is the inner text,
                // verbatim (backslash-quote passes through unprocessed)
                let inner = token.lexeme[1..token.lexeme.len() - 1].to_string();
                Some((Value::Str(inner), token.location))
            }
            TokenKind::Identifier => {
                let token = self.advance();
                Some((Value::Reference(token.lexeme), token.location))
            }
            TokenKind::Error | TokenKind::MalformedNumber => {
                // lexical error already recorded; keep the property with a
                // placeholder value
                let token = self.advance();
                Some((Value::Invalid, token.location))
            }
            _ => {
                self.error_at_current(
                    SyntaxErrorKind::Syntax,
                    format!("expected a value, found {}", self.current.kind),
                );
                None
            }
        }
    }

    /// `vector3 := "(" number "," number "," number ")"`
    fn parse_vector3(&mut self) -> Option<(Value, Range)> {
        let open = self.advance();
        let x = self.vector_component()?;
        self.expect(TokenKind::Comma, "expected ',' between vector components")?;
        let y = self.vector_component()?;
        self.expect(TokenKind::Comma, "expected ',' between vector components")?;
        let z = self.vector_component()?;
        let close = self.expect(TokenKind::CloseParen, "expected ')' to close the vector")?;
        Some((Value::Vector3([x, y, z]), open.location.merge(&close.location)))
    }

    fn vector_component(&mut self) -> Option<f64> {
        match self.current.kind {
            TokenKind::Number => {
                let token = self.advance();
                Some(self.number_value(&token))
            }
            TokenKind::Error | TokenKind::MalformedNumber => {
                // already reported; use a sentinel component
                self.advance();
                Some(0.0)
            }
            _ => {
                self.error_at_current(
                    SyntaxErrorKind::Syntax,
                    format!("expected a number in vector, found {}", self.current.kind),
                );
                None
            }
        }
    }

    /// Convert a number token, reporting out-of-range literals.
    ///
    /// The token text always satisfies the number pattern, so conversion
    /// cannot fail syntactically; overflow surfaces as an infinite value and
    /// is reported against the literal's position. The node keeps the
    /// best-effort value either way.
    fn number_value(&mut self, token: &Token) -> f64 {
        let value = match token.lexeme.parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                self.reporter.report(SyntaxError::new(
                    SyntaxErrorKind::Lexical,
                    format!("malformed number literal '{}'", token.lexeme),
                    token.lexeme.clone(),
                    token.location.clone(),
                ));
                return 0.0;
            }
        };
        if value.is_infinite() {
            self.reporter.report(SyntaxError::new(
                SyntaxErrorKind::ValueRange,
                format!("number literal '{}' is out of range", token.lexeme),
                token.lexeme.clone(),
                token.location.clone(),
            ));
        }
        value
    }

    /// Enforce the property shape table on a parsed value
    fn check_shape(&mut self, name: &Token, value: Value) -> Value {
        let Some(expected) = grammar::expected_shape(&name.lexeme) else {
            return value;
        };
        match value.shape() {
            // references are resolved downstream and satisfy any shape
            Some(actual) if actual != expected && actual != ValueShape::Reference => {
                self.reporter.report(SyntaxError::new(
                    SyntaxErrorKind::ValueShape,
                    format!(
                        "property '{}' expects a {} value, found a {} value",
                        name.lexeme, expected, actual
                    ),
                    name.lexeme.clone(),
                    name.location.clone(),
                ));
                Value::Invalid
            }
            _ => value,
        }
    }

    // --- recovery ---------------------------------------------------------

    /// Panic-mode recovery: skip to the next declaration keyword or EOF
    fn synchronize(&mut self) {
        self.advance();
        while !self.at(TokenKind::Eof) && !grammar::starts_declaration(self.current.kind) {
            self.advance();
        }
    }

    /// Block-local recovery: skip to the next ',' (consumed), or stop before
    /// '}', a declaration keyword, or EOF
    fn recover_in_block(&mut self) {
        loop {
            match self.current.kind {
                TokenKind::Comma => {
                    self.advance();
                    return;
                }
                TokenKind::CloseBrace | TokenKind::Eof => return,
                kind if grammar::starts_declaration(kind) => return,
                _ => {
                    self.advance();
                }
            }
        }
    }

    // --- token plumbing ---------------------------------------------------

    /// Pull one token, recording lexical errors exactly once
    fn pull(lexer: &mut Lexer<'src>, reporter: &mut ErrorReporter) -> Token {
        let token = lexer.next_token();
        match token.kind {
            TokenKind::Error => reporter.report(SyntaxError::new(
                SyntaxErrorKind::Lexical,
                format!("unrecognized character '{}'", token.lexeme),
                token.lexeme.clone(),
                token.location.clone(),
            )),
            TokenKind::MalformedNumber => reporter.report(SyntaxError::new(
                SyntaxErrorKind::Lexical,
                format!("malformed number literal '{}'", token.lexeme),
                token.lexeme.clone(),
                token.location.clone(),
            )),
            _ => {}
        }
        token
    }

    /// Consume the current token and return it, advancing the lookahead
    fn advance(&mut self) -> Token {
        let next = Self::pull(&mut self.lexer, &mut self.reporter);
        std::mem::replace(&mut self.current, next)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    fn expect(&mut self, kind: TokenKind, message: &str) -> Option<Token> {
        if self.at(kind) {
            Some(self.advance())
        } else {
            self.error_at_current(
                SyntaxErrorKind::Syntax,
                format!("{}, found {}", message, self.current.kind),
            );
            None
        }
    }

    fn error_at_current(&mut self, kind: SyntaxErrorKind, message: impl Into<String>) {
        self.reporter.report(SyntaxError::new(
            kind,
            message,
            self.current.lexeme.clone(),
            self.current.location.clone(),
        ));
    }
}
