use std::io::{
    self,
    Cursor,
    Write,
};

use proc_macro2::{
    Span,
    TokenStream,
};
use quote::ToTokens;
use syn::{
    parse2,
    Error,
    Expr,
    LitStr,
    Result,
};
use tnfa_core::{
    compiler::{
        self,
        ConversionError,
    },
    ErrorKind,
    OwnedPostfix,
    PostfixPattern,
    Token,
};

fn emit_token(output: &mut dyn Write, token: &Token) -> io::Result<()> {
    match token {
        Token::Literal(value) => write!(output, "tnfa::Token::Literal({:?})", value),
        Token::Star => write!(output, "tnfa::Token::Star"),
        Token::Plus => write!(output, "tnfa::Token::Plus"),
        Token::Optional => write!(output, "tnfa::Token::Optional"),
        Token::Concat => write!(output, "tnfa::Token::Concat"),
        Token::Alternate => write!(output, "tnfa::Token::Alternate"),
    }
}

fn emit_tokens(output: &mut dyn Write, tokens: &[Token]) -> io::Result<()> {
    write!(output, "&[")?;

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            write!(output, ", ")?;
        }
        self::emit_token(output, token)?;
    }

    write!(output, "]")?;
    Ok(())
}

fn postfix_to_const_str(postfix: &dyn PostfixPattern) -> io::Result<String> {
    let mut result_buffer = Vec::<u8>::with_capacity(1024);
    {
        let mut writer = Cursor::new(&mut result_buffer);

        write!(&mut writer, "tnfa::BorrowedPostfix::new(")?;
        emit_tokens(&mut writer, postfix.tokens())?;
        write!(&mut writer, ")")?;
    }

    String::from_utf8(result_buffer).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

/// Span of the pattern characters an error points to.
///
/// Positions of class errors always refer to the original pattern. Parenthesis errors
/// refer to the class expanded pattern, which only matches the original without classes.
fn error_span(literal: &LitStr, pattern: &str, error: &ConversionError) -> Span {
    let maps_to_literal = match error.kind() {
        ErrorKind::MalformedClass(_) => true,
        ErrorKind::UnbalancedParen => !pattern.contains('['),
        ErrorKind::MalformedExpression(_) => false,
    };

    if !maps_to_literal {
        return literal.span();
    }

    /* skip the opening quote */
    let position = error.position();
    literal
        .token()
        .subspan(position.start + 1..position.end + 1)
        .unwrap_or(literal.span())
}

fn convert(pattern: &str) -> std::result::Result<OwnedPostfix, ConversionError> {
    let expanded = compiler::expand_character_classes(pattern)?;
    let postfix = compiler::infix_to_postfix(&expanded)?;

    /* reject patterns which can not be evaluated already at compile time */
    compiler::postfix_to_nfa(&postfix)?;
    Ok(postfix)
}

pub fn postfix(item: TokenStream) -> Result<TokenStream> {
    let pattern_str = parse2::<LitStr>(item)?;
    let pattern = pattern_str.value();
    let postfix = match convert(&pattern) {
        Ok(result) => result,
        Err(error) => {
            let error_span = self::error_span(&pattern_str, &pattern, &error);
            return Err(Error::new(error_span, format!("{}", error.kind())));
        }
    };

    let postfix = postfix_to_const_str(&postfix)
        .map_err(|err| Error::new(pattern_str.span(), err.to_string()))?;
    let postfix = syn::parse_str::<Expr>(&postfix)?;
    Ok(postfix.to_token_stream())
}
