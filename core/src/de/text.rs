use crate::{
    error::*,
    value::intermediate::{Number, Value},
};
use pest::{iterators::Pair, Parser};
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "de/text.grammar.pest"]
struct TextParser;

pub fn from_slice(content: &[u8]) -> Result<Value> {
    let content = std::str::from_utf8(content).map_err(|e| Error::Message(format!("{}", e)))?;
    from_str(content)
}

pub fn from_str(content: &str) -> Result<Value> {
    let ast = TextParser::parse(Rule::main, content)
        .map_err(|error| Error::Message(format!("{}", error)))?
        .next()
        .ok_or(Error::NoNextTokens)?;
    parse(ast)
}

fn next<'a>(pairs: &mut impl Iterator<Item = Pair<'a, Rule>>) -> Result<Pair<'a, Rule>> {
    pairs.next().ok_or(Error::NoNextTokens)
}

fn parse(ast: Pair<Rule>) -> Result<Value> {
    match ast.as_rule() {
        Rule::null => Ok(Value::Null),
        Rule::bool => match ast.as_str() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            t => Err(Error::InvalidTokens(t.to_owned())),
        },
        Rule::number => parse_number(ast.as_str(), None).map(Value::Number),
        Rule::typed_number => {
            let mut pairs = ast.into_inner();
            let number = next(&mut pairs)?.as_str();
            let kind = next(&mut pairs)?.as_str();
            parse_number(number, Some(kind)).map(Value::Number)
        }
        Rule::string => {
            let content = next(&mut ast.into_inner())?.as_str();
            unescape_str(content).map(Value::String)
        }
        Rule::sequence => {
            let list = ast.into_inner().map(parse).collect::<Result<Vec<_>>>()?;
            Ok(Value::Sequence(list))
        }
        Rule::mapping => {
            let pairs = ast
                .into_inner()
                .map(|ast| {
                    let mut pairs = ast.into_inner();
                    let key = parse(next(&mut pairs)?)?;
                    let value = parse(next(&mut pairs)?)?;
                    Ok((key, value))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Mapping(pairs))
        }
        _ => Err(Error::InvalidTokens(ast.as_str().to_owned())),
    }
}

fn parse_number(text: &str, kind: Option<&str>) -> Result<Number> {
    fn cannot_parse<E>(text: &str) -> impl FnOnce(E) -> Error + '_ {
        move |_| Error::CannotParse(text.to_owned())
    }

    let is_float = text.contains(&['.', 'e', 'E', 'N', 'i'][..]);
    let result = match kind {
        Some("u64") => text.parse().map(Number::UnsignedInteger),
        Some("i64") => text.parse().map(Number::SignedInteger),
        Some("f64") => return text.parse().map(Number::Float).map_err(cannot_parse(text)),
        Some(kind) => return Err(Error::InvalidTokens(kind.to_owned())),
        None if is_float => return text.parse().map(Number::Float).map_err(cannot_parse(text)),
        None if text.starts_with('-') => text.parse().map(Number::SignedInteger),
        None => text.parse().map(Number::UnsignedInteger),
    };
    result.map_err(cannot_parse(text))
}

fn unescape_str(content: &str) -> Result<String> {
    let invalid = || Error::CannotParse(content.to_owned());
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next().ok_or_else(invalid)? {
            'n' => result.push('\n'),
            'r' => result.push('\r'),
            't' => result.push('\t'),
            '0' => result.push('\0'),
            '\\' => result.push('\\'),
            '"' => result.push('"'),
            '\'' => result.push('\''),
            'u' => {
                if chars.next() != Some('{') {
                    return Err(invalid());
                }
                let code = chars.by_ref().take_while(|c| *c != '}').collect::<String>();
                let c = u32::from_str_radix(&code, 16)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(invalid)?;
                result.push(c);
            }
            _ => return Err(invalid()),
        }
    }
    Ok(result)
}
