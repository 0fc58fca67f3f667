//! Build-time validation rules
//!
//! Builders call these helpers in a fixed order: required elements, choice
//! elements, reference targets, then value-or-children on the finished node.
//! The lexical checks for primitive values live here as well.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::ModelConfig;
use crate::error::{Error, Result};
use crate::node::Node;
use crate::resource_types::is_resource_type;
use crate::types::{ChoiceType, DataType, Reference};

pub const MAX_STRING_LENGTH: usize = 1_048_576;
pub const MIN_STRING_LENGTH: usize = 1;
pub const MAX_ID_LENGTH: usize = 64;

/// Fails if a required single-valued element is absent
pub fn require_non_null<T>(value: Option<T>, element: &'static str) -> Result<T> {
    value.ok_or_else(|| {
        tracing::debug!(element, "rejecting build: missing required element");
        Error::MissingElement(element)
    })
}

/// Fails if a required repeating element has no items
pub fn require_non_empty<T>(values: Vec<T>, element: &'static str) -> Result<Vec<T>> {
    if values.is_empty() {
        tracing::debug!(element, "rejecting build: required list is empty");
        return Err(Error::MissingElement(element));
    }
    Ok(values)
}

/// Narrows an open [`DataType`] to the closed type set of a choice element
pub fn choice_element<C: ChoiceType>(value: Option<DataType>, element: &'static str) -> Result<Option<C>> {
    value
        .map(|value| {
            let found = value.type_name();
            C::from_data_type(value).map_err(|_| {
                tracing::debug!(element, found, "rejecting build: invalid choice type");
                Error::InvalidChoiceType {
                    element,
                    found,
                    allowed: C::ALLOWED,
                }
            })
        })
        .transpose()
}

pub fn require_choice_element<C: ChoiceType>(value: Option<DataType>, element: &'static str) -> Result<C> {
    let value = require_non_null(value, element)?;
    let found = value.type_name();
    C::from_data_type(value).map_err(|_| {
        tracing::debug!(element, found, "rejecting build: invalid choice type");
        Error::InvalidChoiceType {
            element,
            found,
            allowed: C::ALLOWED,
        }
    })
}

/// ele-1: every node carries a value or at least one child
pub fn require_value_or_children(node: &dyn Node) -> Result<()> {
    if node.has_value() || node.has_children() {
        return Ok(());
    }
    tracing::debug!(type_name = node.type_name(), "rejecting build: no value and no children");
    Err(Error::EmptyElement(node.type_name()))
}

/// Checks the resource type named by a reference against the allowed targets.
///
/// Local (`#id`) references and absolute references with a URI scheme are not
/// inspected. A literal reference must name a known resource type; an explicit
/// `Reference.type` must be a known resource type, be allowed, and agree with
/// the literal reference.
pub fn check_reference_type(
    reference: Option<&Reference>,
    element: &'static str,
    allowed: &[&str],
    config: &ModelConfig,
) -> Result<()> {
    let Some(reference) = reference else {
        return Ok(());
    };
    if !config.check_reference_types {
        return Ok(());
    }

    let literal = reference
        .reference()
        .and_then(|r| r.value())
        .map(String::as_str);

    let mut resource_type = None;
    if let Some(literal) = literal {
        if !literal.starts_with('#') && !has_scheme(literal) {
            let found = match literal.find('?') {
                Some(index) => Some(&literal[..index]),
                None => reference_pattern()
                    .captures(literal)
                    .and_then(|captures| captures.get(1))
                    .map(|m| m.as_str()),
            };
            let Some(found) = found else {
                return Err(invalid_reference(
                    element,
                    format!("resource type not found in reference value: '{}'", literal),
                ));
            };
            if !is_resource_type(found) {
                return Err(invalid_reference(
                    element,
                    format!(
                        "resource type found in reference value: '{}' must be a valid resource type name",
                        literal
                    ),
                ));
            }
            if !allowed.contains(&found) {
                return Err(invalid_reference(
                    element,
                    format!(
                        "resource type found in reference value: '{}' must be one of: {:?}",
                        literal, allowed
                    ),
                ));
            }
            resource_type = Some(found);
        }
    }

    if let Some(reference_type) = reference.type_().and_then(|t| t.value()) {
        let reference_type = reference_type.as_str();
        if !is_resource_type(reference_type) {
            return Err(invalid_reference(
                element,
                format!(
                    "Reference.type: '{}' must be a valid resource type name",
                    reference_type
                ),
            ));
        }
        if !allowed.contains(&reference_type) {
            return Err(invalid_reference(
                element,
                format!("Reference.type: '{}' must be one of: {:?}", reference_type, allowed),
            ));
        }
        if let Some(resource_type) = resource_type {
            if resource_type != reference_type {
                return Err(invalid_reference(
                    element,
                    format!(
                        "resource type found in reference value: '{}' does not match Reference.type: {}",
                        resource_type, reference_type
                    ),
                ));
            }
        }
    }

    Ok(())
}

pub fn check_reference_types(
    references: &[Reference],
    element: &'static str,
    allowed: &[&str],
    config: &ModelConfig,
) -> Result<()> {
    references
        .iter()
        .try_for_each(|reference| check_reference_type(Some(reference), element, allowed, config))
}

fn invalid_reference(element: &'static str, message: String) -> Error {
    tracing::debug!(element, %message, "rejecting build: invalid reference");
    Error::InvalidReference { element, message }
}

fn has_scheme(literal: &str) -> bool {
    match literal.find(':') {
        Some(index) => index > 0 && literal.len() > index + 1,
        None => false,
    }
}

fn reference_pattern() -> &'static Regex {
    static REFERENCE_RE: OnceLock<Regex> = OnceLock::new();
    REFERENCE_RE.get_or_init(|| {
        Regex::new(
            r"^(?:[A-Za-z0-9\-\.:%$]*/)*([A-Z][A-Za-z]+)/[A-Za-z0-9\-\.]{1,64}(?:/_history/[A-Za-z0-9\-\.]{1,64})?$",
        )
        .expect("reference regex must compile")
    })
}

// ============================================================================
// Lexical checks for primitive values
// ============================================================================

/// FHIR `string`: at least one non-whitespace character, only space, tab, CR
/// and LF as whitespace, bounded length.
pub fn check_string(value: &str, config: &ModelConfig) -> Result<()> {
    check_max_length("string", value)?;
    let mut count = 0;
    for ch in value.chars() {
        if ch.is_whitespace() {
            if !matches!(ch, ' ' | '\t' | '\r' | '\n') {
                return Err(Error::invalid_value(
                    "string",
                    format!("illegal whitespace character U+{:04X}", ch as u32),
                ));
            }
        } else {
            check_control_char("string", ch, config)?;
            count += 1;
        }
    }
    if count < MIN_STRING_LENGTH {
        return Err(Error::invalid_value(
            "string",
            format!(
                "trimmed length: {} is less than minimum required length: {}",
                count, MIN_STRING_LENGTH
            ),
        ));
    }
    Ok(())
}

/// FHIR `code`: `[^\s]+(\s[^\s]+)*`
pub fn check_code(value: &str, config: &ModelConfig) -> Result<()> {
    let first = value.chars().next();
    if first.map_or(true, char::is_whitespace) {
        return Err(Error::invalid_value(
            "code",
            format!("'{}' must begin with a non-whitespace character", value),
        ));
    }
    if value.chars().last().is_some_and(char::is_whitespace) {
        return Err(Error::invalid_value(
            "code",
            format!("'{}' must end with a non-whitespace character", value),
        ));
    }
    let mut previous_is_space = false;
    for ch in value.chars() {
        if ch.is_whitespace() {
            if ch != ' ' {
                return Err(Error::invalid_value(
                    "code",
                    format!("'{}' must not contain whitespace other than a single space", value),
                ));
            }
            if previous_is_space {
                return Err(Error::invalid_value(
                    "code",
                    format!("'{}' must not contain consecutive spaces", value),
                ));
            }
            previous_is_space = true;
        } else {
            check_control_char("code", ch, config)?;
            previous_is_space = false;
        }
    }
    Ok(())
}

/// FHIR `id`: `[A-Za-z0-9\-\.]{1,64}`
pub fn check_id(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::invalid_value("id", "must not be empty"));
    }
    if value.len() > MAX_ID_LENGTH {
        return Err(Error::invalid_value(
            "id",
            format!(
                "length: {} is greater than maximum allowed length: {}",
                value.len(),
                MAX_ID_LENGTH
            ),
        ));
    }
    if let Some(ch) = value
        .chars()
        .find(|ch| !(ch.is_ascii_alphanumeric() || *ch == '-' || *ch == '.'))
    {
        return Err(Error::invalid_value(
            "id",
            format!("'{}' contains invalid character '{}'", value, ch),
        ));
    }
    Ok(())
}

/// FHIR `uri` (and `url`, `canonical`): `\S*`
pub fn check_uri(value: &str, config: &ModelConfig) -> Result<()> {
    check_max_length("uri", value)?;
    for ch in value.chars() {
        if ch.is_whitespace() {
            return Err(Error::invalid_value(
                "uri",
                format!("'{}' must not contain whitespace", value),
            ));
        }
        check_control_char("uri", ch, config)?;
    }
    Ok(())
}

pub fn check_date_time(value: &str) -> Result<()> {
    static DATE_TIME_RE: OnceLock<Regex> = OnceLock::new();
    let re = DATE_TIME_RE.get_or_init(|| {
        Regex::new(
            r"^([0-9]([0-9]([0-9][1-9]|[1-9]0)|[1-9]00)|[1-9]000)(-(0[1-9]|1[0-2])(-(0[1-9]|[1-2][0-9]|3[0-1])(T([01][0-9]|2[0-3]):[0-5][0-9]:([0-5][0-9]|60)(\.[0-9]+)?(Z|(\+|-)((0[0-9]|1[0-3]):[0-5][0-9]|14:00)))?)?)?$",
        )
        .expect("dateTime regex must compile")
    });
    if re.is_match(value) {
        Ok(())
    } else {
        Err(Error::invalid_value(
            "dateTime",
            format!("'{}' is not a valid dateTime", value),
        ))
    }
}

pub fn check_instant(value: &str) -> Result<()> {
    static INSTANT_RE: OnceLock<Regex> = OnceLock::new();
    let re = INSTANT_RE.get_or_init(|| {
        Regex::new(
            r"^([0-9]([0-9]([0-9][1-9]|[1-9]0)|[1-9]00)|[1-9]000)-(0[1-9]|1[0-2])-(0[1-9]|[1-2][0-9]|3[0-1])T([01][0-9]|2[0-3]):[0-5][0-9]:([0-5][0-9]|60)(\.[0-9]+)?(Z|(\+|-)((0[0-9]|1[0-3]):[0-5][0-9]|14:00))$",
        )
        .expect("instant regex must compile")
    });
    if re.is_match(value) {
        Ok(())
    } else {
        Err(Error::invalid_value(
            "instant",
            format!("'{}' is not a valid instant", value),
        ))
    }
}

/// FHIR `decimal`, checked in its lexical form
pub fn check_decimal(value: &str) -> Result<()> {
    static DECIMAL_RE: OnceLock<Regex> = OnceLock::new();
    let re = DECIMAL_RE.get_or_init(|| {
        Regex::new(r"^-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?$")
            .expect("decimal regex must compile")
    });
    if re.is_match(value) {
        Ok(())
    } else {
        Err(Error::invalid_value(
            "decimal",
            format!("'{}' is not a valid decimal", value),
        ))
    }
}

/// FHIR `base64Binary`: padded standard alphabet with zero padding bits
pub fn check_base64(value: &str) -> Result<()> {
    let bytes = value.as_bytes();
    if bytes.len() % 4 != 0 {
        return Err(Error::invalid_value(
            "base64Binary",
            format!("invalid length: {}", bytes.len()),
        ));
    }
    let padding = bytes.iter().rev().take_while(|&&b| b == b'=').count();
    if padding > 2 {
        return Err(Error::invalid_value(
            "base64Binary",
            "more than two padding characters",
        ));
    }
    let body = &bytes[..bytes.len() - padding];
    if let Some(index) = body.iter().position(|&b| base64_index(b).is_none()) {
        return Err(Error::invalid_value(
            "base64Binary",
            format!(
                "illegal character: '{}' found at index: {}",
                body[index] as char, index
            ),
        ));
    }
    if padding > 0 {
        let mask = if padding == 2 { 0b001111 } else { 0b000011 };
        if let Some(&last) = body.last() {
            if base64_index(last).unwrap_or(0) & mask != 0 {
                return Err(Error::invalid_value(
                    "base64Binary",
                    format!(
                        "non-zero padding bits in character: '{}' at index: {}",
                        last as char,
                        body.len() - 1
                    ),
                ));
            }
        }
    }
    Ok(())
}

fn base64_index(byte: u8) -> Option<u8> {
    match byte {
        b'A'..=b'Z' => Some(byte - b'A'),
        b'a'..=b'z' => Some(byte - b'a' + 26),
        b'0'..=b'9' => Some(byte - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}

/// Elements a narrative may not carry
const FORBIDDEN_XHTML_ELEMENTS: &[&str] = &[
    "applet", "base", "embed", "form", "frame", "iframe", "link", "object", "script",
];

fn xhtml_tag_pattern() -> &'static Regex {
    static XHTML_TAG_RE: OnceLock<Regex> = OnceLock::new();
    XHTML_TAG_RE.get_or_init(|| {
        Regex::new(r#"(?s)<!--.*?-->|<(/?)([A-Za-z][A-Za-z0-9:._\-]*)(?:\s(?:[^>"']|"[^"]*"|'[^']*')*)?\s*/?>"#)
            .expect("xhtml tag regex must compile")
    })
}

fn xhtml_error(message: impl Into<String>) -> Error {
    Error::invalid_value("xhtml", message)
}

/// Narrative XHTML: exactly one well-nested top-level `div`, no active content.
///
/// This is a structural scan, not a schema validation; entities and
/// attribute values are not checked.
pub fn check_xhtml(value: &str) -> Result<()> {
    let content = value.trim();
    if !content.starts_with("<div") {
        return Err(xhtml_error("narrative content must be a <div> element"));
    }

    let mut open: Vec<&str> = Vec::new();
    let mut roots = 0usize;
    let mut last = 0;
    for captures in xhtml_tag_pattern().captures_iter(content) {
        let Some(tag) = captures.get(0) else {
            continue;
        };
        if open.is_empty() && !content[last..tag.start()].trim().is_empty() {
            return Err(xhtml_error("text outside the root <div> element"));
        }
        last = tag.end();

        // comments carry no name
        let Some(name) = captures.get(2).map(|m| m.as_str()) else {
            continue;
        };
        if FORBIDDEN_XHTML_ELEMENTS.contains(&name.to_ascii_lowercase().as_str()) {
            return Err(xhtml_error(format!("<{}> is not allowed in narrative", name)));
        }

        if captures.get(1).is_some_and(|m| m.as_str() == "/") {
            match open.pop() {
                Some(expected) if expected == name => continue,
                Some(expected) => {
                    return Err(xhtml_error(format!(
                        "</{}> closes <{}>",
                        name, expected
                    )))
                }
                None => return Err(xhtml_error(format!("unmatched </{}>", name))),
            }
        }

        if open.is_empty() {
            roots += 1;
            if roots > 1 {
                return Err(xhtml_error("more than one top-level element"));
            }
            if name != "div" {
                return Err(xhtml_error("narrative content must be a <div> element"));
            }
        }
        if !tag.as_str().ends_with("/>") {
            open.push(name);
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(xhtml_error(format!("<{}> is not closed", unclosed)));
    }
    if roots == 0 || !content[last..].trim().is_empty() {
        return Err(xhtml_error("text outside the root <div> element"));
    }
    Ok(())
}

fn check_max_length(type_name: &'static str, value: &str) -> Result<()> {
    let length = value.chars().count();
    if length > MAX_STRING_LENGTH {
        return Err(Error::invalid_value(
            type_name,
            format!(
                "length: {} is greater than maximum allowed length: {}",
                length, MAX_STRING_LENGTH
            ),
        ));
    }
    Ok(())
}

fn check_control_char(type_name: &'static str, ch: char, config: &ModelConfig) -> Result<()> {
    if config.check_control_chars && ch.is_control() {
        return Err(Error::invalid_value(
            type_name,
            format!("unsupported control character U+{:04X}", ch as u32),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FhirString, Uri};

    fn config() -> ModelConfig {
        ModelConfig::default()
    }

    fn reference(literal: Option<&str>, type_: Option<&str>) -> Reference {
        let mut builder = Reference::builder();
        if let Some(literal) = literal {
            builder = builder.reference(FhirString::of(literal).unwrap());
        }
        if let Some(type_) = type_ {
            builder = builder.type_(Uri::of(type_).unwrap());
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_require_non_null() {
        assert_eq!(require_non_null(Some(1), "status").unwrap(), 1);
        let err = require_non_null::<i32>(None, "status").unwrap_err();
        assert_eq!(err.element(), Some("status"));
    }

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty(vec![1], "category").is_ok());
        let err = require_non_empty::<i32>(vec![], "category").unwrap_err();
        assert!(matches!(err, Error::MissingElement("category")));
    }

    #[test]
    fn test_choice_element_narrows() {
        use crate::types::{AnnotationAuthor, Boolean};

        let author: Option<AnnotationAuthor> =
            choice_element(Some(FhirString::of("Dr. Adams").unwrap().into()), "author").unwrap();
        assert!(matches!(author, Some(AnnotationAuthor::String(_))));
        assert!(choice_element::<AnnotationAuthor>(None, "author").unwrap().is_none());

        let err = choice_element::<AnnotationAuthor>(Some(Boolean::of(true).unwrap().into()), "author")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidChoiceType { found: "boolean", .. }));

        let err = require_choice_element::<AnnotationAuthor>(None, "author").unwrap_err();
        assert!(matches!(err, Error::MissingElement("author")));
        assert!(require_choice_element::<AnnotationAuthor>(Some(reference(Some("Patient/1"), None).into()), "author").is_ok());
    }

    #[test]
    fn test_check_string() {
        assert!(check_string("hello world", &config()).is_ok());
        assert!(check_string("line\nbreak\ttab", &config()).is_ok());
        assert!(check_string("   ", &config()).is_err());
        assert!(check_string("", &config()).is_err());
        assert!(check_string("no\u{00A0}break", &config()).is_err());
    }

    #[test]
    fn test_control_chars_follow_config() {
        assert!(check_string("bell\u{0007}", &config()).is_err());
        let relaxed = ModelConfig {
            check_control_chars: false,
            ..ModelConfig::default()
        };
        assert!(check_string("bell\u{0007}", &relaxed).is_ok());
    }

    #[test]
    fn test_check_code() {
        assert!(check_code("entered-in-error", &config()).is_ok());
        assert!(check_code("two words", &config()).is_ok());
        assert!(check_code(" leading", &config()).is_err());
        assert!(check_code("trailing ", &config()).is_err());
        assert!(check_code("double  space", &config()).is_err());
        assert!(check_code("tab\tinside", &config()).is_err());
        assert!(check_code("", &config()).is_err());
    }

    #[test]
    fn test_check_id() {
        assert!(check_id("example-1.2").is_ok());
        assert!(check_id("").is_err());
        assert!(check_id("has/slash").is_err());
        assert!(check_id("under_score").is_err());
        assert!(check_id(&"a".repeat(64)).is_ok());
        assert!(check_id(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_check_uri() {
        assert!(check_uri("http://hl7.org/fhir", &config()).is_ok());
        assert!(check_uri("urn:uuid:53fefa32-fcbb-4ff8-8a92-55ee120877b7", &config()).is_ok());
        assert!(check_uri("http://hl7.org/fhir with space", &config()).is_err());
    }

    #[test]
    fn test_check_date_time() {
        assert!(check_date_time("2018").is_ok());
        assert!(check_date_time("1973-06").is_ok());
        assert!(check_date_time("1905-08-23").is_ok());
        assert!(check_date_time("2015-02-07T13:28:17-05:00").is_ok());
        assert!(check_date_time("2017-01-01T00:00:00.000Z").is_ok());
        assert!(check_date_time("2015-02-07T13:28").is_err());
        assert!(check_date_time("2015-13-01").is_err());
    }

    #[test]
    fn test_check_instant() {
        assert!(check_instant("2015-02-07T13:28:17.239+02:00").is_ok());
        assert!(check_instant("2017-01-01T00:00:00Z").is_ok());
        assert!(check_instant("2017-01-01").is_err());
        assert!(check_instant("2017-01-01T00:00:00").is_err());
    }

    #[test]
    fn test_check_base64() {
        assert!(check_base64("").is_ok());
        assert!(check_base64("aGVsbG8=").is_ok());
        assert!(check_base64("aGVsbA==").is_ok());
        assert!(check_base64("aGVsbG8").is_err());
        assert!(check_base64("aGVsbB==").is_err());
        assert!(check_base64("aGV*bG8=").is_err());
        assert!(check_base64("a===").is_err());
    }

    #[test]
    fn test_check_xhtml() {
        assert!(check_xhtml("<div xmlns=\"http://www.w3.org/1999/xhtml\">text</div>").is_ok());
        assert!(check_xhtml("<p>text</p>").is_err());
        assert!(check_xhtml("<div/>").is_ok());
        assert!(check_xhtml(
            "<div xmlns=\"http://www.w3.org/1999/xhtml\"><p class='a>b'>x<br/></p><!-- note --></div>"
        )
        .is_ok());

        assert!(check_xhtml("<div/><script/>").is_err());
        assert!(check_xhtml("<div>a</div><div>b</div>").is_err());
        assert!(check_xhtml("<div>a</div> trailing").is_err());
        assert!(check_xhtml("<div><p>a</div></p>").is_err());
        assert!(check_xhtml("<div><p>a</p>").is_err());
        assert!(check_xhtml("<div><script>alert(1)</script></div>").is_err());
        assert!(check_xhtml("<divx>text</divx>").is_err());
    }

    #[test]
    fn test_reference_type_allowed() {
        let patient = reference(Some("Patient/123"), None);
        assert!(check_reference_type(Some(&patient), "patient", &["Patient"], &config()).is_ok());

        let versioned = reference(Some("Patient/123/_history/2"), Some("Patient"));
        assert!(check_reference_type(Some(&versioned), "patient", &["Patient"], &config()).is_ok());

        let conditional = reference(Some("Patient?identifier=123"), None);
        assert!(check_reference_type(Some(&conditional), "patient", &["Patient"], &config()).is_ok());
    }

    #[test]
    fn test_reference_type_rejected() {
        let device = reference(Some("Device/abc"), None);
        let err = check_reference_type(Some(&device), "patient", &["Patient"], &config()).unwrap_err();
        assert_eq!(err.element(), Some("patient"));

        let unknown = reference(Some("Spaceship/1"), None);
        assert!(check_reference_type(Some(&unknown), "patient", &["Patient"], &config()).is_err());

        let mismatch = reference(Some("Patient/1"), Some("Group"));
        assert!(check_reference_type(Some(&mismatch), "subject", &["Patient", "Group"], &config()).is_err());

        let malformed = reference(Some("not a reference"), None);
        assert!(check_reference_type(Some(&malformed), "patient", &["Patient"], &config()).is_err());
    }

    #[test]
    fn test_reference_type_skips_local_and_absolute() {
        let local = reference(Some("#p1"), None);
        assert!(check_reference_type(Some(&local), "patient", &["Patient"], &config()).is_ok());

        let absolute = reference(Some("http://example.org/fhir/Device/1"), None);
        assert!(check_reference_type(Some(&absolute), "patient", &["Patient"], &config()).is_ok());
    }

    #[test]
    fn test_reference_checks_can_be_disabled() {
        let device = reference(Some("Device/abc"), None);
        let relaxed = ModelConfig {
            check_reference_types: false,
            ..ModelConfig::default()
        };
        assert!(check_reference_type(Some(&device), "patient", &["Patient"], &relaxed).is_ok());
    }
}
