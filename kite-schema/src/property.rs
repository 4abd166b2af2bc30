use crate::{FieldDeclaration, PropertyOptions};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Classifies who supplies a property's value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    /// No special meaning.
    #[default]
    Regular,
    /// Supplied by the configuration author.
    Input,
    /// Assigned by the cloud provider after provisioning. Never user-settable.
    Output,
}

/// Full metadata of one resource property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    name: String,
    #[serde(rename = "type")]
    declared_type: String,
    rust_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_value: Option<Value>,
    description: String,
    deprecation_message: String,
    required: bool,
    kind: PropertyKind,
    importable: bool,
    hidden: bool,
}

impl Property {
    pub(crate) fn from_declaration(
        field: &FieldDeclaration,
        options: &PropertyOptions,
        value: Option<Value>,
    ) -> Self {
        let name = if options.name.trim().is_empty() {
            field.name.clone()
        } else {
            options.name.clone()
        };
        let kind = if field.cloud {
            PropertyKind::Output
        } else {
            options.kind
        };

        Self {
            name,
            declared_type: type_token(&field.rust_type),
            rust_type: field.rust_type.clone(),
            value,
            default_value: options.default_value.clone(),
            description: options.description.clone(),
            deprecation_message: options.deprecation_message.clone(),
            required: !options.optional,
            kind,
            importable: options.importable,
            hidden: options.hidden,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercase simple type token, as written in schema text.
    pub fn declared_type(&self) -> &str {
        &self.declared_type
    }

    /// Rust type of the backing field.
    pub fn rust_type(&self) -> &str {
        &self.rust_type
    }

    /// The current value if present, otherwise the default.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref().or(self.default_value.as_ref())
    }

    pub fn current_value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn deprecation_message(&self) -> &str {
        &self.deprecation_message
    }

    pub fn is_deprecated(&self) -> bool {
        !self.deprecation_message.is_empty()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    pub fn is_input(&self) -> bool {
        self.kind == PropertyKind::Input
    }

    pub fn is_output(&self) -> bool {
        self.kind == PropertyKind::Output
    }

    pub fn is_regular(&self) -> bool {
        self.kind == PropertyKind::Regular
    }

    pub fn is_importable(&self) -> bool {
        self.importable
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// Derives the schema type token from a Rust type as written.
///
/// Takes the last path segment, drops generic arguments and lowercases it.
/// `Option<T>` yields the token of `T`, references yield the token of the
/// referent, and arrays and slices yield the element token followed by `[]`.
///
/// ```
/// use kite_schema::type_token;
///
/// assert_eq!(type_token("String"), "string");
/// assert_eq!(type_token("Option < Vec < String > >"), "vec");
/// assert_eq!(type_token("std::collections::HashMap<String, String>"), "hashmap");
/// assert_eq!(type_token("&'static str"), "str");
/// assert_eq!(type_token("[u8; 4]"), "u8[]");
/// ```
pub fn type_token(rust_type: &str) -> String {
    token_of(&tighten(rust_type))
}

/// Drops whitespace next to punctuation and collapses the rest to one space,
/// so `stringify!` output and hand-written types normalize the same way.
fn tighten(ty: &str) -> String {
    let mut out = String::with_capacity(ty.len());
    let mut gap = false;
    for c in ty.chars() {
        if c.is_whitespace() {
            gap = true;
            continue;
        }
        if gap && !out.is_empty() && !is_punct(c) && !out.ends_with(is_punct) {
            out.push(' ');
        }
        gap = false;
        out.push(c);
    }
    out
}

fn is_punct(c: char) -> bool {
    matches!(c, '<' | '>' | ',' | ':' | ';' | '&' | '[' | ']' | '(' | ')')
}

fn token_of(ty: &str) -> String {
    if let Some(referent) = ty.strip_prefix('&') {
        return token_of(strip_reference_qualifiers(referent));
    }
    if let Some(inner) = ty.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
        let element = inner.rsplit_once(';').map_or(inner, |(element, _len)| element);
        return format!("{}[]", token_of(element));
    }
    if ty.starts_with('(') {
        return "tuple".to_string();
    }

    let ty = ty.strip_prefix("dyn ").unwrap_or(ty);
    let (head, args) = match ty.find('<') {
        Some(open) if ty.ends_with('>') => (&ty[..open], Some(&ty[open + 1..ty.len() - 1])),
        Some(open) => (&ty[..open], None),
        None => (ty, None),
    };
    let simple = head.rsplit("::").next().unwrap_or(head);
    match args {
        Some(inner) if simple == "Option" => token_of(inner),
        _ => simple.to_lowercase(),
    }
}

/// Strips the lifetime and `mut` from the referent of `&'a mut T`.
fn strip_reference_qualifiers(ty: &str) -> &str {
    let ty = match ty.strip_prefix('\'') {
        Some(lifetime) => lifetime
            .trim_start_matches(|c: char| c.is_alphanumeric() || c == '_')
            .trim_start(),
        None => ty,
    };
    ty.strip_prefix("mut ")
        .or_else(|| ty.strip_prefix("mut").filter(|rest| rest.starts_with(['[', '(', '&'])))
        .unwrap_or(ty)
}
