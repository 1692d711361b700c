//! Object model consumed by signal extraction.
//!
//! These types are the structured output of a source parser: one
//! [`MethodDeclaration`] per method, grouped into scopes by a
//! [`Registry`]. Declarations refer to each other (aliases, overrides,
//! attribute pairs) and to their enclosing scope by id, never by owning
//! pointer. The graph is owned by whoever built it and is treated as
//! immutable here.

pub mod docstring;
pub mod registry;

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub use docstring::Docstring;
pub use registry::{ObjectModel, Registry, Scope};

/// Index of a declaration inside an [`ObjectModel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeclarationId(pub usize);

impl fmt::Display for DeclarationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of a scope (class, module, namespace) inside an [`ObjectModel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeId(pub usize);

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tag kinds understood by the object model.
///
/// Kinds outside this list decode as [`TagKind::Other`] so a custom tag on
/// one declaration cannot make the whole registry unreadable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    Return,
    Param,
    Overload,
    Example,
    Raise,
    Yield,
    #[serde(rename = "yieldparam")]
    YieldParam,
    #[serde(rename = "yieldreturn")]
    YieldReturn,
    Option,
    Api,
    Private,
    Deprecated,
    See,
    Note,
    Todo,
    Since,
    Author,
    #[serde(other)]
    Other,
}

impl TagKind {
    /// The tag name as written in source, without the `@`
    pub fn as_str(&self) -> &'static str {
        match self {
            TagKind::Return => "return",
            TagKind::Param => "param",
            TagKind::Overload => "overload",
            TagKind::Example => "example",
            TagKind::Raise => "raise",
            TagKind::Yield => "yield",
            TagKind::YieldParam => "yieldparam",
            TagKind::YieldReturn => "yieldreturn",
            TagKind::Option => "option",
            TagKind::Api => "api",
            TagKind::Private => "private",
            TagKind::Deprecated => "deprecated",
            TagKind::See => "see",
            TagKind::Note => "note",
            TagKind::Todo => "todo",
            TagKind::Since => "since",
            TagKind::Author => "author",
            TagKind::Other => "other",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A documentation tag such as `@return [String] the name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub kind: TagKind,

    /// Subject of the tag, e.g. the parameter name of a `@param` tag
    #[serde(default)]
    pub name: Option<String>,

    /// Declared types. `None` when the parser produced no type list at all,
    /// which is distinct from an explicitly empty list.
    #[serde(default)]
    pub types: Option<Vec<String>>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,

    /// Set by the parser when it synthesized this tag
    #[serde(default)]
    pub implicit: bool,

    #[serde(default)]
    pub detail: TagDetail,
}

/// Kind-specific payload carried by a [`Tag`]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TagDetail {
    #[default]
    Plain,
    Overload(OverloadTag),
}

/// Body of an `@overload` tag: an alternative call shape with its own
/// parameters, docstring and nested tags
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OverloadTag {
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Vec<Parameter>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub docstring: Docstring,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: TagSet,
}

impl Tag {
    pub fn new(kind: TagKind) -> Self {
        Self {
            kind,
            name: None,
            types: None,
            text: String::new(),
            implicit: false,
            detail: TagDetail::Plain,
        }
    }

    /// Shorthand for a `@return` tag
    pub fn returns(types: &[&str], text: impl Into<String>) -> Self {
        Self::new(TagKind::Return)
            .with_types(types)
            .with_text(text)
    }

    /// Shorthand for a `@param` tag
    pub fn param(name: impl Into<String>, types: &[&str], text: impl Into<String>) -> Self {
        Self::new(TagKind::Param)
            .with_name(name)
            .with_types(types)
            .with_text(text)
    }

    /// Shorthand for an `@overload` tag
    pub fn overload(overload: OverloadTag) -> Self {
        let mut tag = Self::new(TagKind::Overload);
        tag.detail = TagDetail::Overload(overload);
        tag
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.types = Some(types.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn synthesized(mut self) -> Self {
        self.implicit = true;
        self
    }

    /// Non-blank declared type names. A missing type list and blank
    /// entries are both treated as absent.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types
            .iter()
            .flatten()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
    }

    pub fn has_types(&self) -> bool {
        self.type_names().next().is_some()
    }

    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    pub fn as_overload(&self) -> Option<&OverloadTag> {
        match &self.detail {
            TagDetail::Overload(overload) => Some(overload),
            TagDetail::Plain => None,
        }
    }
}

/// Tags attached to a declaration, in declaration order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(Vec<Tag>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tag: Tag) {
        self.0.push(tag);
    }

    /// All tags of one kind, in declaration order
    pub fn of_kind(&self, kind: TagKind) -> impl Iterator<Item = &Tag> {
        self.0.iter().filter(move |t| t.kind == kind)
    }

    /// First tag of one kind
    pub fn first(&self, kind: TagKind) -> Option<&Tag> {
        self.of_kind(kind).next()
    }

    pub fn has(&self, kind: TagKind) -> bool {
        self.first(kind).is_some()
    }

    /// The `@param` tag documenting `name`
    pub fn param(&self, name: &str) -> Option<&Tag> {
        self.of_kind(TagKind::Param)
            .find(|t| t.name.as_deref() == Some(name))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// How a formal parameter is declared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    #[default]
    Required,
    Optional,
    Keyword,
    Splat,
    DoubleSplat,
    Block,
}

/// A formal parameter as it appears in a signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub kind: ParameterKind,
    #[serde(default)]
    pub default: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParameterKind::Required,
            default: None,
        }
    }

    pub fn with_kind(mut self, kind: ParameterKind) -> Self {
        self.kind = kind;
        self
    }

    /// Derive a parameter from a raw signature token such as `*args`,
    /// `&block`, `**opts`, `key:`, `key: 1` or `limit = 10`.
    ///
    /// Returns `None` for a blank token.
    pub fn from_signature_token(token: &str) -> Option<Self> {
        let token = token.trim();
        let (head, default) = match token.split_once('=') {
            Some((head, default)) => (head.trim(), Some(default.trim().to_string())),
            None => (token, None),
        };

        let (name, kind, default) = if let Some(rest) = head.strip_prefix("**") {
            (rest, ParameterKind::DoubleSplat, default)
        } else if let Some(rest) = head.strip_prefix('*') {
            (rest, ParameterKind::Splat, default)
        } else if let Some(rest) = head.strip_prefix('&') {
            (rest, ParameterKind::Block, default)
        } else if let Some((name, value)) = head.split_once(':') {
            let value = value.trim();
            let default = if value.is_empty() {
                default
            } else {
                Some(value.to_string())
            };
            (name, ParameterKind::Keyword, default)
        } else if default.is_some() {
            (head, ParameterKind::Optional, default)
        } else {
            (head, ParameterKind::Required, None)
        };

        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            kind,
            default,
        })
    }

    pub fn is_splat(&self) -> bool {
        matches!(self.kind, ParameterKind::Splat | ParameterKind::DoubleSplat)
    }

    pub fn is_block(&self) -> bool {
        self.kind == ParameterKind::Block
    }
}

/// Method visibility as reported by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// Reader/writer pairing for accessor-style members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttrInfo {
    #[serde(default)]
    pub read: Option<DeclarationId>,
    #[serde(default)]
    pub write: Option<DeclarationId>,
}

/// A parsed method declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    pub name: String,
    pub fullname: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Vec<Parameter>,
    #[serde(default)]
    pub parent: Option<ScopeId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: TagSet,
    #[serde(default, deserialize_with = "null_as_default")]
    pub docstring: Docstring,
    #[serde(default, deserialize_with = "null_as_default")]
    pub aliases: Vec<DeclarationId>,
    #[serde(default)]
    pub overridden_method: Option<DeclarationId>,
    #[serde(default)]
    pub attr_info: Option<AttrInfo>,
    #[serde(default)]
    pub visibility: Visibility,
}

impl MethodDeclaration {
    pub fn new(name: impl Into<String>, fullname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fullname: fullname.into(),
            parameters: Vec::new(),
            parent: None,
            tags: TagSet::new(),
            docstring: Docstring::default(),
            aliases: Vec::new(),
            overridden_method: None,
            attr_info: None,
            visibility: Visibility::Public,
        }
    }
}

/// Decode `null` as the field's default, matching a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_kind_wire_names_match_source_names() {
        for kind in [TagKind::YieldParam, TagKind::YieldReturn, TagKind::Return] {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::json!(kind.as_str()));
            let back: TagKind = serde_json::from_value(json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn test_unknown_tag_kind_decodes_as_other() {
        let tag: Tag = serde_json::from_str(r#"{"kind": "abstract", "text": "subclass"}"#).unwrap();
        assert_eq!(tag.kind, TagKind::Other);
        assert_eq!(tag.text, "subclass");
    }

    #[test]
    fn test_null_tag_fields_are_absent() {
        let tag: Tag =
            serde_json::from_str(r#"{"kind": "return", "types": null, "text": null}"#).unwrap();
        assert_eq!(tag.text, "");
        assert!(!tag.has_types());
        assert!(!tag.has_text());
    }

    #[test]
    fn test_from_signature_token_required() {
        let param = Parameter::from_signature_token("value").unwrap();
        assert_eq!(param.name, "value");
        assert_eq!(param.kind, ParameterKind::Required);
        assert_eq!(param.default, None);
    }

    #[test]
    fn test_from_signature_token_prefixes() {
        let splat = Parameter::from_signature_token("*args").unwrap();
        assert_eq!(splat.name, "args");
        assert!(splat.is_splat());

        let double = Parameter::from_signature_token("**opts").unwrap();
        assert_eq!(double.name, "opts");
        assert_eq!(double.kind, ParameterKind::DoubleSplat);

        let block = Parameter::from_signature_token("&blk").unwrap();
        assert_eq!(block.name, "blk");
        assert!(block.is_block());
    }

    #[test]
    fn test_from_signature_token_defaults() {
        let optional = Parameter::from_signature_token("limit = 10").unwrap();
        assert_eq!(optional.name, "limit");
        assert_eq!(optional.kind, ParameterKind::Optional);
        assert_eq!(optional.default.as_deref(), Some("10"));

        let keyword = Parameter::from_signature_token("strict: true").unwrap();
        assert_eq!(keyword.name, "strict");
        assert_eq!(keyword.kind, ParameterKind::Keyword);
        assert_eq!(keyword.default.as_deref(), Some("true"));

        let bare_keyword = Parameter::from_signature_token("key:").unwrap();
        assert_eq!(bare_keyword.kind, ParameterKind::Keyword);
        assert_eq!(bare_keyword.default, None);
    }

    #[test]
    fn test_from_signature_token_blank() {
        assert!(Parameter::from_signature_token("   ").is_none());
        assert!(Parameter::from_signature_token("*").is_none());
    }

    #[test]
    fn test_type_names_skip_blank_and_missing() {
        let missing = Tag::new(TagKind::Return);
        assert!(!missing.has_types());

        let blank = Tag::returns(&["", "  "], "");
        assert!(!blank.has_types());

        let typed = Tag::returns(&["String", ""], "");
        assert_eq!(typed.type_names().collect::<Vec<_>>(), vec!["String"]);
    }

    #[test]
    fn test_tag_set_lookup() {
        let tags: TagSet = vec![
            Tag::param("a", &[], "first"),
            Tag::returns(&["Integer"], ""),
            Tag::param("b", &[], "second"),
        ]
        .into_iter()
        .collect();

        assert_eq!(tags.of_kind(TagKind::Param).count(), 2);
        assert_eq!(tags.param("b").map(|t| t.text.as_str()), Some("second"));
        assert!(tags.has(TagKind::Return));
        assert!(!tags.has(TagKind::Overload));
    }

    #[test]
    fn test_tag_deserializes_overload_detail() {
        let json = r#"{
            "kind": "overload",
            "detail": {
                "type": "overload",
                "parameters": [{"name": "x"}],
                "tags": [{"kind": "return", "types": ["nil"]}]
            }
        }"#;
        let tag: Tag = serde_json::from_str(json).unwrap();
        let overload = tag.as_overload().unwrap();
        assert_eq!(overload.parameters[0].name, "x");
        assert!(overload.tags.has(TagKind::Return));
    }
}
