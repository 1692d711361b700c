//! Parameters of one signature and how well each is documented.

use crate::config::SignalConfig;
use crate::model::{Docstring, Parameter, ParameterKind, Tag, TagKind, TagSet};

/// A parameter as seen by one signature: the formal parameter (if the
/// signature declares it) joined with its `@param` tag (if documented)
#[derive(Debug, Clone, Copy)]
pub struct MethodParameter<'a> {
    name: &'a str,
    parameter: Option<&'a Parameter>,
    tag: Option<&'a Tag>,
    docstring: &'a Docstring,
}

impl<'a> MethodParameter<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn parameter(&self) -> Option<&'a Parameter> {
        self.parameter
    }

    pub fn tag(&self) -> Option<&'a Tag> {
        self.tag
    }

    pub fn kind(&self) -> Option<ParameterKind> {
        self.parameter.map(|p| p.kind)
    }

    pub fn in_signature(&self) -> bool {
        self.parameter.is_some()
    }

    pub fn is_block(&self) -> bool {
        self.parameter.is_some_and(Parameter::is_block)
    }

    pub fn is_splat(&self) -> bool {
        self.parameter.is_some_and(Parameter::is_splat)
    }

    pub fn is_typed(&self) -> bool {
        self.tag.is_some_and(Tag::has_types)
    }

    /// Documented by a tag or named in the prose
    pub fn is_mentioned(&self) -> bool {
        self.tag.is_some() || self.mentioned_by_name()
    }

    /// Documented with actual words
    pub fn is_described(&self) -> bool {
        self.tag.is_some_and(Tag::has_text) || self.mentioned_by_name()
    }

    /// Documented although the signature has no such parameter
    pub fn is_wrongly_mentioned(&self) -> bool {
        self.is_mentioned() && !self.in_signature()
    }

    /// Too short to be meaningful, or numbered like `arg2`
    pub fn has_bad_name(&self, config: &SignalConfig) -> bool {
        if config.bad_name_exceptions.iter().any(|e| e == self.name) {
            return false;
        }
        self.name.chars().count() < config.bad_name_threshold
            || self.name.ends_with(|c: char| c.is_ascii_digit())
    }

    fn mentioned_by_name(&self) -> bool {
        self.docstring.mentions_parameter(self.name)
    }
}

/// Join a signature's formal parameters with its `@param` tags.
///
/// Signature parameters come first in declaration order, followed by names
/// that only a tag documents. Each name appears once.
pub fn collect_parameters<'a>(
    parameters: &'a [Parameter],
    tags: &'a TagSet,
    docstring: &'a Docstring,
) -> Vec<MethodParameter<'a>> {
    let signature_names = parameters.iter().map(|p| p.name.as_str());
    let tag_names = tags
        .of_kind(TagKind::Param)
        .filter_map(|t| t.name.as_deref());

    let mut seen: Vec<&str> = Vec::new();
    let mut collected = Vec::new();
    for name in signature_names.chain(tag_names) {
        if seen.contains(&name) {
            continue;
        }
        seen.push(name);
        collected.push(MethodParameter {
            name,
            parameter: parameters.iter().find(|p| p.name == name),
            tag: tags.param(name),
            docstring,
        });
    }
    collected
}
