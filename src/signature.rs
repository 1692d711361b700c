//! Signature resolution.
//!
//! A method exposes its own declared call shape plus one shape per
//! `@overload` tag. Authors often restate the real signature inside an
//! `@overload` just to hang richer docs on it; when any overload has the
//! same parameter names as the declaration itself, the overloads replace
//! the base signature instead of adding to it.

use serde::{Deserialize, Serialize};

use crate::model::{
    DeclarationId, Docstring, MethodDeclaration, Parameter, TagDetail, TagKind, TagSet,
};
use crate::parameter::{collect_parameters, MethodParameter};

/// Where a signature came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignatureOrigin {
    /// The declaration's own parameter list
    Base,
    /// The n-th `@overload` tag of the declaration (0-based, declaration order)
    Overload(usize),
}

/// One call shape of a method
#[derive(Debug, Clone)]
pub struct MethodSignature<'a> {
    owner: DeclarationId,
    origin: SignatureOrigin,
    formal: &'a [Parameter],
    tags: &'a TagSet,
    docstring: &'a Docstring,
    parameters: Vec<MethodParameter<'a>>,
}

impl<'a> MethodSignature<'a> {
    fn new(
        owner: DeclarationId,
        origin: SignatureOrigin,
        formal: &'a [Parameter],
        tags: &'a TagSet,
        docstring: &'a Docstring,
    ) -> Self {
        Self {
            owner,
            origin,
            formal,
            tags,
            docstring,
            parameters: collect_parameters(formal, tags, docstring),
        }
    }

    /// The signature declared by the method itself
    pub fn base(owner: DeclarationId, decl: &'a MethodDeclaration) -> Self {
        Self::new(
            owner,
            SignatureOrigin::Base,
            &decl.parameters,
            &decl.tags,
            &decl.docstring,
        )
    }

    pub fn owner(&self) -> DeclarationId {
        self.owner
    }

    pub fn origin(&self) -> SignatureOrigin {
        self.origin
    }

    pub fn is_base(&self) -> bool {
        self.origin == SignatureOrigin::Base
    }

    /// Formal parameters as declared
    pub fn formal_parameters(&self) -> &'a [Parameter] {
        self.formal
    }

    /// Formal parameters joined with their `@param` documentation
    pub fn parameters(&self) -> &[MethodParameter<'a>] {
        &self.parameters
    }

    pub fn parameter_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.formal.iter().map(|p| p.name.as_str())
    }

    /// Tags of the object this signature was built from: the declaration
    /// for the base signature, the overload tag otherwise
    pub fn tags(&self) -> &'a TagSet {
        self.tags
    }

    pub fn docstring(&self) -> &'a Docstring {
        self.docstring
    }

    /// Equivalent call shapes have identical parameter name sequences,
    /// whatever their origin
    pub fn same(&self, other: &MethodSignature<'_>) -> bool {
        self.parameter_names().eq(other.parameter_names())
    }

    /// Non-empty docstring that the parser did not flag as synthesized
    pub fn has_doc(&self) -> bool {
        self.has_doc_with(|doc| doc.implicit)
    }

    /// Non-empty docstring that `is_implicit` does not reject
    pub fn has_doc_with(&self, is_implicit: impl Fn(&Docstring) -> bool) -> bool {
        !self.docstring.is_empty() && !is_implicit(self.docstring)
    }

    pub fn has_code_example(&self) -> bool {
        self.tags.has(TagKind::Example) || self.docstring.contains_code_example()
    }
}

/// Resolve every call shape of `decl`. Never empty.
pub fn resolve_signatures(
    owner: DeclarationId,
    decl: &MethodDeclaration,
) -> Vec<MethodSignature<'_>> {
    let base = MethodSignature::base(owner, decl);

    let overloaded: Vec<MethodSignature<'_>> = decl
        .tags
        .of_kind(TagKind::Overload)
        .enumerate()
        .filter_map(|(index, tag)| match &tag.detail {
            TagDetail::Overload(overload) => Some(MethodSignature::new(
                owner,
                SignatureOrigin::Overload(index),
                &overload.parameters,
                &overload.tags,
                &overload.docstring,
            )),
            TagDetail::Plain => {
                log::warn!(
                    "Ignoring @overload #{} on {}: no signature attached",
                    index,
                    decl.fullname
                );
                None
            }
        })
        .collect();

    if overloaded.iter().any(|s| s.same(&base)) {
        log::debug!(
            "{}: an @overload restates the declared signature, dropping the base signature",
            decl.fullname
        );
        overloaded
    } else {
        std::iter::once(base).chain(overloaded).collect()
    }
}
