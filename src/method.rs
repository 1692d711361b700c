//! Documentation signals for one method.
//!
//! [`MethodObject`] wraps a declaration and answers every signal query
//! lazily. Declarations never change after parsing, so each derived value
//! is computed on first access and cached for the life of the wrapper.
//! Wrapping the same declaration twice gives two independent caches that
//! always agree.
//!
//! Lookups that leave the declaration (override target, attribute pair,
//! getter sibling) go through [`ObjectModel`] and fail soft: a missing or
//! dangling reference is simply "no value".

use once_cell::unsync::OnceCell;
use std::fmt;

use crate::config::{get_signal_config, SignalConfig};
use crate::implicit::{is_implicit_docstring, is_implicit_tag, AccessorRole};
use crate::model::{
    DeclarationId, Docstring, MethodDeclaration, ObjectModel, Registry, Tag, TagKind, Visibility,
};
use crate::naming::{
    getter_name_for, has_setter_suffix, is_bang_name, is_constructor_name, is_questioning_name,
    is_unusable_return, setter_name_for,
};
use crate::parameter::MethodParameter;
use crate::signals::SignalSet;
use crate::signature::{resolve_signatures, MethodSignature};

/// A method declaration together with its memoized signals
pub struct MethodObject<'a, M: ObjectModel + ?Sized = Registry> {
    model: &'a M,
    id: DeclarationId,
    decl: &'a MethodDeclaration,
    config: &'a SignalConfig,
    signatures: OnceCell<Vec<MethodSignature<'a>>>,
    parameters: OnceCell<Vec<MethodParameter<'a>>>,
    getter: OnceCell<bool>,
    overridden: OnceCell<Option<Box<MethodObject<'a, M>>>>,
    return_tags: OnceCell<Vec<&'a Tag>>,
    signals: OnceCell<SignalSet>,
}

impl<'a, M: ObjectModel + ?Sized> MethodObject<'a, M> {
    /// Wrap a declaration using the process-wide configuration.
    /// Unknown ids yield `None`.
    pub fn new(model: &'a M, id: DeclarationId) -> Option<Self> {
        Self::with_config(model, id, get_signal_config())
    }

    /// Wrap a declaration with explicit settings
    pub fn with_config(model: &'a M, id: DeclarationId, config: &'a SignalConfig) -> Option<Self> {
        let decl = model.declaration(id)?;
        Some(Self {
            model,
            id,
            decl,
            config,
            signatures: OnceCell::new(),
            parameters: OnceCell::new(),
            getter: OnceCell::new(),
            overridden: OnceCell::new(),
            return_tags: OnceCell::new(),
            signals: OnceCell::new(),
        })
    }

    pub fn id(&self) -> DeclarationId {
        self.id
    }

    pub fn declaration(&self) -> &'a MethodDeclaration {
        self.decl
    }

    pub fn config(&self) -> &'a SignalConfig {
        self.config
    }

    pub fn name(&self) -> &'a str {
        &self.decl.name
    }

    pub fn fullname(&self) -> &'a str {
        &self.decl.fullname
    }

    pub fn visibility(&self) -> Visibility {
        self.decl.visibility
    }

    // Naming

    pub fn is_constructor(&self) -> bool {
        is_constructor_name(self.name(), &self.config.constructor_name)
    }

    pub fn is_bang_name(&self) -> bool {
        is_bang_name(self.name())
    }

    pub fn is_questioning_name(&self) -> bool {
        is_questioning_name(self.name())
    }

    /// Writer suffix and exactly one parameter across all signatures
    pub fn is_setter(&self) -> bool {
        has_setter_suffix(self.name()) && self.parameters().len() == 1
    }

    /// The attribute's designated reader, or, without attribute info, a
    /// method whose `name=` sibling exists
    pub fn is_getter(&self) -> bool {
        *self.getter.get_or_init(|| {
            let reader = self
                .decl
                .attr_info
                .and_then(|info| info.read)
                .and_then(|id| self.resolve(id, "attr_info.read"));
            match reader {
                Some(reader) => reader.fullname == self.decl.fullname,
                None => self.sibling(&setter_name_for(self.name())).is_some(),
            }
        })
    }

    pub fn accessor_role(&self) -> AccessorRole {
        AccessorRole::from_flags(self.is_getter(), self.is_setter())
    }

    // Relations

    pub fn aliases_fullnames(&self) -> Vec<&'a str> {
        self.decl
            .aliases
            .iter()
            .filter_map(|id| self.resolve(*id, "aliases"))
            .map(|alias| alias.fullname.as_str())
            .collect()
    }

    pub fn is_overridden(&self) -> bool {
        self.overridden_method().is_some()
    }

    /// The method this one overrides, wrapped with the same settings
    pub fn overridden_method(&self) -> Option<&MethodObject<'a, M>> {
        self.overridden
            .get_or_init(|| {
                let id = self.decl.overridden_method?;
                self.resolve(id, "overridden_method")?;
                MethodObject::with_config(self.model, id, self.config).map(Box::new)
            })
            .as_deref()
    }

    pub fn overridden_method_fullname(&self) -> Option<&'a str> {
        self.overridden_method().map(|method| method.fullname())
    }

    /// The reader paired with this writer: the sibling named without the
    /// trailing `=`
    pub fn corresponding_getter(&self) -> Option<&'a MethodDeclaration> {
        let id = self.sibling(getter_name_for(self.name()))?;
        if id == self.id {
            return None;
        }
        self.resolve(id, "corresponding getter")
    }

    // Signatures and parameters

    pub fn signatures(&self) -> &[MethodSignature<'a>] {
        self.signatures
            .get_or_init(|| resolve_signatures(self.id, self.decl))
    }

    pub fn has_multiple_signatures(&self) -> bool {
        self.signatures().len() > 1
    }

    /// Parameters of every signature, flattened in signature order
    pub fn parameters(&self) -> &[MethodParameter<'a>] {
        self.parameters.get_or_init(|| {
            self.signatures()
                .iter()
                .flat_map(|s| s.parameters().iter().copied())
                .collect()
        })
    }

    /// First parameter called `name` in any signature
    pub fn parameter(&self, name: &str) -> Option<&MethodParameter<'a>> {
        self.parameters().iter().find(|p| p.name() == name)
    }

    // Documentation

    pub fn has_doc(&self) -> bool {
        self.signatures()
            .iter()
            .any(|s| s.has_doc_with(|doc| self.is_implicit(doc)))
    }

    pub fn has_code_example(&self) -> bool {
        self.signatures().iter().any(MethodSignature::has_code_example)
    }

    /// Whether the declaration's own docstring was synthesized
    pub fn has_implicit_docstring(&self) -> bool {
        self.is_implicit(&self.decl.docstring)
    }

    /// The authored docstring text; empty when the parser synthesized it
    pub fn original_docstring(&self) -> &'a str {
        if self.has_implicit_docstring() {
            ""
        } else {
            self.decl.docstring.as_str()
        }
    }

    pub fn is_nodoc(&self) -> bool {
        self.decl.docstring.is_nodoc()
    }

    pub fn has_api_tag(&self) -> bool {
        self.decl.tags.has(TagKind::Api)
    }

    pub fn has_private_tag(&self) -> bool {
        self.decl.tags.has(TagKind::Private)
    }

    /// Tags whose kind carries no weight as documentation evidence
    pub fn unconsidered_tag_count(&self) -> usize {
        self.decl
            .tags
            .iter()
            .filter(|t| !self.config.considers(t.kind))
            .count()
    }

    pub fn has_unconsidered_tags(&self) -> bool {
        self.unconsidered_tag_count() > 0
    }

    // Return value

    /// Own `@return` tags, then the first `@return` of each `@overload`,
    /// then (for an undocumented setter only) the getter's `@return` tags
    pub fn return_tags(&self) -> &[&'a Tag] {
        self.return_tags.get_or_init(|| {
            let own = self.decl.tags.of_kind(TagKind::Return);
            let overloaded = self
                .decl
                .tags
                .of_kind(TagKind::Overload)
                .filter_map(Tag::as_overload)
                .filter_map(|overload| overload.tags.first(TagKind::Return));
            own.chain(overloaded)
                .chain(self.attributed_return_tags())
                .collect()
        })
    }

    /// A typed, non-synthesized `@return` tag, or authored prose that
    /// mentions the return value
    pub fn is_return_mentioned(&self) -> bool {
        self.return_tags()
            .iter()
            .any(|tag| tag.has_types() && !self.is_implicit_tag(tag))
            || (self.decl.docstring.mentions_return() && !self.has_implicit_docstring())
    }

    /// A `@return` tag that describes the value, or authored prose that
    /// describes it
    pub fn is_return_described(&self) -> bool {
        self.is_return_described_via_tag()
            || (self.decl.docstring.describes_return() && !self.has_implicit_docstring())
    }

    /// A type annotation only counts through the mention signal
    pub fn is_return_typed(&self) -> bool {
        self.is_return_mentioned()
    }

    /// Snapshot of every signal, computed once
    pub fn signals(&self) -> &SignalSet {
        self.signals.get_or_init(|| SignalSet::collect(self))
    }

    fn attributed_return_tags(&self) -> Vec<&'a Tag> {
        if !self.is_setter() || self.decl.tags.has(TagKind::Return) {
            return Vec::new();
        }
        match self.corresponding_getter() {
            Some(getter) => {
                let tags: Vec<&'a Tag> = getter.tags.of_kind(TagKind::Return).collect();
                if !tags.is_empty() {
                    log::debug!(
                        "{}: attributing {} @return tag(s) from {}",
                        self.fullname(),
                        tags.len(),
                        getter.fullname
                    );
                }
                tags
            }
            None => Vec::new(),
        }
    }

    fn is_return_described_via_tag(&self) -> bool {
        self.return_tags().iter().any(|tag| {
            self.describes_unusable_value(tag) || (tag.has_text() && !self.is_implicit_tag(tag))
        })
    }

    /// Exactly one declared type, and it is a "no value" type
    fn describes_unusable_value(&self, tag: &Tag) -> bool {
        let types: Vec<&str> = tag.type_names().collect();
        is_unusable_return(&types, &self.config.unusable_return_values)
    }

    fn is_implicit(&self, docstring: &Docstring) -> bool {
        is_implicit_docstring(
            docstring,
            self.name(),
            self.accessor_role(),
            &self.config.implicit,
        )
    }

    fn is_implicit_tag(&self, tag: &Tag) -> bool {
        is_implicit_tag(tag, self.name(), self.accessor_role(), &self.config.implicit)
    }

    fn sibling(&self, name: &str) -> Option<DeclarationId> {
        let parent = self.decl.parent?;
        self.model.child(parent, name)
    }

    fn resolve(&self, id: DeclarationId, field: &str) -> Option<&'a MethodDeclaration> {
        let resolved = self.model.declaration(id);
        if resolved.is_none() {
            log::warn!(
                "{}: {} refers to missing declaration #{}, treating as absent",
                self.fullname(),
                field,
                id
            );
        }
        resolved
    }
}

impl<M: ObjectModel + ?Sized> fmt::Debug for MethodObject<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodObject")
            .field("id", &self.id)
            .field("fullname", &self.decl.fullname)
            .finish_non_exhaustive()
    }
}
