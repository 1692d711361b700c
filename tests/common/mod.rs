// Test utility module for docsignal integration tests
#![allow(dead_code)]

use docsignal::config::SignalConfig;
use docsignal::model::{
    AttrInfo, DeclarationId, Docstring, MethodDeclaration, OverloadTag, Parameter, Registry,
    ScopeId, Tag,
};
use docsignal::MethodObject;

/// Builds a registry with a single enclosing scope
#[derive(Debug)]
pub struct ScopeFixture {
    pub registry: Registry,
    pub scope: ScopeId,
    pub path: String,
    pub config: SignalConfig,
}

impl ScopeFixture {
    pub fn new(path: &str) -> Self {
        let mut registry = Registry::new();
        let scope = registry.add_scope(path);
        Self {
            registry,
            scope,
            path: path.to_string(),
            config: SignalConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SignalConfig) -> Self {
        self.config = config;
        self
    }

    /// Start a method declaration inside the scope
    pub fn method(&mut self, name: &str) -> MethodBuilder<'_> {
        let mut decl = MethodDeclaration::new(name, format!("{}#{}", self.path, name));
        decl.parent = Some(self.scope);
        MethodBuilder {
            registry: &mut self.registry,
            decl,
        }
    }

    pub fn wrap(&self, id: DeclarationId) -> MethodObject<'_> {
        MethodObject::with_config(&self.registry, id, &self.config)
            .expect("fixture declaration should exist")
    }
}

pub struct MethodBuilder<'r> {
    registry: &'r mut Registry,
    decl: MethodDeclaration,
}

impl MethodBuilder<'_> {
    /// Parameters as raw signature tokens, e.g. `"*args"`
    pub fn params(mut self, tokens: &[&str]) -> Self {
        self.decl.parameters = tokens
            .iter()
            .filter_map(|t| Parameter::from_signature_token(t))
            .collect();
        self
    }

    pub fn doc(mut self, text: &str) -> Self {
        self.decl.docstring = Docstring::new(text);
        self
    }

    pub fn synthesized_doc(mut self, text: &str) -> Self {
        self.decl.docstring = Docstring::synthesized(text);
        self
    }

    pub fn tag(mut self, tag: Tag) -> Self {
        self.decl.tags.push(tag);
        self
    }

    pub fn overload(self, tokens: &[&str], tags: Vec<Tag>, doc: &str) -> Self {
        let overload = OverloadTag {
            parameters: tokens
                .iter()
                .filter_map(|t| Parameter::from_signature_token(t))
                .collect(),
            docstring: Docstring::new(doc),
            tags: tags.into_iter().collect(),
        };
        self.tag(Tag::overload(overload))
    }

    pub fn attr(mut self, read: Option<DeclarationId>, write: Option<DeclarationId>) -> Self {
        self.decl.attr_info = Some(AttrInfo { read, write });
        self
    }

    pub fn overrides(mut self, id: DeclarationId) -> Self {
        self.decl.overridden_method = Some(id);
        self
    }

    pub fn aliases(mut self, ids: &[DeclarationId]) -> Self {
        self.decl.aliases = ids.to_vec();
        self
    }

    pub fn add(self) -> DeclarationId {
        self.registry.add(self.decl)
    }
}
