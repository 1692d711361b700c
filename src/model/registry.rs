//! Declaration lookup.
//!
//! Signal extraction only ever reads the declaration graph through
//! [`ObjectModel`], so any parser front end can plug in by implementing
//! it. [`Registry`] is the in-memory arena shipped with the crate; it can
//! be assembled programmatically or decoded from a JSON dump.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{DeclarationId, MethodDeclaration, ScopeId, TagDetail, TagKind};
use crate::errors::{Result, SignalError};

/// Read-only access to a parsed declaration graph
pub trait ObjectModel {
    /// Resolve a declaration id. Unknown ids resolve to `None`.
    fn declaration(&self, id: DeclarationId) -> Option<&MethodDeclaration>;

    /// Find the member of `scope` called `name`
    fn child(&self, scope: ScopeId, name: &str) -> Option<DeclarationId>;

    /// Fully qualified path of a scope, when known
    fn scope_path(&self, _scope: ScopeId) -> Option<&str> {
        None
    }
}

/// An enclosing type or module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    pub path: String,
}

/// Arena of scopes and method declarations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default)]
    scopes: Vec<Scope>,
    #[serde(default)]
    declarations: Vec<MethodDeclaration>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a registry from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        let registry: Registry = serde_json::from_str(json)?;
        log::debug!(
            "Decoded registry with {} scopes and {} declarations",
            registry.scopes.len(),
            registry.declarations.len()
        );
        Ok(registry)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn add_scope(&mut self, path: impl Into<String>) -> ScopeId {
        self.scopes.push(Scope { path: path.into() });
        ScopeId(self.scopes.len() - 1)
    }

    pub fn add(&mut self, declaration: MethodDeclaration) -> DeclarationId {
        self.declarations.push(declaration);
        DeclarationId(self.declarations.len() - 1)
    }

    /// Mutable access for wiring cross references after insertion
    pub fn get_mut(&mut self, id: DeclarationId) -> Option<&mut MethodDeclaration> {
        self.declarations.get_mut(id.0)
    }

    pub fn find_by_fullname(&self, fullname: &str) -> Option<DeclarationId> {
        self.declarations
            .iter()
            .position(|d| d.fullname == fullname)
            .map(DeclarationId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DeclarationId, &MethodDeclaration)> {
        self.declarations
            .iter()
            .enumerate()
            .map(|(index, decl)| (DeclarationId(index), decl))
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Report malformed input without failing.
    ///
    /// Every problem found here is also tolerated by signal extraction,
    /// which treats the offending field as absent.
    pub fn validate(&self) -> Vec<SignalError> {
        let mut problems = Vec::new();
        for (_, decl) in self.iter() {
            self.check_references(decl, &mut problems);
            check_tags(decl, &mut problems);
        }
        self.check_duplicate_members(&mut problems);

        for problem in &problems {
            log::warn!("{}", problem);
        }
        problems
    }

    fn check_references(&self, decl: &MethodDeclaration, problems: &mut Vec<SignalError>) {
        if let Some(parent) = decl.parent {
            if self.scopes.get(parent.0).is_none() {
                problems.push(SignalError::DanglingScope {
                    from: decl.fullname.clone(),
                    target: parent,
                });
            }
        }

        let attr = decl.attr_info.unwrap_or_default();
        let references = decl
            .aliases
            .iter()
            .map(|id| ("aliases", *id))
            .chain(decl.overridden_method.map(|id| ("overridden_method", id)))
            .chain(attr.read.map(|id| ("attr_info.read", id)))
            .chain(attr.write.map(|id| ("attr_info.write", id)));

        for (field, target) in references {
            if self.declaration(target).is_none() {
                problems.push(SignalError::DanglingDeclaration {
                    from: decl.fullname.clone(),
                    field,
                    target,
                });
            }
        }
    }

    fn check_duplicate_members(&self, problems: &mut Vec<SignalError>) {
        let mut seen = HashSet::new();
        for (_, decl) in self.iter() {
            let Some(parent) = decl.parent else {
                continue;
            };
            if !seen.insert((parent, decl.name.as_str())) {
                problems.push(SignalError::DuplicateMember {
                    scope: self
                        .scope_path(parent)
                        .unwrap_or("<unknown scope>")
                        .to_string(),
                    name: decl.name.clone(),
                });
            }
        }
    }
}

fn check_tags(decl: &MethodDeclaration, problems: &mut Vec<SignalError>) {
    for tag in &decl.tags {
        match (tag.kind, &tag.detail) {
            (TagKind::Overload, TagDetail::Plain) => problems.push(SignalError::malformed_tag(
                &decl.fullname,
                tag.kind.as_str(),
                "overload carries no signature",
            )),
            (TagKind::Param, _) if tag.name.is_none() => problems.push(SignalError::malformed_tag(
                &decl.fullname,
                tag.kind.as_str(),
                "parameter tag names no parameter",
            )),
            _ => {}
        }
    }
}

impl ObjectModel for Registry {
    fn declaration(&self, id: DeclarationId) -> Option<&MethodDeclaration> {
        self.declarations.get(id.0)
    }

    fn child(&self, scope: ScopeId, name: &str) -> Option<DeclarationId> {
        self.iter()
            .find(|(_, decl)| decl.parent == Some(scope) && decl.name == name)
            .map(|(id, _)| id)
    }

    fn scope_path(&self, scope: ScopeId) -> Option<&str> {
        self.scopes.get(scope.0).map(|s| s.path.as_str())
    }
}
