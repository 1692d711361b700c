//! Detection of documentation the parser wrote on the author's behalf.
//!
//! Attribute accessors get boilerplate docs from the parser ("Returns the
//! value of attribute age"). Such text must not count as evidence that a
//! human documented anything. A docstring or tag is implicit when the
//! parser flagged it, or when its text is exactly the boilerplate for the
//! accessor it belongs to.

use crate::config::{render_template, ImplicitTemplates};
use crate::model::{Docstring, Tag, TagKind};
use crate::naming::getter_name_for;

/// Which half of an attribute pair a method is, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorRole {
    Getter,
    Setter,
    Neither,
}

impl AccessorRole {
    /// Getter wins when both apply
    pub fn from_flags(getter: bool, setter: bool) -> Self {
        match (getter, setter) {
            (true, _) => AccessorRole::Getter,
            (false, true) => AccessorRole::Setter,
            (false, false) => AccessorRole::Neither,
        }
    }
}

/// Whether `docstring` was synthesized for the method `name`
pub fn is_implicit_docstring(
    docstring: &Docstring,
    name: &str,
    role: AccessorRole,
    templates: &ImplicitTemplates,
) -> bool {
    if docstring.implicit {
        return true;
    }
    let template = match role {
        AccessorRole::Getter => &templates.getter_docstring,
        AccessorRole::Setter => &templates.setter_docstring,
        AccessorRole::Neither => return false,
    };
    docstring.text.trim() == render_template(template, getter_name_for(name))
}

/// Whether `tag` was synthesized for the method `name`
pub fn is_implicit_tag(
    tag: &Tag,
    name: &str,
    role: AccessorRole,
    templates: &ImplicitTemplates,
) -> bool {
    if tag.implicit {
        return true;
    }
    if tag.kind != TagKind::Return {
        return false;
    }
    let template = match role {
        AccessorRole::Getter => &templates.getter_return,
        AccessorRole::Setter => &templates.setter_return,
        AccessorRole::Neither => return false,
    };
    tag.text.trim() == render_template(template, getter_name_for(name))
}
