//! Documentation-completeness signals for method declarations.
//!
//! Given a parsed method declaration, docsignal derives the facts a
//! documentation grader needs: whether the method is documented at all,
//! whether its return value is typed or described, what kind of method it
//! is (constructor, getter, setter, bang or predicate method) and which
//! call signatures it exposes.
//!
//! ```rust
//! use docsignal::config::SignalConfig;
//! use docsignal::model::{MethodDeclaration, Parameter, Registry, Tag};
//! use docsignal::MethodObject;
//!
//! let mut registry = Registry::new();
//! let person = registry.add_scope("Person");
//!
//! let mut getter = MethodDeclaration::new("age", "Person#age");
//! getter.parent = Some(person);
//! getter.tags.push(Tag::returns(&["Integer"], "the age"));
//! registry.add(getter);
//!
//! let mut setter = MethodDeclaration::new("age=", "Person#age=");
//! setter.parent = Some(person);
//! setter.parameters.push(Parameter::new("value"));
//! let setter = registry.add(setter);
//!
//! let config = SignalConfig::default();
//! let method = MethodObject::with_config(&registry, setter, &config).unwrap();
//! assert!(method.is_setter());
//! assert!(method.is_return_described());
//! ```

pub mod config;
pub mod errors;
pub mod implicit;
pub mod method;
pub mod model;
pub mod naming;
pub mod parameter;
pub mod signals;
pub mod signature;

// Re-export commonly used types
pub use crate::errors::{Result, SignalError};
pub use crate::method::MethodObject;
pub use crate::model::{DeclarationId, MethodDeclaration, ObjectModel, Registry};
pub use crate::signals::{ParameterSignals, SignalSet};
pub use crate::signature::{resolve_signatures, MethodSignature, SignatureOrigin};
