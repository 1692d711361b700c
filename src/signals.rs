//! Signal snapshot handed to graders.

use serde::{Deserialize, Serialize};

use crate::config::SignalConfig;
use crate::model::{ObjectModel, Visibility};
use crate::method::MethodObject;
use crate::parameter::MethodParameter;

/// Every signal derived for one method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalSet {
    pub fullname: String,
    pub constructor: bool,
    pub bang_name: bool,
    pub questioning_name: bool,
    pub setter: bool,
    pub getter: bool,
    pub aliases_fullnames: Vec<String>,
    pub overridden: bool,
    pub overridden_method_fullname: Option<String>,
    pub has_doc: bool,
    pub has_code_example: bool,
    pub has_multiple_signatures: bool,
    pub signature_count: usize,
    pub original_docstring: String,
    pub return_tag_count: usize,
    pub return_mentioned: bool,
    pub return_described: bool,
    pub return_typed: bool,
    pub nodoc: bool,
    pub api_tag: bool,
    pub private_tag: bool,
    pub visibility: Visibility,
    pub unconsidered_tag_count: usize,
    pub parameters: Vec<ParameterSignals>,
}

/// Signals for one parameter of one signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSignals {
    pub name: String,
    pub in_signature: bool,
    pub block: bool,
    pub splat: bool,
    pub typed: bool,
    pub mentioned: bool,
    pub described: bool,
    pub wrongly_mentioned: bool,
    pub bad_name: bool,
}

impl ParameterSignals {
    pub fn from_parameter(parameter: &MethodParameter<'_>, config: &SignalConfig) -> Self {
        Self {
            name: parameter.name().to_string(),
            in_signature: parameter.in_signature(),
            block: parameter.is_block(),
            splat: parameter.is_splat(),
            typed: parameter.is_typed(),
            mentioned: parameter.is_mentioned(),
            described: parameter.is_described(),
            wrongly_mentioned: parameter.is_wrongly_mentioned(),
            bad_name: parameter.has_bad_name(config),
        }
    }
}

impl SignalSet {
    /// Evaluate every query of `method`
    pub fn collect<M: ObjectModel + ?Sized>(method: &MethodObject<'_, M>) -> Self {
        let config = method.config();
        Self {
            fullname: method.fullname().to_string(),
            constructor: method.is_constructor(),
            bang_name: method.is_bang_name(),
            questioning_name: method.is_questioning_name(),
            setter: method.is_setter(),
            getter: method.is_getter(),
            aliases_fullnames: method
                .aliases_fullnames()
                .into_iter()
                .map(str::to_string)
                .collect(),
            overridden: method.is_overridden(),
            overridden_method_fullname: method.overridden_method_fullname().map(str::to_string),
            has_doc: method.has_doc(),
            has_code_example: method.has_code_example(),
            has_multiple_signatures: method.has_multiple_signatures(),
            signature_count: method.signatures().len(),
            original_docstring: method.original_docstring().to_string(),
            return_tag_count: method.return_tags().len(),
            return_mentioned: method.is_return_mentioned(),
            return_described: method.is_return_described(),
            return_typed: method.is_return_typed(),
            nodoc: method.is_nodoc(),
            api_tag: method.has_api_tag(),
            private_tag: method.has_private_tag(),
            visibility: method.visibility(),
            unconsidered_tag_count: method.unconsidered_tag_count(),
            parameters: method
                .parameters()
                .iter()
                .map(|p| ParameterSignals::from_parameter(p, config))
                .collect(),
        }
    }

    /// First parameter entry called `name`
    pub fn parameter(&self, name: &str) -> Option<&ParameterSignals> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Nothing authored at all: no docstring in any signature, no return
    /// evidence and no parameter documentation
    pub fn is_undocumented(&self) -> bool {
        !self.has_doc
            && !self.return_mentioned
            && !self.return_described
            && self.parameters.iter().all(|p| !p.mentioned)
    }
}
