use serde::{Deserialize, Serialize};
use super::agent::Agent;

/// What the hosting application knows about the current request: who is
/// asking, and which model class and action the request is routed to.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct RequestContext {
    pub agent: Agent,
    pub model_class: Option<String>,
    pub action: Option<String>,
}

impl RequestContext {
    pub fn new(agent: impl Into<Agent>) -> Self {
        Self {
            agent: agent.into(),
            .. Default::default()
        }
    }

    pub fn model_class(mut self, val: impl Into<String>) -> Self {
        self.model_class = Some(val.into());
        self
    }

    pub fn action(mut self, val: impl Into<String>) -> Self {
        self.action = Some(val.into());
        self
    }

    /// The current model class, with an empty value treated as unset.
    pub fn current_model_class(&self) -> Option<&str> {
        non_empty(self.model_class.as_deref())
    }

    /// The current action, with an empty value treated as unset.
    pub fn current_action(&self) -> Option<&str> {
        non_empty(self.action.as_deref())
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
