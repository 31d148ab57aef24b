use authzcore::ac::{
    agent::Agent,
    context::RequestContext,
    traits::PermissionBackend,
};
use std::collections::BTreeSet;

use crate::error::Error;
use super::Platform;

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

// An explicitly provided user id takes precedence over the agent.
fn resolve_user_id(agent: &Agent, user_id: Option<i64>) -> Option<i64> {
    user_id.or_else(|| agent.user_id())
}

// Authorization decisions.

impl Platform {
    /// Whether the agent may invoke `action` on `model_class`.
    ///
    /// Anonymous agents, and empty model classes or actions, are never
    /// authorized; the backend is not consulted for these.  Backend
    /// failures are returned as errors and must not be read as a denial.
    pub async fn is_authorized(
        &self,
        agent: &Agent,
        action: &str,
        model_class: &str,
    ) -> Result<bool, Error> {
        let Some(user_id) = agent.user_id() else {
            log::debug!("denied: agent={agent} is anonymous");
            return Ok(false);
        };
        if model_class.is_empty() || action.is_empty() {
            log::debug!(
                "denied: agent={agent} model_class={model_class:?} action={action:?} incomplete"
            );
            return Ok(false);
        }
        let result = self.authz_platform
            .exists_grant(user_id, model_class, action)
            .await?;
        log::trace!(
            "is_authorized: agent={agent} model_class={model_class:?} action={action:?} result={result}"
        );
        Ok(result)
    }

    /// The model classes on which a user holds any permission.  The user
    /// is `user_id` if provided, otherwise the agent; an empty set is
    /// returned when neither identifies a user.
    pub async fn authorized_classes(
        &self,
        agent: &Agent,
        user_id: Option<i64>,
    ) -> Result<BTreeSet<String>, Error> {
        let Some(user_id) = resolve_user_id(agent, user_id) else {
            log::debug!("authorized_classes: agent={agent} has no user to report on");
            return Ok(BTreeSet::new());
        };
        let result = self.authz_platform
            .distinct_classes_for_user(user_id)
            .await?;
        log::trace!("authorized_classes: user_id={user_id} result={result:?}");
        Ok(result)
    }

    /// The methods granted to a user on a model class, one entry per
    /// granting permission, so duplicates across roles are retained.
    ///
    /// The user resolves as per `authorized_classes`; the model class is
    /// `model_class` if provided, otherwise `context_class`.  An empty
    /// list is returned when either cannot be resolved.
    pub async fn authorized_methods(
        &self,
        agent: &Agent,
        user_id: Option<i64>,
        model_class: Option<&str>,
        context_class: Option<&str>,
    ) -> Result<Vec<String>, Error> {
        let user_id = resolve_user_id(agent, user_id);
        let model_class = non_empty(model_class).or(non_empty(context_class));
        let (Some(user_id), Some(model_class)) = (user_id, model_class) else {
            log::debug!(
                "authorized_methods: agent={agent} user_id={user_id:?} model_class={model_class:?} unresolved"
            );
            return Ok(Vec::new());
        };
        let result = self.authz_platform
            .methods_for_user_and_class(user_id, model_class)
            .await?;
        log::trace!(
            "authorized_methods: user_id={user_id} model_class={model_class:?} result={result:?}"
        );
        Ok(result)
    }
}

// Request context variants.

impl Platform {
    /// Decide on the action and model class the request is routed to.
    pub async fn enforce(
        &self,
        ctx: &RequestContext,
    ) -> Result<bool, Error> {
        self.is_authorized(
            &ctx.agent,
            ctx.current_action().unwrap_or_default(),
            ctx.current_model_class().unwrap_or_default(),
        ).await
    }

    pub async fn context_classes(
        &self,
        ctx: &RequestContext,
    ) -> Result<BTreeSet<String>, Error> {
        self.authorized_classes(&ctx.agent, None).await
    }

    pub async fn context_methods(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<String>, Error> {
        self.authorized_methods(
            &ctx.agent,
            None,
            None,
            ctx.current_model_class(),
        ).await
    }
}
