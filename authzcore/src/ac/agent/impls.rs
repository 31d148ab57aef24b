use crate::ac::user::User;
use super::Agent;

impl Agent {
    pub fn user_id(&self) -> Option<i64> {
        self.into()
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Agent::Anonymous)
    }
}

impl From<User> for Agent {
    fn from(user: User) -> Agent {
        Agent::User(user)
    }
}

impl From<Option<User>> for Agent {
    fn from(user: Option<User>) -> Agent {
        user.map(Agent::User).unwrap_or_default()
    }
}

impl From<&Agent> for Option<i64> {
    fn from(agent: &Agent) -> Self {
        match agent {
            Agent::Anonymous => None,
            Agent::User(User { id, .. }) => Some(*id),
        }
    }
}

impl From<Agent> for Option<String> {
    fn from(agent: Agent) -> Self {
        match agent {
            Agent::Anonymous => None,
            Agent::User(User { name, .. }) => Some(name),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::ac::user::User;
    use super::Agent;

    #[test]
    fn conversion() {
        let user = User { id: 3, name: "admin".to_string() };
        let agent: Agent = user.clone().into();
        assert_eq!(agent.user_id(), Some(3));
        assert!(!agent.is_anonymous());
        assert_eq!(Option::<String>::from(agent), Some("admin".to_string()));

        let agent: Agent = None.into();
        assert_eq!(agent, Agent::Anonymous);
        assert_eq!(agent.user_id(), None);
        assert!(agent.is_anonymous());
        assert_eq!(Agent::from(Some(user)).user_id(), Some(3));
    }
}
