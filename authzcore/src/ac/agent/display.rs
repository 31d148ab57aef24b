use std::fmt::{
    Display,
    Formatter,
    Result,
};

use crate::ac::user::User;
use super::Agent;

impl Display for Agent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Agent::Anonymous => write!(f, "<Agent:Anonymous>"),
            Agent::User(User { id, name }) => write!(f, "<User:{name}#{id}>"),
        }
    }
}
