use serde::{Deserialize, Serialize};

/// The method value that grants every method on a model class.
pub const WILDCARD_METHOD: &str = "*";

/// Grants the role identified by `auth_role_id` the right to invoke
/// `method` on `model_class`.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Permission {
    pub id: i64,
    pub auth_role_id: i64,
    pub model_class: String,
    pub method: String,
}

impl Permission {
    pub fn is_wildcard(&self) -> bool {
        self.method == WILDCARD_METHOD
    }

    /// Whether this permission covers `method` on `model_class`, either
    /// directly or through the wildcard.
    pub fn matches(&self, model_class: &str, method: &str) -> bool {
        self.model_class == model_class
            && (self.method == method || self.is_wildcard())
    }
}

#[cfg(test)]
mod test {
    use super::Permission;

    fn permission(model_class: &str, method: &str) -> Permission {
        Permission {
            id: 1,
            auth_role_id: 1,
            model_class: model_class.to_string(),
            method: method.to_string(),
        }
    }

    #[test]
    fn specific() {
        let p = permission("Beer", "view");
        assert!(!p.is_wildcard());
        assert!(p.matches("Beer", "view"));
        assert!(!p.matches("Beer", "edit"));
        assert!(!p.matches("Wine", "view"));
    }

    #[test]
    fn wildcard() {
        let p = permission("Beer", "*");
        assert!(p.is_wildcard());
        assert!(p.matches("Beer", "view"));
        assert!(p.matches("Beer", "delete"));
        assert!(!p.matches("Wine", "delete"));
    }
}
