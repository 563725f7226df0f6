use serde::Serialize;

/// A person who can borrow items, identified by phone number.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct Contact {
    pub name: String,
    /// Unique key within the contact store.
    pub phone: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_serialization() {
        let contact = Contact::new("Ana", "111");
        let json = serde_json::to_string(&contact).unwrap();
        assert_eq!(json, r#"{"name":"Ana","phone":"111"}"#);
    }
}
