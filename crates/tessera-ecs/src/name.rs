use std::fmt;

/// Human-readable label attached to every entity the registry creates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Replace the label.
    pub fn set(&mut self, name: impl Into<String>) {
        self.0 = name.into();
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Name {
    fn from(name: String) -> Self {
        Self(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction() {
        assert_eq!(Name::new("Hero").as_str(), "Hero");
        assert_eq!(Name::from("a"), Name::from("a".to_string()));
        assert_eq!(Name::default().as_str(), "");
    }

    #[test]
    fn rename_and_display() {
        let mut name = Name::new("Entity 3");
        name.set("Lamp");
        assert_eq!(name.to_string(), "Lamp");
    }
}
