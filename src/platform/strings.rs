use dashmap::DashMap;

/// Keys of the user-facing messages this crate needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringKey {
    ErrorNoConnection,
    ErrorUnableToConnect,
}

/// Lookup of localized messages
pub trait StringProvider: Send + Sync {
    fn get(&self, key: StringKey) -> String;
}

/// Built-in English messages
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStrings;

impl DefaultStrings {
    pub fn message(key: StringKey) -> &'static str {
        match key {
            StringKey::ErrorNoConnection => {
                "No internet connection. Check your network and try again."
            }
            StringKey::ErrorUnableToConnect => "Unable to connect to the service right now.",
        }
    }
}

impl StringProvider for DefaultStrings {
    fn get(&self, key: StringKey) -> String {
        Self::message(key).to_string()
    }
}

/// Concurrent message table; keys without an override fall back to `DefaultStrings`
#[derive(Debug, Default)]
pub struct StringTable {
    overrides: DashMap<StringKey, String>,
}

impl StringTable {
    pub fn new() -> Self {
        Self {
            overrides: DashMap::new(),
        }
    }

    /// Builder-style override, for setting up a table in one expression
    pub fn with(self, key: StringKey, message: impl Into<String>) -> Self {
        self.set(key, message);
        self
    }

    /// Replace a message, returning the previous override if any
    pub fn set(&self, key: StringKey, message: impl Into<String>) -> Option<String> {
        self.overrides.insert(key, message.into())
    }
}

impl StringProvider for StringTable {
    fn get(&self, key: StringKey) -> String {
        self.overrides
            .get(&key)
            .map(|entry| entry.value().clone())
            .unwrap_or_else(|| DefaultStrings::message(key).to_string())
    }
}

impl<S: StringProvider + ?Sized> StringProvider for &S {
    fn get(&self, key: StringKey) -> String {
        (**self).get(key)
    }
}

impl<S: StringProvider + ?Sized> StringProvider for std::sync::Arc<S> {
    fn get(&self, key: StringKey) -> String {
        (**self).get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_falls_back_to_defaults() {
        let table = StringTable::new();
        assert_eq!(
            table.get(StringKey::ErrorNoConnection),
            DefaultStrings::message(StringKey::ErrorNoConnection)
        );
    }

    #[test]
    fn table_overrides_messages() {
        let table = StringTable::new().with(StringKey::ErrorNoConnection, "Sin conexión");
        assert_eq!(table.get(StringKey::ErrorNoConnection), "Sin conexión");

        let previous = table.set(StringKey::ErrorNoConnection, "Pas de connexion");
        assert_eq!(previous.as_deref(), Some("Sin conexión"));
        assert_eq!(table.get(StringKey::ErrorNoConnection), "Pas de connexion");

        // Other keys keep their defaults
        assert_eq!(
            table.get(StringKey::ErrorUnableToConnect),
            DefaultStrings::message(StringKey::ErrorUnableToConnect)
        );
    }
}
