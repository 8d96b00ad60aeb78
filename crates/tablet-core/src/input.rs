/// A key-press notification delivered by the host UI.
///
/// `key` is the host's key identifier (`"F2"`, `"Escape"`, ...).
/// `prevent_default` asks the host not to run its own handling for the key.
pub trait KeyInput {
    fn key(&self) -> &str;
    fn prevent_default(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub default_prevented: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            default_prevented: false,
        }
    }
}

impl KeyInput for KeyPress {
    fn key(&self) -> &str {
        &self.key
    }

    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}
