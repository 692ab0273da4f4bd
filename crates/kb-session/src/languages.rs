use kb_core::suggest::WeightedTerm;

/// A named vocabulary, e.g. one keyboard language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    pub vocabulary: Vec<WeightedTerm>,
}

impl Language {
    pub fn new(name: impl Into<String>, vocabulary: Vec<WeightedTerm>) -> Self {
        Self {
            name: name.into(),
            vocabulary,
        }
    }
}

/// Languages cycled in order. Both directions wrap around.
#[derive(Debug, Default)]
pub struct LanguageRing {
    languages: Vec<Language>,
    current: usize,
}

impl LanguageRing {
    pub fn new(languages: Vec<Language>) -> Self {
        Self {
            languages,
            current: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    pub fn current(&self) -> Option<&Language> {
        self.languages.get(self.current)
    }

    pub fn advance(&mut self) -> Option<&Language> {
        if self.languages.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.languages.len();
        self.current()
    }

    pub fn retreat(&mut self) -> Option<&Language> {
        if self.languages.is_empty() {
            return None;
        }
        self.current = (self.current + self.languages.len() - 1) % self.languages.len();
        self.current()
    }

    /// Make the language called `name` current. Returns `false` if unknown.
    pub fn select(&mut self, name: &str) -> bool {
        match self.languages.iter().position(|l| l.name == name) {
            Some(idx) => {
                self.current = idx;
                true
            }
            None => false,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|l| l.name.as_str())
    }
}
