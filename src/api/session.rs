use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use kb_session::{KeyboardSession, Language};

use super::{KbError, KbLanguage, KbSuggestionUpdate, KbTextEdit};

#[derive(uniffi::Object)]
pub struct KbKeyboardSession {
    session: Mutex<KeyboardSession>,
}

impl KbKeyboardSession {
    fn lock(&self) -> MutexGuard<'_, KeyboardSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[uniffi::export]
impl KbKeyboardSession {
    #[uniffi::constructor]
    pub fn new(languages: Vec<KbLanguage>) -> Result<Arc<Self>, KbError> {
        let languages: Vec<Language> = languages.into_iter().map(Into::into).collect();
        let session = KeyboardSession::new(languages)?;
        Ok(Arc::new(Self {
            session: Mutex::new(session),
        }))
    }

    /// Call after every insertion or deletion with the text before the cursor.
    pub fn refresh(&self, context_before: String) -> KbSuggestionUpdate {
        self.lock().refresh(&context_before).into()
    }

    pub fn accept(&self, context_before: String, suggestion: String) -> Option<KbTextEdit> {
        self.lock()
            .accept(&context_before, &suggestion)
            .map(Into::into)
    }

    pub fn suggestions(&self) -> Vec<String> {
        self.lock().suggestions().to_vec()
    }

    pub fn switch_language(&self) -> Result<Option<String>, KbError> {
        let mut session = self.lock();
        let name = session.switch_language()?;
        Ok(name.map(str::to_string))
    }

    pub fn previous_language(&self) -> Result<Option<String>, KbError> {
        let mut session = self.lock();
        let name = session.previous_language()?;
        Ok(name.map(str::to_string))
    }

    pub fn select_language(&self, name: String) -> Result<(), KbError> {
        self.lock().select_language(&name)?;
        Ok(())
    }

    pub fn current_language(&self) -> Option<String> {
        self.lock().current_language().map(|l| l.name.clone())
    }

    pub fn language_names(&self) -> Vec<String> {
        self.lock()
            .language_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
