// src/document/login.rs
// Login form heuristic: serialized markup containing any login-related word.
// Case-sensitive substring match, so "Login" alone does not count.

use super::parse::ParsedDocument;

pub const LOGIN_VOCABULARY: &[&str] = &["login", "password", "signup", "signin", "logout"];

#[derive(Debug, Clone, Copy)]
pub struct LoginFormDetector<'a> {
    vocabulary: &'a [&'a str],
}

impl Default for LoginFormDetector<'static> {
    fn default() -> Self {
        Self::new(LOGIN_VOCABULARY)
    }
}

impl<'a> LoginFormDetector<'a> {
    pub fn new(vocabulary: &'a [&'a str]) -> Self {
        Self { vocabulary }
    }

    pub fn detect(&self, document: &ParsedDocument) -> bool {
        self.detect_in_markup(&document.to_markup())
    }

    pub fn detect_in_markup(&self, markup: &str) -> bool {
        self.vocabulary.iter().any(|word| markup.contains(*word))
    }
}
