// src/application/ports/util.rs

/// Text to URL-safe token. `SlugResolver` never passes its counter separator
/// through here; it slugifies the pieces around it.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
