// tests/support/declarations.rs
// Article types differing only in how their slug is derived.
use core_cms::domain::article::BasicArticle;
use core_cms::domain::mixins::{SlugDeclaration, SlugSettings};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleSlug;

impl SlugDeclaration for TitleSlug {
    fn slug_settings() -> SlugSettings {
        SlugSettings::from_fields(["title"])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueTitleSlug;

impl SlugDeclaration for UniqueTitleSlug {
    fn slug_settings() -> SlugSettings {
        SlugSettings::from_fields(["title"]).unique_globally()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HatTitleSlug;

impl SlugDeclaration for HatTitleSlug {
    fn slug_settings() -> SlugSettings {
        SlugSettings::from_fields(["hat", "title"])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerAuthorSlug;

impl SlugDeclaration for PerAuthorSlug {
    fn slug_settings() -> SlugSettings {
        SlugSettings::from_fields(["title"]).unique_within(["author"])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleSlug;

impl SlugDeclaration for SubtitleSlug {
    fn slug_settings() -> SlugSettings {
        SlugSettings::from_fields(["subtitle"])
    }
}

pub type Article = BasicArticle<TitleSlug>;
pub type UniqueArticle = BasicArticle<UniqueTitleSlug>;
