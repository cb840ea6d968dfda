//! Hard-coded site content and the filters the sections run over it.

mod credentials;
mod posts;
mod projects;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use thiserror::Error;

pub use credentials::{
    filter_skills, skill_categories, Certification, Education, Skill, CERTIFICATIONS, CV_LINK,
    EDUCATION, SKILLS,
};
pub use posts::{BlogPost, POSTS};
pub use projects::{Project, PROJECTS};

/// Filter value meaning "every category".
pub const ALL: &str = "all";

pub const PROFILE_PLACEHOLDER: &str = "https://via.placeholder.com/400x400?text=Profile+Image";
pub const PROJECT_PLACEHOLDER: &str =
    "https://via.placeholder.com/400x256?text=Image+Not+Available";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("invalid date {0:?}")]
    BadDate(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Ai,
    Cybersecurity,
    Blockchain,
    Fullstack,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Ai,
        Category::Cybersecurity,
        Category::Blockchain,
        Category::Fullstack,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Category::Ai => "ai",
            Category::Cybersecurity => "cybersecurity",
            Category::Blockchain => "blockchain",
            Category::Fullstack => "fullstack",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Ai => "AI/ML",
            Category::Cybersecurity => "Cybersecurity",
            Category::Blockchain => "Blockchain",
            Category::Fullstack => "Full Stack",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Category::Ai => "bg-purple-600",
            Category::Cybersecurity => "bg-red-600",
            Category::Blockchain => "bg-blue-600",
            Category::Fullstack => "bg-green-600",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub struct Profile {
    pub brand: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
    pub cta: &'static str,
    pub socials: &'static [SocialLink],
}

pub const PROFILE: Profile = Profile {
    brand: "Flexyledger",
    name: "Jay Arre Talosig",
    title: "Machine Learning Engineer | Blockchain Developer | Bioinformatics Student",
    bio: "With 9 years of experience in the tech industry, specializing in AI/ML and Blockchain solutions, and currently learning Bioinformatics. Passionate about leveraging cutting-edge technology to solve complex biological problems and build decentralized applications.",
    image: "/projects/1.Jay Arre Talosig.png",
    cta: "View My Work",
    socials: &[
        SocialLink {
            label: "GitHub",
            href: "https://github.com/flexyledger",
        },
        SocialLink {
            label: "LinkedIn",
            href: "https://linkedin.com/in/flexycode",
        },
        SocialLink {
            label: "Twitter",
            href: "https://twitter.com/flexyledger",
        },
    ],
};

/// Items the section filters can scan.
pub trait Searchable {
    fn category_slug(&self) -> &str;
    /// Text fields matched by the search box.
    fn search_fields(&self) -> [&str; 2];
}

/// Current state of a section's category tabs and search box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// `None` selects every category.
    pub category: Option<String>,
    pub search: String,
}

impl Filter {
    pub fn new(category: &str, search: &str) -> Self {
        let category = if category == ALL {
            None
        } else {
            Some(category.to_string())
        };
        Self {
            category,
            search: search.to_string(),
        }
    }

    pub fn is_default(&self) -> bool {
        self.category.is_none() && self.search.is_empty()
    }

    pub fn matches<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .is_none_or(|c| item.category_slug() == c);
        if !category_ok {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        item.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Linear scan keeping order; cheap enough to rerun on every keystroke.
pub fn filter_items<'a, T: Searchable>(items: &'a [T], filter: &Filter) -> Vec<&'a T> {
    items.iter().filter(|item| filter.matches(*item)).collect()
}

/// "all" followed by each category in first-seen order.
pub fn categories<'a, I>(slugs: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = vec![ALL];
    for slug in slugs {
        if !out.contains(&slug) {
            out.push(slug);
        }
    }
    out
}

pub fn post_categories(posts: &[BlogPost]) -> Vec<&str> {
    categories(posts.iter().map(|p| p.category))
}

pub fn featured(posts: &[BlogPost], n: usize) -> Vec<&BlogPost> {
    posts.iter().filter(|p| p.featured).take(n).collect()
}

/// "blockchain" -> "Blockchain"
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Year stamped by the build script; the clock is only a fallback.
pub fn copyright_year() -> i32 {
    build_year(env!("BUILD_TIME")).unwrap_or_else(|| Utc::now().year())
}

fn build_year(stamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(stamp).ok().map(|dt| dt.year())
}

pub(crate) fn parse_date(raw: &'static str) -> Result<NaiveDate, ContentError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ContentError::BadDate(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blockchain_category_exact() {
        let filter = Filter::new("blockchain", "");
        let got = filter_items(PROJECTS, &filter);
        let expected = PROJECTS
            .iter()
            .filter(|p| p.category == Category::Blockchain)
            .collect::<Vec<_>>();

        assert_eq!(got, expected);
        assert_eq!(got.len(), 5);
    }

    #[test]
    fn test_all_with_empty_search_is_everything() {
        let filter = Filter::new(ALL, "");
        assert!(filter.is_default());
        assert_eq!(filter_items(PROJECTS, &filter).len(), PROJECTS.len());
        assert_eq!(filter_items(POSTS, &filter).len(), POSTS.len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        for query in ["AI", "ai", "Ai"] {
            let filter = Filter::new(ALL, query);
            let got = filter_items(POSTS, &filter);
            let expected = POSTS
                .iter()
                .filter(|p| {
                    p.title.to_lowercase().contains("ai")
                        || p.excerpt.to_lowercase().contains("ai")
                })
                .collect::<Vec<_>>();
            assert_eq!(got, expected);
            assert!(!got.is_empty());
        }
    }

    #[test]
    fn test_search_and_category_combine() {
        let filter = Filter::new("ai", "protein");
        let got = filter_items(POSTS, &filter);

        assert_eq!(got.len(), 1);
        assert_eq!(got[0].id, "5");
    }

    #[test]
    fn test_search_without_match() {
        let filter = Filter::new(ALL, "quantum gravity");
        assert!(filter_items(POSTS, &filter).is_empty());
    }

    #[test]
    fn test_project_search_uses_name_and_description() {
        let filter = Filter::new(ALL, "pharmaxledger");
        let ids = filter_items(PROJECTS, &filter)
            .into_iter()
            .map(|p| p.id)
            .collect::<Vec<_>>();

        assert_eq!(ids, vec!["fs-1", "bc-1"]);
    }

    #[test]
    fn test_post_categories_first_seen_order() {
        assert_eq!(
            post_categories(POSTS),
            vec!["all", "ai", "blockchain", "cybersecurity", "fullstack"]
        );
    }

    #[test]
    fn test_featured_limit() {
        let posts = featured(POSTS, 2);
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| p.featured));
        assert!(featured(POSTS, 1).len() == 1);
    }

    #[test]
    fn test_category_slug_roundtrip() {
        for c in Category::ALL {
            assert_eq!(Category::from_slug(c.slug()), Some(c));
        }
        assert_eq!(Category::from_slug("all"), None);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("blockchain"), "Blockchain");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_build_year() {
        assert_eq!(build_year("2026-03-01T12:00:00+00:00"), Some(2026));
        assert_eq!(build_year("not a timestamp"), None);
        assert!(copyright_year() >= 2025);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date("yesterday"), Err(ContentError::BadDate("yesterday")));
    }
}
