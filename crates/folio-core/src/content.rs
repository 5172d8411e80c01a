//! Portfolio content model and the page's literal content.
//!
//! Every section is an immutable [`ContentSection`] built once at startup.
//! [`Portfolio::new`] enforces the only invariant: section identifiers are
//! unique, and each is a valid in-page anchor.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Decorative glyph shown beside a section title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionIcon {
    Briefcase,
    Cpu,
    Code,
    BookOpen,
    Award,
    Database,
}

impl SectionIcon {
    /// Accessible name for the glyph.
    pub fn label(&self) -> &'static str {
        match self {
            SectionIcon::Briefcase => "briefcase",
            SectionIcon::Cpu => "processor",
            SectionIcon::Code => "code",
            SectionIcon::BookOpen => "open book",
            SectionIcon::Award => "award",
            SectionIcon::Database => "database",
        }
    }
}

/// A position held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub title: String,
    pub organisation: String,
    pub summary: String,
    pub highlights: Vec<String>,
}

impl Role {
    /// Heading line, e.g. "Data Engineer @ Accenture".
    pub fn heading(&self) -> String {
        format!("{} @ {}", self.title, self.organisation)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub venue: String,
    pub year: u16,
}

impl Publication {
    /// "Venue, Year" line shown under the title.
    pub fn citation(&self) -> String {
        format!("{}, {}", self.venue, self.year)
    }
}

/// Body of a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionBody {
    Experience { roles: Vec<Role> },
    Projects { projects: Vec<Project> },
    Skills { skills: Vec<String> },
    Publications { publications: Vec<Publication> },
    Achievements {
        awards: Vec<String>,
        certifications: Vec<String>,
    },
    /// Free text, written in markdown
    Narrative { markdown: String },
}

/// A titled, independently revealed block of page content.
///
/// Generic over the body so the container carries any content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSection<B = SectionBody> {
    /// Anchor identifier, unique on the page
    pub id: String,
    pub title: String,
    pub icon: SectionIcon,
    pub body: B,
}

impl<B> ContentSection<B> {
    pub fn new(id: impl Into<String>, title: impl Into<String>, icon: SectionIcon, body: B) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon,
            body,
        }
    }

    /// In-page link to this section.
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub headline: String,
    pub tagline: String,
    pub scroll_hint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub notice: String,
}

/// The whole page: hero, sections in display order, footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Portfolio<B = SectionBody> {
    pub hero: Hero,
    sections: Vec<ContentSection<B>>,
    pub footer: Footer,
}

impl<B> Portfolio<B> {
    /// Build a page, rejecting empty, malformed or duplicate identifiers.
    pub fn new(hero: Hero, sections: Vec<ContentSection<B>>, footer: Footer) -> Result<Self> {
        let mut seen = HashSet::new();
        for section in &sections {
            if !is_anchor_slug(&section.id) {
                return Err(FolioError::InvalidSectionId(section.id.clone()));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(FolioError::DuplicateSectionId(section.id.clone()));
            }
        }
        Ok(Self {
            hero,
            sections,
            footer,
        })
    }

    pub fn sections(&self) -> &[ContentSection<B>] {
        &self.sections
    }

    /// Section identifiers in display order.
    pub fn anchors(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.id.as_str()).collect()
    }

    pub fn section(&self, id: &str) -> Result<&ContentSection<B>> {
        self.sections
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| FolioError::UnknownSection(id.to_string()))
    }
}

/// Lowercase ASCII letters, digits and '-', non-empty.
pub fn is_anchor_slug(id: &str) -> bool {
    !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The page content, in display order.
pub fn portfolio() -> Result<Portfolio> {
    let hero = Hero {
        headline: "AI & DATA ENGINEER".into(),
        tagline: "POSTGRADUATE PORTFOLIO // DATA PIPELINING // MACHINE LEARNING".into(),
        scroll_hint: "\u{2193} Scroll to traverse data points".into(),
    };

    let sections = vec![
        ContentSection::new(
            "experience",
            "Work Experience",
            SectionIcon::Briefcase,
            SectionBody::Experience {
                roles: vec![Role {
                    title: "Data Engineer".into(),
                    organisation: "Accenture".into(),
                    summary: "Collaborated in cross-functional teams to build scalable ETL pipelines."
                        .into(),
                    highlights: strings(&[
                        "Optimized SQL queries reducing processing time by 30%.",
                        "Architected data lakes for high-volume enterprise clients.",
                    ]),
                }],
            },
        ),
        ContentSection::new(
            "projects",
            "AI & ML Projects",
            SectionIcon::Cpu,
            SectionBody::Projects {
                projects: vec![
                    Project {
                        name: "SME Lending AI".into(),
                        description: "Predictive modeling for small business credit risk.".into(),
                    },
                    Project {
                        name: "NLP Sentiment Engine".into(),
                        description: "Real-time analysis of streaming financial news.".into(),
                    },
                ],
            },
        ),
        ContentSection::new(
            "skills",
            "Technical Skills",
            SectionIcon::Code,
            SectionBody::Skills {
                skills: strings(&[
                    "Python",
                    "PySpark",
                    "AWS",
                    "SQL",
                    "TensorFlow",
                    "React",
                    "Hadoop",
                    "Scikit-Learn",
                ]),
            },
        ),
        ContentSection::new(
            "publications",
            "Publications",
            SectionIcon::BookOpen,
            SectionBody::Publications {
                publications: vec![Publication {
                    title: "Optimization of Evolutionary Computation in ML Models".into(),
                    venue: "International Journal of AI Research".into(),
                    year: 2025,
                }],
            },
        ),
        ContentSection::new(
            "achievements",
            "Achievements",
            SectionIcon::Award,
            SectionBody::Achievements {
                awards: strings(&["Postgraduate Representative (EPS Department)"]),
                certifications: strings(&[
                    "AWS Certified Solutions Architect",
                    "Google Professional Data Engineer",
                ]),
            },
        ),
        ContentSection::new(
            "cocurricular",
            "Co-Curricular",
            SectionIcon::Database,
            SectionBody::Narrative {
                markdown: "Beyond the screen, I am passionate about rhythm and precision\u{2014}currently \
                           learning the **drums** and exploring the intersection of creative arts and technology."
                    .into(),
            },
        ),
    ];

    let footer = Footer {
        notice: "Built with Rust & Dioxus".into(),
    };

    Portfolio::new(hero, sections, footer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero() -> Hero {
        Hero {
            headline: "h".into(),
            tagline: "t".into(),
            scroll_hint: "s".into(),
        }
    }

    fn footer() -> Footer {
        Footer { notice: "f".into() }
    }

    fn text(id: &str) -> ContentSection<String> {
        ContentSection::new(id, "Title", SectionIcon::Code, "body".to_string())
    }

    #[test]
    fn anchor_slugs() {
        assert!(is_anchor_slug("experience"));
        assert!(is_anchor_slug("co-curricular-2"));
        assert!(!is_anchor_slug(""));
        assert!(!is_anchor_slug("Work Experience"));
        assert!(!is_anchor_slug("a'b"));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let err = Portfolio::new(hero(), vec![text("a"), text("b"), text("a")], footer()).unwrap_err();
        assert!(matches!(err, FolioError::DuplicateSectionId(id) if id == "a"));
    }

    #[test]
    fn invalid_ids_rejected() {
        let err = Portfolio::new(hero(), vec![text("Has Space")], footer()).unwrap_err();
        assert!(matches!(err, FolioError::InvalidSectionId(_)));
    }

    #[test]
    fn generic_body_sections() {
        let page = Portfolio::new(hero(), vec![text("one"), text("two")], footer()).unwrap();
        assert_eq!(page.anchors(), vec!["one", "two"]);
        assert_eq!(page.section("two").unwrap().body, "body");
        assert!(matches!(
            page.section("three"),
            Err(FolioError::UnknownSection(_))
        ));
    }

    #[test]
    fn href_is_fragment() {
        assert_eq!(text("skills").href(), "#skills");
    }

    #[test]
    fn built_in_content_order() {
        let page = portfolio().unwrap();
        assert_eq!(
            page.anchors(),
            vec![
                "experience",
                "projects",
                "skills",
                "publications",
                "achievements",
                "cocurricular"
            ]
        );
        assert_eq!(page.section("experience").unwrap().title, "Work Experience");
    }

    #[test]
    fn role_and_publication_lines() {
        let page = portfolio().unwrap();
        match &page.section("experience").unwrap().body {
            SectionBody::Experience { roles } => {
                assert_eq!(roles[0].heading(), "Data Engineer @ Accenture");
                assert_eq!(roles[0].highlights.len(), 2);
            }
            other => panic!("unexpected body {other:?}"),
        }
        match &page.section("publications").unwrap().body {
            SectionBody::Publications { publications } => {
                assert_eq!(
                    publications[0].citation(),
                    "International Journal of AI Research, 2025"
                );
            }
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn body_serializes_with_kind_tag() {
        let body = SectionBody::Skills {
            skills: strings(&["SQL"]),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"kind":"skills","skills":["SQL"]}"#);
    }
}
