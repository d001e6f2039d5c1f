//! Static CV content. Edit here; nothing is loaded at runtime.

pub const OWNER: &str = "Kayla Scullin";
pub const PAGE_TITLE: &str = "Kayla Scullin — CV";
pub const PAGE_DESCRIPTION: &str = "Single-page CV and portfolio for Kayla Scullin";

pub const TAGLINE: &str = "\"The future belongs to those who craft it with intention.\"";
pub const INTRO: &str =
    "A minimalist, single-page CV for quick navigation and deep dives when desired.";

pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#kayla", label: OWNER },
    NavLink { href: "#curriculum", label: "Curriculum" },
    NavLink { href: "#pursuits", label: "Pursuits" },
    NavLink { href: "#correspondence", label: "Correspondence" },
];

pub const PROFILE: &str =
    "Short bio/statement. Add a couple of sentences describing focus, strengths, and impact.";

pub const HIGHLIGHTS: &[&str] = &[
    "Key achievement or role",
    "Domain expertise / tools",
    "Recognition / award",
];

/// One line of the curriculum: a bold heading and a trailing period.
pub struct CurriculumItem {
    pub heading: &'static str,
    pub period: &'static str,
}

pub const EDUCATION: &[CurriculumItem] = &[
    CurriculumItem { heading: "Degree — Institution", period: "Year" },
    CurriculumItem { heading: "Degree — Institution", period: "Year" },
];

pub const EXPERIENCE: &[CurriculumItem] = &[
    CurriculumItem { heading: "Role — Company", period: "YYYY–YYYY" },
    CurriculumItem { heading: "Role — Company", period: "YYYY–YYYY" },
];

pub const INTERESTS: &str = "Topical/academic interests that guide present work.";
