/// A headline metric shown below the hero section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub delta: &'static str,
}

/// A card listing a group of skills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCard {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

/// A link to an external profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// The static content of the portfolio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub display_name: &'static str,
    pub greeting: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    /// Hero paragraph, trusted HTML.
    pub hero_html: &'static str,
    pub links: &'static [SocialLink],
    pub stats: &'static [Stat],
    pub skills: &'static [SkillCard],
    pub resume_file_name: &'static str,
    pub footer_note: &'static str,
    pub last_updated: &'static str,
}

const LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        url: "https://github.com/ASWINa1636",
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/aswin-a-954107292/",
    },
];

const STATS: &[Stat] = &[
    Stat {
        label: "Projects Built",
        value: "10+",
        delta: "Real-world",
    },
    Stat {
        label: "Core Skills",
        value: "5+",
        delta: "Python, C++",
    },
    Stat {
        label: "Engineering Focus",
        value: "Systems",
        delta: "Hands-on",
    },
    Stat {
        label: "GitHub Repos",
        value: "11+",
        delta: "Active",
    },
];

const SKILLS: &[SkillCard] = &[
    SkillCard {
        title: "Programming",
        items: &[
            "Python (Advanced)",
            "C++ (Intermediate)",
            "SQL (Intermediate)",
            "Bash Scripting",
        ],
    },
    SkillCard {
        title: "Core Domains",
        items: &[
            "Backend Systems",
            "Multithreading",
            "Embedded Systems",
            "VLSI Design",
        ],
    },
    SkillCard {
        title: "Tools & Tech",
        items: &[
            "SQLite / PostgreSQL",
            "Git & GitHub",
            "Linux / Ubuntu",
            "Streamlit / Flask",
        ],
    },
];

impl Default for Profile {
    fn default() -> Self {
        Self {
            display_name: "A Aswin",
            greeting: "Hi, I'm Aswin",
            location: "Chennai, India",
            email: "aswinanand1636@gmail.com",
            hero_html: "I'm an <strong>Electronics &amp; Communication Engineering student</strong> \
                with a strong interest in <strong>problem-solving, system design, and practical \
                engineering</strong>. I focus on <strong>building real-world solutions</strong> by \
                combining theory with hands-on implementation.",
            links: LINKS,
            stats: STATS,
            skills: SKILLS,
            resume_file_name: "Aswin_Resume.pdf",
            footer_note: "© 2025 A Aswin",
            last_updated: "January 2025",
        }
    }
}
