//! Static page content. Everything here is fixed at build time.

pub const OWNER_NAME: &str = "Sasikumar Baskar";
pub const OWNER_TITLE: &str = "Computer Science Engineering Student";
pub const OWNER_SUMMARY: &str = "Motivated CSE student with strong fundamentals in programming and problem solving, seeking internship opportunities.";
pub const CONTACT_EMAIL: &str = "sasikumarblogger@gmail.com";
pub const LOCATION: &str = "Tamil Nadu, India";

/// Words cycled through after "I work with" in the hero.
pub const HERO_ROLES: &[&str] = &["Python", "GenAI", "Cloud", "DevOps"];

/// Page sections in page order. The navbar and the section elements both
/// take their anchors from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "#home",
            Section::About => "#about",
            Section::Skills => "#skills",
            Section::Projects => "#projects",
            Section::Contact => "#contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub Profile",
        href: "https://github.com/Sasikumar-007",
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn Profile",
        href: "https://www.linkedin.com/in/sasikumar-baskar",
        icon: "devicon-linkedin-plain",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationKind {
    Degree,
    School,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub place: Option<&'static str>,
    pub score: &'static str,
    pub years: Option<&'static str>,
    pub kind: EducationKind,
}

pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        degree: "B.E CSE",
        place: Some("S.A Engineering College (Anna University)"),
        score: "CGPA: 8.21",
        years: Some("2024–2028"),
        kind: EducationKind::Degree,
    },
    EducationEntry {
        degree: "Higher Secondary (12th)",
        place: None,
        score: "78%",
        years: None,
        kind: EducationKind::School,
    },
    EducationEntry {
        degree: "Secondary (10th)",
        place: None,
        score: "80%",
        years: None,
        kind: EducationKind::School,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Internship {
    pub title: &'static str,
    pub year: &'static str,
    pub summary: &'static str,
}

pub const INTERNSHIP: Internship = Internship {
    title: "Google Cloud Virtual Internship",
    year: "2025",
    summary: "Hands-on experience with Google Cloud Platform services and tools.",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "Programming in Python Level 1 & 2",
        issuer: "Infosys Springboard",
    },
    Certification {
        title: "Python Essentials",
        issuer: "Cisco",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub glyph: &'static str,
    pub skills: &'static [&'static str],
    pub gradient: &'static str,
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Languages",
        glyph: "</>",
        skills: &["Python", "C", "Java", "JavaScript"],
        gradient: "from-violet-500 to-purple-600",
    },
    SkillCategory {
        title: "Web",
        glyph: "🌐",
        skills: &["HTML", "CSS"],
        gradient: "from-cyan-500 to-blue-600",
    },
    SkillCategory {
        title: "Database",
        glyph: "🗄",
        skills: &["SQL"],
        gradient: "from-emerald-500 to-green-600",
    },
    SkillCategory {
        title: "DevOps",
        glyph: "⎇",
        skills: &["Git", "GitHub", "Jenkins", "Docker"],
        gradient: "from-orange-500 to-red-600",
    },
    SkillCategory {
        title: "Cloud",
        glyph: "☁",
        skills: &["Google Cloud Platform"],
        gradient: "from-blue-500 to-indigo-600",
    },
    SkillCategory {
        title: "Tools",
        glyph: "🛠",
        skills: &["VS Code"],
        gradient: "from-pink-500 to-rose-600",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub github: &'static str,
    pub demo: Option<&'static str>,
    pub gradient: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "AI-Powered MCP Server",
        description: "An intelligent Model Context Protocol server leveraging GenAI capabilities for advanced natural language processing and automated task handling.",
        tech_stack: &["Python", "GenAI", "FastAPI", "LLM"],
        github: "https://github.com/Sasikumar-007",
        demo: None,
        gradient: "from-violet-500 to-purple-600",
    },
    Project {
        title: "AI-Powered Parallax Website",
        description: "A visually stunning parallax-scrolling website with AI-driven features and real-time data storage using Firebase integration.",
        tech_stack: &["JavaScript", "Firebase", "AI", "CSS3"],
        github: "https://github.com/Sasikumar-007",
        demo: None,
        gradient: "from-cyan-500 to-blue-600",
    },
    Project {
        title: "Online Voting System",
        description: "A secure online voting platform built with Python, featuring CI/CD pipelines with Jenkins and Docker for automated deployment.",
        tech_stack: &["Python", "Docker", "Jenkins", "CI/CD"],
        github: "https://github.com/Sasikumar-007",
        demo: None,
        gradient: "from-emerald-500 to-teal-600",
    },
];
