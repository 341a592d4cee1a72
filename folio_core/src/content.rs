//! Static page content: navigation, skills, experience and projects.

/// A navigation entry pointing at a page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Section identifier the entry scrolls to
    pub section: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        label: "About",
        section: "about",
    },
    NavLink {
        label: "Skills",
        section: "skills",
    },
    NavLink {
        label: "Experience",
        section: "experience",
    },
    NavLink {
        label: "Projects",
        section: "projects",
    },
    NavLink {
        label: "Contact",
        section: "contact",
    },
];

/// Section identifiers in navigation order, as fed to the scroll tracker.
pub fn nav_sections() -> impl Iterator<Item = &'static str> {
    NAV_LINKS.iter().map(|link| link.section)
}

pub const OWNER_NAME: &str = "Alex Morgan";
pub const HERO_GREETING: &str = "Hi, I'm Alex Morgan";
pub const HERO_TAGLINE: &str = "Full Stack Developer building fast, accessible web applications.";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "I am a full stack developer who enjoys turning complex requirements into \
     scalable, user-centric software.",
    "I care about clean, maintainable code and measurable performance, from \
     backend APIs to pixel-accurate interfaces.",
];

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILLS: [SkillGroup; 4] = [
    SkillGroup {
        category: "Frontend",
        items: &["React", "Next.js", "TypeScript", "Tailwind CSS", "Framer Motion"],
    },
    SkillGroup {
        category: "Backend",
        items: &["Node.js", "Express", "Python", "Go", "GraphQL"],
    },
    SkillGroup {
        category: "Database",
        items: &["PostgreSQL", "MongoDB", "Redis", "Prisma"],
    },
    SkillGroup {
        category: "Tools",
        items: &["Docker", "AWS", "Git", "CI/CD", "Figma"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub role: &'static str,
    pub organisation: &'static str,
    pub highlights: &'static [&'static str],
}

pub const EXPERIENCE: [Experience; 2] = [
    Experience {
        role: "Web Development Intern",
        organisation: "Northwind Systems",
        highlights: &[
            "Shipped React features for production web projects",
            "Built responsive interfaces following accessibility guidelines",
            "Improved debugging, profiling and deployment workflows",
        ],
    },
    Experience {
        role: "Web Development Intern",
        organisation: "Contoso Networks",
        highlights: &[
            "Developed full stack features across API and UI",
            "Worked on authentication, REST endpoints and database integration",
            "Implemented real-time, interactive components",
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    /// Live demo, if any
    pub link: Option<&'static str>,
    pub repository: &'static str,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "Realtime Chat",
        description: "WebSocket chat with authenticated rooms, presence indicators \
                      and typing status.",
        tech: &["React", "Node.js", "Socket.io", "MongoDB"],
        link: Some("https://example.com/chat"),
        repository: "https://example.com/src/chat",
    },
    Project {
        title: "Learning Management System",
        description: "Role-based course platform with task assignment and progress \
                      tracking.",
        tech: &["React", "Express", "MongoDB", "JWT"],
        link: Some("https://example.com/lms"),
        repository: "https://example.com/src/lms",
    },
    Project {
        title: "Food Delivery",
        description: "Delivery platform with live order tracking and restaurant \
                      listings.",
        tech: &["React", "Express", "Socket.io", "MongoDB"],
        link: None,
        repository: "https://example.com/src/delivery",
    },
    Project {
        title: "Resume Matcher",
        description: "Compares a resume against a job description and reports the \
                      matched and missing skills.",
        tech: &["TypeScript", "Text Analysis"],
        link: None,
        repository: "https://example.com/src/resume-matcher",
    },
];
