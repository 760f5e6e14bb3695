// Static site content. Loaded once at build time, never mutated.

/// Explicit project category - drives the placeholder icon and gradient
/// for cards without a screenshot. A tagged field, not name sniffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Healthcare,
    Company,
    Crm,
    Collaboration,
    Portfolio,
    Instagram,
    Weather,
    Chat,
    Todo,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub glyph: &'static str,
    pub gradient: &'static str,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 10] = [
        ProjectCategory::Healthcare,
        ProjectCategory::Company,
        ProjectCategory::Crm,
        ProjectCategory::Collaboration,
        ProjectCategory::Portfolio,
        ProjectCategory::Instagram,
        ProjectCategory::Weather,
        ProjectCategory::Chat,
        ProjectCategory::Todo,
        ProjectCategory::Other,
    ];

    pub fn style(self) -> CategoryStyle {
        match self {
            ProjectCategory::Portfolio => CategoryStyle {
                glyph: "🌐",
                gradient: "linear-gradient(135deg, #6a11cb 0%, #2575fc 100%)",
            },
            ProjectCategory::Todo => CategoryStyle {
                glyph: "🗂",
                gradient: "linear-gradient(135deg, #f43f5e 0%, #f97316 100%)",
            },
            ProjectCategory::Chat => CategoryStyle {
                glyph: "💬",
                gradient: "linear-gradient(135deg, #16a34a 0%, #86efac 100%)",
            },
            ProjectCategory::Weather => CategoryStyle {
                glyph: "🌦",
                gradient: "linear-gradient(135deg, #56CCF2 0%, #2F80ED 100%)",
            },
            ProjectCategory::Instagram => CategoryStyle {
                glyph: "📸",
                gradient: "linear-gradient(135deg, #feda75 0%, #fa7e1e 25%, #d62976 50%, #962fbf 75%, #4f5bd5 100%)",
            },
            ProjectCategory::Healthcare => CategoryStyle {
                glyph: "🩺",
                gradient: "linear-gradient(135deg, #0ea5e9 0%, #14b8a6 100%)",
            },
            ProjectCategory::Company => CategoryStyle {
                glyph: "🏢",
                gradient: "linear-gradient(135deg, #6366f1 0%, #a5b4fc 100%)",
            },
            ProjectCategory::Crm => CategoryStyle {
                glyph: "📊",
                gradient: "linear-gradient(135deg, #8b5cf6 0%, #ec4899 100%)",
            },
            ProjectCategory::Collaboration => CategoryStyle {
                glyph: "🤝",
                gradient: "linear-gradient(135deg, #f59e0b 0%, #ef4444 100%)",
            },
            ProjectCategory::Other => CategoryStyle {
                glyph: "⌨",
                gradient: "linear-gradient(135deg, #9ca3af 0%, #6b7280 100%)",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub category: ProjectCategory,
    /// Screenshot path. `None` renders the category placeholder.
    pub image: Option<&'static str>,
    /// Live deployment, when there is one.
    pub url: Option<&'static str>,
}

/// Deployed and actively used.
pub const LIVE_PROJECTS: &[Project] = &[
    Project {
        name: "Intellios – Healthcare Website",
        description: "Developed an interactive story feature using react-slick and custom CSS \
                      animations to enhance UX and visual appeal.",
        tags: &["React", "CSS Animations", "react-slick"],
        category: ProjectCategory::Healthcare,
        image: Some("assets/projects/intellios.png"),
        url: Some("https://d2akvplbz836i4.cloudfront.net/"),
    },
    Project {
        name: "People Maketh – Company Website",
        description: "Built with React and Material UI for a modern, responsive interface. \
                      Developed critical workflow UI and delivered features on time.",
        tags: &["React", "Material UI", "Frontend Development"],
        category: ProjectCategory::Company,
        image: Some("assets/projects/people-maketh.png"),
        url: Some("https://peoplemaketh.com/"),
    },
    Project {
        name: "EaseMyCRM – Healthcare CRM",
        description: "Developed a CRM platform to streamline healthcare management, including \
                      patient tracking, appointments, and analytics modules.",
        tags: &["React", "CRM", "Healthcare", "Analytics"],
        category: ProjectCategory::Crm,
        image: Some("assets/projects/easemycrm.png"),
        url: Some("https://humigy.com/"),
    },
    Project {
        name: "Evtaar – Team Collaboration Platform",
        description: "Built an all-in-one platform integrating social media, Zoom meetings, Jira \
                      tasks, and attendance tracking for seamless team collaboration.",
        tags: &["React", "Team Collaboration", "Zoom API", "Jira Integration", "Attendance Tracking"],
        category: ProjectCategory::Collaboration,
        image: Some("assets/projects/evtaar.png"),
        url: Some("https://staging.evtaar.com/"),
    },
];

/// Built for learning, experimentation, or fun.
pub const PERSONAL_PROJECTS: &[Project] = &[
    Project {
        name: "Personal Portfolio",
        description: "Created my personal portfolio website to showcase my skills and projects, \
                      with route transitions and a light/dark theme.",
        tags: &["Leptos", "Rust", "WebAssembly"],
        category: ProjectCategory::Portfolio,
        image: Some("assets/projects/portfolio.png"),
        url: None,
    },
    Project {
        name: "Instagram Clone",
        description: "Developed an Instagram-like social media platform with React, Firebase, and \
                      real-time photo sharing features.",
        tags: &["React", "Firebase", "Realtime", "Social Media"],
        category: ProjectCategory::Instagram,
        image: None,
        url: None,
    },
    Project {
        name: "Weather App",
        description: "Developed a weather forecast app using React and OpenWeather API to fetch \
                      and display live weather information for multiple cities.",
        tags: &["React", "API", "JavaScript"],
        category: ProjectCategory::Weather,
        image: None,
        url: None,
    },
    Project {
        name: "Chat App",
        description: "Built a real-time chat application using React and Firebase, allowing \
                      multiple users to communicate instantly.",
        tags: &["React", "Firebase", "Realtime"],
        category: ProjectCategory::Chat,
        image: None,
        url: None,
    },
    Project {
        name: "Todo App",
        description: "Built a full-featured Todo app with React and localStorage, implementing \
                      features like categories, priority, and deadlines.",
        tags: &["React", "JavaScript", "LocalStorage"],
        category: ProjectCategory::Todo,
        image: None,
        url: None,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0-100, drives the level bar width.
    pub level: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub glyph: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        id: "frontend",
        label: "Frontend",
        glyph: "🎨",
        skills: &[
            Skill { name: "React", level: 90 },
            Skill { name: "React Native", level: 80 },
            Skill { name: "Next.js", level: 85 },
            Skill { name: "TypeScript", level: 80 },
            Skill { name: "JavaScript", level: 95 },
            Skill { name: "HTML5/CSS3", level: 95 },
            Skill { name: "Material-UI", level: 80 },
            Skill { name: "Tailwind CSS", level: 75 },
        ],
    },
    SkillGroup {
        id: "backend",
        label: "Backend",
        glyph: "🗄",
        skills: &[
            Skill { name: "Nest.js", level: 75 },
            Skill { name: "Express.js", level: 80 },
            Skill { name: "PostgreSQL", level: 85 },
            Skill { name: "RESTful APIs", level: 90 },
        ],
    },
    SkillGroup {
        id: "soft",
        label: "Soft Skills",
        glyph: "🧠",
        skills: &[
            Skill { name: "Problem Solving", level: 90 },
            Skill { name: "Team Collaboration", level: 85 },
            Skill { name: "Communication", level: 85 },
            Skill { name: "Agile Methodology", level: 80 },
            Skill { name: "Project Management", level: 75 },
            Skill { name: "Mentoring", level: 80 },
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub achievements: &'static [&'static str],
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        role: "Frontend Developer Intern",
        company: "Encrobytes",
        period: "Sep 2023 - Jun 2024 | Faridabad, IN",
        achievements: &[
            "Developed responsive web pages using React and MUI",
            "Implemented reusable components and optimized frontend performance",
            "Collaborated with backend developers to integrate REST APIs",
            "Participated in code reviews and agile sprint meetings to improve project delivery",
        ],
    },
    Experience {
        role: "Senior Frontend Developer",
        company: "People Maketh",
        period: "Jul 2024 - Jun 2025 | Bangalore, IN",
        achievements: &[
            "Worked on 3 projects from scratch till production deployment",
            "Created reusable components used across multiple projects",
            "Collaborated with a team of 5+ frontend developers ensuring smooth delivery",
        ],
    },
    Experience {
        role: "Senior Frontend Developer",
        company: "Evtaar",
        period: "Jun 2025 - Present | United Arab Emirates",
        achievements: &[
            "Building an all-in-one B2B platform for businesses",
            "Designed and implemented reusable frontend components for multiple modules",
            "Collaborated with a team of 10+ frontend and backend developers to deliver scalable solutions",
            "Integrated dashboards, analytics, and workflow management tools into the platform",
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub details: &'static str,
}

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "B.Voc (Software Development)",
        institution: "Maharishi Dayanand University",
        period: "2022 - 2025 | Haryana, India",
        details: "Graduated with 7.8 CGPA in Software Development",
    },
    Education {
        degree: "Higher Secondary Education",
        institution: "Pal Progressive Sr. Sec. School",
        period: "2020 - 2022 | Haryana, India",
        details: "Completed with 81% marks in Commerce stream",
    },
    Education {
        degree: "Secondary Education (10th)",
        institution: "Pal Progressive Sr. Sec. School",
        period: "2019 - 2020 | Haryana, India",
        details: "Completed with 70% marks in Commerce stream",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "Software Engineering",
        issuer: "Encrobytes",
        year: "2023",
    },
    Certification {
        name: "The Complete JavaScript Course: From Zero to Expert!",
        issuer: "Udemy",
        year: "2022",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ContactMethod {
    pub label: &'static str,
    pub text: &'static str,
    pub href: &'static str,
    pub glyph: &'static str,
    /// Brand accent for the card icon. Empty string falls back to the
    /// Instagram gradient in CSS.
    pub accent: &'static str,
}

pub const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        label: "Email",
        text: "singhsuraj44500@gmail.com",
        href: "mailto:singhsuraj44500@gmail.com",
        glyph: "✉",
        accent: "#EA4335",
    },
    ContactMethod {
        label: "LinkedIn",
        text: "linkedin.com/in/suraj-singh",
        href: "https://www.linkedin.com/in/suraj-singh-a735b8377",
        glyph: "in",
        accent: "#0A66C2",
    },
    ContactMethod {
        label: "WhatsApp",
        text: "+91 96255 53534",
        href: "https://wa.me/919625553534",
        glyph: "✆",
        accent: "#25D366",
    },
    ContactMethod {
        label: "Instagram",
        text: "@surajrajput_018",
        href: "https://www.instagram.com/surajrajput_018",
        glyph: "📸",
        accent: "",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct PersonalInfo {
    pub label: &'static str,
    pub text: &'static str,
    pub glyph: &'static str,
}

pub const PERSONAL_INFO: &[PersonalInfo] = &[
    PersonalInfo { label: "Phone", text: "+91 9625553534", glyph: "✆" },
    PersonalInfo { label: "Location", text: "Faridabad, Haryana, India", glyph: "📍" },
    PersonalInfo { label: "Freelance", text: "Available", glyph: "📄" },
];

/// Rotating line under the hero heading.
pub const HERO_ROLES: &[&str] = &[
    "Frontend Developer",
    "React Specialist",
    "UI/UX Enthusiast",
    "Problem Solver",
];

#[derive(Debug, Clone, Copy)]
pub struct HeroChip {
    pub label: &'static str,
    pub glyph: &'static str,
}

pub const HERO_CHIPS: &[HeroChip] = &[
    HeroChip { label: "React", glyph: "⚛" },
    HeroChip { label: "TypeScript", glyph: "TS" },
    HeroChip { label: "React Native", glyph: "📱" },
    HeroChip { label: "Next.js", glyph: "▲" },
    HeroChip { label: "JavaScript", glyph: "JS" },
    HeroChip { label: "UI/UX", glyph: "✎" },
    HeroChip { label: "Material UI", glyph: "⌨" },
];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub glyph: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "WhatsApp", href: "https://wa.me/919625553534", glyph: "✆" },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/suraj-singh-a735b8377",
        glyph: "in",
    },
    SocialLink { label: "Email", href: "mailto:singhsuraj44500@gmail.com", glyph: "✉" },
];

/// Hero portrait. `None` renders the monogram disc instead.
pub const PROFILE_IMAGE: Option<&str> = Some("assets/profile.jpg");
pub const PROFILE_MONOGRAM: &str = "SS";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_style() {
        for category in ProjectCategory::ALL {
            let style = category.style();
            assert!(!style.glyph.is_empty());
            assert!(style.gradient.starts_with("linear-gradient"));
        }
    }

    #[test]
    fn live_projects_are_deployed() {
        assert_eq!(LIVE_PROJECTS.len(), 4);
        for project in LIVE_PROJECTS {
            assert!(project.url.is_some(), "{} has no URL", project.name);
        }
    }

    #[test]
    fn every_project_is_tagged() {
        for project in LIVE_PROJECTS.iter().chain(PERSONAL_PROJECTS) {
            assert!(!project.tags.is_empty(), "{} has no tags", project.name);
            assert!(!project.description.is_empty());
        }
    }

    #[test]
    fn skill_levels_are_percentages() {
        for group in SKILL_GROUPS {
            assert!(!group.skills.is_empty());
            for skill in group.skills {
                assert!(skill.level <= 100, "{} out of range", skill.name);
            }
        }
    }

    #[test]
    fn skill_group_ids_are_unique() {
        for (i, a) in SKILL_GROUPS.iter().enumerate() {
            for b in &SKILL_GROUPS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn hero_roles_rotate_through_something() {
        assert!(HERO_ROLES.len() > 1);
    }
}
