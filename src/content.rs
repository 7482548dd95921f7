//! Compiled-in portfolio content.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub initials: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub email: &'static str,
}

impl PersonalInfo {
    /// Text the hero typewriter types out.
    pub fn headline(&self) -> String {
        format!("> {}_", self.title)
    }
}

pub const PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Parintorn Sanguanpong",
    initials: "PS",
    title: "Senior Software Engineer",
    description: "Hello, I'm a Senior Software Engineer specializing in full-stack development. With TypeScript as my core language, I work extensively with Node.js, React.js, and React Native, along with Golang. I love coding, exploring new technologies, and collaborating with others.",
    tagline: "Building modern web experiences with code",
    location: "Thailand",
    github: "https://github.com/parintorn1902",
    linkedin: "https://www.linkedin.com/in/parintorn-s-24579a179/",
    email: "parintorn1902@gmail.com",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub preview_image: &'static str,
    pub demo_link: Option<&'static str>,
    pub source_link: Option<&'static str>,
    pub tags: &'static [&'static str],
}

impl Project {
    pub fn preview_src(&self) -> String {
        format!("/images/{}", self.preview_image)
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        name: "Netflix Clone",
        description: "Next.js and Tailwind.css making the ultimate Netflix clone website",
        preview_image: "netflix-preview.png",
        demo_link: Some("https://parintorn.com/netflix"),
        source_link: Some("https://github.com/parintorn1902/my-netflix"),
        tags: &["Next.js", "Tailwind CSS", "React"],
    },
    Project {
        id: 2,
        name: "Basic CRUD & JWT",
        description: "Next.js with Chakra-UI and RESTful Node.js service with authentication",
        preview_image: "student-management-preview.png",
        demo_link: None,
        source_link: Some("https://github.com/parintorn1902/basic-react-node-crud"),
        tags: &["Next.js", "Chakra-UI", "Node.js", "JWT"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Experience {
    pub period: &'static str,
    pub position: &'static str,
    pub workplace: &'static str,
    pub details: &'static [&'static str],
    pub remote: bool,
    pub tech_stack: &'static [&'static str],
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        period: "2018 - Present",
        position: "Senior Software Engineer",
        workplace: "TechBerry Company Limited",
        details: &[
            "Design & develop products using modern technologies",
            "Continue release product and support issues",
            "Research new technologies and solutions to improves the products",
            "Lead technical implementations and mentor junior developers",
        ],
        remote: false,
        tech_stack: &[
            "React.js",
            "React Native",
            "Node.js",
            "Golang",
            "MongoDB",
            "PostgreSQL",
            "Docker",
        ],
    },
    Experience {
        period: "2015 - 2017",
        position: "Freelancer",
        workplace: "Home",
        details: &["Outsourcing projects from partners"],
        remote: true,
        tech_stack: &["PHP", "HTML", "CSS", "JS", "Ajax", "MySQL"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub label: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        label: "Programming",
        items: &[
            "Typescript",
            "Modern Javascript",
            "JSDoc",
            "Golang",
            "RESTful API",
            "Docker",
            "JSON",
            "OOP",
            "Promise",
            "Async/Await",
        ],
    },
    SkillGroup {
        label: "Tools",
        items: &[
            "Cursor",
            "VS Code",
            "Android Studio",
            "Postman",
            "Docker",
            "FileZilla",
            "Termius",
            "DBeaver",
            "Robo 3T",
        ],
    },
    SkillGroup {
        label: "AI Proficiency",
        items: &[
            "Cursor AI",
            "Claude Code",
            "ChatGPT (Agent & Thinking Partner)",
            "AI-Assisted Development",
            "Prompt Engineering",
            "AI for Design & Brainstorming",
        ],
    },
    SkillGroup {
        label: "Cloud & Services",
        items: &[
            "AWS Lightsail",
            "Digital Ocean",
            "Google Maps Platform",
            "Firebase",
            "Play Console",
            "App Store Connect",
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TechIcon {
    React,
    Node,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TechGroup {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TechCategory {
    pub category: &'static str,
    pub icon: TechIcon,
    pub techs: &'static [TechGroup],
}

pub const FRONTEND: TechCategory = TechCategory {
    category: "Front-End",
    icon: TechIcon::React,
    techs: &[
        TechGroup {
            name: "React.js",
            items: &[
                "Next.js",
                "Vite",
                "Tailwind.css",
                "Shadcn-ui",
                "Mantine UI",
                "Chakra-UI",
                "Material-UI",
                "AntDesign",
                "Semantic-UI",
                "Bulma",
                "Prisma",
            ],
        },
        TechGroup {
            name: "React Native",
            items: &[
                "React Native CLI",
                "Expo",
                "Nativewind",
                "Reanimated",
                "Native Modules",
                "Expo Modules",
                "Publish to Play Store and App Store",
            ],
        },
    ],
};

pub const BACKEND: TechCategory = TechCategory {
    category: "Back-End",
    icon: TechIcon::Node,
    techs: &[
        TechGroup {
            name: "Node.js",
            items: &[
                "Express",
                "CORS",
                "TypeORM",
                "MongoDB",
                "JWT",
                "Multer",
                "ShellJS",
                "BcryptJS",
                "Axios",
                "FS-Extra",
                "PM2",
            ],
        },
        TechGroup {
            name: "Golang",
            items: &["Gin", "GORM", "PostgreSQL", "MongoDB", "JWT", "REST API"],
        },
        TechGroup {
            name: "Java",
            items: &[
                "Spring Boot",
                "Spring MVC",
                "Spring Data JPA",
                "PostgreSQL",
                "MongoDB",
                "Spring Security",
                "JWT",
                "Lombok",
            ],
        },
    ],
};

/// Element ids of the page sections, in page order.
pub mod section {
    pub const ABOUT: &str = "about";
    pub const PROJECTS: &str = "projects";
    pub const TECHNOLOGIES: &str = "technologies";
    pub const EXPERIENCE: &str = "experience";
    pub const CONTACT: &str = "contact";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub section_id: &'static str,
    pub number: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        name: "About",
        section_id: section::ABOUT,
        number: "01",
    },
    NavItem {
        name: "Projects",
        section_id: section::PROJECTS,
        number: "02",
    },
    NavItem {
        name: "Tech Stack",
        section_id: section::TECHNOLOGIES,
        number: "03",
    },
    NavItem {
        name: "Experience",
        section_id: section::EXPERIENCE,
        number: "04",
    },
    NavItem {
        name: "Contact",
        section_id: section::CONTACT,
        number: "05",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    GitHub,
    LinkedIn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: &'static str,
    pub handle: &'static str,
    pub href: &'static str,
}

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        kind: ContactKind::GitHub,
        label: "GitHub",
        handle: "@parintorn1902",
        href: PERSONAL_INFO.github,
    },
    ContactLink {
        kind: ContactKind::LinkedIn,
        label: "LinkedIn",
        handle: "parintorn-s",
        href: PERSONAL_INFO.linkedin,
    },
];

pub const MORE_PROJECTS_URL: &str = "https://github.com/parintorn1902";
