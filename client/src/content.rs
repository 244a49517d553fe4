//! Static content store: profile, skills, projects, experience, and links.
//!
//! DESIGN
//! ======
//! Everything here is `'static` and read-only. Components borrow from
//! [`PORTFOLIO`] directly; derived views (grouping, counts) are computed on
//! render by the helpers at the bottom of this module.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Owner profile shown in the hero, contact overlay and footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    /// Public path of the downloadable resume.
    pub resume: &'static str,
    /// Public path of the profile picture.
    pub image: &'static str,
    pub bio: &'static str,
}

/// One skill with a proficiency percentage in `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub percentage: u8,
    pub category: &'static str,
}

/// Long-form write-up shown in the project detail modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectDetails {
    pub overview: &'static str,
    pub challenges: &'static str,
    pub solutions: &'static str,
    pub impact: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub category: &'static str,
    pub image: &'static str,
    pub demo_url: &'static str,
    pub github_url: &'static str,
    pub featured: bool,
    pub details: ProjectDetails,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Internship {
    pub id: u32,
    pub title: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certificate {
    pub id: u32,
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub credential_id: &'static str,
    pub description: &'static str,
}

/// Work history entry: either an internship or a certification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExperienceItem {
    Internship(Internship),
    Certificate(Certificate),
}

impl ExperienceItem {
    #[must_use]
    pub fn id(&self) -> u32 {
        match self {
            Self::Internship(i) => i.id,
            Self::Certificate(c) => c.id,
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Internship(i) => i.title,
            Self::Certificate(c) => c.title,
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Internship(i) => i.description,
            Self::Certificate(c) => c.description,
        }
    }

    /// Duration for internships, award date for certificates.
    #[must_use]
    pub fn period(&self) -> &'static str {
        match self {
            Self::Internship(i) => i.duration,
            Self::Certificate(c) => c.date,
        }
    }

    /// Company for internships, issuer for certificates.
    #[must_use]
    pub fn organization(&self) -> &'static str {
        match self {
            Self::Internship(i) => i.company,
            Self::Certificate(c) => c.issuer,
        }
    }
}

/// In-page navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialIcon {
    LinkedIn,
    GitHub,
    Mail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: SocialIcon,
}

/// The whole site's content.
#[derive(Debug)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: &'static [Skill],
    pub projects: &'static [Project],
    pub experience: &'static [ExperienceItem],
    pub social_links: &'static [SocialLink],
}

pub static PORTFOLIO: Portfolio = Portfolio {
    profile: Profile {
        name: "Lalu Prasad Aroori",
        title: "AI/ML Enthusiast · Cloud Computing · Web Developer",
        email: "aroorilaluprasad@gmail.com",
        phone: "+91 7013716541",
        linkedin: "https://www.linkedin.com/in/lalu-prasad-aroori",
        github: "https://github.com/Laluprasad1",
        resume: "/Lalu prasad_Aroori.pdf",
        image: "/profile-image.jpg",
        bio: "Passionate AI/ML enthusiast with expertise in cloud computing and web development. I love creating \
              innovative solutions that bridge the gap between cutting-edge technology and real-world applications.",
    },
    skills: &[
        Skill { name: "Python", percentage: 90, category: "Programming" },
        Skill { name: "Java", percentage: 75, category: "Programming" },
        Skill { name: "HTML/CSS/JS", percentage: 85, category: "Web Development" },
        Skill { name: "React", percentage: 80, category: "Web Development" },
        Skill { name: "Tailwind CSS", percentage: 78, category: "Web Development" },
        Skill { name: "Machine Learning", percentage: 82, category: "AI/ML" },
        Skill { name: "Cloud (AWS, GCP)", percentage: 70, category: "Cloud Computing" },
    ],
    projects: &[
        Project {
            id: 1,
            title: "Beyond Expressions — Anveshan 2025",
            description: "Advanced research project utilizing deep learning models to analyze human emotions and \
                          social behavior patterns. Implemented state-of-the-art NLP techniques for comprehensive \
                          emotional intelligence analysis.",
            technologies: &["AI", "NLP", "Deep Learning", "Python", "TensorFlow"],
            category: "AI/ML Research",
            image: "/project-beyond-expressions.jpg",
            demo_url: "#",
            github_url: "#",
            featured: true,
            details: ProjectDetails {
                overview: "A comprehensive research project focused on understanding human emotions through \
                           advanced AI techniques.",
                challenges: "Processing complex emotional data and creating accurate behavioral prediction models.",
                solutions: "Implemented ensemble deep learning models with custom NLP pipelines for enhanced \
                            accuracy.",
                impact: "Achieved 87% accuracy in emotion detection and provided insights into social behavior \
                         patterns.",
            },
        },
        Project {
            id: 2,
            title: "AI Banner Generation",
            description: "Innovative generative AI tool that automatically creates custom banners using computer \
                          vision and machine learning algorithms. Features intelligent design suggestions and \
                          automated layout optimization.",
            technologies: &["Generative AI", "Computer Vision", "Python", "OpenCV", "PIL"],
            category: "Generative AI",
            image: "/project-ai-banner.jpg",
            demo_url: "#",
            github_url: "#",
            featured: true,
            details: ProjectDetails {
                overview: "An AI-powered tool that generates professional banners automatically based on user \
                           requirements.",
                challenges: "Creating visually appealing designs while maintaining brand consistency and \
                             readability.",
                solutions: "Developed custom GAN models with style transfer techniques for diverse design \
                            generation.",
                impact: "Reduced banner creation time by 80% while maintaining professional design standards.",
            },
        },
        Project {
            id: 3,
            title: "Resume Spark",
            description: "Interactive resume builder web application powered by AI suggestions. Features \
                          real-time editing, multiple templates, and intelligent content recommendations based on \
                          industry standards.",
            technologies: &["React", "Node.js", "AI", "Web Development", "MongoDB"],
            category: "Web Application",
            image: "/project-resume-spark.jpg",
            demo_url: "#",
            github_url: "#",
            featured: true,
            details: ProjectDetails {
                overview: "A smart resume builder that helps users create professional resumes with AI-powered \
                           suggestions.",
                challenges: "Providing relevant suggestions while maintaining user creativity and personal \
                             branding.",
                solutions: "Integrated NLP models for content analysis and recommendation engine for personalized \
                            suggestions.",
                impact: "Helped 500+ users create professional resumes with 95% user satisfaction rate.",
            },
        },
    ],
    experience: &[
        ExperienceItem::Internship(Internship {
            id: 1,
            title: "Machine Learning Intern",
            company: "Tech Innovation Labs",
            duration: "Jun 2024 - Aug 2024",
            description: "Developed ML models for predictive analytics and worked on computer vision projects.",
            technologies: &["Python", "TensorFlow", "OpenCV", "Pandas"],
        }),
        ExperienceItem::Certificate(Certificate {
            id: 2,
            title: "AWS Cloud Practitioner",
            issuer: "Amazon Web Services",
            date: "March 2024",
            credential_id: "AWS-CCP-2024-001",
            description: "Comprehensive understanding of AWS cloud services and architecture.",
        }),
        ExperienceItem::Certificate(Certificate {
            id: 3,
            title: "Google Cloud Associate",
            issuer: "Google Cloud",
            date: "January 2024",
            credential_id: "GCP-ACE-2024-001",
            description: "Proficiency in Google Cloud Platform services and deployment strategies.",
        }),
    ],
    social_links: &[
        SocialLink { name: "LinkedIn", url: "https://www.linkedin.com/in/lalu-prasad-aroori", icon: SocialIcon::LinkedIn },
        SocialLink { name: "GitHub", url: "https://github.com/Laluprasad1", icon: SocialIcon::GitHub },
        SocialLink { name: "Email", url: "mailto:aroorilaluprasad@gmail.com", icon: SocialIcon::Mail },
    ],
};

/// Header navigation, in display order.
pub const NAVIGATION_LINKS: &[NavLink] = &[
    NavLink { name: "Home", href: "#home" },
    NavLink { name: "Skills", href: "#skills" },
    NavLink { name: "Projects", href: "#projects" },
    NavLink { name: "Experience", href: "#experience" },
];

// =============================================================
// Derived views
// =============================================================

/// Group skills by category, keeping categories in first-appearance order
/// and skills in list order within each category.
#[must_use]
pub fn skills_by_category(skills: &[Skill]) -> Vec<(&'static str, Vec<Skill>)> {
    let mut groups: Vec<(&'static str, Vec<Skill>)> = Vec::new();
    for skill in skills {
        match groups.iter_mut().find(|(category, _)| *category == skill.category) {
            Some((_, members)) => members.push(*skill),
            None => groups.push((skill.category, vec![*skill])),
        }
    }
    groups
}

/// Number of distinct project categories.
#[must_use]
pub fn distinct_categories(projects: &[Project]) -> usize {
    let mut seen: Vec<&str> = Vec::new();
    for project in projects {
        if !seen.contains(&project.category) {
            seen.push(project.category);
        }
    }
    seen.len()
}

#[must_use]
pub fn internships(items: &[ExperienceItem]) -> Vec<Internship> {
    items
        .iter()
        .filter_map(|item| match item {
            ExperienceItem::Internship(i) => Some(*i),
            ExperienceItem::Certificate(_) => None,
        })
        .collect()
}

#[must_use]
pub fn certificates(items: &[ExperienceItem]) -> Vec<Certificate> {
    items
        .iter()
        .filter_map(|item| match item {
            ExperienceItem::Certificate(c) => Some(*c),
            ExperienceItem::Internship(_) => None,
        })
        .collect()
}

/// Most recent four-digit year mentioned in any experience period.
#[must_use]
pub fn latest_year(items: &[ExperienceItem]) -> Option<u16> {
    items
        .iter()
        .flat_map(|item| item.period().split(|c: char| !c.is_ascii_digit()))
        .filter(|token| token.len() == 4)
        .filter_map(|token| token.parse::<u16>().ok())
        .max()
}
