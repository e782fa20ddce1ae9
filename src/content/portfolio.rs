#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub categories: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub role: &'static str,
    pub impact: &'static str,
    pub live_url: Option<&'static str>,
    pub source_url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
}

pub const ALL_CATEGORY: &str = "all";

pub static CATEGORIES: [Category; 8] = [
    Category { id: ALL_CATEGORY, name: "All" },
    Category { id: "web", name: "Web" },
    Category { id: "mobile", name: "Mobile" },
    Category { id: "frontend", name: "Frontend" },
    Category { id: "backend", name: "Backend" },
    Category { id: "fullstack", name: "Full Stack" },
    Category { id: "ai", name: "AI" },
    Category { id: "data", name: "Data" },
];

pub static PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "E-commerce Platform",
        description: "A full-featured e-commerce platform with product management, cart, and checkout functionality.",
        image: "/placeholder.svg",
        categories: &["web", "frontend", "backend"],
        technologies: &["React", "Node.js", "MongoDB", "Stripe"],
        role: "Lead Developer",
        impact: "Increased sales by 35% and improved user engagement metrics by 42%.",
        live_url: Some("https://example.com"),
        source_url: Some("https://github.com/yourusername/project"),
    },
    Project {
        id: 2,
        title: "Health & Fitness App",
        description: "Mobile application for tracking workouts, nutrition, and health metrics.",
        image: "/placeholder.svg",
        categories: &["mobile", "frontend"],
        technologies: &["React Native", "Firebase", "Redux"],
        role: "Frontend Developer",
        impact: "Acquired 50,000+ users within the first 3 months of launch.",
        live_url: Some("https://example.com"),
        source_url: None,
    },
    Project {
        id: 3,
        title: "Financial Dashboard",
        description: "Interactive dashboard for visualizing financial data and analytics.",
        image: "/placeholder.svg",
        categories: &["web", "data"],
        technologies: &["Vue.js", "D3.js", "Python", "FastAPI"],
        role: "Full Stack Developer",
        impact: "Reduced data analysis time by 60% for financial advisors.",
        live_url: Some("https://example.com"),
        source_url: Some("https://github.com/yourusername/project"),
    },
    Project {
        id: 4,
        title: "Social Media Platform",
        description: "Community platform with real-time messaging and content sharing.",
        image: "/placeholder.svg",
        categories: &["web", "backend"],
        technologies: &["React", "Socket.io", "Express", "PostgreSQL"],
        role: "Backend Developer",
        impact: "Scaled to handle 100,000+ concurrent users with minimal latency.",
        live_url: Some("https://example.com"),
        source_url: None,
    },
    Project {
        id: 5,
        title: "AI Content Generator",
        description: "Tool that uses AI to generate marketing content and social media posts.",
        image: "/placeholder.svg",
        categories: &["web", "ai"],
        technologies: &["Next.js", "OpenAI API", "TailwindCSS"],
        role: "Lead Developer",
        impact: "Saved marketing teams an average of 15 hours per week on content creation.",
        live_url: Some("https://example.com"),
        source_url: Some("https://github.com/yourusername/project"),
    },
    Project {
        id: 6,
        title: "Property Management System",
        description: "Comprehensive system for managing rental properties, tenants, and maintenance.",
        image: "/placeholder.svg",
        categories: &["web", "fullstack"],
        technologies: &["Angular", "Java Spring", "MySQL"],
        role: "Full Stack Developer",
        impact: "Reduced administrative overhead by 40% for property management companies.",
        live_url: Some("https://example.com"),
        source_url: None,
    },
];

/// Projects tagged with `category`, in their original order. "all" keeps
/// every project; an unknown id keeps none.
pub fn filter_projects(category: &str) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| category == ALL_CATEGORY || p.categories.iter().any(|c| *c == category))
        .collect()
}

pub fn find_project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_counts() {
        let counts = CATEGORIES
            .iter()
            .map(|c| (c.id, filter_projects(c.id).len()))
            .collect::<Vec<_>>();
        assert_eq!(
            counts,
            vec![
                ("all", 6),
                ("web", 5),
                ("mobile", 1),
                ("frontend", 2),
                ("backend", 2),
                ("fullstack", 1),
                ("ai", 1),
                ("data", 1),
            ]
        );
    }

    #[test]
    fn test_filter_keeps_order() {
        let ids = filter_projects("backend")
            .iter()
            .map(|p| p.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        assert!(filter_projects("games").is_empty());
    }

    #[test]
    fn test_every_project_category_is_selectable() {
        for project in &PROJECTS {
            for cat in project.categories {
                assert!(CATEGORIES.iter().any(|c| c.id == *cat), "{cat}");
            }
        }
        assert_eq!(find_project(3).map(|p| p.title), Some("Financial Dashboard"));
        assert!(find_project(42).is_none());
    }
}
