#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent.
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub skills: &'static [Skill],
}

pub const DEFAULT_TAB: &str = "frontend";

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub static SKILL_CATEGORIES: [SkillCategory; 5] = [
    SkillCategory {
        id: "frontend",
        name: "Frontend",
        skills: &[
            skill("HTML/CSS", 95),
            skill("JavaScript", 90),
            skill("React", 92),
            skill("TypeScript", 85),
            skill("Next.js", 88),
            skill("Tailwind CSS", 90),
            skill("Vue.js", 75),
            skill("Angular", 70),
        ],
    },
    SkillCategory {
        id: "backend",
        name: "Backend",
        skills: &[
            skill("Node.js", 88),
            skill("Express", 85),
            skill("Python", 80),
            skill("Django", 75),
            skill("Java", 70),
            skill("Spring Boot", 65),
            skill("PHP", 60),
            skill("Ruby on Rails", 55),
        ],
    },
    SkillCategory {
        id: "database",
        name: "Database",
        skills: &[
            skill("MongoDB", 90),
            skill("PostgreSQL", 85),
            skill("MySQL", 80),
            skill("Redis", 75),
            skill("Firebase", 85),
            skill("GraphQL", 80),
        ],
    },
    SkillCategory {
        id: "devops",
        name: "DevOps & Tools",
        skills: &[
            skill("Git", 95),
            skill("Docker", 85),
            skill("Kubernetes", 75),
            skill("AWS", 80),
            skill("CI/CD", 85),
            skill("Linux", 80),
            skill("Terraform", 70),
        ],
    },
    SkillCategory {
        id: "design",
        name: "Design",
        skills: &[
            skill("Figma", 90),
            skill("Adobe XD", 85),
            skill("Photoshop", 75),
            skill("Illustrator", 70),
            skill("UI/UX Design", 85),
            skill("Responsive Design", 95),
        ],
    },
];

pub static ADDITIONAL_SKILLS: [&str; 14] = [
    "Agile Methodologies",
    "Scrum",
    "RESTful APIs",
    "Microservices",
    "Testing (Jest, Cypress)",
    "Performance Optimization",
    "SEO",
    "Accessibility (WCAG)",
    "WebSockets",
    "OAuth",
    "JWT",
    "Responsive Design",
    "Progressive Web Apps",
    "Mobile Development",
];

/// The tab to show for `id`, falling back to the default tab.
pub fn category(id: &str) -> &'static SkillCategory {
    SKILL_CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .or_else(|| SKILL_CATEGORIES.iter().find(|c| c.id == DEFAULT_TAB))
        .unwrap_or(&SKILL_CATEGORIES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_percentages() {
        for cat in &SKILL_CATEGORIES {
            assert!(!cat.skills.is_empty());
            assert!(cat.skills.iter().all(|s| s.level <= 100), "{}", cat.id);
        }
    }

    #[test]
    fn test_category_lookup_falls_back_to_default() {
        assert_eq!(category("devops").name, "DevOps & Tools");
        assert_eq!(category("cooking").id, DEFAULT_TAB);
    }
}
