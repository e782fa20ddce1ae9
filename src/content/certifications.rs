#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certification {
    pub id: u32,
    pub name: &'static str,
    pub organization: &'static str,
    pub date: &'static str,
    pub expiration: Option<&'static str>,
    pub image: &'static str,
    pub verification_url: &'static str,
    pub skills: &'static [&'static str],
    pub pdf_url: Option<&'static str>,
}

impl Certification {
    /// "January 2023 - January 2026", or just the issue date.
    pub fn period(&self) -> String {
        match self.expiration {
            Some(exp) => format!("{} - {}", self.date, exp),
            None => self.date.to_string(),
        }
    }
}

pub static CERTIFICATIONS: [Certification; 6] = [
    Certification {
        id: 1,
        name: "AWS Certified Solutions Architect",
        organization: "Amazon Web Services",
        date: "January 2023",
        expiration: Some("January 2026"),
        image: "/placeholder.svg",
        verification_url: "https://example.com/verify",
        skills: &["Cloud Architecture", "AWS Services", "Security", "Networking"],
        pdf_url: Some("#"),
    },
    Certification {
        id: 2,
        name: "Professional Scrum Master I",
        organization: "Scrum.org",
        date: "March 2022",
        expiration: None,
        image: "/placeholder.svg",
        verification_url: "https://example.com/verify",
        skills: &["Agile Methodologies", "Scrum Framework", "Team Leadership"],
        pdf_url: Some("#"),
    },
    Certification {
        id: 3,
        name: "Google Professional Cloud Developer",
        organization: "Google Cloud",
        date: "June 2023",
        expiration: Some("June 2025"),
        image: "/placeholder.svg",
        verification_url: "https://example.com/verify",
        skills: &["Google Cloud Platform", "Cloud Development", "Containerization"],
        pdf_url: Some("#"),
    },
    Certification {
        id: 4,
        name: "React Developer Certification",
        organization: "Meta",
        date: "September 2022",
        expiration: None,
        image: "/placeholder.svg",
        verification_url: "https://example.com/verify",
        skills: &["React.js", "Frontend Development", "State Management", "Hooks"],
        pdf_url: Some("#"),
    },
    Certification {
        id: 5,
        name: "Certified Kubernetes Administrator",
        organization: "Cloud Native Computing Foundation",
        date: "November 2022",
        expiration: Some("November 2025"),
        image: "/placeholder.svg",
        verification_url: "https://example.com/verify",
        skills: &["Kubernetes", "Container Orchestration", "Cloud Native", "DevOps"],
        pdf_url: Some("#"),
    },
    Certification {
        id: 6,
        name: "MongoDB Certified Developer",
        organization: "MongoDB University",
        date: "April 2023",
        expiration: None,
        image: "/placeholder.svg",
        verification_url: "https://example.com/verify",
        skills: &["MongoDB", "NoSQL Databases", "Data Modeling", "Aggregation"],
        pdf_url: Some("#"),
    },
];

pub fn find_certification(id: u32) -> Option<&'static Certification> {
    CERTIFICATIONS.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_label() {
        assert_eq!(CERTIFICATIONS[0].period(), "January 2023 - January 2026");
        assert_eq!(CERTIFICATIONS[1].period(), "March 2022");
    }

    #[test]
    fn test_find_certification() {
        assert_eq!(find_certification(4).map(|c| c.organization), Some("Meta"));
        assert!(find_certification(0).is_none());
    }
}
