#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experience {
    pub id: u32,
    pub company: &'static str,
    pub position: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub static EXPERIENCES: [Experience; 3] = [
    Experience {
        id: 1,
        company: "Tech Innovations Inc.",
        position: "Senior Full Stack Developer",
        period: "Jan 2021 - Present",
        location: "San Francisco, CA",
        description: "Leading development of enterprise SaaS applications and mentoring junior developers.",
        achievements: &[
            "Led a team of 5 developers to deliver a major platform upgrade that increased user engagement by 40%",
            "Implemented CI/CD pipeline that reduced deployment time by 70%",
            "Optimized database queries resulting in 50% faster page load times",
            "Introduced automated testing that reduced bugs in production by 60%",
        ],
        technologies: &["React", "Node.js", "TypeScript", "MongoDB", "AWS", "Docker"],
    },
    Experience {
        id: 2,
        company: "Digital Solutions LLC",
        position: "Full Stack Developer",
        period: "Mar 2018 - Dec 2020",
        location: "Austin, TX",
        description: "Developed and maintained web applications for clients across various industries.",
        achievements: &[
            "Built an e-commerce platform that increased client's online sales by 200%",
            "Developed a custom CRM system that improved customer service response time by 35%",
            "Created mobile-responsive designs that increased mobile user engagement by 60%",
            "Integrated payment gateways and third-party APIs for seamless user experience",
        ],
        technologies: &["JavaScript", "React", "Express", "PostgreSQL", "Redux", "Firebase"],
    },
    Experience {
        id: 3,
        company: "WebCraft Studios",
        position: "Frontend Developer",
        period: "Jun 2016 - Feb 2018",
        location: "Seattle, WA",
        description: "Focused on creating responsive and accessible user interfaces for web applications.",
        achievements: &[
            "Redesigned the company website resulting in 45% increase in conversion rate",
            "Implemented accessibility improvements that ensured WCAG 2.1 AA compliance",
            "Developed reusable component library that accelerated development time by 30%",
            "Collaborated with UX designers to implement pixel-perfect designs",
        ],
        technologies: &["HTML/CSS", "JavaScript", "Angular", "Sass", "Bootstrap", "Git"],
    },
];
