use crate::modules::portfolio::application::domain::{
    Experience, ExtraFields, Hero, PortfolioDocument, Project, Service, ServiceIcon, Skill,
    Skills, SocialLinks, Testimonial,
};

fn skill(name: &str, level: u8) -> Skill {
    Skill {
        name: name.to_string(),
        level,
        extra: ExtraFields::new(),
    }
}

pub fn sample_project(id: &str) -> Project {
    Project {
        id: id.to_string(),
        title: "Inventory Tracker".to_string(),
        description: "Stock levels across three warehouses".to_string(),
        image: "/images/inventory.png".to_string(),
        technologies: vec!["React".to_string(), "Node.js".to_string()],
        link: "https://inventory.example.com".to_string(),
        github: "https://github.com/example/inventory".to_string(),
        category: "Web App".to_string(),
        extra: ExtraFields::new(),
    }
}

/// A complete document that passes validation: two projects, one entry in
/// every other section, and an empty database skill list.
pub fn sample_document() -> PortfolioDocument {
    let mut second = sample_project("p-2");
    second.title = "Recipe Box".to_string();
    second.category = "Mobile".to_string();

    PortfolioDocument {
        hero: Hero {
            name: "Jane Doe".to_string(),
            title: "Full Stack Developer".to_string(),
            description: "I build web applications end to end".to_string(),
            image: "/images/profile.jpg".to_string(),
            social_links: SocialLinks {
                linkedin: "https://linkedin.com/in/janedoe".to_string(),
                github: "https://github.com/janedoe".to_string(),
                email: "jane@example.com".to_string(),
                extra: ExtraFields::new(),
            },
            extra: ExtraFields::new(),
        },
        projects: vec![sample_project("p-1"), second],
        skills: Skills {
            frontend: vec![skill("React", 90), skill("CSS", 85)],
            backend: vec![skill("Node.js", 80)],
            database: vec![],
            tools: vec![skill("Git", 88), skill("Docker", 70)],
            extra: ExtraFields::new(),
        },
        services: vec![Service {
            id: "s-1".to_string(),
            title: "Web Development".to_string(),
            description: "Responsive sites and dashboards".to_string(),
            icon: ServiceIcon::Code,
            features: vec!["Responsive design".to_string()],
            extra: ExtraFields::new(),
        }],
        experience: vec![Experience {
            id: "e-1".to_string(),
            title: "Senior Developer".to_string(),
            company: "Acme Corp".to_string(),
            period: "2020 - Present".to_string(),
            location: "Remote".to_string(),
            description: "Leads the storefront team".to_string(),
            responsibilities: vec!["Code review".to_string()],
            extra: ExtraFields::new(),
        }],
        testimonials: vec![Testimonial {
            id: "t-1".to_string(),
            name: "John Smith".to_string(),
            role: "CTO".to_string(),
            company: "Acme Corp".to_string(),
            content: "Shipped every milestone early".to_string(),
            rating: 5,
            image: "/images/john.jpg".to_string(),
            extra: ExtraFields::new(),
        }],
        extra: ExtraFields::new(),
    }
}
