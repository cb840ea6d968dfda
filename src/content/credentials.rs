use super::categories;

#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0-100.
    pub level: u8,
    pub category: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub field: &'static str,
    pub year: &'static str,
    pub logo: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub link: Option<&'static str>,
    pub logo: Option<&'static str>,
}

/// Monogram shown when an institution or issuer has no logo.
pub fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

impl Education {
    pub fn initial(&self) -> String {
        initial(self.institution)
    }
}

impl Certification {
    pub fn initial(&self) -> String {
        initial(self.issuer)
    }
}

/// Skill categories as shown on the badges: "All" then first-seen order.
pub fn skill_categories(skills: &[Skill]) -> Vec<&str> {
    let mut out = categories(skills.iter().map(|s| s.category));
    out[0] = "All";
    out
}

/// Skills under the selected badge; "All" keeps everything.
pub fn filter_skills<'a>(skills: &'a [Skill], category: &str) -> Vec<&'a Skill> {
    skills
        .iter()
        .filter(|s| category == "All" || s.category == category)
        .collect()
}

pub const CV_LINK: &str = "#";

pub static SKILLS: &[Skill] = &[
    Skill { name: "Machine Learning", level: 95, category: "AI" },
    Skill { name: "Deep Learning", level: 90, category: "AI" },
    Skill { name: "Natural Language Processing", level: 85, category: "AI" },
    Skill { name: "Computer Vision", level: 80, category: "AI" },
    Skill { name: "Python", level: 95, category: "Programming" },
    Skill { name: "TensorFlow", level: 90, category: "Framework" },
    Skill { name: "PyTorch", level: 85, category: "Framework" },
    Skill { name: "Blockchain Development", level: 75, category: "Blockchain" },
    Skill { name: "Smart Contracts", level: 70, category: "Blockchain" },
    Skill { name: "Cybersecurity", level: 80, category: "Security" },
    Skill { name: "Penetration Testing", level: 75, category: "Security" },
    Skill { name: "React", level: 85, category: "Frontend" },
    Skill { name: "Node.js", level: 80, category: "Backend" },
    Skill { name: "Bio Informatics", level: 70, category: "Domain" },
];

pub static EDUCATION: &[Education] = &[
    Education {
        institution: "National University",
        degree: "Bachelor of Science",
        field: "Computer Science, AI/ML Specialization",
        year: "2023-2027",
        logo: Some("https://edurank.org/assets/img/uni-logos/national-university-philippines-logo.png"),
    },
    Education {
        institution: "Far Eastern University",
        degree: "Bachelor of Science",
        field: "Architecture",
        year: "2012-2014",
        logo: Some("https://edurank.org/assets/img/uni-logos/far-eastern-university-logo.png"),
    },
];

pub static CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "TensorFlow Developer Certificate",
        issuer: "Google",
        date: "2021",
        link: Some("#"),
        logo: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=google"),
    },
    Certification {
        name: "AWS Certified Machine Learning – Specialty",
        issuer: "Amazon Web Services",
        date: "2020",
        link: Some("#"),
        logo: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=aws"),
    },
    Certification {
        name: "Certified Ethical Hacker (CEH)",
        issuer: "EC-Council",
        date: "2019",
        link: Some("#"),
        logo: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=ceh"),
    },
    Certification {
        name: "Blockchain Developer Certification",
        issuer: "Ethereum Foundation",
        date: "2018",
        link: Some("#"),
        logo: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=ethereum"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_categories() {
        assert_eq!(
            skill_categories(SKILLS),
            vec![
                "All",
                "AI",
                "Programming",
                "Framework",
                "Blockchain",
                "Security",
                "Frontend",
                "Backend",
                "Domain"
            ]
        );
    }

    #[test]
    fn test_filter_skills() {
        assert_eq!(filter_skills(SKILLS, "All").len(), SKILLS.len());
        let security = filter_skills(SKILLS, "Security");
        assert_eq!(
            security.iter().map(|s| s.name).collect::<Vec<_>>(),
            vec!["Cybersecurity", "Penetration Testing"]
        );
        assert!(filter_skills(SKILLS, "Underwater Basketry").is_empty());
    }

    #[test]
    fn test_levels_are_percentages() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_initials() {
        assert_eq!(EDUCATION[0].initial(), "N");
        assert_eq!(CERTIFICATIONS[2].initial(), "E");
        assert_eq!(initial(""), "");
    }
}
