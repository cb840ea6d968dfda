use super::{Category, Searchable};

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub technologies: &'static [&'static str],
    pub outcomes: &'static [&'static str],
    pub image: &'static str,
    pub github: Option<&'static str>,
    pub live_url: Option<&'static str>,
}

impl Searchable for Project {
    fn category_slug(&self) -> &str {
        self.category.slug()
    }

    fn search_fields(&self) -> [&str; 2] {
        [self.name, self.description]
    }
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: "ai-1",
        name: "AltFlex: AI-Powered Forensic Framework",
        description: "AltFlex is an integrated AI and digital forensics framework designed to proactively detect and analyze security exploits in cross-chain bridges and DeFi protocols. By combining machine learning anomaly detection with blockchain forensic analysis, the system provides a comprehensive security solution for the rapidly evolving Web3 ecosystem.",
        category: Category::Ai,
        technologies: &["Python", "TensorFlow", "PyTorch", "Solidity", "Web3.py", "Docker"],
        outcomes: &[
            "Proactive exploit detection for DeFi protocols",
            "Cross-chain bridge security analysis",
            "Real-time anomaly detection with ML",
        ],
        image: "/projects/altflex-forensics.png",
        github: Some("https://github.com/flexycode/CCSFEN2L_ALTFLEX"),
        live_url: None,
    },
    Project {
        id: "ai-2",
        name: "WWE Superstar Popularity Tier Prediction",
        description: "A comprehensive machine learning system that predicts WWE superstar popularity tiers (Main Eventer, Midcard, Enhancement) based on career statistics and performance metrics. This multi-class classification project demonstrates end-to-end ML pipeline development with robust validation and deployment-ready features.",
        category: Category::Ai,
        technologies: &["Python", "Scikit-learn", "Pandas", "NumPy", "Matplotlib", "Seaborn"],
        outcomes: &[
            "Multi-class tier classification system",
            "End-to-end ML pipeline development",
            "Robust validation and deployment-ready features",
        ],
        image: "/projects/wwe-prediction.png",
        github: Some("https://github.com/flexycode/CCMACLRL_PROJECT"),
        live_url: None,
    },
    Project {
        id: "ai-3",
        name: "Genomic Data Analysis Platform",
        description: "Advanced platform for analyzing and visualizing genomic data with AI-powered insights for precision medicine.",
        category: Category::Ai,
        technologies: &["Python", "TensorFlow", "React", "Django", "PostgreSQL"],
        outcomes: &[
            "Reduced analysis time from days to hours",
            "95% accuracy in variant calling",
            "Used in 10+ research institutions",
        ],
        image: "https://images.unsplash.com/photo-1575505586569-646b2ca898fc?w=800&q=80",
        github: Some("https://github.com/flexycode/BIOF-101_ALT-genomic-ai"),
        live_url: Some("https://genomics.flexyledger.xyz"),
    },
    Project {
        id: "ai-4",
        name: "Predictive Healthcare Analytics",
        description: "Advanced ML system for predicting patient outcomes and treatment effectiveness using electronic health records and medical imaging.",
        category: Category::Ai,
        technologies: &["Python", "TensorFlow", "PyTorch", "DICOM", "FastAPI"],
        outcomes: &[
            "92% accuracy in predicting treatment outcomes",
            "Reduced readmission rates by 35%",
            "Integrated with hospital EMR systems",
        ],
        image: "https://images.unsplash.com/photo-1576091160550-2173dba999ef?w=800&q=80",
        github: Some("https://github.com/flexycode/BIOF-102_ALT-healthcare-predictive-analytics"),
        live_url: None,
    },
    Project {
        id: "ai-5",
        name: "Computer Vision for Manufacturing",
        description: "AI system for quality control and defect detection in manufacturing using computer vision.",
        category: Category::Ai,
        technologies: &["Python", "OpenCV", "PyTorch", "Flask", "Docker"],
        outcomes: &[
            "99.5% defect detection accuracy",
            "Reduced inspection time by 90%",
            "Deployed on edge devices",
        ],
        image: "https://images.unsplash.com/photo-1581094271901-8022df4466f9?w=800&q=80",
        github: Some("https://github.com/flexycode/cv-manufacturing"),
        live_url: None,
    },
    Project {
        id: "fs-1",
        name: "PharmaXLedger",
        description: "PharmaXLedger is a state-of-the-art pharmaceutical supply chain management platform designed to ensure the integrity, transparency, and traceability of life-saving medications. Built with a focus on high-stakes tracking, it bridges the gap between traditional centralized management and future decentralized immutable ledgers.",
        category: Category::Fullstack,
        technologies: &["React", "Node.js", "Solidity", "Ethereum", "PostgreSQL", "Docker"],
        outcomes: &[
            "End-to-end pharmaceutical tracking",
            "Blockchain-verified supply chain integrity",
            "HIPAA-compliant data management",
        ],
        image: "/projects/pharmaxledger.png",
        github: Some("https://github.com/flexycode/CTFDMBSL_ALT-PharmaXLedger"),
        live_url: None,
    },
    Project {
        id: "fs-2",
        name: "Mindchain: Real-time Collaboration Platform",
        description: "Mindchain is a high-performance, open-source alternative to Jira and Confluence, designed as a unified workspace for documentation (Pages) and project management (Issues). Built with the 'Linear' / 'Raycast' aesthetic in mind, Mindchain provides a clean, minimalist, and distraction-free environment for engineering teams to sync their thoughts and tasks.",
        category: Category::Fullstack,
        technologies: &["React", "Node.js", "WebSockets", "MongoDB", "Redis", "TypeScript"],
        outcomes: &[
            "Sub-100ms real-time updates",
            "Unified docs and project management",
            "Linear/Raycast-inspired aesthetic",
        ],
        image: "/projects/mindchain.png",
        github: Some("https://github.com/flexycode/CCMETHOD_ALT-Mindchain"),
        live_url: None,
    },
    Project {
        id: "fs-3",
        name: "Flight Booking Application",
        description: "A flight booking web application designed to simplify the process of booking flights with the use of modern JavaScript techstacks. Features seat selection, flight search, and booking management.",
        category: Category::Fullstack,
        technologies: &["React", "Redux", "Node.js", "Express.js", "MySQL", "Docker"],
        outcomes: &[
            "Streamlined flight booking process",
            "Real-time seat selection",
            "Modern responsive UI",
        ],
        image: "/projects/flight-booking.png",
        github: Some("https://github.com/flexycode/CTINFMGL_FINAL_PROJECT"),
        live_url: None,
    },
    Project {
        id: "fs-4",
        name: "Healthcare Management System",
        description: "Comprehensive platform for managing patient records, appointments, and medical billing with HIPAA compliance.",
        category: Category::Fullstack,
        technologies: &["React", "Node.js", "MongoDB", "AWS", "Docker"],
        outcomes: &[
            "Reduced administrative workload by 60%",
            "99.9% system uptime",
            "Implemented in 50+ clinics",
        ],
        image: "https://images.unsplash.com/photo-1576091160550-2173dba999ef?w=800&q=80",
        github: Some("https://github.com/flexycode/healthcare-management-system"),
        live_url: None,
    },
    Project {
        id: "fs-5",
        name: "E-commerce Analytics Dashboard",
        description: "Real-time analytics platform for e-commerce businesses with AI-powered sales predictions and inventory management.",
        category: Category::Fullstack,
        technologies: &["Next.js", "NestJS", "PostgreSQL", "Redis", "Kubernetes"],
        outcomes: &[
            "30% increase in sales conversion",
            "Real-time inventory tracking",
            "Customizable dashboards",
        ],
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&q=80",
        github: Some("https://github.com/flexycode/ecommerce-analytics"),
        live_url: Some("https://analytics.flexyledger.xyz"),
    },
    Project {
        id: "fs-6",
        name: "AI-Powered SaaS Analytics Platform",
        description: "Enterprise-grade analytics platform with predictive insights and automated reporting.",
        category: Category::Fullstack,
        technologies: &["Next.js", "NestJS", "PostgreSQL", "Redis", "Docker"],
        outcomes: &[
            "Reduced reporting time by 85%",
            "50+ enterprise clients",
            "99.99% uptime SLA",
        ],
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&q=80",
        github: Some("https://github.com/flexycode/analytics-saas"),
        live_url: Some("https://analytics.flexyledger.xyz"),
    },
    Project {
        id: "sec-1",
        name: "AltFlex: Smart Contract Security",
        description: "AltFlex is an integrated AI and digital forensics framework designed to proactively detect and analyze security exploits in cross-chain bridges and DeFi protocols. By combining machine learning anomaly detection with blockchain forensic analysis, the system provides a comprehensive security solution for the rapidly evolving Web3 ecosystem.",
        category: Category::Cybersecurity,
        technologies: &["Python", "Solidity", "TensorFlow", "Web3.py", "Docker"],
        outcomes: &[
            "Identified vulnerabilities in 150+ contracts",
            "Saved $2M in potential exploits",
            "Open-sourced to community",
        ],
        image: "/projects/altflex-forensics.png",
        github: Some("https://github.com/flexycode/CCSFEN2L_ALTFLEX"),
        live_url: None,
    },
    Project {
        id: "sec-2",
        name: "AI-Powered Threat Detection System",
        description: "Advanced threat detection platform using machine learning to identify and mitigate zero-day vulnerabilities in real-time.",
        category: Category::Cybersecurity,
        technologies: &["Python", "TensorFlow", "ELK Stack", "Kubernetes"],
        outcomes: &[
            "Reduced detection time from hours to milliseconds",
            "99.9% accuracy in threat classification",
            "Deployed in enterprise environments",
        ],
        image: "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?w=800&q=80",
        github: Some("https://github.com/flexyledger/ai-threat-detection"),
        live_url: None,
    },
    Project {
        id: "sec-3",
        name: "Blockchain Security Audit Framework",
        description: "Comprehensive security auditing framework for smart contracts with automated vulnerability detection and reporting.",
        category: Category::Cybersecurity,
        technologies: &["Solidity", "Foundry", "Python", "Docker"],
        outcomes: &[
            "Identified 100+ critical vulnerabilities",
            "Reduced audit time by 70%",
            "Adopted by leading blockchain projects",
        ],
        image: "/projects/blockchain-audit.png",
        github: Some("https://github.com/flexycode/CCSFEN2L_ALTFLEX"),
        live_url: None,
    },
    Project {
        id: "sec-4",
        name: "Zero-Trust Network Access (ZTNA) Solution",
        description: "Enterprise-grade zero-trust network access solution with continuous authentication and least-privilege access controls.",
        category: Category::Cybersecurity,
        technologies: &["Golang", "OAuth 2.0", "OpenID Connect", "Kubernetes", "SPA"],
        outcomes: &[
            "Reduced attack surface by 85%",
            "Seamless user experience with MFA",
            "Compliant with NIST 800-207",
        ],
        image: "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?w=800&q=80",
        github: Some("https://github.com/flexyledger/ztna-solution"),
        live_url: None,
    },
    Project {
        id: "sec-5",
        name: "Cloud-Native SIEM Platform",
        description: "Scalable Security Information and Event Management platform built for cloud-native environments with real-time threat intelligence.",
        category: Category::Cybersecurity,
        technologies: &["Elasticsearch", "Kafka", "Kubernetes", "React"],
        outcomes: &[
            "Processes 1M+ events per second",
            "Reduced mean time to detect (MTTD) by 90%",
            "Integrated with 50+ security tools",
        ],
        image: "/projects/cloud-siem.png",
        github: Some("https://github.com/flexyledger/cloud-siem"),
        live_url: None,
    },
    Project {
        id: "bc-1",
        name: "PharmaXLedger",
        description: "PharmaXLedger is a state-of-the-art pharmaceutical supply chain management platform designed to ensure the integrity, transparency, and traceability of life-saving medications. Built with a focus on high-stakes tracking, it bridges the gap between traditional centralized management and future decentralized immutable ledgers.",
        category: Category::Blockchain,
        technologies: &["Solidity", "Ethereum", "React", "Node.js", "IPFS", "Hardhat"],
        outcomes: &[
            "Immutable pharmaceutical tracking",
            "Smart contract-based verification",
            "Cross-stakeholder transparency",
        ],
        image: "/projects/pharmaxledger.png",
        github: Some("https://github.com/flexycode/CTFDMBSL_ALT-PharmaXLedger"),
        live_url: None,
    },
    Project {
        id: "bc-2",
        name: "AltFlex: Cross-Chain Security",
        description: "AltFlex is an integrated AI and digital forensics framework designed to proactively detect and analyze security exploits in cross-chain bridges and DeFi protocols. By combining machine learning anomaly detection with blockchain forensic analysis, the system provides a comprehensive security solution for the rapidly evolving Web3 ecosystem.",
        category: Category::Blockchain,
        technologies: &["Solidity", "Rust", "Python", "Web3.py", "Cosmos SDK"],
        outcomes: &[
            "Cross-chain bridge security analysis",
            "DeFi protocol vulnerability detection",
            "Blockchain forensic investigation tools",
        ],
        image: "/projects/altflex-forensics.png",
        github: Some("https://github.com/flexycode/CCSFEN2L_ALTFLEX"),
        live_url: None,
    },
    Project {
        id: "bc-3",
        name: "DeFi Yield Aggregator",
        description: "A decentralized finance platform that automatically optimizes yield farming strategies across multiple protocols to maximize returns.",
        category: Category::Blockchain,
        technologies: &["Solidity", "Ethereum", "Web3.js", "React", "Hardhat"],
        outcomes: &[
            "30% higher APY compared to single-protocol staking",
            "$5M+ TVL within first month",
            "Featured in top DeFi platforms",
        ],
        image: "/projects/defi-yield.png",
        github: Some("https://github.com/flexyledger/defi-yield-aggregator"),
        live_url: Some("https://yield.flexyledger.xyz"),
    },
    Project {
        id: "bc-4",
        name: "NFT Marketplace with AI Curation",
        description: "A next-generation NFT marketplace with AI-powered discovery and personalized recommendations.",
        category: Category::Blockchain,
        technologies: &["IPFS", "Ethereum", "TensorFlow.js", "Next.js", "GraphQL"],
        outcomes: &[
            "Reduced discovery time by 60%",
            "10,000+ monthly active users",
            "Featured in NFT industry reports",
        ],
        image: "/projects/nft-marketplace.png",
        github: Some("https://github.com/flexyledger/nft-ai-marketplace"),
        live_url: Some("https://nft.flexyledger.xyz"),
    },
    Project {
        id: "bc-5",
        name: "Cross-Chain Token Bridge",
        description: "A secure and gas-efficient bridge for transferring assets between multiple blockchains.",
        category: Category::Blockchain,
        technologies: &["Cosmos SDK", "IBC Protocol", "Rust", "Tendermint", "WASM"],
        outcomes: &[
            "Supports 5+ blockchains",
            "$50M+ in cross-chain volume",
            "<1 minute transaction finality",
        ],
        image: "/projects/cross-chain-bridge.png",
        github: Some("https://github.com/flexyledger/cross-chain-bridge"),
        live_url: Some("https://bridge.flexyledger.xyz"),
    },
];
