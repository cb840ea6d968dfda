use chrono::NaiveDate;

use super::{parse_date, ContentError, Searchable};

#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// ISO-8601 calendar date.
    pub date: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub featured: bool,
}

impl BlogPost {
    pub fn published(&self) -> Result<NaiveDate, ContentError> {
        parse_date(self.date)
    }

    /// Long form, e.g. "January 10, 2026". Falls back to the raw date.
    pub fn display_date(&self) -> String {
        self.published()
            .map(|d| d.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|_| self.date.to_string())
    }
}

impl Searchable for BlogPost {
    fn category_slug(&self) -> &str {
        self.category
    }

    fn search_fields(&self) -> [&str; 2] {
        [self.title, self.excerpt]
    }
}

pub static POSTS: &[BlogPost] = &[
    BlogPost {
        id: "1",
        title: "Advancing Neural Networks for Biomedical Image Analysis",
        excerpt: "Exploring how cutting-edge deep learning architectures like Vision Transformers (ViT), U-Net variants, and Diffusion Models are revolutionizing disease detection and diagnosis through medical imaging. This comprehensive analysis examines state-of-the-art techniques in histopathology analysis for cancer detection, radiology automation using 3D CNNs, and real-time surgical guidance systems. We delve into practical insights on model optimization strategies including mixed-precision training, knowledge distillation, and data augmentation pipelines for handling class imbalance in rare disease datasets. Special focus is given to clinical deployment considerations, explainability methods like Grad-CAM for radiologist trust, and pathways toward achieving FDA 510(k) and De Novo clearance for AI-powered diagnostic tools.",
        date: "2026-01-10",
        category: "ai",
        image: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=800&q=80",
        featured: true,
    },
    BlogPost {
        id: "2",
        title: "Blockchain Solutions for Secure Medical Data Sharing",
        excerpt: "How distributed ledger technology, zero-knowledge proofs (ZKPs), and homomorphic encryption enable secure, transparent sharing of patient data while maintaining strict HIPAA compliance and patient privacy. This comprehensive guide explores permissioned blockchain architectures using Hyperledger Fabric and Quorum, smart contract frameworks for granular consent management, and interoperability standards including HL7 FHIR integration for seamless EHR data exchange. We examine real-world case studies of blockchain implementation in healthcare ecosystems including prescription tracking systems, medical credential verification, cross-border health record portability, and pharmaceutical supply chain integrity. The article also addresses scalability challenges, gas optimization strategies, and hybrid on-chain/off-chain storage patterns for handling large medical imaging files.",
        date: "2025-11-22",
        category: "blockchain",
        image: "https://images.unsplash.com/photo-1639322537228-f710d846310a?w=800&q=80",
        featured: true,
    },
    BlogPost {
        id: "3",
        title: "Cybersecurity Best Practices for Healthcare Systems",
        excerpt: "Essential security protocols and defense-in-depth strategies to protect sensitive patient information from increasingly sophisticated ransomware attacks, nation-state actors, and insider threats. This comprehensive article covers zero-trust architecture implementation using microsegmentation and continuous verification, endpoint detection and response (EDR/XDR) systems, vulnerability management pipelines with CVSS-based prioritization, and incident response playbooks tailored for healthcare environments. We explore compliance frameworks including HIPAA Security Rule, HITRUST CSF, SOC 2 Type II, and NIST Cybersecurity Framework, with actionable insights for protecting IoT medical devices, PACS imaging systems, and legacy healthcare infrastructure. Special attention is given to secure DevOps practices, secrets management, network traffic analysis for anomaly detection, and building a security-first culture through phishing simulations and role-based training programs.",
        date: "2025-09-18",
        category: "cybersecurity",
        image: "https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=800&q=80",
        featured: false,
    },
    BlogPost {
        id: "4",
        title: "Building Responsive Bioinformatics Web Applications",
        excerpt: "A comprehensive full-stack development guide to creating high-performance, responsive web applications for visualizing and analyzing genomic data at petabyte scale. This in-depth tutorial explores modern tech stacks including React 18 with Server Components, Next.js 14 App Router, and TypeScript for type-safe frontends, paired with FastAPI and Django REST Framework backends optimized for bioinformatics workloads. We cover PostgreSQL with TimescaleDB extensions for time-series genomic data, Redis caching strategies for sequence alignment results, and WebGL/Three.js for interactive 3D protein visualization and molecular dynamics playback. The guide addresses scalable cloud architectures on AWS (ECS, Lambda, S3) and GCP (Cloud Run, BigQuery) for handling terabyte-scale sequencing datasets, implementing real-time collaborative analysis features using WebSockets, and optimizing Lighthouse scores for accessibility compliance in research environments.",
        date: "2025-07-15",
        category: "fullstack",
        image: "https://images.unsplash.com/photo-1555949963-ff9fe0c870eb?w=800&q=80",
        featured: false,
    },
    BlogPost {
        id: "5",
        title: "Machine Learning Approaches to Protein Folding Prediction",
        excerpt: "Recent breakthrough advances in computational methods for predicting protein structures, building on revolutionary innovations from AlphaFold 3, ESMFold, and RoseTTAFold All-Atom, and their transformative implications for drug discovery and precision medicine. This technical deep-dive analyzes multi-head attention mechanisms in protein language models, evolutionary-scale multiple sequence alignment (MSA) techniques, geometric deep learning on 3D molecular graphs using equivariant neural networks, and confidence scoring systems (pLDDT, PAE) for structure quality assessment. We explore practical applications in therapeutic antibody design, enzyme engineering for industrial biotechnology, structure-based virtual screening for novel small-molecule therapeutics, and predicting protein-protein interaction interfaces. The article also covers emerging techniques for modeling intrinsically disordered regions, membrane protein prediction challenges, and the integration of molecular dynamics simulations with ML predictions for drug binding affinity estimation.",
        date: "2025-05-08",
        category: "ai",
        image: "https://images.unsplash.com/photo-1532187863486-abf9dbad1b69?w=800&q=80",
        featured: false,
    },
    BlogPost {
        id: "6",
        title: "Smart Contracts for Clinical Trial Management",
        excerpt: "How blockchain-based smart contracts and decentralized autonomous organizations (DAOs) can dramatically improve transparency, patient enrollment efficiency, and operational oversight in clinical research trials. This comprehensive article examines Ethereum Layer 2 solutions (Optimism, Arbitrum) and Hyperledger Besu for enterprise-grade deployments, enabling automated patient consent verification with tamper-proof audit trails, real-time adverse event reporting systems, and immutable regulatory compliance documentation. We explore tokenized incentive mechanisms using ERC-20 and ERC-721 standards for trial participation rewards, decentralized data marketplaces for research collaboration, and significant cost reduction strategies through disintermediation of clinical research organizations (CROs). The guide also addresses oracle integration patterns for connecting on-chain contracts with off-chain clinical data sources, multi-signature governance for protocol amendments, and regulatory considerations for FDA 21 CFR Part 11 compliance in decentralized trial management systems.",
        date: "2025-03-25",
        category: "blockchain",
        image: "https://images.unsplash.com/photo-1639322537504-6427a16b0a28?w=800&q=80",
        featured: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_post_date_parses() {
        for post in POSTS {
            assert!(post.published().is_ok(), "bad date on post {}", post.id);
        }
    }

    #[test]
    fn test_display_date() {
        assert_eq!(POSTS[0].display_date(), "January 10, 2026");
        assert_eq!(POSTS[4].display_date(), "May 8, 2025");
    }

    #[test]
    fn test_posts_listed_newest_first() {
        let dates = POSTS
            .iter()
            .map(|p| p.published().expect("date should parse"))
            .collect::<Vec<_>>();
        assert!(dates.windows(2).all(|w| w[0] > w[1]));
    }
}
