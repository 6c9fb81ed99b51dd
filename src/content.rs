use crate::icons::Icon;

/// Identifies a member of `TEAM`. Only the roster below can mint one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MemberId(u8);

pub struct TeamMember {
    pub id: MemberId,
    pub name: &'static str,
    pub role: &'static str,
    pub intro: &'static str,
    pub photo: &'static str,
}

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub accent: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct ProcessStep {
    pub label: &'static str,
    pub icon: Icon,
}

pub struct Pillar {
    pub title: &'static str,
    pub text: &'static str,
    pub icon: Icon,
}

pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub recommended: bool,
}

pub struct ContactChannel {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
}

pub static HERO_WORDS: [&str; 4] = ["Websites", "POS Systems", "Mobile Apps", "AI Automation"];

pub static HERO_STATS: [Stat; 3] = [
    Stat { value: "250+", label: "Operational Assets" },
    Stat { value: "120+", label: "Strategic Nodes" },
    Stat { value: "99%", label: "Precision Index" },
];

pub static ABOUT_STATS: [Stat; 4] = [
    Stat { value: "250+", label: "Protocols" },
    Stat { value: "40+", label: "Engineers" },
    Stat { value: "15+", label: "Nations" },
    Stat { value: "100%", label: "Precision" },
];

pub static SERVICES: [Service; 6] = [
    Service {
        title: "Core Web Systems",
        description: "Architecture-first development using React, Next.js, and high-frequency cloud protocols.",
        icon: Icon::Monitor,
        accent: "accent-blue",
    },
    Service {
        title: "POS Infrastructure",
        description: "Distributed commerce systems with real-time inventory synchronization.",
        icon: Icon::Database,
        accent: "accent-purple",
    },
    Service {
        title: "Mobile Nexus",
        description: "Flawless native performance across iOS and Android with refined UI ecosystems.",
        icon: Icon::Smartphone,
        accent: "accent-blue",
    },
    Service {
        title: "Autonomous AI",
        description: "Deep learning integration and LLM-driven workflow automation.",
        icon: Icon::Bot,
        accent: "accent-purple",
    },
    Service {
        title: "UI Interaction",
        description: "Frictionless interface design focused on behavioral psychology and conversion.",
        icon: Icon::PenTool,
        accent: "accent-blue",
    },
    Service {
        title: "Neural Shield",
        description: "Multi-layer cybersecurity and offensive security audits for enterprise data.",
        icon: Icon::Shield,
        accent: "accent-purple",
    },
];

pub static PROJECTS: [Project; 3] = [
    Project {
        title: "Nova Retail Protocol",
        category: "Enterprise Systems",
        image: "https://images.unsplash.com/photo-1556742049-3ad74c6d7ef7?auto=format&fit=crop&q=80&w=1200",
        tech: &["Go", "React", "Kafka"],
    },
    Project {
        title: "Aether Digital Hub",
        category: "Experience Web",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&q=80&w=1200",
        tech: &["Next.js", "Three.js"],
    },
    Project {
        title: "Synapse AI Assistant",
        category: "Deep Learning",
        image: "https://images.unsplash.com/photo-1531746790731-6c087fecd05a?auto=format&fit=crop&q=80&w=1200",
        tech: &["PyTorch", "OpenAI"],
    },
];

pub static TEAM: [TeamMember; 4] = [
    TeamMember {
        id: MemberId(1),
        name: "Sachin Kavishka",
        role: "Product Manager",
        intro: "Leads product direction and client alignment. Turns complex ideas into clear roadmaps and fast execution.",
        photo: "/team/member-1.svg",
    },
    TeamMember {
        id: MemberId(2),
        name: "Chamodi Kavishka",
        role: "Full-Stack Engineer",
        intro: "Builds scalable web apps, APIs, and databases. Focused on performance, security, and clean architecture.",
        photo: "/team/member-2.svg",
    },
    TeamMember {
        id: MemberId(3),
        name: "Sadeepa Dilshan",
        role: "UI/UX Designer",
        intro: "Designs high-converting interfaces with smooth motion and modern visual systems. Obsessed with details.",
        photo: "/team/member-3.svg",
    },
    TeamMember {
        id: MemberId(4),
        name: "Manuka Ilangasinghe",
        role: "AI & Automation Engineer",
        intro: "Integrates AI assistants and workflow automation. Builds smart tools that reduce time and cost.",
        photo: "/team/member-4.svg",
    },
];

pub static MARQUEE_TAGS: [&str; 8] = [
    "Scalable",
    "Secure",
    "Autonomous",
    "Global",
    "Optimized",
    "Intelligent",
    "Distributed",
    "Robust",
];

pub static PROCESS_STEPS: [ProcessStep; 5] = [
    ProcessStep { label: "Discover", icon: Icon::Globe },
    ProcessStep { label: "Architect", icon: Icon::Activity },
    ProcessStep { label: "Develop", icon: Icon::Code },
    ProcessStep { label: "Harden", icon: Icon::Shield },
    ProcessStep { label: "Deploy", icon: Icon::Rocket },
];

pub static ABOUT_PILLARS: [Pillar; 2] = [
    Pillar {
        title: "Zero-Day Security",
        text: "Hardened code from the first commit.",
        icon: Icon::Shield,
    },
    Pillar {
        title: "Infinite Scaling",
        text: "Infrastructure designed for tomorrow's load.",
        icon: Icon::Rocket,
    },
];

pub static PRICING: [PricingTier; 3] = [
    PricingTier {
        name: "Launchpad",
        price: "$1.5k",
        features: &[
            "High-End Landing Protocol",
            "Mobile Infrastructure",
            "SEO Indexing",
            "CMS Interface",
            "30 Day Security",
        ],
        recommended: false,
    },
    PricingTier {
        name: "Enterprise",
        price: "$3.5k",
        features: &[
            "Distributed Commerce",
            "Full API Ecosystem",
            "Cloud Scaling",
            "Behavioral UI",
            "Priority Uplink",
        ],
        recommended: true,
    },
    PricingTier {
        name: "Omni Nexus",
        price: "Custom",
        features: &[
            "AI Agent Integration",
            "Complex POS Networks",
            "Neural Networks",
            "Private Lead Architect",
            "White-Glove Support",
        ],
        recommended: false,
    },
];

pub static CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        icon: Icon::Mail,
        label: "Neural Uplink",
        value: "mcss@matrix.lk",
    },
    ContactChannel {
        icon: Icon::MessageSquare,
        label: "Direct Protocol",
        value: "+94 77 167 6298",
    },
    ContactChannel {
        icon: Icon::MapPin,
        label: "Command Node",
        value: "Colombo, Sri Lanka",
    },
];

pub static DEPLOYMENT_TYPES: [&str; 4] = [
    "Full POS Ecosystem",
    "Web Infrastructure",
    "Mobile Core App",
    "AI Automation Hub",
];

pub fn member(id: MemberId) -> Option<&'static TeamMember> {
    TEAM.iter().find(|member| member.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn roster_ids_are_unique_and_resolvable() {
        let ids: HashSet<MemberId> = TEAM.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), TEAM.len());
        for m in TEAM.iter() {
            assert_eq!(member(m.id).map(|found| found.name), Some(m.name));
        }
    }

    #[test]
    fn exactly_one_recommended_tier() {
        assert_eq!(PRICING.iter().filter(|tier| tier.recommended).count(), 1);
    }
}
