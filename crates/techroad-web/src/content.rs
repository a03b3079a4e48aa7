//! Static copy for the informational pages.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct PricingTier {
    pub name: &'static str,
    pub tagline: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub popular: bool,
}

#[derive(Debug, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

// ── Home ─────────────────────────────────────────────────────────────────────

pub const HERO_TECHNOLOGIES: &[&str] = &["React", "Node.js", "Python", "AWS", "Data Science", "AI"];

pub const HERO_STATS: &[Stat] = &[
    Stat { value: "150+",  label: "Roadmaps" },
    Stat { value: "2.5M+", label: "Users" },
    Stat { value: "98%",   label: "Success Rate" },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Comprehensive Roadmaps",
        description: "Step-by-step guides for mastering any technology from beginner to advanced levels.",
    },
    Feature {
        title: "Web Development",
        description: "Everything from HTML/CSS basics to advanced JavaScript frameworks.",
    },
    Feature {
        title: "Mobile Development",
        description: "iOS, Android, and cross-platform development with Flutter and React Native.",
    },
    Feature {
        title: "Programming Languages",
        description: "Master Python, JavaScript, Java, C++, and more with our structured paths.",
    },
    Feature {
        title: "Data Structures & Algorithms",
        description: "Essential computer science concepts for coding interviews and problem solving.",
    },
    Feature {
        title: "Community Support",
        description: "Join our community of learners to get help and share knowledge.",
    },
];

pub const STEPS: &[Step] = &[
    Step {
        number: 1,
        title: "Choose Your Path",
        description: "Browse our technology categories and select the roadmap that matches your goals.",
    },
    Step {
        number: 2,
        title: "Follow the Steps",
        description: "Progress through beginner, intermediate, and advanced topics in logical order.",
    },
    Step {
        number: 3,
        title: "Build Projects",
        description: "Apply what you learn with practical projects at each stage of your journey.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "These roadmaps helped me land my first developer job. The structured approach made learning so much easier!",
        author: "Sarah Johnson",
        role: "Frontend Developer",
        avatar: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&w=688&q=80",
    },
    Testimonial {
        quote: "As a self-taught developer, I was overwhelmed by all the technologies. TechRoad gave me clarity and direction.",
        author: "Michael Chen",
        role: "Full Stack Developer",
        avatar: "https://images.unsplash.com/photo-1560250097-0b93528c311a?auto=format&fit=crop&w=687&q=80",
    },
    Testimonial {
        quote: "The best resource I've found for structured learning. The roadmaps are constantly updated with the latest tech.",
        author: "Emma Rodriguez",
        role: "Mobile Developer",
        avatar: "https://images.unsplash.com/photo-1580489944761-15a19d654956?auto=format&fit=crop&w=761&q=80",
    },
];

// ── About ────────────────────────────────────────────────────────────────────

pub const ABOUT_STATS: &[Stat] = &[
    Stat { value: "2.5M+", label: "Learners Worldwide" },
    Stat { value: "150+",  label: "Learning Roadmaps" },
    Stat { value: "100%",  label: "Free Core Access" },
];

pub const VALUES: &[Feature] = &[
    Feature {
        title: "Democratizing Technology Education",
        description: "Quality learning paths should be available to everyone, regardless of background or budget.",
    },
    Feature {
        title: "Structured Learning",
        description: "Clear progressions from fundamentals to mastery so you always know what to learn next.",
    },
    Feature {
        title: "Accessibility",
        description: "Content designed to be usable on any device and approachable for every learner.",
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Alex Johnson",
        role: "Founder & CEO",
        bio: "Full stack developer with 10+ years of experience in tech education.",
        image: "https://images.unsplash.com/photo-1560250097-0b93528c311a?auto=format&fit=crop&w=687&q=80",
    },
    TeamMember {
        name: "Maria Garcia",
        role: "Lead Educator",
        bio: "Specializes in frontend technologies and curriculum development.",
        image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&w=688&q=80",
    },
    TeamMember {
        name: "James Wilson",
        role: "Mobile Expert",
        bio: "iOS and Android developer passionate about teaching mobile technologies.",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&w=687&q=80",
    },
    TeamMember {
        name: "Sarah Lee",
        role: "DSA Specialist",
        bio: "Competitive programmer who makes algorithms easy to understand.",
        image: "https://images.unsplash.com/photo-1580489944761-15a19d654956?auto=format&fit=crop&w=761&q=80",
    },
];

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        year: "2020",
        title: "The First Roadmap",
        description: "TechRoad started as a single web development roadmap shared among friends.",
    },
    Milestone {
        year: "2021",
        title: "Community Launch",
        description: "Opened discussion forums and study groups for learners.",
    },
    Milestone {
        year: "2022",
        title: "Mobile and DevOps Paths",
        description: "Expanded the catalog with mobile development and DevOps roadmaps.",
    },
    Milestone {
        year: "2023",
        title: "Teams Plan",
        description: "Introduced team management and progress tracking for organizations.",
    },
];

// ── Services ─────────────────────────────────────────────────────────────────

pub const SERVICES: &[Service] = &[
    Service {
        title: "Structured Roadmaps",
        description: "Comprehensive learning paths for all major technologies, updated regularly.",
        features: &[
            "Beginner to advanced progression",
            "Curated resource recommendations",
            "Project ideas for each level",
        ],
    },
    Service {
        title: "Learning Resources",
        description: "High-quality tutorials, articles, and video recommendations.",
        features: &[
            "Free and paid resource options",
            "Community-voted best resources",
            "Expert-reviewed content",
        ],
    },
    Service {
        title: "Community Support",
        description: "Connect with fellow learners and get help when you're stuck.",
        features: &["Discussion forums", "Live Q&A sessions", "Study groups"],
    },
    Service {
        title: "Web Development",
        description: "Specialized roadmaps for frontend, backend, and full-stack development.",
        features: &[
            "HTML/CSS/JavaScript fundamentals",
            "Modern frameworks (React, Vue, Angular)",
            "Backend technologies (Node, Django, Spring)",
        ],
    },
    Service {
        title: "Mobile Development",
        description: "Native and cross-platform mobile app development paths.",
        features: &[
            "iOS (Swift) and Android (Kotlin)",
            "React Native and Flutter",
            "Mobile UI/UX best practices",
        ],
    },
    Service {
        title: "Data Science",
        description: "Roadmaps for data analysis, machine learning, and AI.",
        features: &[
            "Python for data science",
            "Machine learning algorithms",
            "Data visualization",
        ],
    },
    Service {
        title: "DevOps & Cloud",
        description: "Infrastructure, deployment, and cloud services learning paths.",
        features: &["Docker and Kubernetes", "AWS, Azure, GCP", "CI/CD pipelines"],
    },
];

pub const PRICING: &[PricingTier] = &[
    PricingTier {
        name: "Free",
        tagline: "Basic access to get started",
        price: "$0",
        features: &["Access to all roadmaps", "Community support"],
        cta: "Current Plan",
        popular: false,
    },
    PricingTier {
        name: "Pro",
        tagline: "For serious learners",
        price: "$9",
        features: &[
            "Everything in Free",
            "Priority support",
            "Exclusive content",
            "Downloadable resources",
        ],
        cta: "Upgrade Now",
        popular: true,
    },
    PricingTier {
        name: "Enterprise",
        tagline: "For teams and organizations",
        price: "$29",
        features: &[
            "Everything in Pro",
            "Team management",
            "Progress tracking",
            "Custom learning paths",
        ],
        cta: "Contact Sales",
        popular: false,
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How often are roadmaps updated?",
        answer: "We update our roadmaps quarterly to ensure they reflect the latest technologies and best practices. Major changes in the tech landscape may trigger more frequent updates.",
    },
    Faq {
        question: "Can I suggest a new technology roadmap?",
        answer: "Absolutely! We welcome suggestions from our community. You can submit your request through our feedback form, and our team will evaluate it for inclusion.",
    },
    Faq {
        question: "Is there a mobile app available?",
        answer: "Not currently, but our website is fully responsive and works great on mobile devices. A native mobile app is in our development roadmap.",
    },
    Faq {
        question: "How do I cancel my subscription?",
        answer: "You can cancel anytime from your account settings. There are no cancellation fees, and you'll continue to have access until the end of your billing period.",
    },
    Faq {
        question: "Do you offer team discounts?",
        answer: "Yes, we offer significant discounts for teams of 5 or more. Contact our sales team for custom pricing based on your organization's size and needs.",
    },
];
