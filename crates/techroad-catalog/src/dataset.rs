//! The technology dataset compiled into the binary.

use crate::record::{Category, Level, TechnologyRecord};

/// Read access to the catalog's records.
///
/// `StaticCatalog` is the only implementation; handlers depend on the trait.
pub trait Catalog: Send + Sync {
    fn records(&self) -> &[TechnologyRecord];

    fn find(&self, id: u32) -> Option<&TechnologyRecord> {
        self.records().iter().find(|r| r.id == id)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl Catalog for StaticCatalog {
    fn records(&self) -> &[TechnologyRecord] {
        technologies()
    }
}

pub fn technologies() -> &'static [TechnologyRecord] {
    &TECHNOLOGIES
}

pub fn find(id: u32) -> Option<&'static TechnologyRecord> {
    TECHNOLOGIES.iter().find(|r| r.id == id)
}

static TECHNOLOGIES: [TechnologyRecord; 8] = [
    TechnologyRecord {
        id: 1,
        name: "React",
        description: "A JavaScript library for building user interfaces",
        category: Category::Web,
        level: Level::Intermediate,
        image: "https://qualitythought.in/wp-content/uploads/2024/08/the_future_of_web_development_reactjs.webp",
        beginner_topics: &[
            "JSX syntax",
            "Components and Props",
            "State and Lifecycle",
            "Handling Events",
            "Conditional Rendering",
        ],
        intermediate_topics: &[
            "Hooks (useState, useEffect)",
            "Context API",
            "React Router",
            "Forms and Validation",
            "API Integration",
        ],
        advanced_topics: &[
            "Custom Hooks",
            "Performance Optimization",
            "Server-side Rendering",
            "Testing (Jest, React Testing Library)",
            "State Management (Redux, Zustand)",
        ],
        docs_url: "https://reactjs.org/docs/getting-started.html",
        course_url: "https://www.udemy.com/course/react-the-complete-guide-incl-redux/",
    },
    TechnologyRecord {
        id: 2,
        name: "Node.js",
        description: "JavaScript runtime built on Chrome's V8 JavaScript engine",
        category: Category::Web,
        level: Level::Intermediate,
        image: "https://bs-uploads.toptal.io/blackfish-uploads/components/open_graph_image/8960130/og_image/optimized/smart-node-js-form-validation-2121ed1d3f15a6cd9776415c5db7d86f.png",
        beginner_topics: &[
            "Node.js Fundamentals",
            "Modules and NPM",
            "File System Operations",
            "Basic HTTP Server",
            "Event Loop Basics",
        ],
        intermediate_topics: &[
            "Express.js Framework",
            "Middleware Concepts",
            "REST API Development",
            "Authentication (JWT)",
            "Database Integration",
        ],
        advanced_topics: &[
            "WebSockets (Socket.io)",
            "Performance Optimization",
            "Microservices Architecture",
            "Deployment and Scaling",
            "Testing (Mocha, Chai)",
        ],
        docs_url: "https://nodejs.org/en/docs/",
        course_url: "https://www.udemy.com/course/the-complete-nodejs-developer-course-2/",
    },
    TechnologyRecord {
        id: 3,
        name: "Python",
        description: "High-level, interpreted programming language",
        category: Category::Lang,
        level: Level::Beginner,
        image: "https://webandcrafts.com/_next/image?url=https%3A%2F%2Fadmin.wac.co%2Fuploads%2FFeatures_Of_Python_1_f4ccd6d9f7.jpg&w=4500&q=90",
        beginner_topics: &[
            "Syntax Basics",
            "Data Types",
            "Control Flow",
            "Functions",
            "Modules and Packages",
        ],
        intermediate_topics: &[
            "Object-Oriented Programming",
            "File Handling",
            "Error Handling",
            "List Comprehensions",
            "Working with APIs",
        ],
        advanced_topics: &[
            "Decorators",
            "Generators",
            "Multithreading",
            "Metaprogramming",
            "Python for Data Science",
        ],
        docs_url: "https://docs.python.org/3/",
        course_url: "https://www.udemy.com/course/complete-python-bootcamp/",
    },
    TechnologyRecord {
        id: 4,
        name: "Flutter",
        description: "UI toolkit for building natively compiled applications",
        category: Category::Mobile,
        level: Level::Intermediate,
        image: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTng2BI0G3-FzK578C6BPbN0b9U99hHGbjU3U9Ywn_jISz2IibwtJgk1yqG_nOFvj47nPU&usqp=CAU",
        beginner_topics: &[
            "Dart Language Basics",
            "Widget Tree",
            "Stateless vs Stateful Widgets",
            "Basic Layouts",
            "Handling User Input",
        ],
        intermediate_topics: &[
            "Navigation and Routing",
            "State Management (Provider)",
            "Networking",
            "Forms and Validation",
            "Working with APIs",
        ],
        advanced_topics: &[
            "Advanced State Management (Bloc, Riverpod)",
            "Animations",
            "Platform Channels",
            "Testing",
            "CI/CD for Flutter",
        ],
        docs_url: "https://flutter.dev/docs",
        course_url: "https://www.udemy.com/course/flutter-bootcamp-with-dart/",
    },
    TechnologyRecord {
        id: 5,
        name: "Data Structures",
        description: "Ways to organize and store data for efficient access",
        category: Category::Dsa,
        level: Level::Beginner,
        image: "https://staging.herovired.com/wp-content/uploads/2023/03/what-is-data-structure.webp",
        beginner_topics: &[
            "Arrays",
            "Linked Lists",
            "Stacks and Queues",
            "Hash Tables",
            "Basic Time Complexity",
        ],
        intermediate_topics: &[
            "Trees (Binary, BST)",
            "Graphs",
            "Recursion",
            "Sorting Algorithms",
            "Searching Algorithms",
        ],
        advanced_topics: &[
            "Advanced Graph Algorithms",
            "Dynamic Programming",
            "Tries",
            "Heaps",
            "Advanced Problem Solving",
        ],
        docs_url: "https://www.geeksforgeeks.org/data-structures/",
        course_url: "https://www.udemy.com/course/data-structures-and-algorithms-deep-dive-using-java/",
    },
    TechnologyRecord {
        id: 6,
        name: "Docker",
        description: "Platform for developing, shipping, and running applications",
        category: Category::Devops,
        level: Level::Intermediate,
        image: "https://projectdiscovery.io/_next/image?url=https%3A%2F%2Fprojectdiscovery.ghost.io%2Fcontent%2Fimages%2F2024%2F01%2FBlog---Docker.png&w=828&q=75",
        beginner_topics: &[
            "Container Basics",
            "Docker Installation",
            "Docker Images",
            "Basic Commands",
            "Dockerfile Basics",
        ],
        intermediate_topics: &[
            "Docker Compose",
            "Networking",
            "Volumes",
            "Multi-stage Builds",
            "Docker Hub",
        ],
        advanced_topics: &[
            "Docker Swarm",
            "Kubernetes Integration",
            "Security Best Practices",
            "CI/CD Pipelines",
            "Monitoring Containers",
        ],
        docs_url: "https://docs.docker.com/",
        course_url: "https://www.udemy.com/course/docker-mastery/",
    },
    TechnologyRecord {
        id: 7,
        name: "TypeScript",
        description: "Strongly typed programming language that builds on JavaScript",
        category: Category::Lang,
        level: Level::Intermediate,
        image: "https://miro.medium.com/v2/resize:fit:1200/1*NLy4TwRMzF1ac0AmHJ780w.png",
        beginner_topics: &[
            "Basic Types",
            "Interfaces",
            "Functions",
            "Classes",
            "Type Assertions",
        ],
        intermediate_topics: &[
            "Generics",
            "Enums",
            "Advanced Types",
            "Namespaces",
            "Modules",
        ],
        advanced_topics: &[
            "Decorators",
            "Utility Types",
            "Declaration Merging",
            "Mapped Types",
            "Performance Optimization",
        ],
        docs_url: "https://www.typescriptlang.org/docs/",
        course_url: "https://www.udemy.com/course/understanding-typescript/",
    },
    TechnologyRecord {
        id: 8,
        name: "Kubernetes",
        description: "Open-source container orchestration platform",
        category: Category::Devops,
        level: Level::Advanced,
        image: "https://spaceliftio.wpcomstaging.com/wp-content/uploads/2024/05/386.kubernetes-tools.png",
        beginner_topics: &[
            "Kubernetes Architecture",
            "Pods",
            "Services",
            "Deployments",
            "ConfigMaps and Secrets",
        ],
        intermediate_topics: &[
            "StatefulSets",
            "Volumes",
            "Ingress",
            "Namespaces",
            "RBAC",
        ],
        advanced_topics: &[
            "Custom Resource Definitions",
            "Operators",
            "Scaling and Performance",
            "Multi-cluster Management",
            "Security Best Practices",
        ],
        docs_url: "https://kubernetes.io/docs/home/",
        course_url: "https://www.udemy.com/course/certified-kubernetes-administrator/",
    },
];
