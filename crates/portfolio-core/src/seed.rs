//! Static content every section mounts with.

use serde::{Deserialize, Serialize};

use crate::grouped::Group;
use crate::model::{Article, ArticleKind, Experience, HostedDemo, Project, SiteProfile, SkillItem};

pub type SkillCategory = Group<SkillItem>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    pub profile: SiteProfile,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub demos: Vec<HostedDemo>,
    pub articles: Vec<Article>,
    pub skills: Vec<SkillCategory>,
}

impl Seed {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Content bundled with the binary.
    pub fn builtin() -> Self {
        Self {
            profile: SiteProfile {
                name: "Hanes".to_string(),
                title: "AI Engineer".to_string(),
                tagline: "Building intelligent systems with LLMs, Computer Vision, and Multimodal AI."
                    .to_string(),
                linkedin: "https://www.linkedin.com/in/yohanesegipratamayudoutomo/".to_string(),
                github: "https://github.com/hanes-projects".to_string(),
                huggingface: "https://huggingface.co/hanes".to_string(),
            },
            projects: builtin_projects(),
            experience: builtin_experience(),
            demos: builtin_demos(),
            articles: builtin_articles(),
            skills: builtin_skills(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn project(
    title: &str,
    category: &str,
    description: &str,
    tech: &[&str],
    repo: &str,
    demo: Option<&str>,
) -> Project {
    Project {
        title: title.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        tech: strings(tech),
        github: format!("https://github.com/hanes-projects/{repo}"),
        demo: demo.map(str::to_string),
        image: None,
    }
}

fn builtin_projects() -> Vec<Project> {
    vec![
        project(
            "AI News Intelligence Engine",
            "NLP",
            "LLM-powered system for news crawling, sentiment analysis, NER, and issue extraction.",
            &["Python", "LangChain", "LLM", "Elasticsearch"],
            "news-intelligence-engine",
            Some("https://huggingface.co/spaces/hanes/news-analyzer"),
        ),
        project(
            "Real-time Object Detection for Retail",
            "Computer Vision",
            "A high-performance computer vision system to track foot traffic and product interaction in real-time.",
            &["TensorFlow", "YOLOv8", "FastAPI", "Docker"],
            "retail-object-detection",
            Some("https://huggingface.co/spaces/hanes/retail-object-detection-demo"),
        ),
        project(
            "Multimodal Image-to-Recipe Generator",
            "Multimodal",
            "A deep learning model that takes an image of a dish and generates a plausible cooking recipe.",
            &["PyTorch", "Next.js", "CLIP", "ViT"],
            "image-to-recipe",
            Some("https://hanes-image-to-recipe.vercel.app"),
        ),
        project(
            "Autonomous AI Agent for Web Research",
            "AI Agent",
            "An autonomous agent that can perform comprehensive web research, synthesize findings, and generate a report.",
            &["CrewAI", "LangChain", "Serper API"],
            "web-research-agent",
            None,
        ),
        project(
            "Customer Support Chatbot with RAG",
            "NLP",
            "An intelligent chatbot using Retrieval-Augmented Generation to provide accurate answers from a knowledge base.",
            &["LlamaIndex", "Qdrant", "FastAPI"],
            "rag-chatbot",
            Some("https://huggingface.co/spaces/hanes/rag-support-bot"),
        ),
        project(
            "Multi-Agent Financial Analyst Swarm",
            "AI Agent",
            "A team of AI agents that collaborate to analyze stock data, read news, and provide investment insights.",
            &["Autogen", "Python", "Tavily API"],
            "financial-agent-swarm",
            None,
        ),
    ]
}

fn builtin_experience() -> Vec<Experience> {
    vec![
        Experience {
            company: "Intelligent Systems Corp".to_string(),
            role: "Lead AI Engineer".to_string(),
            duration: "Jan 2021 - Present".to_string(),
            accomplishments: strings(&[
                "Led the development of a production-scale NLP engine for document summarization, NER, and sentiment analysis, improving data processing efficiency by 300%.",
                "Designed and implemented multimodal pipelines combining vision and language models for innovative product features.",
                "Architected and deployed scalable AI agent workflows for task automation, reducing manual effort by 40%.",
                "Deployed and maintained AI systems in production environments using Docker, Kubernetes, and AWS services.",
            ]),
        },
        Experience {
            company: "Data Insights Inc.".to_string(),
            role: "Machine Learning Engineer".to_string(),
            duration: "Jun 2018 - Dec 2020".to_string(),
            accomplishments: strings(&[
                "Developed and trained computer vision models for image classification and object detection, achieving 95% accuracy.",
                "Built data pipelines for ETL processes, handling terabytes of data for model training.",
                "Collaborated with the software engineering team to integrate ML models into the main application via REST APIs.",
            ]),
        },
        Experience {
            company: "Tech Innovators (Internship)".to_string(),
            role: "AI Research Intern".to_string(),
            duration: "May 2017 - Aug 2017".to_string(),
            accomplishments: strings(&[
                "Researched and implemented state-of-the-art algorithms in natural language processing.",
                "Contributed to the development of a prototype for an internal knowledge base search engine.",
            ]),
        },
    ]
}

fn builtin_demos() -> Vec<HostedDemo> {
    let demo = |name: &str, task: &str, description: &str, space: &str| HostedDemo {
        name: name.to_string(),
        task: task.to_string(),
        description: description.to_string(),
        link: format!("https://huggingface.co/spaces/hanes/{space}"),
    };
    vec![
        demo(
            "News Analyzer",
            "NLP",
            "Analyze sentiment, extract entities, and summarize any news article URL.",
            "news-analyzer",
        ),
        demo(
            "Retail Object Detection Demo",
            "Computer Vision",
            "A live demo showcasing real-time object detection for retail analytics.",
            "retail-object-detection-demo",
        ),
        demo(
            "RAG Support Bot",
            "NLP",
            "Interact with a Retrieval-Augmented Generation chatbot for customer support.",
            "rag-support-bot",
        ),
    ]
}

fn builtin_articles() -> Vec<Article> {
    vec![
        Article {
            title: "Build a Modern RAG Pipeline in 2026: Docling + Qdrant Hybrid (BM25 + Dense) + AI Agent Step-by-Step Guide with Practical Code".to_string(),
            description: "Retrieval-Augmented Generation (RAG) continues to be the most practical way to build reliable, hallucination-resistant AI applications in 2026.".to_string(),
            kind: ArticleKind::Embed,
            link: Some("https://medium.com/@yohanesegipratama/build-a-modern-rag-pipeline-in-2026-docling-qdrant-hybrid-bm25-dense-ai-agent-step-by-step-guide-with-practical-code".to_string()),
            content: None,
        },
        Article {
            title: "Single-GPU vLLM Deployment: Running Nemotron-3-Nano-30B on RTX A6000 An Architecture Deep Dive".to_string(),
            description: "NVIDIA's Nemotron-3-Nano-30B-A3B (released December 2025) is a breakthrough in open-weight, efficient reasoning models. With a hybrid Mamba-Transformer + Mixture-of-Experts (MoE) architecture".to_string(),
            kind: ArticleKind::Embed,
            link: Some("https://medium.com/@yohanesegipratama/single-gpu-vllm-deployment-running-nemotron-3-nano-30b-on-rtx-a6000-an-architecture-deep-dive-e99fa4fcc45c".to_string()),
            content: None,
        },
    ]
}

fn builtin_skills() -> Vec<SkillCategory> {
    let item = |name: &str, icon: &str, description: &str| SkillItem {
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
    };
    let category = |label: &str, items: Vec<SkillItem>| Group {
        label: label.to_string(),
        items,
    };
    vec![
        category(
            "Languages",
            vec![
                item("Python", "PythonIcon", "The go-to language for AI/ML development."),
                item("TypeScript", "TypeScriptIcon", "For building robust and scalable web applications."),
            ],
        ),
        category(
            "AI / ML",
            vec![
                item("PyTorch", "PyTorchIcon", "My primary deep learning framework for its flexibility and performance."),
                item("TensorFlow", "TensorFlowIcon", "Experienced in building and deploying models with TensorFlow/Keras."),
                item("HuggingFace", "HuggingFaceIcon", "Extensive use of Transformers, Datasets, and the entire ecosystem."),
            ],
        ),
        category(
            "LLM / Agent",
            vec![
                item("LangChain", "LangChainIcon", "Building complex LLM applications and agentic workflows."),
                item("LlamaIndex", "LlamaIndexIcon", "Specializing in Retrieval-Augmented Generation (RAG) pipelines."),
                item("Autogen", "AutoGenIcon", "Developing multi-agent conversational systems."),
                item("CrewAI", "CrewAIIcon", "Orchestrating role-playing autonomous AI agents."),
            ],
        ),
        category(
            "Data",
            vec![
                item("MongoDB", "MongoDBIcon", "For flexible, schema-less data storage in modern applications."),
                item("Elasticsearch", "ElasticsearchIcon", "For powerful search, logging, and analytics."),
                item("Qdrant", "QdrantIcon", "High-performance vector database for semantic search and RAG."),
            ],
        ),
        category(
            "Backend",
            vec![
                item("FastAPI", "FastAPIIcon", "Building high-performance Python APIs for serving ML models."),
                item("Node.js", "NodeJsIcon", "For building scalable server-side applications."),
            ],
        ),
        category(
            "Frontend",
            vec![
                item("Next.js", "NextJsIcon", "My framework of choice for building full-stack React applications."),
                item("React", "ReactIcon", "Building interactive and dynamic user interfaces."),
                item("TailwindCSS", "TailwindCssIcon", "For rapid, utility-first UI development."),
            ],
        ),
        category(
            "DevOps",
            vec![
                item("Docker", "DockerIcon", "Containerizing applications for consistent development and deployment."),
                item("GitHub Actions", "GitHubActionsIcon", "Automating CI/CD pipelines and workflows."),
                item("AWS", "AWSIcon", "Deploying and managing cloud infrastructure for AI services."),
            ],
        ),
    ]
}
