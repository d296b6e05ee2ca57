//! The curated article set served whenever the live feed is unavailable.

use crate::articles::models::Article;

struct CuratedArticle {
    id: u32,
    title: &'static str,
    author: &'static str,
    summary: &'static str,
    source: &'static str,
}

const CURATED: [CuratedArticle; 6] = [
    CuratedArticle {
        id: 101,
        title: "The Science of Sleep: Why You Need 8 Hours",
        author: "Sleep Foundation",
        summary: "Sleep is essential for mental health. Discover the cognitive benefits of a good night's rest and tips for better sleep hygiene.",
        source: "https://www.sleepfoundation.org/",
    },
    CuratedArticle {
        id: 102,
        title: "Managing Academic Stress in College",
        author: "Student Minds",
        summary: "Exams and deadlines can be overwhelming. Here are practical strategies to manage stress and maintain a healthy work-life balance.",
        source: "https://www.studentminds.org.uk/",
    },
    CuratedArticle {
        id: 103,
        title: "Understanding Anxiety: Signs and Coping Mechanisms",
        author: "NIMH",
        summary: "Anxiety is more than just being nervous. Learn about the symptoms of anxiety disorders and effective grounding techniques.",
        source: "https://www.nimh.nih.gov/",
    },
    CuratedArticle {
        id: 104,
        title: "The Power of Mindfulness Meditation",
        author: "Mindful.org",
        summary: "Mindfulness can reduce stress and improve focus. A beginner's guide to starting a daily meditation practice.",
        source: "https://www.mindful.org/",
    },
    CuratedArticle {
        id: 105,
        title: "Building Healthy Relationships on Campus",
        author: "Love is Respect",
        summary: "Navigating friendships and dating in college. Tips for communication, boundaries, and recognizing healthy dynamics.",
        source: "https://www.loveisrespect.org/",
    },
    CuratedArticle {
        id: 106,
        title: "Fueling Your Brain: Nutrition for Mental Health",
        author: "Harvard Health",
        summary: "What you eat affects how you feel. Explore the connection between diet, gut health, and mood regulation.",
        source: "https://www.health.harvard.edu/",
    },
];

/// Returns the 6 curated articles. The set ignores the category filter.
pub fn fallback_articles() -> Vec<Article> {
    CURATED
        .iter()
        .map(|a| Article {
            id: a.id,
            title: a.title.to_string(),
            author: a.author.to_string(),
            summary: a.summary.to_string(),
            source: Some(a.source.to_string()),
            image: None,
        })
        .collect()
}
