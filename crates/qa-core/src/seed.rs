//! Fixed seed data loaded when a session starts.
//!
//! Ages are expressed relative to the seeding instant so that newest/oldest
//! ordering is well defined.

use chrono::{DateTime, Duration, Utc};

use qa_model::{Category, Priority, Question, QuestionId, QuestionStatus, Response, ResponseId};

struct SeedQuestion {
    id: u64,
    title: &'static str,
    excerpt: &'static str,
    author: &'static str,
    avatar: &'static str,
    status: QuestionStatus,
    priority: Priority,
    category: &'static str,
    reviewer_group: &'static str,
    age: Duration,
    responses: u32,
    tags: &'static [&'static str],
}

const OAUTH_DESCRIPTION: &str = "I'm working on a React application and need to implement OAuth \
authentication with Google and GitHub.

I've looked at several libraries like react-oauth/google and @octokit/auth-oauth-app, but I'm not \
sure about the best practices for:

1. Storing tokens securely
2. Handling token refresh
3. Managing user sessions
4. Protecting routes

Has anyone implemented this recently? What approach would you recommend?";

fn seed_rows() -> [SeedQuestion; 5] {
    [
        SeedQuestion {
            id: 1,
            title: "How to implement OAuth authentication in React?",
            excerpt: "I need help with implementing OAuth authentication using Google and GitHub providers...",
            author: "John Smith",
            avatar: "avatars/1.jpg",
            status: QuestionStatus::Pending,
            priority: Priority::Medium,
            category: "technical",
            reviewer_group: "Technical Team",
            age: Duration::hours(2),
            responses: 0,
            tags: &["react", "oauth", "authentication"],
        },
        SeedQuestion {
            id: 2,
            title: "Database migration best practices for production",
            excerpt: "What are the recommended approaches for handling database schema changes in production environments?",
            author: "Sarah Johnson",
            avatar: "avatars/2.jpg",
            status: QuestionStatus::InReview,
            priority: Priority::High,
            category: "technical",
            reviewer_group: "DevOps Team",
            age: Duration::hours(4),
            responses: 2,
            tags: &["database", "migration", "production"],
        },
        SeedQuestion {
            id: 3,
            title: "Code review process for new team members",
            excerpt: "How should we structure our code review process to help new developers learn our standards?",
            author: "Mike Chen",
            avatar: "avatars/3.jpg",
            status: QuestionStatus::Answered,
            priority: Priority::Low,
            category: "process",
            reviewer_group: "Senior Developers",
            age: Duration::days(1),
            responses: 5,
            tags: &["process", "code-review", "onboarding"],
        },
        SeedQuestion {
            id: 4,
            title: "Security guidelines for API development",
            excerpt: "What security measures should we implement when developing REST APIs?",
            author: "Lisa Wang",
            avatar: "avatars/4.jpg",
            status: QuestionStatus::Pending,
            priority: Priority::Urgent,
            category: "security",
            reviewer_group: "Security Team",
            age: Duration::minutes(30),
            responses: 0,
            tags: &["security", "api", "guidelines"],
        },
        SeedQuestion {
            id: 5,
            title: "Docker containerization strategy",
            excerpt: "Looking for advice on containerizing our microservices architecture...",
            author: "David Brown",
            avatar: "avatars/5.jpg",
            status: QuestionStatus::InReview,
            priority: Priority::Medium,
            category: "technical",
            reviewer_group: "DevOps Team",
            age: Duration::hours(6),
            responses: 1,
            tags: &["docker", "containers", "microservices"],
        },
    ]
}

/// The five seed questions, created relative to `now`.
pub fn seed_questions(now: DateTime<Utc>) -> Vec<Question> {
    seed_rows()
        .into_iter()
        .filter_map(|row| {
            let category = Category::new(row.category).ok()?;
            Some(Question {
                id: QuestionId::new(row.id),
                title: row.title.to_string(),
                excerpt: row.excerpt.to_string(),
                description: if row.id == 1 {
                    OAUTH_DESCRIPTION.to_string()
                } else {
                    String::new()
                },
                author: row.author.to_string(),
                author_avatar: row.avatar.to_string(),
                status: row.status,
                priority: row.priority,
                category,
                reviewer_group: row.reviewer_group.to_string(),
                created_at: now - row.age,
                responses: row.responses,
                tags: row.tags.iter().map(|tag| (*tag).to_string()).collect(),
            })
        })
        .collect()
}

/// Reviewer replies already posted on question 1.
pub fn seed_responses(question: QuestionId, now: DateTime<Utc>) -> Vec<Response> {
    if question != QuestionId::new(1) {
        return Vec::new();
    }
    vec![
        Response {
            id: ResponseId::new(1),
            author: "Sarah Wilson".to_string(),
            author_avatar: "avatars/2.jpg".to_string(),
            role: "Senior Developer".to_string(),
            content: "Use httpOnly cookies for refresh tokens, keep access tokens in memory, \
                      and avoid localStorage for anything sensitive. A ProtectedRoute wrapper \
                      that checks the auth context covers route protection."
                .to_string(),
            created_at: now - Duration::hours(1),
            helpful: 5,
            is_reviewer: true,
        },
        Response {
            id: ResponseId::new(2),
            author: "Mike Chen".to_string(),
            author_avatar: "avatars/3.jpg".to_string(),
            role: "Tech Lead".to_string(),
            content: "Refresh tokens before they expire, handle refresh failures gracefully, \
                      and clear every token on logout. Concurrent tabs need care too."
                .to_string(),
            created_at: now - Duration::minutes(45),
            helpful: 3,
            is_reviewer: true,
        },
    ]
}
