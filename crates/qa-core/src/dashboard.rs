//! Summary numbers for the Q&A dashboard.

use serde::Serialize;

use qa_model::{Question, QuestionStatus};

use crate::query::{SortBy, sort_questions};

/// How many questions the dashboard lists under "Recent Questions".
pub const RECENT_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_questions: usize,
    /// Pending plus in-review: everything still waiting on a reviewer.
    pub pending_review: usize,
    pub answered: usize,
    pub my_questions: usize,
}

impl DashboardStats {
    pub fn compute(questions: &[Question], current_user: &str) -> Self {
        let mut stats = Self {
            total_questions: questions.len(),
            ..Self::default()
        };
        for question in questions {
            match question.status {
                QuestionStatus::Pending | QuestionStatus::InReview => stats.pending_review += 1,
                QuestionStatus::Answered => stats.answered += 1,
                QuestionStatus::Unknown => {}
            }
            if question.author.eq_ignore_ascii_case(current_user) {
                stats.my_questions += 1;
            }
        }
        stats
    }

    /// Share of questions already answered, in whole percent.
    pub fn answered_percent(&self) -> u8 {
        if self.total_questions == 0 {
            return 0;
        }
        let percent = self.answered * 100 / self.total_questions;
        u8::try_from(percent).unwrap_or(100)
    }
}

/// The newest questions, newest first.
pub fn recent_questions(questions: &[Question], limit: usize) -> Vec<&Question> {
    let mut recent: Vec<&Question> = questions.iter().collect();
    sort_questions(&mut recent, SortBy::Newest);
    recent.truncate(limit);
    recent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_questions;
    use chrono::{TimeZone, Utc};

    #[test]
    fn stats_over_seed_set() {
        let questions = seed_questions(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
        let stats = DashboardStats::compute(&questions, "mike chen");
        assert_eq!(
            stats,
            DashboardStats {
                total_questions: 5,
                pending_review: 4,
                answered: 1,
                my_questions: 1,
            }
        );
        assert_eq!(stats.answered_percent(), 20);
        assert_eq!(DashboardStats::default().answered_percent(), 0);
    }

    #[test]
    fn recent_questions_are_newest_first() {
        let questions = seed_questions(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
        let recent: Vec<u64> = recent_questions(&questions, RECENT_LIMIT)
            .iter()
            .map(|question| question.id.get())
            .collect();
        assert_eq!(recent, vec![4, 1, 2]);
    }
}
