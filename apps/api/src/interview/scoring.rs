//! Quiz grading.
//!
//! Answer comparison is exact string equality — no trimming, no case folding.
//! If option text and correctAnswer ever diverge in formatting, the question
//! grades as wrong; the model is prompted to keep them identical.

use serde::{Deserialize, Serialize};

use crate::interview::quiz::QuizQuestion;

/// A question after grading, as persisted in the assessment row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradedQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub selected_answer: String,
    pub correct_answer: String,
    pub explanation: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizScore {
    pub graded: Vec<GradedQuestion>,
    pub percent_correct: f64,
}

/// Grades a submitted quiz. An empty question set scores 0.
pub fn score_quiz(questions: &[QuizQuestion], answers: &[String]) -> QuizScore {
    let graded: Vec<GradedQuestion> = questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let selected = answers.get(i).cloned().unwrap_or_default();
            let is_correct = selected == q.correct_answer;
            GradedQuestion {
                question: q.question.clone(),
                options: q.options.clone(),
                selected_answer: selected,
                correct_answer: q.correct_answer.clone(),
                explanation: q.explanation.clone(),
                is_correct,
            }
        })
        .collect();

    let percent_correct = if graded.is_empty() {
        0.0
    } else {
        let correct = graded.iter().filter(|g| g.is_correct).count();
        100.0 * correct as f64 / graded.len() as f64
    };

    QuizScore {
        graded,
        percent_correct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(correct: &str) -> QuizQuestion {
        QuizQuestion {
            question: "?".to_string(),
            options: vec!["A".into(), "B".into(), "C".into(), "X".into()],
            correct_answer: correct.to_string(),
            explanation: "e".to_string(),
        }
    }

    fn answers(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_two_of_three_correct() {
        let questions = [q("A"), q("B"), q("C")];
        let score = score_quiz(&questions, &answers(&["A", "X", "C"]));
        assert!((score.percent_correct - 200.0 / 3.0).abs() < 1e-9);
        assert!(score.graded[0].is_correct);
        assert!(!score.graded[1].is_correct);
        assert!(score.graded[2].is_correct);
    }

    #[test]
    fn test_empty_quiz_scores_zero() {
        let score = score_quiz(&[], &[]);
        assert_eq!(score.percent_correct, 0.0);
        assert!(score.graded.is_empty());
    }

    #[test]
    fn test_missing_answers_grade_wrong() {
        let questions = [q("A"), q("B")];
        let score = score_quiz(&questions, &answers(&["A"]));
        assert!(score.graded[0].is_correct);
        assert!(!score.graded[1].is_correct);
        assert_eq!(score.graded[1].selected_answer, "");
        assert_eq!(score.percent_correct, 50.0);
    }

    #[test]
    fn test_comparison_is_exact() {
        let questions = [q("A")];
        // Whitespace and case differences count as wrong — documented as-is.
        assert_eq!(score_quiz(&questions, &answers(&["a"])).percent_correct, 0.0);
        assert_eq!(
            score_quiz(&questions, &answers(&["A "])).percent_correct,
            0.0
        );
    }
}
