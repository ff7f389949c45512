use std::collections::HashSet;

use crate::core::{
    filters::satisfies_gender_preference, ledger::CapacityLedger, priority::sort_by_age_priority,
    scoring::campus_score,
};
use crate::models::{MatchRecord, Mentor, Student};

/// Result of one matching run
#[derive(Debug)]
pub struct MatchOutcome {
    /// Assignments in student priority order
    pub matches: Vec<MatchRecord>,
    /// Students left without a mentor, in original input order
    pub unmatched: Vec<Student>,
}

impl MatchOutcome {
    /// Identifiers of all matched students
    pub fn matched_ids(&self) -> HashSet<usize> {
        self.matches.iter().map(|m| m.student_id).collect()
    }
}

/// Greedy priority-ordered mentor assignment
///
/// # Procedure
/// 1. Sort students and mentors by age descending (stable; unknown ages last)
/// 2. For each student, scan the full mentor priority list
/// 3. Hard filters: mandatory gender preference, then mentor capacity
/// 4. Tie-break eligible mentors by campus score, first match wins
///
/// One pass over the students, no backtracking: an assignment is never
/// revisited, even when a later student would have fit that mentor better.
#[derive(Debug, Clone)]
pub struct Matcher {
    max_mentees_per_mentor: u32,
}

impl Matcher {
    pub fn new(max_mentees_per_mentor: u32) -> Self {
        Self {
            max_mentees_per_mentor,
        }
    }

    /// Assign each student to at most one mentor
    ///
    /// # Arguments
    /// * `students` - prepared student records in input order
    /// * `mentors` - prepared mentor records in input order
    ///
    /// # Returns
    /// MatchOutcome with matches in priority order and the unmatched
    /// remainder in input order
    pub fn assign(&self, students: &[Student], mentors: &[Mentor]) -> MatchOutcome {
        let mut students_by_priority: Vec<&Student> = students.iter().collect();
        sort_by_age_priority(&mut students_by_priority, |s| s.age);

        let mut mentors_by_priority: Vec<&Mentor> = mentors.iter().collect();
        sort_by_age_priority(&mut mentors_by_priority, |m| m.age);

        let mut ledger = CapacityLedger::new();
        let mut matches = Vec::new();

        for student in &students_by_priority {
            // Fold over the mentor priority list with an immutable best-so-far
            // candidate, replaced only on a strictly greater score. Among
            // equal scores the first (oldest) eligible mentor wins.
            let best = mentors_by_priority
                .iter()
                .fold(None, |best: Option<(&Mentor, u8)>, &mentor| {
                    if !satisfies_gender_preference(student.preference, mentor.gender) {
                        return best;
                    }
                    if !ledger.has_room(mentor.id, self.max_mentees_per_mentor) {
                        return best;
                    }

                    let score = campus_score(student.campus, mentor.campus);
                    match best {
                        Some((_, held)) if score <= held => best,
                        _ => Some((mentor, score)),
                    }
                });

            match best {
                Some((mentor, score)) => {
                    ledger.record(mentor.id);
                    tracing::debug!(
                        "Assigned student {} to mentor {} (campus match: {})",
                        student.id,
                        mentor.id,
                        score > 0
                    );
                    matches.push(MatchRecord::new(student, mentor, score > 0));
                }
                None => {
                    tracing::debug!("No eligible mentor for student {}", student.id);
                }
            }
        }

        let matched: HashSet<usize> = matches.iter().map(|m| m.student_id).collect();
        let unmatched = students
            .iter()
            .filter(|s| !matched.contains(&s.id))
            .cloned()
            .collect();

        MatchOutcome { matches, unmatched }
    }
}
