// Unit tests for cohort-match

use cohort_match::core::Matcher;
use cohort_match::models::{Campus, Gender, Mentor, Student};
use std::collections::{HashMap, HashSet};

fn create_student(id: usize, age: Option<u32>, preference: Option<Gender>, campus: Campus) -> Student {
    Student {
        id,
        name: format!("Student {}", id),
        age,
        preference,
        preference_label: preference.map(|g| g.to_string()).unwrap_or_default(),
        campus,
        faculty: "Business School".to_string(),
        title: "Ms.".to_string(),
        phone: format!("555-01{:02}", id),
        email: format!("student{}@uni.edu", id),
        personal_email: format!("student{}@home.net", id),
        disability: "No".to_string(),
        activity_preference: "Hiking".to_string(),
    }
}

fn create_mentor(id: usize, age: Option<u32>, gender: Gender, campus: Campus) -> Mentor {
    Mentor {
        id,
        name: format!("Mentor {}", id),
        age,
        gender,
        campus,
        faculty: "Business School".to_string(),
        title: if gender == Gender::Female { "Ms." } else { "Mr." }.to_string(),
    }
}

#[test]
fn test_single_pair_same_campus() {
    // 1 student (age 30, no preference, campus 1), 1 mentor (age 40, male,
    // campus 1), capacity 1: one match with a campus hit.
    let students = vec![create_student(0, Some(30), None, Campus::One)];
    let mentors = vec![create_mentor(0, Some(40), Gender::Male, Campus::One)];

    let outcome = Matcher::new(1).assign(&students, &mentors);

    assert_eq!(outcome.matches.len(), 1);
    assert_eq!(outcome.matches[0].student_id, 0);
    assert_eq!(outcome.matches[0].mentor_id, 0);
    assert!(outcome.matches[0].same_campus_match);
    assert!(outcome.unmatched.is_empty());
}

#[test]
fn test_female_preference_against_male_pool() {
    let students = vec![create_student(0, Some(30), Some(Gender::Female), Campus::One)];
    let mentors = vec![create_mentor(0, Some(40), Gender::Male, Campus::One)];

    let outcome = Matcher::new(1).assign(&students, &mentors);

    assert!(outcome.matches.is_empty());
    assert_eq!(outcome.unmatched.len(), 1);
}

#[test]
fn test_two_students_one_slot() {
    let students = vec![
        create_student(0, Some(50), None, Campus::One),
        create_student(1, Some(20), None, Campus::One),
    ];
    let mentors = vec![create_mentor(0, Some(40), Gender::Male, Campus::One)];

    let outcome = Matcher::new(1).assign(&students, &mentors);

    assert_eq!(outcome.matches.len(), 1);
    assert_eq!(outcome.matches[0].student_id, 0);
    assert_eq!(outcome.unmatched.len(), 1);
    assert_eq!(outcome.unmatched[0].id, 1);
}

#[test]
fn test_equal_score_tie_goes_to_older_mentor() {
    // Two mentors with the same campus score; the older one sits earlier in
    // mentor priority order and a later equal score must not displace it.
    let students = vec![create_student(0, Some(25), None, Campus::One)];
    let mentors = vec![
        create_mentor(0, Some(58), Gender::Male, Campus::One),
        create_mentor(1, Some(41), Gender::Male, Campus::One),
    ];

    let outcome = Matcher::new(3).assign(&students, &mentors);

    assert_eq!(outcome.matches[0].mentor_id, 0);
}

#[test]
fn test_determinism() {
    let students: Vec<Student> = (0..30)
        .map(|i| {
            let preference = match i % 3 {
                0 => None,
                1 => Some(Gender::Male),
                _ => Some(Gender::Female),
            };
            let campus = if i % 2 == 0 { Campus::One } else { Campus::Two };
            create_student(i, Some(20 + (i as u32 % 7)), preference, campus)
        })
        .collect();
    let mentors: Vec<Mentor> = (0..8)
        .map(|i| {
            let gender = if i % 2 == 0 { Gender::Male } else { Gender::Female };
            let campus = if i % 3 == 0 { Campus::Two } else { Campus::One };
            create_mentor(i, Some(40 + (i as u32 % 5)), gender, campus)
        })
        .collect();

    let matcher = Matcher::new(3);
    let first = matcher.assign(&students, &mentors);
    let second = matcher.assign(&students, &mentors);

    assert_eq!(
        serde_json::to_string(&first.matches).unwrap(),
        serde_json::to_string(&second.matches).unwrap()
    );
    let first_unmatched: Vec<usize> = first.unmatched.iter().map(|s| s.id).collect();
    let second_unmatched: Vec<usize> = second.unmatched.iter().map(|s| s.id).collect();
    assert_eq!(first_unmatched, second_unmatched);
}

#[test]
fn test_capacity_invariant() {
    let students: Vec<Student> = (0..40)
        .map(|i| create_student(i, Some(18 + i as u32), None, Campus::One))
        .collect();
    let mentors: Vec<Mentor> = (0..4)
        .map(|i| create_mentor(i, Some(50 + i as u32), Gender::Male, Campus::One))
        .collect();

    let max = 5;
    let outcome = Matcher::new(max).assign(&students, &mentors);

    let mut per_mentor: HashMap<usize, u32> = HashMap::new();
    for record in &outcome.matches {
        *per_mentor.entry(record.mentor_id).or_insert(0) += 1;
    }
    for (&mentor_id, &count) in &per_mentor {
        assert!(
            count <= max,
            "mentor {} got {} mentees, capacity {}",
            mentor_id,
            count,
            max
        );
    }
    // 4 mentors x 5 slots = 20 matches; the rest stay unmatched.
    assert_eq!(outcome.matches.len(), 20);
    assert_eq!(outcome.unmatched.len(), 20);
}

#[test]
fn test_gender_hard_constraint_invariant() {
    let students: Vec<Student> = (0..20)
        .map(|i| {
            let preference = if i % 2 == 0 {
                Some(Gender::Female)
            } else {
                Some(Gender::Male)
            };
            create_student(i, Some(20 + i as u32), preference, Campus::One)
        })
        .collect();
    let mentors: Vec<Mentor> = (0..6)
        .map(|i| {
            let gender = match i % 3 {
                0 => Gender::Male,
                1 => Gender::Female,
                _ => Gender::Unknown,
            };
            create_mentor(i, Some(45 + i as u32), gender, Campus::One)
        })
        .collect();

    let outcome = Matcher::new(4).assign(&students, &mentors);

    let by_id: HashMap<usize, &Mentor> = mentors.iter().map(|m| (m.id, m)).collect();
    for record in &outcome.matches {
        let student = &students[record.student_id];
        let mentor = by_id[&record.mentor_id];
        if let Some(required) = student.preference {
            assert_eq!(mentor.gender, required);
        }
    }
}

#[test]
fn test_at_most_one_match_per_student() {
    let students: Vec<Student> = (0..25)
        .map(|i| create_student(i, Some(20 + (i as u32 % 5)), None, Campus::One))
        .collect();
    let mentors: Vec<Mentor> = (0..5)
        .map(|i| create_mentor(i, Some(50), Gender::Male, Campus::One))
        .collect();

    let outcome = Matcher::new(10).assign(&students, &mentors);

    let mut seen = HashSet::new();
    for record in &outcome.matches {
        assert!(seen.insert(record.student_id), "student matched twice");
    }
}

#[test]
fn test_priority_property_unlimited_capacity() {
    // With effectively unlimited capacity and no preferences, the oldest
    // student takes the oldest mentor on its campus when one exists.
    let students = vec![
        create_student(0, Some(31), None, Campus::Two),
        create_student(1, Some(45), None, Campus::Two),
    ];
    let mentors = vec![
        create_mentor(0, Some(70), Gender::Male, Campus::One),
        create_mentor(1, Some(55), Gender::Female, Campus::Two),
        create_mentor(2, Some(60), Gender::Male, Campus::Two),
    ];

    let outcome = Matcher::new(1000).assign(&students, &mentors);

    // Student 1 (oldest) is processed first and takes mentor 2, the oldest
    // campus-2 mentor; student 0 then also prefers campus 2.
    assert_eq!(outcome.matches[0].student_id, 1);
    assert_eq!(outcome.matches[0].mentor_id, 2);
    assert!(outcome.matches[0].same_campus_match);
    assert_eq!(outcome.matches[1].student_id, 0);
    assert_eq!(outcome.matches[1].mentor_id, 2);
}

#[test]
fn test_priority_property_no_campus_match_takes_oldest() {
    let students = vec![create_student(0, Some(30), None, Campus::Unknown)];
    let mentors = vec![
        create_mentor(0, Some(48), Gender::Male, Campus::One),
        create_mentor(1, Some(66), Gender::Female, Campus::Two),
    ];

    let outcome = Matcher::new(1000).assign(&students, &mentors);

    // No campus can match an Unknown campus, so the oldest mentor wins.
    assert_eq!(outcome.matches[0].mentor_id, 1);
    assert!(!outcome.matches[0].same_campus_match);
}

#[test]
fn test_unmatched_completeness() {
    let students: Vec<Student> = (0..15)
        .map(|i| {
            let preference = if i % 4 == 0 { Some(Gender::Female) } else { None };
            create_student(i, Some(20 + i as u32), preference, Campus::One)
        })
        .collect();
    let mentors = vec![create_mentor(0, Some(50), Gender::Male, Campus::One)];

    let outcome = Matcher::new(6).assign(&students, &mentors);

    let matched: HashSet<usize> = outcome.matched_ids();
    let unmatched: HashSet<usize> = outcome.unmatched.iter().map(|s| s.id).collect();

    assert!(matched.is_disjoint(&unmatched));
    let all: HashSet<usize> = matched.union(&unmatched).copied().collect();
    let expected: HashSet<usize> = (0..15).collect();
    assert_eq!(all, expected);
}
