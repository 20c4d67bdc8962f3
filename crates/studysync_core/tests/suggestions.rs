use studysync_core::db::open_db_in_memory;
use studysync_core::{
    parse_instant, Assignment, Person, PersonRepository, RepoError, SqlitePersonRepository,
    SuggestionService, TimeBlock,
};

const DUE: &str = "2026-04-08T23:59:00+00:00";

fn person_with_block(name: &str, email: &str, title: &str, start: &str, end: &str) -> Person {
    let mut person = Person::new(name, email);
    person
        .assignments
        .push(Assignment::new(title, parse_instant(DUE).unwrap()));
    person.free_time.push(TimeBlock::parse(start, end).unwrap());
    person
}

fn seed(repo: &SqlitePersonRepository<'_>, people: &[Person]) {
    for person in people {
        repo.upsert_person(person).unwrap();
    }
}

#[test]
fn full_cohort_overlap_produces_one_suggestion() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);
    seed(
        &repo,
        &[
            person_with_block(
                "Alice",
                "alice@example.edu",
                "CS225 Assignment 2",
                "2026-04-07T10:00:00+00:00",
                "2026-04-07T12:00:00+00:00",
            ),
            person_with_block(
                "Bob",
                "bob@example.edu",
                "CS225 Assignment 2",
                "2026-04-07T11:00:00+00:00",
                "2026-04-07T13:00:00+00:00",
            ),
            person_with_block(
                "Charlie",
                "charlie@example.edu",
                "CS225 Assignment 2",
                "2026-04-07T11:30:00+00:00",
                "2026-04-07T14:00:00+00:00",
            ),
        ],
    );

    let service = SuggestionService::new(SqlitePersonRepository::new(&conn));
    let suggestions = service.suggestions_for("alice@example.edu").unwrap();

    assert_eq!(suggestions.len(), 1);
    let suggestion = &suggestions[0];
    assert_eq!(suggestion.assignment, "CS225 Assignment 2");
    assert_eq!(suggestion.due.to_rfc3339(), DUE);
    assert_eq!(suggestion.start.to_rfc3339(), "2026-04-07T11:30:00+00:00");
    assert_eq!(suggestion.end.to_rfc3339(), "2026-04-07T12:00:00+00:00");
}

#[test]
fn cohort_of_one_yields_no_suggestion_and_no_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);
    seed(
        &repo,
        &[person_with_block(
            "Alice",
            "alice@example.edu",
            "PHIL101 Essay",
            "2026-04-07T10:00:00+00:00",
            "2026-04-07T12:00:00+00:00",
        )],
    );

    let service = SuggestionService::new(SqlitePersonRepository::new(&conn));
    let suggestions = service.suggestions_for("alice@example.edu").unwrap();
    assert!(suggestions.is_empty());
}

#[test]
fn degraded_subgroup_still_gets_a_suggestion() {
    // Charlie never overlaps the others; the pairwise alice/bob hour wins.
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);
    seed(
        &repo,
        &[
            person_with_block(
                "Alice",
                "alice@example.edu",
                "CS225 Assignment 2",
                "2026-04-07T10:00:00+00:00",
                "2026-04-07T12:00:00+00:00",
            ),
            person_with_block(
                "Bob",
                "bob@example.edu",
                "CS225 Assignment 2",
                "2026-04-07T11:00:00+00:00",
                "2026-04-07T13:00:00+00:00",
            ),
            person_with_block(
                "Charlie",
                "charlie@example.edu",
                "CS225 Assignment 2",
                "2026-04-07T20:00:00+00:00",
                "2026-04-07T22:00:00+00:00",
            ),
        ],
    );

    let service = SuggestionService::new(SqlitePersonRepository::new(&conn));
    let suggestions = service.suggestions_for("alice@example.edu").unwrap();

    assert_eq!(suggestions.len(), 1);
    assert_eq!(
        suggestions[0].start.to_rfc3339(),
        "2026-04-07T11:00:00+00:00"
    );
    assert_eq!(suggestions[0].end.to_rfc3339(), "2026-04-07T12:00:00+00:00");
}

#[test]
fn free_time_after_the_due_instant_is_excluded() {
    // Both people are only free after the deadline.
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);
    seed(
        &repo,
        &[
            person_with_block(
                "Alice",
                "alice@example.edu",
                "CS225 Assignment 2",
                "2026-04-09T10:00:00+00:00",
                "2026-04-09T12:00:00+00:00",
            ),
            person_with_block(
                "Bob",
                "bob@example.edu",
                "CS225 Assignment 2",
                "2026-04-09T10:00:00+00:00",
                "2026-04-09T12:00:00+00:00",
            ),
        ],
    );

    let service = SuggestionService::new(SqlitePersonRepository::new(&conn));
    let suggestions = service.suggestions_for("alice@example.edu").unwrap();
    assert!(suggestions.is_empty());
}

#[test]
fn one_barren_assignment_does_not_block_the_others() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    let mut alice = person_with_block(
        "Alice",
        "alice@example.edu",
        "CS225 Assignment 2",
        "2026-04-07T10:00:00+00:00",
        "2026-04-07T12:00:00+00:00",
    );
    // A second assignment nobody else holds.
    alice.assignments.push(Assignment::new(
        "PHIL101 Essay",
        parse_instant(DUE).unwrap(),
    ));

    seed(
        &repo,
        &[
            alice,
            person_with_block(
                "Bob",
                "bob@example.edu",
                "CS225 Assignment 2",
                "2026-04-07T11:00:00+00:00",
                "2026-04-07T13:00:00+00:00",
            ),
        ],
    );

    let service = SuggestionService::new(SqlitePersonRepository::new(&conn));
    let suggestions = service.suggestions_for("alice@example.edu").unwrap();

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].assignment, "CS225 Assignment 2");
}

#[test]
fn unknown_requester_is_a_not_found_error() {
    let conn = open_db_in_memory().unwrap();
    let service = SuggestionService::new(SqlitePersonRepository::new(&conn));

    let err = service.suggestions_for("ghost@example.edu").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(email) if email == "ghost@example.edu"));
}
