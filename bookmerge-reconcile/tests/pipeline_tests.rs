use bookmerge_rank::{RankConfig, SourceRanker};
use bookmerge_reconcile::{Lookup, MemoryStore, ModelStore, OutcomeKind, ReconcileSummary, Reconciler};
use bookmerge_schema::Schemas;
use bookmerge_text::IdentityMatcher;
use bookmerge_types::{Author, Book};
use pretty_assertions::assert_eq;

fn schemas() -> Schemas {
    Schemas::new(&SourceRanker::new(&RankConfig::default()).unwrap())
}

// ── Create / update / unchanged ──────────────────────────────────

#[test]
fn new_record_is_created_under_its_storage_id() {
    let s = schemas();
    let mut r = Reconciler::new(&s.book, IdentityMatcher::default(), MemoryStore::new());

    let outcome = r.reconcile(Book::titled("Hobbit", "Tolkien")).unwrap();
    assert_eq!(outcome.kind(), OutcomeKind::Created);
    assert_eq!(outcome.id(), Some("tolkien-hobbit"));
    assert_eq!(r.store().save_count(), 1);
    assert!(r.store().get("tolkien-hobbit").is_some());
}

#[test]
fn identical_record_is_not_written_again() {
    let s = schemas();
    let mut r = Reconciler::new(&s.book, IdentityMatcher::default(), MemoryStore::new());

    r.reconcile(Book::titled("Hobbit", "Tolkien")).unwrap();
    let outcome = r.reconcile(Book::titled("Hobbit", "Tolkien")).unwrap();
    assert_eq!(outcome.kind(), OutcomeKind::Unchanged);
    assert_eq!(outcome.id(), Some("tolkien-hobbit"));
    assert_eq!(r.store().save_count(), 1);
}

#[test]
fn new_facts_update_the_stored_record() {
    let s = schemas();
    let mut r = Reconciler::new(&s.book, IdentityMatcher::default(), MemoryStore::new());
    r.reconcile(Book::titled("Hobbit", "Tolkien")).unwrap();

    let mut richer = Book::titled("Hobbit", "Tolkien");
    richer.pages = Some(310);
    let outcome = r.reconcile(richer).unwrap();

    assert_eq!(outcome.kind(), OutcomeKind::Updated);
    let bookmerge_reconcile::Outcome::Updated { diff, model, .. } = &outcome else {
        panic!("expected an update, got {outcome:?}");
    };
    assert_eq!(diff.as_diff_lines(), vec!["+ pages: 310".to_string()]);
    assert_eq!(model.pages, Some(310));
    assert_eq!(r.store().get("tolkien-hobbit").unwrap().pages, Some(310));
    assert_eq!(r.store().save_count(), 2);
}

#[test]
fn fuzzy_match_updates_under_the_existing_key() {
    let s = schemas();
    let mut r = Reconciler::new(&s.book, IdentityMatcher::default(), MemoryStore::new());
    r.reconcile(Book::titled("The Hobbit", "J.R.R. Tolkien")).unwrap();

    let outcome = r.reconcile(Book::titled("Hobbit", "Tolkien")).unwrap();
    assert_eq!(outcome.kind(), OutcomeKind::Updated);
    assert_eq!(outcome.id(), Some("j-r-r-tolkien-the-hobbit"));

    let stored = r.store().get("j-r-r-tolkien-the-hobbit").unwrap();
    assert_eq!(stored.title.as_deref(), Some("Hobbit"));
    // The longer author name survives.
    assert_eq!(stored.author_name.as_deref(), Some("J.R.R. Tolkien"));
    assert_eq!(r.store().len(), 1);
}

#[test]
fn unrelated_record_is_created_alongside() {
    let s = schemas();
    let mut r = Reconciler::new(&s.book, IdentityMatcher::default(), MemoryStore::new());
    r.reconcile(Book::titled("Hobbit", "Tolkien")).unwrap();

    let outcome = r.reconcile(Book::titled("The Silmarillion", "Tolkien")).unwrap();
    assert_eq!(outcome.kind(), OutcomeKind::Created);
    assert_eq!(r.store().len(), 2);
}

// ── Ambiguity ────────────────────────────────────────────────────

fn two_hobbits() -> MemoryStore<Book> {
    let mut store = MemoryStore::new();
    store.save("tolkien-hobbit", &Book::titled("Hobbit", "Tolkien")).unwrap();
    store
        .save("tolkien-hobbit-part-2", &Book::titled("Hobbit: Part 2", "Tolkien"))
        .unwrap();
    store
}

#[test]
fn lookup_reports_every_candidate_when_ambiguous() {
    let s = schemas();
    let r = Reconciler::new(&s.book, IdentityMatcher::default(), two_hobbits());

    let Lookup::Ambiguous { candidates } = r.lookup(&Book::titled("Hobbit", "J.R.R. Tolkien")).unwrap() else {
        panic!("expected an ambiguous lookup");
    };
    let ids: Vec<&str> = candidates.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(ids, vec!["tolkien-hobbit", "tolkien-hobbit-part-2"]);
}

#[test]
fn ambiguous_record_is_skipped_without_merging() {
    let s = schemas();
    let mut r = Reconciler::new(&s.book, IdentityMatcher::default(), two_hobbits());

    let mut record = Book::titled("Hobbit", "J.R.R. Tolkien");
    record.pages = Some(310);
    let outcome = r.reconcile(record).unwrap();

    assert_eq!(outcome.kind(), OutcomeKind::Ambiguous);
    assert_eq!(outcome.kind().to_string(), "ambiguous-skip");
    assert_eq!(outcome.id(), None);
    let store = r.into_store();
    assert_eq!(store.save_count(), 2);
    assert_eq!(store.get("tolkien-hobbit").unwrap(), &Book::titled("Hobbit", "Tolkien"));
    assert_eq!(store.get("tolkien-hobbit-part-2").unwrap().pages, None);
}

#[test]
fn exact_storage_id_wins_over_fuzzy_candidates() {
    let s = schemas();
    let mut r = Reconciler::new(&s.book, IdentityMatcher::default(), two_hobbits());

    let Lookup::Found { id, .. } = r.lookup(&Book::titled("Hobbit", "Tolkien")).unwrap() else {
        panic!("expected an exact hit");
    };
    assert_eq!(id, "tolkien-hobbit");
    assert_eq!(
        r.reconcile(Book::titled("Hobbit", "Tolkien")).unwrap().kind(),
        OutcomeKind::Unchanged
    );
}

// ── Key collisions ───────────────────────────────────────────────

#[test]
fn non_latin_titles_get_their_own_records() {
    let s = schemas();
    let mut r = Reconciler::new(&s.book, IdentityMatcher::default(), MemoryStore::new());

    let war = r.reconcile(Book::titled("Война и мир", "Толстой")).unwrap();
    let anna = r.reconcile(Book::titled("Анна Каренина", "Толстой")).unwrap();

    assert_eq!(war.kind(), OutcomeKind::Created);
    assert_eq!(anna.kind(), OutcomeKind::Created);
    assert_ne!(war.id(), anna.id());
    assert_eq!(r.store().len(), 2);
    assert_eq!(
        r.store().get("толстой-война-и-мир").unwrap().title.as_deref(),
        Some("Война и мир")
    );
}

#[test]
fn storage_id_hit_on_a_different_entity_is_not_merged() {
    let s = schemas();
    let mut store = MemoryStore::new();
    let occupant = Book::titled("The Silmarillion", "Christopher Tolkien");
    store.save("tolkien-hobbit", &occupant).unwrap();
    let mut r = Reconciler::new(&s.book, IdentityMatcher::default(), store);

    assert_eq!(r.lookup(&Book::titled("Hobbit", "Tolkien")).unwrap(), Lookup::New);
    let outcome = r.reconcile(Book::titled("Hobbit", "Tolkien")).unwrap();

    assert_eq!(outcome.kind(), OutcomeKind::Created);
    assert_eq!(outcome.id(), Some("tolkien-hobbit-2"));
    assert_eq!(r.store().get("tolkien-hobbit"), Some(&occupant));
    assert_eq!(
        r.store().get("tolkien-hobbit-2").unwrap().title.as_deref(),
        Some("Hobbit")
    );
}

// ── Canonical names ──────────────────────────────────────────────

#[test]
fn rerunning_a_source_with_stacked_honorifics_changes_nothing() {
    let s = schemas();
    let mut r = Reconciler::new(&s.book, IdentityMatcher::default(), MemoryStore::new());

    let record = Book::titled("Hobbit", "Dr Mr Mrs Alexander Smith");
    let created = r.reconcile(record.clone()).unwrap();
    assert_eq!(created.model().unwrap().author_name.as_deref(), Some("Alexander Smith"));

    let again = r.reconcile(record).unwrap();
    assert_eq!(again.kind(), OutcomeKind::Unchanged);
    assert_eq!(r.store().save_count(), 1);
}

// ── Records without identity ─────────────────────────────────────

#[test]
fn record_without_identity_is_skipped() {
    let s = schemas();
    let mut r = Reconciler::new(&s.book, IdentityMatcher::default(), MemoryStore::new());

    let record = Book {
        isbn: Some("9780547928227".into()),
        ..Book::default()
    };
    let outcome = r.reconcile(record).unwrap();
    assert_eq!(outcome.kind(), OutcomeKind::Unidentified);
    assert_eq!(outcome.kind().to_string(), "skipped-no-identity");
    assert_eq!(outcome.id(), None);
    assert!(r.store().is_empty());
}

#[test]
fn keyless_record_does_not_stop_the_batch() {
    let s = schemas();
    let mut r = Reconciler::new(&s.book, IdentityMatcher::default(), MemoryStore::new());

    let result = r
        .reconcile_all(vec![
            Book::titled("Hobbit", "Tolkien"),
            Book {
                isbn: Some("9780547928227".into()),
                ..Book::default()
            },
            Book::titled("The Silmarillion", "Tolkien"),
        ])
        .unwrap();

    let kinds: Vec<OutcomeKind> = result.outcomes.iter().map(|o| o.kind()).collect();
    assert_eq!(
        kinds,
        vec![OutcomeKind::Created, OutcomeKind::Unidentified, OutcomeKind::Created]
    );
    assert_eq!(result.summary.skipped, 1);
    assert_eq!(result.summary.created, 2);
    assert_eq!(r.store().len(), 2);
}

// ── Batches ──────────────────────────────────────────────────────

#[test]
fn batch_summary_counts_each_outcome() {
    let s = schemas();
    let mut r = Reconciler::new(&s.book, IdentityMatcher::default(), MemoryStore::new());

    let mut richer = Book::titled("Hobbit", "Tolkien");
    richer.genre = Some("fantasy".into());
    let result = r
        .reconcile_all(vec![
            Book::titled("Hobbit", "Tolkien"),
            richer,
            Book::titled("The Silmarillion", "Tolkien"),
            Book::titled("Hobbit", "Tolkien"),
        ])
        .unwrap();

    let kinds: Vec<OutcomeKind> = result.outcomes.iter().map(|o| o.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            OutcomeKind::Created,
            OutcomeKind::Updated,
            OutcomeKind::Created,
            OutcomeKind::Unchanged
        ]
    );
    assert_eq!(
        result.summary,
        ReconcileSummary {
            created: 2,
            updated: 1,
            unchanged: 1,
            ambiguous: 0,
            skipped: 0,
        }
    );
    assert_eq!(result.summary.to_string(), "2 created, 1 updated, 1 unchanged, 0 ambiguous, 0 skipped");
    assert_eq!(result.summary.total(), 4);
}

#[test]
fn authors_reconcile_by_name() {
    let s = schemas();
    let mut r = Reconciler::new(&s.author, IdentityMatcher::default(), MemoryStore::new());

    assert_eq!(r.reconcile(Author::named("Tolkien")).unwrap().kind(), OutcomeKind::Created);
    let outcome = r.reconcile(Author::named("J.R.R. Tolkien")).unwrap();
    assert_eq!(outcome.kind(), OutcomeKind::Updated);
    assert_eq!(outcome.id(), Some("tolkien"));
    assert_eq!(r.store().len(), 1);
}

#[test]
fn outcome_labels() {
    assert_eq!(OutcomeKind::Created.to_string(), "created-new");
    assert_eq!(OutcomeKind::Updated.to_string(), "persisted-updated");
    assert_eq!(OutcomeKind::Unchanged.to_string(), "persisted-unchanged");
    assert_eq!(OutcomeKind::Ambiguous.to_string(), "ambiguous-skip");
    assert_eq!(OutcomeKind::Unidentified.to_string(), "skipped-no-identity");
}
