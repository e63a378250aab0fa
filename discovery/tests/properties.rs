use pretty_assertions::assert_eq;
use serde_json::json;
use showcase_discovery::DiscoveryConfig;
use showcase_discovery::DiscoveryEngine;
use showcase_discovery::ProjectRecord;
use showcase_discovery::QueryState;
use showcase_discovery::SortKey;
use showcase_discovery::Vocabulary;
use showcase_discovery::clear_all;
use showcase_discovery::describe;
use showcase_discovery::filter_projects;
use showcase_discovery::remove_token;
use showcase_discovery::sort_projects;
use showcase_discovery::status_counts;

fn engine() -> DiscoveryEngine {
    DiscoveryEngine::new(DiscoveryConfig::default()).expect("default config")
}

/// A store shaped like a backend `getall` response, including a few
/// records with missing or malformed fields.
fn store() -> Vec<ProjectRecord> {
    serde_json::from_value(json!([
        {
            "_id": "p1",
            "title": "Solar Tracker",
            "description": "Dual-axis panel mount",
            "contributors": [{"name": "Asha Rao", "email": "asha@campus.edu", "role": "Lead"}],
            "technologiesUsed": ["Arduino"],
            "department": "Engineering",
            "status": "Ongoing",
            "academicYear": "2024-25",
            "createdAt": "2024-08-12T09:30:00.000Z"
        },
        {
            "_id": "p2",
            "title": "Chat App",
            "abstract": "Realtime messaging for clubs",
            "contributors": ["Ravi"],
            "technologiesUsed": ["React", "Socket.IO"],
            "department": "Web Development",
            "status": "Completed",
            "academicYear": "2023-24",
            "createdAt": "2023-11-02T14:00:00.000Z"
        },
        {
            "_id": "p3",
            "title": "Crop Vision",
            "description": "Solar-powered field camera",
            "department": "AI/ML",
            "status": "Ongoing",
            "academicYear": "2023-24",
            "createdAt": "2024-02-20"
        },
        {
            "_id": "p4",
            "title": "Campus Ledger",
            "department": "Blockchain",
            "status": "Completed",
            "academicYear": "2024-25"
        },
        {
            "_id": "p5",
            "title": 17,
            "department": "Engineering",
            "status": "Ongoing",
            "academicYear": "2024-25",
            "createdAt": "sometime"
        }
    ]))
    .expect("fixture decodes")
}

fn ids(records: &[&ProjectRecord]) -> Vec<String> {
    records.iter().map(|record| record.id().to_string()).collect()
}

#[test]
fn default_query_returns_store_unchanged() {
    let records = store();
    let vocabulary = Vocabulary::default();
    let all = filter_projects(&records, &QueryState::default(), &vocabulary);
    assert_eq!(ids(&all), vec!["p1", "p2", "p3", "p4", "p5"]);
}

#[test]
fn filtered_subset_is_drawn_from_store() {
    let records = store();
    let vocabulary = Vocabulary::default();
    let queries = [
        QueryState::default().with_search("solar"),
        QueryState::default().with_status("Completed"),
        QueryState::default().with_year("2024-25").with_category("Engineering"),
        QueryState::default().with_search("zzz"),
    ];
    for query in queries {
        for record in filter_projects(&records, &query, &vocabulary) {
            assert!(records.iter().any(|candidate| std::ptr::eq(candidate, record)));
        }
    }
}

#[test]
fn combined_filters_intersect_individual_ones() {
    let records = store();
    let vocabulary = Vocabulary::default();
    let engineering = QueryState::default().with_category("Engineering");
    let ongoing = QueryState::default().with_status("Ongoing");
    let by_category = filter_projects(&records, &engineering, &vocabulary);
    let by_status = filter_projects(&records, &ongoing, &vocabulary);
    let both = filter_projects(
        &records,
        &QueryState::default()
            .with_category("Engineering")
            .with_status("Ongoing"),
        &vocabulary,
    );

    let expected: Vec<String> = ids(&by_category)
        .into_iter()
        .filter(|id| ids(&by_status).contains(id))
        .collect();
    assert_eq!(ids(&both), expected);
    assert_eq!(ids(&both), vec!["p1", "p5"]);
}

#[test]
fn sorting_is_stable_for_equal_keys() {
    let records = store();
    let subset: Vec<&ProjectRecord> = records.iter().collect();
    let collator = showcase_discovery::TitleCollator::code_point();

    // p4 and p5 both lack a usable createdAt.
    let newest = sort_projects(&subset, SortKey::Newest, &collator);
    assert_eq!(ids(&newest), vec!["p1", "p3", "p2", "p4", "p5"]);
    let oldest = sort_projects(&subset, SortKey::Oldest, &collator);
    assert_eq!(ids(&oldest), vec!["p4", "p5", "p2", "p3", "p1"]);
}

#[test]
fn removing_a_token_drops_exactly_one() {
    let query = QueryState::default()
        .with_search("solar")
        .with_category("Engineering")
        .with_status("Ongoing")
        .with_year("2024-25");
    let tokens = describe(&query);
    assert_eq!(tokens.len(), 4);

    for token in &tokens {
        let next = remove_token(token, &query);
        let remaining = describe(&next);
        assert_eq!(remaining.len(), tokens.len() - 1);
        assert!(!remaining.contains(token));
    }
    assert!(describe(&clear_all(&query)).is_empty());
}

#[test]
fn status_counts_cover_the_store() {
    let records = store();
    let counts = status_counts(&records, &Vocabulary::default());
    let sum: usize = counts.iter().map(|facet| facet.count).sum();
    assert_eq!(sum, records.len());

    let summary = engine().dashboard(&records);
    assert_eq!(summary.unclassified_status, 0);
    let keys: Vec<&str> = summary.categories.iter().map(|facet| facet.key.as_str()).collect();
    assert_eq!(keys, vec!["Engineering", "Web Development", "AI/ML", "Blockchain"]);
}

#[test]
fn two_record_walkthrough() {
    let records: Vec<ProjectRecord> = store().into_iter().take(2).collect();
    let vocabulary = Vocabulary::default();

    let solar = filter_projects(&records, &QueryState::default().with_search("solar"), &vocabulary);
    assert_eq!(ids(&solar), vec!["p1"]);

    let both: Vec<&ProjectRecord> = records.iter().collect();
    let engine = engine();
    let sorted = engine.sort(&both, &QueryState::default().with_sort(SortKey::TitleDesc));
    let titles: Vec<&str> = sorted.iter().map(|record| record.title()).collect();
    assert_eq!(titles, vec!["Solar Tracker", "Chat App"]);

    let counts = status_counts(&records, &vocabulary);
    let pairs: Vec<(&str, usize)> = counts
        .iter()
        .map(|facet| (facet.key.as_str(), facet.count))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Ongoing", 1),
            ("Completed", 1),
            ("Archived", 0),
            ("Pending Approval", 0),
        ]
    );
}

#[test]
fn missing_created_at_sorts_after_valid_dates_under_newest() {
    let records = store();
    let view = engine().browse(&records, &QueryState::default());
    let position = |id: &str| {
        view.projects
            .iter()
            .position(|record| record.id() == id)
            .expect("record present")
    };
    for dated in ["p1", "p2", "p3"] {
        assert!(position(dated) < position("p4"));
        assert!(position(dated) < position("p5"));
    }
}

#[test]
fn search_matches_any_text_field() {
    let records = store();
    let engine = engine();
    let cases = [
        ("dual-axis", vec!["p1"]),
        ("MESSAGING", vec!["p2"]),
        ("asha@", vec!["p1"]),
        ("socket", vec!["p2"]),
        ("solar", vec!["p1", "p3"]),
    ];
    for (term, expected) in cases {
        let query = QueryState::default().with_search(term).with_sort(SortKey::Unsorted);
        let view = engine.browse(&records, &query);
        assert_eq!(ids(&view.projects), expected, "search {term:?}");
    }
}
