//! JSON record builders shaped like the entries of the seed data files.
//!
//! Each builder fills in every required field with test values. Tests that need a
//! defective record can edit the returned value before writing it.

use serde_json::{json, Value};

/// Create an era record.
pub fn era(slug: &str, name: &str) -> Value {
    json!({
        "slug": slug,
        "name": name,
        "number": 2,
        "year_start": 1961,
        "year_end": 1970,
        "subtitle": "The Marvel Age",
        "description": "Test era",
        "color": "#c0392b"
    })
}

/// Create a creator record.
pub fn creator(slug: &str, name: &str) -> Value {
    json!({
        "slug": slug,
        "name": name,
        "roles": ["writer"],
        "active_years": "1961-1970",
        "bio": null
    })
}

/// Create a character record without a universe, so the default applies.
pub fn character(slug: &str, name: &str) -> Value {
    json!({
        "slug": slug,
        "name": name,
        "aliases": [],
        "first_appearance_issue": "Fantastic Four #1",
        "teams": ["Fantastic Four"],
        "description": null
    })
}

/// Create a collected edition record with no creator credits.
pub fn edition(slug: &str, era_slug: &str) -> Value {
    edition_with_creators(slug, era_slug, &[])
}

/// Create a collected edition record crediting each `(name, role)` pair.
pub fn edition_with_creators(slug: &str, era_slug: &str, creators: &[(&str, &str)]) -> Value {
    let creators: Vec<Value> = creators
        .iter()
        .map(|(name, role)| json!({ "name": name, "role": role }))
        .collect();

    json!({
        "slug": slug,
        "title": format!("Edition {}", slug),
        "format": "omnibus",
        "issues_collected": "#1-30",
        "issue_count": 30,
        "print_status": "in_print",
        "importance": "essential",
        "era_slug": era_slug,
        "creators": creators,
        "synopsis": null,
        "connection_notes": null
    })
}

/// Create an edition-to-edition connection record with default strength and confidence.
pub fn connection(source_slug: &str, target_slug: &str, connection_type: &str) -> Value {
    json!({
        "source_type": "edition",
        "source_slug": source_slug,
        "target_type": "edition",
        "target_slug": target_slug,
        "connection_type": connection_type
    })
}

/// Create a continuity conflict record.
pub fn conflict(slug: &str) -> Value {
    json!({
        "slug": slug,
        "title": format!("Conflict {}", slug),
        "description": "Two accounts disagree",
        "official_stance": null,
        "confidence": 60,
        "source_citations": ["Test #1"],
        "tags": ["retcon"]
    })
}

/// Create a story arc record, optionally placed in an era.
pub fn story_arc(slug: &str, era_slug: Option<&str>) -> Value {
    json!({
        "slug": slug,
        "name": format!("Arc {}", slug),
        "issues": "#1-3",
        "era_slug": era_slug,
        "importance": "recommended",
        "tags": []
    })
}

/// Create an event record, optionally placed in an era.
pub fn event(slug: &str, era_slug: Option<&str>) -> Value {
    json!({
        "slug": slug,
        "name": format!("Event {}", slug),
        "year": 1984,
        "core_issues": "#1-12",
        "importance": "essential",
        "era_slug": era_slug,
        "tags": ["crossover"]
    })
}

/// Create a reading path record with one entry per `(position, edition_slug)` pair.
pub fn reading_path(slug: &str, entries: &[(i32, &str)]) -> Value {
    let entries: Vec<Value> = entries
        .iter()
        .map(|(position, edition_slug)| {
            json!({ "position": position, "edition_slug": edition_slug, "is_optional": false })
        })
        .collect();

    json!({
        "slug": slug,
        "name": format!("Path {}", slug),
        "path_type": "curated",
        "difficulty": "beginner",
        "description": null,
        "estimated_issues": 100,
        "entries": entries
    })
}

/// Create a retailer record.
pub fn retailer(slug: &str) -> Value {
    json!({
        "slug": slug,
        "name": format!("Retailer {}", slug),
        "url": "https://example.com",
        "is_digital": false,
        "ships_international": true
    })
}

/// Create a resource record.
pub fn resource(name: &str) -> Value {
    json!({
        "name": name,
        "resource_type": "wiki",
        "url": "https://example.com/wiki",
        "focus": "continuity"
    })
}
