use std::fs;

use tempfile::tempdir;

use super::*;
use crate::test_support::sample_corpus;

const SQUAMISH_AREA: &str = r#"{
  "area_id": "105805788",
  "area_name": "The Chief",
  "area_hierarchy": [
    {"level": 1, "area_hierarchy_name": "All Locations", "area_hierarchy_url": ""},
    {"level": 2, "area_hierarchy_name": "Canada", "area_hierarchy_url": ""},
    {"level": 3, "area_hierarchy_name": "Squamish", "area_hierarchy_url": ""}
  ],
  "routes": [
    {
      "route_id": "1",
      "route_name": "Exasperator",
      "route_grade": "5.10c PG13",
      "route_stars": "3.8",
      "route_votes": "1,204",
      "route_type": "Trad, Grade II",
      "route_pitches": null,
      "route_lr": "12",
      "route_tags": {"Style": ["Crack", "Finger"]},
      "route_comments": null
    },
    {
      "route_id": "2",
      "route_name": "Mystery",
      "route_grade": "5.frobnicate",
      "route_stars": "N/A",
      "route_votes": "N/A",
      "route_type": ["Sport"],
      "route_lr": 3,
      "route_tags": []
    }
  ]
}"#;

fn scale() -> GradeScale {
    GradeScale::standard()
}

#[test]
fn lenient_fields_default_instead_of_failing() {
    let areas = source::parse_json_areas(SQUAMISH_AREA).expect("parse single area");
    let corpus = Corpus::from_areas(areas, &scale()).expect("corpus");
    let first = &corpus.routes()[0];
    assert_eq!(first.route.route_votes, 1204);
    assert!((first.route.route_stars - 3.8).abs() < f64::EPSILON);
    assert_eq!(first.route.route_type, ["Trad", "Grade II"]);
    assert_eq!(first.route.route_pitches, 0);
    assert_eq!(first.route.route_lr, Some(12));
    assert_eq!(first.grade.grade().map(|g| g.label()), Some("5.10c"));
    assert_eq!(first.path.to_text(), "Canada / Squamish");

    let second = &corpus.routes()[1];
    assert!(second.grade.is_unparseable());
    assert_eq!(second.route.route_votes, 0);
    assert_eq!(second.route.route_stars, 0.0);
    assert!(second.route.route_tags.is_empty());
    assert_eq!(corpus.unparseable_grades(), 1);
}

#[test]
fn empty_area_list_is_a_load_error() {
    let err = Corpus::from_areas(Vec::new(), &scale()).expect_err("empty corpus");
    assert_eq!(err.code(), "CORPUS_LOAD_FAILED");
}

#[test]
fn version_tracks_content() {
    let a = sample_corpus();
    let b = sample_corpus();
    assert_eq!(a.version(), b.version());
    assert_eq!(a.version().len(), 64);

    let areas = source::parse_json_areas(SQUAMISH_AREA).expect("parse");
    let other = Corpus::from_areas(areas, &scale()).expect("corpus");
    assert_ne!(a.version(), other.version());
}

#[test]
fn jsonl_file_skips_invalid_lines() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("areas.jsonl");
    let line = SQUAMISH_AREA.replace('\n', " ");
    fs::write(&path, format!("{line}\nnot json\n\n{line}\n")).expect("write jsonl");

    let corpus = Corpus::load(&JsonCorpusSource::new(&path), &scale()).expect("load jsonl");
    assert_eq!(corpus.areas().len(), 2);
    assert_eq!(corpus.routes().len(), 4);
}

#[test]
fn jsonl_file_with_only_invalid_lines_fails() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("areas.jsonl");
    fs::write(&path, "nope\n[1,\n").expect("write jsonl");
    let err = Corpus::load(&JsonCorpusSource::new(&path), &scale()).expect_err("invalid jsonl");
    assert_eq!(err.code(), "CORPUS_LOAD_FAILED");
}

#[test]
fn directory_source_honours_include_globs_and_skips_bad_files() {
    let temp = tempdir().expect("tempdir");
    let root = temp.path();
    fs::create_dir_all(root.join("canada")).expect("mkdir");
    fs::create_dir_all(root.join(".cache")).expect("mkdir hidden");
    fs::write(root.join("canada/chief.json"), SQUAMISH_AREA).expect("write area");
    fs::write(root.join("canada/broken.json"), "{").expect("write broken");
    fs::write(root.join(".cache/chief.json"), SQUAMISH_AREA).expect("write hidden");
    fs::write(root.join("notes.txt"), SQUAMISH_AREA).expect("write txt");

    let corpus = Corpus::load(&JsonCorpusSource::new(root), &scale()).expect("load dir");
    assert_eq!(corpus.areas().len(), 1);

    let only_txt = JsonCorpusSource::new(root).with_include_globs(["*.txt"]);
    let corpus = Corpus::load(&only_txt, &scale()).expect("load txt");
    assert_eq!(corpus.areas().len(), 1);

    let none = JsonCorpusSource::new(root).with_include_globs(["*.csv"]);
    assert!(Corpus::load(&none, &scale()).is_err());
}

#[test]
fn missing_path_is_a_load_error() {
    let err = Corpus::load(&JsonCorpusSource::new("/nonexistent/cragsift"), &scale())
        .expect_err("missing path");
    assert_eq!(err.code(), "CORPUS_LOAD_FAILED");
}

#[test]
fn hierarchy_catalog_lists_children_with_rollups() {
    let corpus = sample_corpus();
    let roots = corpus.hierarchy().children(None);
    let names: Vec<&str> = roots.iter().map(|node| node.name.as_str()).collect();
    assert_eq!(names, ["Canada", "USA"]);
    assert!(roots.iter().all(|node| node.has_children));

    let california: AreaPath = "USA/California".parse().expect("path");
    let children = corpus.hierarchy().children(Some(&california));
    let names: Vec<&str> = children.iter().map(|node| node.name.as_str()).collect();
    assert_eq!(names, ["Bishop", "Joshua Tree", "Yosemite"]);
    let bishop = &children[0];
    assert_eq!(bishop.stats.route_count, 2);
    assert_eq!(bishop.stats.area_count, 1);
    assert!(!bishop.has_children);
    assert_eq!(children[2].stats.area_count, 0);
}

#[test]
fn tag_catalog_collects_categories() {
    let areas = source::parse_json_areas(SQUAMISH_AREA).expect("parse");
    let corpus = Corpus::from_areas(areas, &scale()).expect("corpus");
    let style = corpus.tags().tags("Style").expect("style category");
    assert!(style.contains("Crack"));
    assert!(style.contains("Finger"));
}

#[test]
fn quality_score_pulls_low_vote_routes_to_prior() {
    assert!((quality_score(0.0, 0) - 2.5).abs() < 1e-9);
    assert!(quality_score(4.0, 500) > quality_score(4.0, 2));
    assert!(quality_score(1.0, 2) > 1.0);
}

#[test]
fn malformed_optional_route_fields_keep_the_area() {
    let raw = r#"{
      "area_name": "Smith Rock",
      "area_hierarchy": [{"level": 1, "area_hierarchy_name": "USA"}],
      "routes": [
        {"route_name": "Chain Reaction", "route_grade": "5.12c", "route_type": "Sport"},
        {"route_name": "Odd Comments", "route_grade": "5.10a", "route_comments": "none"},
        {"route_name": "Numeric Type", "route_grade": "5.9", "route_type": 7},
        {"route_name": "Mixed Comments", "route_grade": "5.8",
         "route_comments": [{"comment_text": "solid"}, 42]},
        "not a route"
      ]
    }"#;
    let areas = source::parse_json_areas(raw).expect("malformed fields are tolerated");
    let corpus = Corpus::from_areas(areas, &scale()).expect("corpus");
    let names: Vec<&str> = corpus
        .routes()
        .iter()
        .map(|entry| entry.route.route_name.as_str())
        .collect();
    assert_eq!(
        names,
        ["Chain Reaction", "Odd Comments", "Numeric Type", "Mixed Comments"]
    );
    assert!(corpus.routes()[1].route.route_comments.is_empty());
    assert!(corpus.routes()[2].route.route_type.is_empty());
    assert_eq!(corpus.routes()[3].route.route_comments.len(), 1);
}
