use super::*;

fn lecture(id: &str, title: &str, grade: u8, major: &str, credits: &str, schedule: &str) -> Lecture {
    Lecture {
        id: id.to_string(),
        title: title.to_string(),
        credits: credits.to_string(),
        grade,
        major: major.to_string(),
        schedule: schedule.to_string(),
    }
}

fn catalog() -> Vec<Lecture> {
    vec![
        lecture("CS101", "Algorithms", 1, "Computer Science", "3(3)", "Mon1,2(R101)"),
        lecture("CS201", "Databases", 2, "Computer Science", "3(3)", "Tue3,4(R202)"),
        lecture("EE110", "Circuits", 1, "Electrical Eng", "2(2)", "Mon2,3(Lab1)"),
        lecture("HU050", "World History", 3, "Humanities", "1(1)", ""),
    ]
}

#[test]
fn test_empty_options_return_full_catalog_in_order() {
    let catalog = catalog();
    let cache = ScheduleCache::new();
    let result = filter_lectures(&catalog, &SearchOption::default(), &cache);
    assert_eq!(result, catalog);
}

#[test]
fn test_filtering_is_pure() {
    let catalog = catalog();
    let cache = ScheduleCache::new();
    let options = SearchOption {
        query: "cs".to_string(),
        ..Default::default()
    };
    let first = filter_lectures(&catalog, &options, &cache);
    let second = filter_lectures(&catalog, &options, &cache);
    assert_eq!(first, second);
}

#[test]
fn test_query_matches_title_or_id_case_insensitive() {
    let catalog = catalog();
    let cache = ScheduleCache::new();

    let by_title = filter_lectures(
        &catalog,
        &SearchOption {
            query: "ALGO".to_string(),
            ..Default::default()
        },
        &cache,
    );
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].id, "CS101");

    let by_id = filter_lectures(
        &catalog,
        &SearchOption {
            query: "cs2".to_string(),
            ..Default::default()
        },
        &cache,
    );
    assert_eq!(by_id.len(), 1);
    assert_eq!(by_id[0].id, "CS201");
}

#[test]
fn test_grade_filter() {
    let result = filter_lectures(
        &catalog(),
        &SearchOption {
            grades: vec![1],
            ..Default::default()
        },
        &ScheduleCache::new(),
    );
    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|l| l.grade == 1));
}

#[test]
fn test_major_filter() {
    let result = filter_lectures(
        &catalog(),
        &SearchOption {
            majors: vec!["Humanities".to_string()],
            ..Default::default()
        },
        &ScheduleCache::new(),
    );
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "HU050");
}

#[test]
fn test_credits_prefix_filter() {
    let result = filter_lectures(
        &catalog(),
        &SearchOption {
            credits: Some(3),
            ..Default::default()
        },
        &ScheduleCache::new(),
    );
    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|l| l.credits.starts_with('3')));
}

#[test]
fn test_day_filter_uses_parsed_schedule() {
    let result = filter_lectures(
        &catalog(),
        &SearchOption {
            days: vec![Day::Mon],
            ..Default::default()
        },
        &ScheduleCache::new(),
    );
    let ids: Vec<&str> = result.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["CS101", "EE110"]);
}

#[test]
fn test_time_filter_intersects_ranges() {
    let result = filter_lectures(
        &catalog(),
        &SearchOption {
            times: vec![2],
            ..Default::default()
        },
        &ScheduleCache::new(),
    );
    let ids: Vec<&str> = result.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["CS101", "EE110"]);
}

#[test]
fn test_lecture_without_schedule_fails_day_and_time_filters() {
    let cache = ScheduleCache::new();
    let result = filter_lectures(
        &catalog(),
        &SearchOption {
            days: vec![Day::Sat],
            ..Default::default()
        },
        &cache,
    );
    assert!(result.is_empty());
}

#[test]
fn test_predicates_combine_as_conjunction() {
    let result = filter_lectures(
        &catalog(),
        &SearchOption {
            grades: vec![1],
            days: vec![Day::Mon],
            times: vec![3],
            ..Default::default()
        },
        &ScheduleCache::new(),
    );
    // Grade 1 AND meets Monday AND touches slot 3: only EE110.
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "EE110");
}

#[test]
fn test_filter_reuses_parse_cache() {
    let catalog = catalog();
    let cache = ScheduleCache::new();
    let options = SearchOption {
        days: vec![Day::Mon],
        times: vec![1],
        ..Default::default()
    };
    filter_lectures(&catalog, &options, &cache);
    filter_lectures(&catalog, &options, &cache);
    // One cache entry per distinct raw string, however many passes ran.
    assert_eq!(cache.len(), 4);
}

#[test]
fn test_distinct_majors_first_seen_order() {
    assert_eq!(
        distinct_majors(&catalog()),
        vec!["Computer Science", "Electrical Eng", "Humanities"]
    );
}
