use serde_json::{Value, json};

pub fn personal() -> Value {
    json!({
        "name": "Testy McTestface",
        "position": "Professional Tester",
        "organization": "Tests, Inc.",
        "photo": "photo.jpg",
        "email": ["testy@example.org", "tester@example.com"],
        "website": "https://example.org",
        "github": "testy",
        "address": {
            "street": "Test Street 1",
            "zipcode": 1234,
            "city": "Testville",
            "country": "Testland"
        },
        "languages": [
            {"name": "English", "level": "fluent"},
            {"name": "Norwegian", "level": "native"}
        ]
    })
}

pub fn minimal_job() -> Value {
    json!({
        "order": ["Current"],
        "Current": [{"title": "Test Minimal"}]
    })
}

pub fn complete_jobs() -> Value {
    json!({
        "order": ["Current", "Past"],
        "Past": [{
            "start": "2015-01-01",
            "end": "2019-12-31",
            "title": "Junior Tester",
            "organization": "Old Tests Ltd.",
            "description": "Wrote *many* tests"
        }],
        "Current": [{
            "start": "2020-01-01",
            "end": "Present",
            "title": "Senior Tester",
            "organization": "Tests, Inc.",
            "description": "Writes **more** tests",
            "style": {"start": "\\bfseries", "swap": false}
        }]
    })
}

/// Talks given in `years`, titled `talk0`, `talk1`, ... in input order.
pub fn talks(years: &[Value]) -> Value {
    let talks: Vec<Value> = years
        .iter()
        .enumerate()
        .map(|(i, year)| json!({"title": format!("talk{}", i), "date": year}))
        .collect();
    Value::Array(talks)
}

pub fn publications() -> Value {
    json!({
        "order": ["Journal", "Conference"],
        "Conference": [{
            "title": "Testing in the large",
            "authors": "T. McTestface and A. Author",
            "year": 2021,
            "where": "TestConf"
        }],
        "Journal": [{
            "title": "On tests",
            "authors": "T. McTestface",
            "year": 2019,
            "doi": "10.1000/test"
        }]
    })
}

/// A whole document with every section the academic layout reads.
pub fn academic_cv() -> Value {
    json!({
        "personal": personal(),
        "summary": "I test things. Sometimes **hard**.",
        "jobs": complete_jobs(),
        "publications": publications(),
        "talks": talks(&[json!("2019-05-02"), json!(2021)]),
        "teaching": [{"course": "Testing 101", "role": "Lecturer", "when": "2020"}],
        "awards": [{"year": 2020, "description": "Best tester"}]
    })
}
